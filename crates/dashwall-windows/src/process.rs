use windows::Win32::Foundation::CloseHandle;
use windows::Win32::System::ProcessStatus::K32GetModuleFileNameExW;
use windows::Win32::System::Threading::{
    OpenProcess, PROCESS_QUERY_INFORMATION, PROCESS_VM_READ,
};

/// Returns the executable file name for a process ID, e.g. "msedge.exe".
///
/// `None` means the process has already exited or access was denied.
/// Both happen routinely when a window closes between enumeration and
/// lookup, so callers treat this as "skip", not as an error.
pub fn name_for_pid(pid: u32) -> Option<String> {
    // SAFETY: OpenProcess attempts to open an existing process; on
    // success we own the handle and close it after reading the module
    // file name.
    unsafe {
        let handle = OpenProcess(PROCESS_QUERY_INFORMATION | PROCESS_VM_READ, false, pid).ok()?;

        let mut buf = [0u16; 1024];
        let len = K32GetModuleFileNameExW(Some(handle), None, &mut buf);
        let _ = CloseHandle(handle);

        if len == 0 {
            return None;
        }

        let path = String::from_utf16_lossy(&buf[..len as usize]);
        path.rsplit('\\').next().map(str::to_string)
    }
}
