use dashwall_core::error::{Error, Result};
use dashwall_core::{WindowRecord, WindowSource, log_debug};

use windows::Win32::Foundation::{HWND, LPARAM};
use windows::Win32::UI::WindowsAndMessaging::{EnumWindows, GetWindowThreadProcessId};
use windows::core::BOOL;

use crate::process;
use crate::window::Window;

/// Enumerates all visible top-level windows of the target process.
///
/// This calls the Win32 `EnumWindows` API, which iterates over every
/// top-level window and invokes a callback for each one. We filter
/// inside the callback to keep only visible windows with a non-empty
/// title whose owning process name matches `target` (case-insensitive).
///
/// Windows whose process cannot be resolved — it exited, or access was
/// denied between enumeration and lookup — are skipped. That race is
/// inherent to inspecting a live desktop and is not an error.
pub fn enumerate_target_windows(target: &str) -> Result<Vec<WindowRecord>> {
    let mut ctx = EnumContext {
        target: target.to_string(),
        records: Vec::new(),
    };

    // SAFETY: EnumWindows calls our callback for each top-level window.
    // We pass a pointer to our context as LPARAM (user data). The
    // callback casts it back to &mut EnumContext to collect results.
    // This is safe because EnumWindows runs synchronously — the context
    // outlives the call.
    unsafe {
        EnumWindows(
            Some(enum_window_callback),
            LPARAM(&mut ctx as *mut _ as isize),
        )
        .map_err(|e| Error::Os(format!("EnumWindows failed: {e}")))?;
    }

    Ok(ctx.records)
}

/// User data threaded through `EnumWindows`.
struct EnumContext {
    target: String,
    records: Vec<WindowRecord>,
}

/// Callback invoked by `EnumWindows` for each top-level window.
///
/// Returns `TRUE` to continue enumeration, `FALSE` to stop. Win32
/// can't call Rust closures directly, so this uses `extern "system"`
/// and passes data through the `LPARAM`.
unsafe extern "system" fn enum_window_callback(hwnd: HWND, lparam: LPARAM) -> BOOL {
    // SAFETY: lparam is a pointer to our EnumContext, cast from
    // enumerate_target_windows().
    let ctx = unsafe { &mut *(lparam.0 as *mut EnumContext) };

    if let Some(record) = inspect_window(hwnd, &ctx.target) {
        ctx.records.push(record);
    }

    BOOL(1) // TRUE — continue enumerating
}

/// Builds a `WindowRecord` for the window if it passes every filter.
fn inspect_window(hwnd: HWND, target: &str) -> Option<WindowRecord> {
    let window = Window::new(hwnd);
    if !window.is_visible() {
        return None;
    }

    let title = window.title();
    if title.is_empty() {
        return None;
    }

    let mut pid: u32 = 0;
    // SAFETY: GetWindowThreadProcessId writes the owning PID through
    // the out pointer; a valid HWND makes this a simple query.
    unsafe { GetWindowThreadProcessId(hwnd, Some(&mut pid)) };
    if pid == 0 {
        return None;
    }

    let Some(process) = process::name_for_pid(pid) else {
        // Process gone or access denied between enumeration and lookup.
        log_debug!("Skipping window {title:?}: could not resolve process {pid}");
        return None;
    };

    if !process.eq_ignore_ascii_case(target) {
        return None;
    }

    Some(WindowRecord {
        handle: hwnd.0 as usize,
        pid,
        process,
        title,
    })
}

/// Live-desktop [`WindowSource`] used by the wait orchestrator.
pub struct DesktopWindows {
    target: String,
}

impl DesktopWindows {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }
}

impl WindowSource for DesktopWindows {
    fn windows(&mut self) -> Result<Vec<WindowRecord>> {
        enumerate_target_windows(&self.target)
    }
}
