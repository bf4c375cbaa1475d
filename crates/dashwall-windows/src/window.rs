use dashwall_core::Rect;
use dashwall_core::error::{Error, Result};

use windows::Win32::Foundation::HWND;
use windows::Win32::UI::WindowsAndMessaging::{
    GetWindowTextLengthW, GetWindowTextW, IsWindowVisible, MoveWindow, SW_RESTORE,
    SW_SHOWMAXIMIZED, SetForegroundWindow, ShowWindow,
};

/// A window on the Windows platform, wrapping a Win32 `HWND`.
///
/// `HWND` is an opaque handle — a number that identifies a window to
/// the OS. This struct holds that handle and queries the OS lazily.
#[derive(Debug, Clone, Copy)]
pub struct Window {
    hwnd: HWND,
}

impl Window {
    /// Creates a new `Window` from a raw `HWND`.
    pub fn new(hwnd: HWND) -> Self {
        Self { hwnd }
    }

    /// Creates a new `Window` from a raw handle value (pointer-sized
    /// integer), as carried by a `WindowRecord`. This lets callers
    /// construct a `Window` without depending on the `windows` crate.
    pub fn from_raw(handle: usize) -> Self {
        Self {
            hwnd: HWND(handle as *mut _),
        }
    }

    /// Returns the window title, empty if the window has none.
    pub fn title(&self) -> String {
        // SAFETY: GetWindowTextLengthW and GetWindowTextW are safe to
        // call with a valid HWND. They read text without modifying state.
        unsafe {
            let length = GetWindowTextLengthW(self.hwnd);
            if length == 0 {
                return String::new();
            }

            // +1 for the null terminator that Windows requires
            let mut buffer = vec![0u16; (length + 1) as usize];
            let copied = GetWindowTextW(self.hwnd, &mut buffer);
            String::from_utf16_lossy(&buffer[..copied as usize])
        }
    }

    /// Returns whether the window is currently visible.
    pub fn is_visible(&self) -> bool {
        // SAFETY: IsWindowVisible is a simple query that returns a BOOL.
        unsafe { IsWindowVisible(self.hwnd).as_bool() }
    }

    /// Moves the window onto the given monitor rectangle, maximizes
    /// it, and brings it to the foreground.
    ///
    /// The ordering matters. Moving before maximizing keeps the window
    /// from snapping maximized onto the wrong monitor on mixed-DPI
    /// setups. Restoring before maximizing brings a minimized window
    /// back so the maximize actually takes effect. Foregrounding last
    /// leaves the placed window with input focus.
    pub fn place_on(&self, rect: &Rect) -> Result<()> {
        // SAFETY: MoveWindow with a valid HWND is safe; TRUE requests
        // an immediate repaint at the new position.
        unsafe {
            MoveWindow(self.hwnd, rect.x, rect.y, rect.width, rect.height, true)
                .map_err(|e| Error::Os(format!("MoveWindow failed: {e}")))?;
        }

        // SAFETY: ShowWindow and SetForegroundWindow only change show
        // state and z-order. Their BOOL results report prior state and
        // focus-stealing rules, neither of which is actionable here.
        unsafe {
            let _ = ShowWindow(self.hwnd, SW_RESTORE);
            let _ = ShowWindow(self.hwnd, SW_SHOWMAXIMIZED);
            let _ = SetForegroundWindow(self.hwnd);
        }

        Ok(())
    }
}
