//! Win32 implementation of Dashwall's OS-facing pieces: window and
//! monitor enumeration, process-name lookup, window placement, and the
//! browser launch collaborator.

/// Win32 window enumeration filtered to the target process.
#[cfg(windows)]
pub mod enumerate;

/// External launch script invocation.
#[cfg(windows)]
pub mod launch;

/// Monitor catalog via `EnumDisplayMonitors`.
#[cfg(windows)]
pub mod monitor;

/// Process utilities (exe name from PID).
#[cfg(windows)]
pub mod process;

/// Window type wrapping a Win32 `HWND`, including the placer.
#[cfg(windows)]
pub mod window;

#[cfg(windows)]
pub use enumerate::{DesktopWindows, enumerate_target_windows};
#[cfg(windows)]
pub use window::Window;
