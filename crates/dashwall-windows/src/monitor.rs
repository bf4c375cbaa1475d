use std::mem;

use dashwall_core::error::{Error, Result};
use dashwall_core::{Monitor, Rect};

use windows::Win32::Foundation::{LPARAM, RECT};
use windows::Win32::Graphics::Gdi::{
    EnumDisplayMonitors, GetMonitorInfoW, HDC, HMONITOR, MONITORINFO,
};
use windows::core::BOOL;

/// Enumerates all attached monitors in OS enumeration order.
///
/// The returned ordinals are what placement rules refer to. The order
/// is not guaranteed stable across reboots or hardware changes, so the
/// catalog is rebuilt on every run and indices are never persisted.
///
/// Fails with [`Error::NoMonitorsDetected`] if the OS reports none,
/// which on a real display-attached session points at a broken
/// environment rather than a recoverable condition.
pub fn enumerate_monitors() -> Result<Vec<Monitor>> {
    let mut handles: Vec<HMONITOR> = Vec::new();

    // SAFETY: EnumDisplayMonitors calls our callback once per monitor,
    // synchronously. The Vec outlives the call; the callback casts the
    // LPARAM back to &mut Vec<HMONITOR> to collect handles.
    let ok = unsafe {
        EnumDisplayMonitors(
            None,
            None,
            Some(enum_monitor_callback),
            LPARAM(&mut handles as *mut _ as isize),
        )
    };
    if !ok.as_bool() {
        return Err(Error::Os("EnumDisplayMonitors failed".into()));
    }
    if handles.is_empty() {
        return Err(Error::NoMonitorsDetected);
    }

    handles
        .into_iter()
        .enumerate()
        .map(|(index, hmonitor)| query_monitor(index, hmonitor))
        .collect()
}

/// Callback invoked by `EnumDisplayMonitors` once per monitor.
unsafe extern "system" fn enum_monitor_callback(
    hmonitor: HMONITOR,
    _hdc: HDC,
    _rect: *mut RECT,
    lparam: LPARAM,
) -> BOOL {
    // SAFETY: lparam is a pointer to our Vec<HMONITOR>, cast from
    // enumerate_monitors().
    let handles = unsafe { &mut *(lparam.0 as *mut Vec<HMONITOR>) };
    handles.push(hmonitor);
    BOOL(1) // TRUE — continue enumerating
}

/// Queries full and work rectangles for a monitor handle.
fn query_monitor(index: usize, hmonitor: HMONITOR) -> Result<Monitor> {
    let mut info = MONITORINFO {
        cbSize: mem::size_of::<MONITORINFO>() as u32,
        ..Default::default()
    };

    // SAFETY: GetMonitorInfoW fills the MONITORINFO struct with
    // monitor dimensions. We set cbSize as required by the API.
    let success = unsafe { GetMonitorInfoW(hmonitor, &mut info) };
    if !success.as_bool() {
        return Err(Error::Os(format!(
            "GetMonitorInfoW failed for monitor {index}"
        )));
    }

    let rc = info.rcMonitor;
    let rw = info.rcWork;
    Ok(Monitor {
        index,
        rect: Rect::from_edges(rc.left, rc.top, rc.right, rc.bottom),
        work_area: Rect::from_edges(rw.left, rw.top, rw.right, rw.bottom),
    })
}
