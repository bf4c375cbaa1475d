use crate::Rect;
use crate::error::{Error, Result};

/// One attached display as reported by the OS.
///
/// `index` is the ordinal position in OS enumeration order. It is the
/// identity configuration refers to, and it is only stable within one
/// run — hardware changes may reorder the catalog, so indices must
/// never be persisted across runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Monitor {
    pub index: usize,
    /// Full monitor rectangle.
    pub rect: Rect,
    /// Usable area excluding the taskbar and docked toolbars.
    pub work_area: Rect,
}

/// Looks up a monitor by its configured ordinal.
///
/// Called before any window mutation so an out-of-range rule fails
/// cleanly with [`Error::InvalidMonitorIndex`] and no partial move is
/// ever attempted.
pub fn select(monitors: &[Monitor], index: usize) -> Result<&Monitor> {
    monitors.get(index).ok_or(Error::InvalidMonitorIndex {
        index,
        available: monitors.len(),
    })
}
