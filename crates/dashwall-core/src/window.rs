use crate::error::Result;

/// A snapshot of one top-level window belonging to the target process.
///
/// Records are rebuilt on every enumeration pass; nothing about them
/// persists across polls. `handle` is the raw OS window handle carried
/// as an integer so this crate needs no platform dependency — it may
/// become invalid the moment the window closes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRecord {
    pub handle: usize,
    pub pid: u32,
    pub process: String,
    pub title: String,
}

/// Source of window snapshots.
///
/// The platform crate implements this against the live desktop; tests
/// implement it with canned sequences to drive the wait loop.
pub trait WindowSource {
    /// Returns all visible top-level windows of the target process
    /// that currently have a non-empty title.
    fn windows(&mut self) -> Result<Vec<WindowRecord>>;
}

#[cfg(test)]
pub(crate) fn record(title: &str) -> WindowRecord {
    WindowRecord {
        handle: 0x1000 + title.len(),
        pid: 4242,
        process: "msedge.exe".into(),
        title: title.into(),
    }
}
