use thiserror::Error;

/// Everything that can go wrong during a Dashwall run.
///
/// The first three variants are fatal to the whole run; the rest are
/// scoped to a single window or a single config entry and are handled
/// without aborting the remaining work.
#[derive(Debug, Error)]
pub enum Error {
    /// The external launch script failed to spawn or exited non-zero.
    #[error("launch script failed: {0}")]
    LaunchFailed(String),

    /// Not every configured title pattern was matched before the
    /// deadline. Carries the patterns that were still missing so the
    /// operator knows which dashboard never showed up.
    #[error("timed out after {timeout_secs}s, still missing: {missing:?}")]
    WaitTimeout {
        timeout_secs: u64,
        missing: Vec<String>,
    },

    /// The OS reported zero attached monitors. Should not happen on a
    /// real display-attached session.
    #[error("no monitors detected")]
    NoMonitorsDetected,

    /// A rule references a monitor ordinal outside the current catalog.
    #[error("monitor {index} does not exist, only {available} monitors detected")]
    InvalidMonitorIndex { index: usize, available: usize },

    /// A windowing API call failed. Produced by the platform crate,
    /// carried here as text so the core stays platform-agnostic.
    #[error("window operation failed: {0}")]
    Os(String),
}

pub type Result<T> = std::result::Result<T, Error>;
