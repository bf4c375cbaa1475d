mod loader;
pub mod template;

#[cfg(test)]
mod tests;

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::log::LogConfig;

pub use loader::{config_dir, config_path, load, try_load};

/// Name of the launch script used when the config does not set one.
const DEFAULT_LAUNCH_SCRIPT: &str = "open_browser.ps1";

/// Top-level configuration for Dashwall.
///
/// Loaded from `~/.config/dashwall/config.toml`. Missing keys fall
/// back to the compiled-in defaults thanks to `#[serde(default)]`,
/// which match the original NOC deployment this tool was built for.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Process whose windows are arranged (e.g. "msedge.exe").
    /// Compared case-insensitively.
    pub target_process: String,
    /// PowerShell script that opens the dashboards. Relative paths are
    /// resolved against the config directory.
    pub launch_script: Option<PathBuf>,
    /// How long to wait for all expected windows, in seconds.
    pub timeout_secs: u64,
    /// Delay between enumeration passes while waiting, in milliseconds.
    pub poll_interval_ms: u64,
    /// Title-pattern-to-monitor rules, evaluated in order.
    pub rule: Vec<PlacementRule>,
    /// Logging settings.
    pub log: LogConfig,
}

/// Maps a window-title glob pattern to a monitor ordinal.
///
/// Rules are evaluated in order. The first matching rule wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacementRule {
    /// Case-sensitive glob matched against the full window title.
    pub title_pattern: String,
    /// Zero-based monitor index in OS enumeration order.
    pub monitor: usize,
}

/// Returns the default placement rules: the Grafana and NOC SCC
/// dashboard windows of the original monitoring wall.
pub fn default_rules() -> Vec<PlacementRule> {
    vec![
        PlacementRule {
            title_pattern: "*Grafana".into(),
            monitor: 1,
        },
        PlacementRule {
            title_pattern: "NOC SCC*".into(),
            monitor: 0,
        },
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_process: "msedge.exe".into(),
            launch_script: None,
            timeout_secs: 10,
            poll_interval_ms: 500,
            rule: default_rules(),
            log: LogConfig::default(),
        }
    }
}

impl Config {
    /// Clamps timing values to safe ranges and drops rules whose glob
    /// pattern does not parse.
    ///
    /// An unparseable pattern can never match anything, so keeping it
    /// would make the wait loop time out on every run.
    pub fn validate(&mut self) {
        self.timeout_secs = self.timeout_secs.clamp(1, 600);
        self.poll_interval_ms = self.poll_interval_ms.clamp(50, 10_000);

        self.rule.retain(|rule| {
            match glob::Pattern::new(&rule.title_pattern) {
                Ok(_) => true,
                Err(e) => {
                    eprintln!(
                        "Warning: ignoring rule with invalid pattern {:?}: {e}",
                        rule.title_pattern
                    );
                    false
                }
            }
        });
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Resolves the launch script path: the configured one (relative
    /// paths anchored at the config dir) or the default script name in
    /// the config dir.
    pub fn launch_script_path(&self) -> Option<PathBuf> {
        let dir = config_dir()?;
        match &self.launch_script {
            Some(path) if path.is_absolute() => Some(path.clone()),
            Some(path) => Some(dir.join(path)),
            None => Some(dir.join(DEFAULT_LAUNCH_SCRIPT)),
        }
    }
}
