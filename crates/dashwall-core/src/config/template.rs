/// Generates the default `config.toml` contents with explanatory comments.
///
/// This is used by `dashwall init` to create a starter config file that
/// users can immediately edit.
pub fn generate_config() -> String {
    r##"# Dashwall configuration
# Location: ~/.config/dashwall/config.toml

# Process whose windows are arranged. Compared case-insensitively
# against the owning process name of every visible top-level window.
target_process = "msedge.exe"

# PowerShell script that opens the dashboard windows. Relative paths
# are resolved against ~/.config/dashwall/. Run only when the expected
# windows are not already open.
launch_script = "open_browser.ps1"

# How long to wait for all expected windows after launching, in seconds.
timeout_secs = 10

# Delay between window checks while waiting, in milliseconds.
poll_interval_ms = 500

# Placement rules, evaluated in order — the first matching rule wins.
# title_pattern is a case-sensitive glob (*, ?, [..]) matched against
# the full window title. monitor is the zero-based display index in OS
# enumeration order (see `dashwall monitors`).
[[rule]]
title_pattern = "*Grafana"
monitor = 1

[[rule]]
title_pattern = "NOC SCC*"
monitor = 0

[log]
# Echo log lines to stderr.
stderr = true
# Enable file logging to ~/.config/dashwall/logs/dashwall.log.
file = false
# Minimum log level: "debug", "info", "warn", or "error".
level = "info"
# Maximum log file size in MB before rotation.
max_file_mb = 10
"##
    .to_string()
}
