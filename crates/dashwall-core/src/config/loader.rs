use std::path::PathBuf;

use super::Config;

/// Returns the config directory: `~/.config/dashwall/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("dashwall"))
}

/// Returns the config file path: `~/.config/dashwall/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Tries to load and parse `config.toml`.
///
/// Returns `Ok(Config)` on success, or an error string describing
/// what went wrong (IO error, parse error, etc.).
pub fn try_load() -> Result<Config, String> {
    let path = config_path().ok_or("could not determine config path")?;
    let content = std::fs::read_to_string(&path).map_err(|e| format!("{}: {e}", path.display()))?;
    let mut config: Config =
        toml::from_str(&content).map_err(|e| format!("{}: {e}", path.display()))?;
    config.validate();
    Ok(config)
}

/// Loads the configuration from disk, falling back to defaults.
///
/// After loading, values are clamped to safe ranges via
/// [`Config::validate`]. A missing file silently returns defaults;
/// other errors are reported and defaults are used.
pub fn load() -> Config {
    match try_load() {
        Ok(config) => config,
        Err(e) if is_file_not_found(&e) => Config::default(),
        Err(e) => {
            eprintln!("Warning: {e}");
            Config::default()
        }
    }
}

/// Returns true if the error message indicates a missing file.
fn is_file_not_found(e: &str) -> bool {
    e.contains("No such file")
        || e.contains("cannot find the path")
        || e.contains("The system cannot find")
}
