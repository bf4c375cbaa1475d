use std::path::Path;
use std::process::Command;

use dashwall_core::error::{Error, Result};
use dashwall_core::log_debug;

/// Runs the launch script and blocks until it exits.
///
/// The script is executed with `-ExecutionPolicy Bypass` so a locked
/// down machine policy does not silently break session start, and with
/// the script's own directory as working dir so relative paths inside
/// it resolve. No timeout is applied here — the window wait that
/// follows carries the deadline.
pub fn run_launch_script(script: &Path) -> Result<()> {
    log_debug!("Running launch script {}", script.display());

    let mut command = Command::new("powershell");
    command.args(["-ExecutionPolicy", "Bypass", "-File"]).arg(script);
    if let Some(dir) = script.parent() {
        command.current_dir(dir);
    }

    let status = command
        .status()
        .map_err(|e| Error::LaunchFailed(format!("{}: {e}", script.display())))?;

    if !status.success() {
        return Err(Error::LaunchFailed(format!(
            "{} exited with {status}",
            script.display()
        )));
    }

    Ok(())
}
