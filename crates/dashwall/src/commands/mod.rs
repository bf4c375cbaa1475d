pub mod check;
pub mod init;
pub mod list;
pub mod monitors;
pub mod run;

/// Exit path for OS-facing commands invoked off-Windows.
#[cfg(not(windows))]
pub(crate) fn unsupported() -> ! {
    eprintln!("Error: this command requires Windows.");
    std::process::exit(1);
}
