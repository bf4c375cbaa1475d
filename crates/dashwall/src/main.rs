mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "dashwall",
    version,
    about = "Arranges dashboard browser windows across monitors"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default configuration file
    Init,
    /// Launch the browser if needed, wait for the dashboards, place them
    Run,
    /// Report which expected windows are currently open
    Check,
    /// List the target process's visible windows
    List,
    /// List attached monitors and their rectangles
    Monitors,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::Run => commands::run::execute(),
        Commands::Check => commands::check::execute(),
        Commands::List => commands::list::execute(),
        Commands::Monitors => commands::monitors::execute(),
    }
}
