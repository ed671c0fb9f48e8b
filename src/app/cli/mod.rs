//! CLI Adapter.

mod doctor;
mod launch;
mod plan;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::LaunchRequest;
use crate::domain::{AppError, LaunchOverrides};

#[derive(Parser)]
#[command(name = "scada-launch")]
#[command(version)]
#[command(
    about = "Install SCADA Sync dependencies and start the Streamlit app",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    selection: Selection,
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Options shared by every command.
#[derive(Args, Debug, Clone, Default)]
struct Selection {
    /// Python interpreter name or path (default: python)
    #[arg(long, global = true)]
    python: Option<String>,
    /// Launcher variant: plain or backup
    #[arg(long, global = true)]
    variant: Option<String>,
    /// Backup folder forwarded to the app
    #[arg(long, global = true)]
    backup_dir: Option<String>,
    /// Launcher directory (default: the directory containing this executable)
    #[arg(long, global = true)]
    root: Option<PathBuf>,
    /// Exit without waiting for a key press
    #[arg(long, global = true)]
    no_pause: bool,
}

impl Selection {
    fn into_request(self) -> LaunchRequest {
        LaunchRequest {
            root: self.root,
            overrides: LaunchOverrides {
                python: self.python,
                variant: self.variant,
                backup_dir: self.backup_dir,
                no_pause: self.no_pause,
            },
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Install dependencies and start the app (default)
    #[clap(visible_alias = "l")]
    Launch,
    /// Show the commands a launch would run
    #[clap(visible_alias = "p")]
    Plan,
    /// Check interpreter, manifest, app and config.json
    Doctor {
        /// Treat warnings as failures
        #[arg(long)]
        strict: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    let request = cli.selection.into_request();

    let result: Result<i32, AppError> = match cli.command.unwrap_or(Commands::Launch) {
        Commands::Launch => launch::run_launch(request),
        Commands::Plan => plan::run_plan(request).map(|_| 0),
        Commands::Doctor { strict } => doctor::run_doctor(request, strict),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
