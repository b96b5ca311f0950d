use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use matricula::cli::{handle_check_command, handle_config_command};
use matricula::config::{MatriculaPaths, Settings};

#[derive(Parser)]
#[command(
    name = "matricula",
    version,
    about = "Terminal-based athlete registration for sports clubs",
    long_about = "matricula walks club staff through the three-step registration \
                  of an athlete: personal information, contact and guardians, \
                  documents and health. Validation runs as you type; the completed \
                  record is handed to the configured submission sink."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive registration form (default)
    #[command(alias = "ui")]
    Tui,

    /// Validate an athlete record stored as JSON
    Check {
        /// Path to the record file
        file: PathBuf,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never mix with report output or the TUI
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("matricula=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let paths = MatriculaPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        None | Some(Commands::Tui) => {
            matricula::tui::run_tui(&settings)?;
        }
        Some(Commands::Check { file }) => {
            handle_check_command(&file, &settings)?;
        }
        Some(Commands::Config) => {
            handle_config_command(&paths, &settings)?;
        }
    }

    Ok(())
}
