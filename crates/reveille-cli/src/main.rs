use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

mod commands;

#[derive(Parser)]
#[command(name = "reveille-cli", version, about = "Reveille CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the foreground alarm loop
    Run {
        /// Path to the alarm definitions file
        #[arg(long)]
        config: PathBuf,
        /// Tick cadence in seconds
        #[arg(long, default_value = "1")]
        interval: u64,
    },
    /// Evaluate a single tick at a given instant
    Check {
        /// Path to the alarm definitions file
        #[arg(long)]
        config: PathBuf,
        /// Instant to evaluate, "YYYY-MM-DD HH:MM"
        #[arg(long)]
        at: String,
    },
    /// Alarm definition file management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Run { config, interval } => commands::run::run(config, interval),
        Commands::Check { config, at } => commands::check::run(config, &at),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "reveille-cli",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
