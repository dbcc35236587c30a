use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

mod commands;
mod snapshot;

#[derive(Parser)]
#[command(
    name = "dispatchforge",
    about = "DispatchForge - deterministic resource-to-slot planner",
    version,
    propagate_version = true,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan a snapshot without dispatching anything.
    ///
    /// The snapshot holds the resource pool ("heroes") and slot groups
    /// ("lands") in the backend's JSON field naming.
    Plan {
        /// Snapshot JSON file
        #[arg(short, long)]
        snapshot: PathBuf,
        /// Planner config (TOML, or YAML by extension). Defaults apply when omitted.
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Only print results that dispatch resources
        #[arg(long)]
        dispatchable_only: bool,
    },
    /// Validate a planner config file
    CheckConfig {
        /// Config file (TOML, or YAML by extension)
        path: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Plan {
            snapshot,
            config,
            format,
            dispatchable_only,
        } => commands::plan::run(&snapshot, config.as_deref(), format, dispatchable_only),
        Commands::CheckConfig { path } => commands::config::check(&path),
    }
}
