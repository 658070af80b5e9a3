mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use w_config::InspectConfig;

#[derive(Parser)]
#[command(name = "w-inspect", version, about = "Inspect the w grammar export surface")]
struct Cli {
    /// Configuration file (defaults to ./tree-sitter-w.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the language type tag
    Tag {
        #[arg(long)]
        json: bool,
    },
    /// Load the module in a fresh host context and print its exports
    Exports {
        #[arg(long)]
        json: bool,
    },
    /// Load the module in several independent contexts and verify them
    Check {
        #[arg(long, default_value_t = 2)]
        contexts: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => InspectConfig::load_from(path)?,
        None => InspectConfig::load()?,
    };
    w_config::logging::initialize(&config.logging);

    match cli.command {
        Command::Tag { json } => commands::tag(json),
        Command::Exports { json } => commands::exports(json),
        Command::Check { contexts } => commands::check(contexts),
    }
}
