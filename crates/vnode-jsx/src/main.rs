//! vnode-jsx CLI - inspect how JSX snippets reshape into virtual node data.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;
mod render;

#[derive(Parser)]
#[command(name = "vnode-jsx")]
#[command(about = "Inspect how JSX snippets reshape into virtual node data")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to vnode-jsx.toml config file
    #[arg(short, long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a snippet and print the resulting node tree
    Convert {
        /// JSX snippet (reads --file or stdin when omitted)
        snippet: Option<String>,

        /// Read the snippet from a file
        #[arg(short, long, conflicts_with = "snippet")]
        file: Option<PathBuf>,
    },

    /// Print how the root element's props are classified
    Classify {
        /// JSX snippet (reads --file or stdin when omitted)
        snippet: Option<String>,

        /// Read the snippet from a file
        #[arg(short, long, conflicts_with = "snippet")]
        file: Option<PathBuf>,
    },

    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let loaded = config::load_config(&cli.config)?;
    let file_config = loaded.clone().unwrap_or_default();

    // Initialize logging; stdout is reserved for command output
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new(&file_config.log.level)
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if loaded.is_some() {
        tracing::info!("Loaded config from {}", cli.config.display());
    }

    let pretty = file_config.output.pretty;

    match cli.command {
        Commands::Convert { snippet, file } => {
            commands::convert::run(snippet, file, pretty)?;
        }
        Commands::Classify { snippet, file } => {
            commands::classify::run(snippet, file, pretty)?;
        }
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes)?;
        }
    }

    Ok(())
}
