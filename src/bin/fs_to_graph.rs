use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use bucket_sssp::io::{write_edge_list, WalkerConfig};

/// Write a From,To,Length edge list describing a directory tree to stdout
#[derive(Parser, Debug)]
#[command(name = "fs_to_graph")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory to start from
    #[arg(default_value = "/")]
    root: PathBuf,

    /// Additional directory to link but not descend into (repeatable)
    #[arg(long)]
    ignore: Vec<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    let mut config = WalkerConfig::default();
    config.ignore.extend(cli.ignore);

    let count = write_edge_list(&cli.root, &config, io::stdout().lock())
        .with_context(|| format!("failed to walk {}", cli.root.display()))?;
    info!("Wrote {} edges", count);

    Ok(())
}
