use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};

use bucket_sssp::io::{load_from_path, InvalidRowPolicy, LoaderConfig};
use bucket_sssp::report::{Report, RunStatus};
use bucket_sssp::{ConvergenceRule, Dijkstra, Error, PassMode, RelaxationEngine};

/// Shortest path lengths from the single zero in-degree vertex of an edge list
#[derive(Parser, Debug)]
#[command(name = "bucket_sssp")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Edge list in CSV format with the header From,To,Length
    input: PathBuf,

    /// Skip malformed or invalid rows with a warning instead of aborting
    #[arg(long)]
    skip_invalid: bool,

    /// Give up after this many passes
    #[arg(long)]
    max_passes: Option<usize>,

    /// Relax each pass in parallel against a snapshot of the previous lengths
    #[arg(long)]
    parallel: bool,

    /// When to stop iterating
    #[arg(long, value_enum, default_value_t = Convergence::FixedPoint)]
    convergence: Convergence,

    /// Cross-check the lengths against Dijkstra's algorithm
    #[arg(long)]
    verify: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Convergence {
    FixedPoint,
    AllSatisfied,
}

impl From<Convergence> for ConvergenceRule {
    fn from(value: Convergence) -> Self {
        match value {
            Convergence::FixedPoint => ConvergenceRule::FixedPoint,
            Convergence::AllSatisfied => ConvergenceRule::AllSatisfied,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.print()?;
            return Ok(());
        }
        Err(_) => {
            // Bad arguments only get the usage line
            println!("{}", Cli::command().render_usage());
            return Ok(());
        }
    };

    let default_filter = if cli.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    let loader = LoaderConfig {
        invalid_rows: if cli.skip_invalid {
            InvalidRowPolicy::Skip
        } else {
            InvalidRowPolicy::Abort
        },
    };
    let mut graph = load_from_path(&cli.input, &loader)
        .with_context(|| format!("failed to load {}", cli.input.display()))?;

    let engine = RelaxationEngine::new()
        .with_convergence(cli.convergence.into())
        .with_pass_mode(if cli.parallel {
            PassMode::Snapshot
        } else {
            PassMode::Sequential
        })
        .with_max_passes(cli.max_passes);

    let start = Instant::now();
    let outcome = bucket_sssp::solve(&mut graph, &engine);
    let elapsed = start.elapsed();

    let (passes, status, mut failure) = match outcome {
        Ok(outcome) => (outcome.passes, RunStatus::Converged, None),
        Err(Error::PartiallyUnreachable { unresolved, passes }) => (
            passes,
            RunStatus::Stalled,
            Some(Error::PartiallyUnreachable { unresolved, passes }),
        ),
        Err(err) => return Err(err.into()),
    };

    if cli.verify && failure.is_none() {
        failure = Dijkstra::new().verify(&graph, 1e-9).err();
    }

    let report = Report::new(&graph, passes, status, elapsed)?;
    match cli.format {
        Format::Text => print!("{}", report),
        Format::Json => println!("{}", report.to_json()?),
    }

    match failure {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}
