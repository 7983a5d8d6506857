//! Hexboard command-line generator.
//!
//! Generates one or more boards for a built-in scenario and prints them to
//! stdout as JSON or plain text. Logs go to stderr.
//!
//! Usage:
//!   hexboard [--scenario standard|expansion] [--tiles random|clumped --clumpiness P]
//!            [--numbers NAME --percentile P] [--deserts centered|random]
//!            [--ports random|preset] [--trials N] [--seed N] [--config FILE]
//!            [--count N] [--threads N] [--format json|text] [-v]

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use hexboard::batch::generate_batch;
use hexboard::generator::{DesertAlgorithm, NumberAlgorithm, PortAlgorithm, TileAlgorithm};
use hexboard::search::DEFAULT_TRIALS;
use hexboard::{BoardError, BoardGenerator, GeneratedBoard, GeneratorConfig, ScenarioKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Text,
}

/// Procedural board generator for hex-tile territory-trading games
#[derive(Parser, Debug)]
#[command(name = "hexboard", version)]
struct Args {
    /// Board scenario: standard or expansion
    #[arg(long, default_value = "standard")]
    scenario: ScenarioKind,

    /// Tile algorithm: random or clumped
    #[arg(long, default_value = "random")]
    tiles: String,

    /// Clumpiness in [0, 1] for the clumped tile algorithm
    #[arg(long)]
    clumpiness: Option<f64>,

    /// Number algorithm: random, pseudorandom, resource-variance or
    /// settlement-resource-variance
    #[arg(long, default_value = "pseudorandom")]
    numbers: String,

    /// Target percentile in [0, 1] for the variance number algorithms
    #[arg(long)]
    percentile: Option<f64>,

    /// Desert algorithm: centered or random
    #[arg(long, default_value = "centered")]
    deserts: String,

    /// Port algorithm: random or preset
    #[arg(long, default_value = "preset")]
    ports: String,

    /// Trials for the variance number algorithms
    #[arg(long, default_value_t = DEFAULT_TRIALS)]
    trials: usize,

    /// Random seed, 0 for entropy
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// JSON generator config; replaces the algorithm, trials and seed flags
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of boards to generate
    #[arg(long, default_value_t = 1)]
    count: usize,

    /// Worker threads for batch generation
    #[arg(long, default_value_t = 1)]
    threads: usize,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Log more (-v info, -vv debug, -vvv trace); RUST_LOG applies otherwise
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("hexboard=info"),
        2 => EnvFilter::new("hexboard=debug"),
        _ => EnvFilter::new("hexboard=trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_config(args: &Args) -> Result<GeneratorConfig, BoardError> {
    if let Some(path) = &args.config {
        return GeneratorConfig::from_file(path);
    }
    Ok(GeneratorConfig {
        tiles: TileAlgorithm::from_name(&args.tiles, args.clumpiness)?,
        numbers: NumberAlgorithm::from_name(&args.numbers, args.percentile)?,
        deserts: DesertAlgorithm::from_name(&args.deserts, None)?,
        ports: PortAlgorithm::from_name(&args.ports, None)?,
        trials: args.trials,
        seed: args.seed,
    })
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let config = build_config(args)?;
    tracing::info!(scenario = %args.scenario, ?config, "generating");

    let boards: Vec<GeneratedBoard> = if args.count == 1 {
        let mut generator = BoardGenerator::new(args.scenario.scenario(), config)?;
        generator.generate_board()?;
        vec![generator.output()?]
    } else {
        generate_batch(args.scenario, &config, args.count, args.threads)?
    };

    match args.format {
        Format::Json if boards.len() == 1 => {
            println!("{}", serde_json::to_string_pretty(&boards[0])?)
        }
        Format::Json => println!("{}", serde_json::to_string_pretty(&boards)?),
        Format::Text => {
            for (i, board) in boards.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                println!("{}", board);
            }
        }
    }
    Ok(())
}
