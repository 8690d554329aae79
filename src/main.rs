//! pagesim CLI: run a page access trace under a replacement policy.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use log::LevelFilter;

use pagesim::common::config::parse_size;
use pagesim::{simulate, write_report, Result, SimConfig, SimulationStats};

#[derive(Parser)]
#[command(name = "pagesim")]
#[command(about = "Simulate FIFO, LRU or Random page replacement over an access trace")]
#[command(version)]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Replacement policy: fifo, lru or random
    policy: String,

    /// Trace file of whitespace-separated page numbers
    trace: PathBuf,

    /// Page size in bytes (2-64)
    #[arg(allow_hyphen_values = true)]
    page_size: String,

    /// Memory size in bytes (128-16384)
    #[arg(allow_hyphen_values = true)]
    memory_size: String,

    /// Seed for the random policy (defaults to OS entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(stats) => match write_report(&stats, cli.verbose > 0, &mut io::stdout().lock()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("error: {}", e);
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<SimulationStats> {
    let mut config = SimConfig::new(
        &cli.policy,
        &cli.trace,
        parse_size(&cli.page_size),
        parse_size(&cli.memory_size),
    )?;
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    simulate(&config)
}

/// `RUST_LOG` wins when set; otherwise `-v` flags pick the level.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level.as_str()))
        .format_timestamp(None)
        .init();
}
