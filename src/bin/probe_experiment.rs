use std::error::Error;
use std::process::ExitCode;

use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;
use log::error;
use probe_lab::Coefficients;
use probe_lab::HashVariant;
use probe_lab::ProbingScheme;
use probe_lab::experiment::ExperimentConfig;
use probe_lab::experiment::FullTablePolicy;
use probe_lab::experiment::run_experiment;

/// Compare collision counts and insertion time of linear, quadratic and
/// cubic probing.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Slots per table
    #[arg(short = 'c', long, default_value_t = 10_000)]
    capacity: usize,

    /// Fraction of slots filled per trial, in (0, 1]
    #[arg(short = 'l', long, default_value_t = 0.8)]
    load_factor: f64,

    /// Trials per probing scheme
    #[arg(short = 'n', long, default_value_t = 20)]
    runs: usize,

    /// Key hashing: identity (alias default), md5, sha1 or crc32
    #[arg(long, default_value = "md5")]
    hash: HashVariant,

    /// Probing schemes to compare, comma separated
    #[arg(short = 's', long, value_delimiter = ',', default_value = "linear,quadratic,cubic")]
    schemes: Vec<ProbingScheme>,

    /// Coefficient of i for quadratic and cubic probing
    #[arg(long, default_value_t = 1)]
    c1: u64,

    /// Coefficient of i^2 for quadratic and cubic probing
    #[arg(long, default_value_t = 1)]
    c2: u64,

    /// Coefficient of i^3 for cubic probing
    #[arg(long, default_value_t = 1)]
    c3: u64,

    /// Seed for key generation; random if omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Discard trials whose table fills up instead of stopping
    #[arg(long, default_value_t = false)]
    skip_full_trials: bool,

    /// Print per-trial results
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

impl Args {
    fn config(&self) -> ExperimentConfig {
        ExperimentConfig {
            capacity: self.capacity,
            load_factor: self.load_factor,
            runs: self.runs,
            hash_variant: self.hash,
            coefficients: Coefficients::new(self.c1, self.c2, self.c3),
            schemes: self.schemes.clone(),
            seed: self.seed,
            on_full: if self.skip_full_trials {
                FullTablePolicy::SkipTrial
            } else {
                FullTablePolicy::Abort
            },
        }
    }
}

fn initialize_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .format_timestamp_millis()
        .parse_default_env();

    let _ = builder.try_init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    initialize_logger(args.verbose);

    match run_experiment(&args.config()) {
        Ok(results) => {
            println!("{results}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            let mut source = err.source();
            while let Some(cause) = source {
                error!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}
