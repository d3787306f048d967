//! Repeated-trial collision experiments.
//!
//! An experiment fills a fresh [`Table`] with `floor(capacity * load_factor)`
//! uniformly random keys from `[0, 1_000_000)` once per probing scheme per
//! run, sums the attempt counts returned by every insert, times each batch,
//! and averages both over all runs.
//!
//! ```rust
//! use probe_lab::experiment::ExperimentConfig;
//! use probe_lab::experiment::run_experiment;
//!
//! let config = ExperimentConfig {
//!     capacity: 1_000,
//!     runs: 2,
//!     seed: Some(7),
//!     ..ExperimentConfig::default()
//! };
//! let results = run_experiment(&config).unwrap();
//! assert_eq!(results.summaries().len(), 3);
//! println!("{results}");
//! ```

use std::time::Duration;
use std::time::Instant;

use log::debug;
use log::info;
use log::warn;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::digest::DigestAlgorithm;
use crate::digest::HashVariant;
use crate::digest::Key;
use crate::error::ConfigError;
use crate::error::ExperimentError;
use crate::error::TableFull;
use crate::probe::Coefficients;
use crate::probe::ProbingScheme;
use crate::table::Table;

/// Exclusive upper bound of generated keys.
pub const KEY_UPPER_BOUND: u64 = 1_000_000;

/// What to do when a trial's table fills up before all keys are placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FullTablePolicy {
    /// Stop the whole experiment with [`ExperimentError::TrialAborted`].
    #[default]
    Abort,
    /// Discard the trial and keep going. Averages cover completed trials only.
    SkipTrial,
}

/// Parameters of one experiment.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentConfig {
    /// Slots per table.
    pub capacity: usize,
    /// Fraction of slots filled per trial, in `(0, 1]`.
    pub load_factor: f64,
    /// Trials per scheme.
    pub runs: usize,
    /// Key hashing used by every table.
    pub hash_variant: HashVariant,
    /// Probing coefficients used by every table.
    pub coefficients: Coefficients,
    /// Schemes to compare, in reporting order.
    pub schemes: Vec<ProbingScheme>,
    /// Seed for key generation. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Handling of trials that hit [`TableFull`].
    pub on_full: FullTablePolicy,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        ExperimentConfig {
            capacity: 10_000,
            load_factor: 0.8,
            runs: 20,
            hash_variant: HashVariant::Digest(DigestAlgorithm::Md5),
            coefficients: Coefficients::default(),
            schemes: ProbingScheme::ALL.to_vec(),
            seed: None,
            on_full: FullTablePolicy::Abort,
        }
    }
}

impl ExperimentConfig {
    /// Keys inserted per trial: `floor(capacity * load_factor)`.
    pub fn num_keys(&self) -> usize {
        (self.capacity as f64 * self.load_factor) as usize
    }

    /// Checks the configuration without running anything.
    ///
    /// # Errors
    ///
    /// Returns the first problem found: zero capacity, a load factor outside
    /// `(0, 1]`, zero runs, or an empty scheme list.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if !(self.load_factor > 0.0 && self.load_factor <= 1.0) {
            return Err(ConfigError::InvalidLoadFactor(self.load_factor));
        }
        if self.runs == 0 {
            return Err(ConfigError::ZeroRuns);
        }
        if self.schemes.is_empty() {
            return Err(ConfigError::NoSchemes);
        }
        Ok(())
    }
}

/// Result of filling one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialOutcome {
    /// Sum of the attempt counts of every insert.
    pub collisions: u64,
    /// Wall-clock time spent inserting the batch.
    pub elapsed: Duration,
}

/// Draws `count` keys uniformly from `[0, KEY_UPPER_BOUND)`.
pub fn generate_keys<R: Rng>(rng: &mut R, count: usize) -> Vec<u64> {
    (0..count)
        .map(|_| rng.random_range(0..KEY_UPPER_BOUND))
        .collect()
}

/// Inserts every key into `table` in order, timing the whole batch.
///
/// # Errors
///
/// Stops at the first [`TableFull`]. Keys placed before it stay in the table.
pub fn simulate<K: Key + Clone>(table: &mut Table<K>, keys: &[K]) -> Result<TrialOutcome, TableFull> {
    let start = Instant::now();
    let mut collisions = 0u64;
    for key in keys {
        collisions += table.insert(key.clone())? as u64;
    }
    Ok(TrialOutcome {
        collisions,
        elapsed: start.elapsed(),
    })
}

/// Aggregated trials of one probing scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemeSummary {
    scheme: ProbingScheme,
    total_collisions: u64,
    total_time: Duration,
    completed: usize,
    skipped: usize,
}

impl SchemeSummary {
    fn new(scheme: ProbingScheme) -> Self {
        SchemeSummary {
            scheme,
            total_collisions: 0,
            total_time: Duration::ZERO,
            completed: 0,
            skipped: 0,
        }
    }

    fn record(&mut self, outcome: TrialOutcome) {
        self.total_collisions += outcome.collisions;
        self.total_time += outcome.elapsed;
        self.completed += 1;
    }

    /// The probing scheme.
    pub fn scheme(&self) -> ProbingScheme {
        self.scheme
    }

    /// Collisions summed over completed trials.
    pub fn total_collisions(&self) -> u64 {
        self.total_collisions
    }

    /// Insertion time summed over completed trials.
    pub fn total_time(&self) -> Duration {
        self.total_time
    }

    /// Number of trials that placed every key.
    pub fn completed_trials(&self) -> usize {
        self.completed
    }

    /// Number of trials discarded under [`FullTablePolicy::SkipTrial`].
    pub fn skipped_trials(&self) -> usize {
        self.skipped
    }

    /// Mean collisions per completed trial, or `None` if none completed.
    pub fn avg_collisions(&self) -> Option<f64> {
        (self.completed > 0).then(|| self.total_collisions as f64 / self.completed as f64)
    }

    /// Mean insertion time per completed trial, or `None` if none completed.
    pub fn avg_time(&self) -> Option<Duration> {
        (self.completed > 0).then(|| {
            let nanos = self.total_time.as_nanos() / self.completed as u128;
            Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
        })
    }
}

/// Per-scheme averages of a finished experiment.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentResults {
    pub(crate) capacity: usize,
    pub(crate) load_factor: f64,
    pub(crate) num_keys: usize,
    pub(crate) runs: usize,
    pub(crate) hash_variant: HashVariant,
    pub(crate) summaries: Vec<SchemeSummary>,
}

impl ExperimentResults {
    /// Summaries in the configured scheme order.
    pub fn summaries(&self) -> &[SchemeSummary] {
        &self.summaries
    }

    /// The summary of `scheme`, if it was part of the experiment.
    pub fn get(&self, scheme: ProbingScheme) -> Option<&SchemeSummary> {
        self.summaries.iter().find(|s| s.scheme == scheme)
    }

    /// Keys inserted per trial.
    pub fn num_keys(&self) -> usize {
        self.num_keys
    }

    /// Trials run per scheme.
    pub fn runs(&self) -> usize {
        self.runs
    }
}

/// Runs `config`, seeding key generation from `config.seed` or the OS.
///
/// # Errors
///
/// [`ExperimentError::Config`] if the configuration is invalid, or
/// [`ExperimentError::TrialAborted`] if a table fills up under
/// [`FullTablePolicy::Abort`].
pub fn run_experiment(config: &ExperimentConfig) -> Result<ExperimentResults, ExperimentError> {
    let mut rng = match config.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    run_experiment_with_rng(config, &mut rng)
}

/// Runs `config`, drawing keys from `rng`.
///
/// Every run tries each scheme in order, each trial with a fresh table and
/// a fresh batch of keys.
///
/// # Errors
///
/// Same as [`run_experiment`].
pub fn run_experiment_with_rng<R: Rng>(
    config: &ExperimentConfig,
    rng: &mut R,
) -> Result<ExperimentResults, ExperimentError> {
    config.validate()?;
    let num_keys = config.num_keys();

    info!(
        "running {} x {} trials: capacity={} load_factor={} keys={} hash={}",
        config.runs,
        config.schemes.len(),
        config.capacity,
        config.load_factor,
        num_keys,
        config.hash_variant
    );

    let mut summaries: Vec<SchemeSummary> =
        config.schemes.iter().copied().map(SchemeSummary::new).collect();

    for run in 0..config.runs {
        for summary in summaries.iter_mut() {
            let scheme = summary.scheme;
            let keys = generate_keys(rng, num_keys);
            let mut table: Table<u64> = Table::with_coefficients(
                config.capacity,
                scheme,
                config.hash_variant,
                config.coefficients,
            )?;

            match simulate(&mut table, &keys) {
                Ok(outcome) => {
                    debug!(
                        "run {run} {scheme}: {} collisions in {:?}",
                        outcome.collisions, outcome.elapsed
                    );
                    summary.record(outcome);
                }
                Err(source) => match config.on_full {
                    FullTablePolicy::Abort => {
                        return Err(ExperimentError::TrialAborted {
                            scheme,
                            run,
                            source,
                        });
                    }
                    FullTablePolicy::SkipTrial => {
                        warn!(
                            "run {run} {scheme}: skipped after placing {} of {num_keys} keys ({source})",
                            table.len()
                        );
                        summary.skipped += 1;
                    }
                },
            }
        }
    }

    for summary in &summaries {
        match (summary.avg_collisions(), summary.avg_time()) {
            (Some(collisions), Some(time)) => info!(
                "{}: {collisions:.2} collisions, {:.4}s average over {} trials",
                summary.scheme,
                time.as_secs_f64(),
                summary.completed
            ),
            _ => warn!("{}: no trial completed", summary.scheme),
        }
    }

    Ok(ExperimentResults {
        capacity: config.capacity,
        load_factor: config.load_factor,
        num_keys,
        runs: config.runs,
        hash_variant: config.hash_variant,
        summaries,
    })
}
