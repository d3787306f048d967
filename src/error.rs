use alloc::string::String;

use thiserror::Error;

use crate::probe::ProbingScheme;

/// Rejected table or experiment configuration.
///
/// Every variant is raised while building a [`Table`](crate::Table) or
/// validating an experiment configuration, never while probing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The probing selector did not name a known scheme.
    #[error("unknown probing scheme `{0}` (expected linear, quadratic or cubic)")]
    InvalidScheme(String),
    /// The hash selector did not name a known variant.
    #[error("unknown hash variant `{0}` (expected identity, md5, sha1 or crc32)")]
    InvalidHashVariant(String),
    /// A table must have at least one slot.
    #[error("table capacity must be positive")]
    ZeroCapacity,
    /// Identity hashing was requested for a key type without an integer value.
    #[error("identity hashing requires an integer key type")]
    NonIntegerIdentityKey,
    /// The load factor is not in `(0, 1]`.
    #[error("load factor {0} is outside (0, 1]")]
    InvalidLoadFactor(f64),
    /// An experiment needs at least one run.
    #[error("experiment must run at least once")]
    ZeroRuns,
    /// An experiment needs at least one probing scheme to compare.
    #[error("experiment has no probing schemes to compare")]
    NoSchemes,
}

/// No empty slot was reachable within `capacity` probe attempts.
///
/// For quadratic and cubic probing this can happen while empty slots remain
/// elsewhere in the table, since their probe sequences may revisit slots.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("table full: no empty slot within {capacity} probe attempts")]
pub struct TableFull {
    /// Capacity of the table, which is also the number of attempts made.
    pub capacity: usize,
}

/// Failure of a whole experiment run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExperimentError {
    /// The experiment configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// A trial filled its table under [`FullTablePolicy::Abort`].
    ///
    /// [`FullTablePolicy::Abort`]: crate::experiment::FullTablePolicy::Abort
    #[error("{scheme} probing trial {run} aborted")]
    TrialAborted {
        /// Scheme of the failed trial.
        scheme: ProbingScheme,
        /// Zero-based run index of the failed trial.
        run: usize,
        /// The insertion failure that ended the trial.
        #[source]
        source: TableFull,
    },
}
