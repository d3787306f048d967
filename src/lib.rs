#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod digest;

/// Error types shared by tables and experiments.
pub mod error;

pub mod probe;

/// The open-addressing table.
///
/// This module provides [`Table`], which counts the collisions of every
/// insert under a fixed probing scheme and hash variant.
pub mod table;

mod report;

cfg_if::cfg_if! {
    if #[cfg(feature = "experiment")] {
        pub mod experiment;

        pub use experiment::ExperimentConfig;
        pub use experiment::ExperimentResults;
        pub use experiment::run_experiment;
    }
}

pub use digest::DigestAlgorithm;
pub use digest::HashVariant;
pub use digest::Key;
pub use digest::KeyDigest;
pub use error::ConfigError;
pub use error::ExperimentError;
pub use error::TableFull;
pub use probe::Coefficients;
pub use probe::ProbingScheme;
#[cfg(feature = "stats")]
pub use table::DebugStats;
pub use table::Table;
