//! A crate which contains logic behind the command line interface to *Team Orienteering Problem* solver:
//! a configuration file format and a batch report over benchmark instances.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/features/solve.rs"]
mod solve_features_test;

pub use top_core as core;
pub use top_scientific as scientific;

pub mod extensions;
