//! Scientific crate contains logic to read Team Orienteering Problem benchmark instances and
//! to write their solutions.
//!
//! # Supported formats
//!
//! - **top**: a plain text format used by Chao's TOP benchmark set: three header lines
//!   (customer count, fleet size, route budget) followed by tab separated `x y reward` rows.
//!   The first row is the source depot, the last row is the sink depot.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub(crate) mod helpers;

#[cfg(test)]
#[path = "../tests/integration/known_problems_test.rs"]
mod known_problems_test;

pub use top_core as core;

pub mod common;
pub mod top;
