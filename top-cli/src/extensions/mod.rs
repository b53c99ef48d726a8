//! Contains command line extensions.

pub mod solve;
