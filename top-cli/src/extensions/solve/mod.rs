//! Contains logic to solve a batch of instances and report results.

pub mod config;
pub mod report;
