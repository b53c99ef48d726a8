//! A collection of models to represent problem and solution in Team Orienteering Problem domain.

mod problem;
pub use self::problem::*;

mod solution;
pub use self::solution::*;
