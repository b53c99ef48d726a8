//! Contains building blocks to construct a solution from scratch (or from a partial solution).

use crate::models::{Problem, Solution};
use crate::utils::{Float, Random};

mod constructive;
pub use self::constructive::*;

mod savings;
pub use self::savings::*;

mod selector;
pub use self::selector::*;

/// A heuristic which builds a feasible solution using a biased randomized selection.
pub trait ConstructionHeuristic {
    /// Returns a heuristic name.
    fn name(&self) -> &str;

    /// Builds a new solution. `alpha` blends distance against reward in candidate scores,
    /// `beta` controls how greedy the candidate selection is.
    fn construct(&self, problem: &Problem, alpha: Float, beta: Float, random: &dyn Random) -> Solution;
}
