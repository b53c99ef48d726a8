//! Contains metaheuristics which orchestrate construction heuristics, search operators and the
//! stochastic evaluator.
//!
//! Both metaheuristics return a pair of solutions: the best one in terms of deterministic reward
//! and the most robust one, i.e. the elite with the highest long-run stochastic reward.

mod config;
pub use self::config::*;

mod elite;
pub use self::elite::*;

mod greedy;
pub use self::greedy::*;

mod local_search;
pub use self::local_search::*;

mod multi_start;
pub use self::multi_start::*;

use crate::models::Solution;
use crate::utils::Float;
use std::cmp::Ordering;

/// A minimal length decrease which makes a solution with the same reward preferable.
const LENGTH_TOLERANCE: Float = 1E-9;

/// A solution accompanied by its stochastic reward estimation.
#[derive(Clone, Debug)]
pub struct RobustSolution {
    /// A solution.
    pub solution: Solution,
    /// An estimated stochastic reward.
    pub stochastic_reward: Float,
}

/// Returns true if the candidate collects more reward than the current best solution, or the same
/// reward within a shorter total length.
pub(crate) fn is_better(candidate: &Solution, best: &Solution) -> bool {
    match candidate.reward().cmp(&best.reward()) {
        Ordering::Greater => true,
        Ordering::Equal => candidate.length() < best.length() - LENGTH_TOLERANCE,
        Ordering::Less => false,
    }
}
