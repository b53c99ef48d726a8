//! Contains local search operators: a 2-opt route optimizer and operators which mutate
//! a whole solution.
//!
//! Operators never change their input: they return a new solution which shares untouched routes
//! with the original one. An operator which finds nothing to do returns an unchanged copy.

use crate::models::{Problem, RouteId, Solution};
use crate::utils::Random;

mod insert;
pub use self::insert::*;

mod opt2;
pub use self::opt2::*;

mod remove;
pub use self::remove::*;

mod shake;
pub use self::shake::*;

/// A search operator which produces a new solution from the given one.
pub trait SearchOperator {
    /// Returns operator's name.
    fn name(&self) -> &str;

    /// Applies the operator to the solution.
    fn search(&self, problem: &Problem, solution: &Solution, random: &dyn Random) -> Solution;
}

/// Selects a route uniformly at random.
pub(crate) fn select_random_route(solution: &Solution, random: &dyn Random) -> Option<RouteId> {
    let route_ids = solution.route_ids();

    match route_ids.len() {
        0 => None,
        size => route_ids.get(random.uniform_int(0, size as i32 - 1) as usize).copied(),
    }
}
