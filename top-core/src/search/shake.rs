#[cfg(test)]
#[path = "../../tests/unit/search/shake_test.rs"]
mod shake_test;

use super::*;
use crate::construction::savings_heuristic;
use crate::models::Route;
use crate::utils::Float;

/// Destroys a random route and rebuilds the solution with the savings heuristic.
#[derive(Clone, Copy, Debug)]
pub struct Shake {
    /// A blend weight of distance and reward savings.
    pub alpha: Float,
    /// A randomization bias of the savings selection.
    pub beta: Float,
}

impl SearchOperator for Shake {
    fn name(&self) -> &str {
        "shake"
    }

    fn search(&self, problem: &Problem, solution: &Solution, random: &dyn Random) -> Solution {
        shake(problem, solution, self.alpha, self.beta, random)
    }
}

/// Discards a randomly selected route, creates a round trip for each of its customers which is
/// reachable within `tmax` and lets the savings heuristic consolidate the partial solution.
pub fn shake(problem: &Problem, solution: &Solution, alpha: Float, beta: Float, random: &dyn Random) -> Solution {
    let Some(route_id) = select_random_route(solution, random) else { return solution.clone() };

    let mut partial = solution.clone();
    let Some(discarded) = partial.remove_route(route_id) else { return solution.clone() };

    discarded.interior().iter().filter(|&&customer| problem.is_reachable(customer)).for_each(|&customer| {
        let id = partial.allocate_route_id();
        partial.insert_route(Route::round_trip(problem, id, customer));
    });

    savings_heuristic(problem, alpha, beta, Some(partial), random)
}
