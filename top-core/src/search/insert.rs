#[cfg(test)]
#[path = "../../tests/unit/search/insert_test.rs"]
mod insert_test;

use super::*;
use crate::models::Route;

/// Inserts unassigned customers into a randomly selected route.
#[derive(Clone, Copy, Debug, Default)]
pub struct Insert;

impl SearchOperator for Insert {
    fn name(&self) -> &str {
        "insert"
    }

    fn search(&self, problem: &Problem, solution: &Solution, random: &dyn Random) -> Solution {
        insert(problem, solution, random)
    }
}

/// Picks one route at random and tries to splice every unassigned customer right after the source.
/// Each candidate route is optimized with 2-opt and kept only if it still fits into `tmax`,
/// so several customers can be accepted within one call.
pub fn insert(problem: &Problem, solution: &Solution, random: &dyn Random) -> Solution {
    let Some(route_id) = select_random_route(solution, random) else { return solution.clone() };
    let Some(original) = solution.route(route_id) else { return solution.clone() };

    let route = solution.unassigned(problem).fold(original.clone(), |route, customer| {
        let customers = std::iter::once(problem.source())
            .chain(std::iter::once(customer))
            .chain(route.customers()[1..].iter().copied())
            .collect();

        let candidate = opt2(problem, &Route::from_sequence(problem, route_id, customers));

        if candidate.is_feasible(problem) { candidate } else { route }
    });

    if route.customers() == original.customers() { solution.clone() } else { solution.with_route(route) }
}
