#[cfg(test)]
#[path = "../../tests/unit/search/remove_test.rs"]
mod remove_test;

use super::*;
use crate::models::Route;

/// Removes a random customer from a randomly selected route.
#[derive(Clone, Copy, Debug, Default)]
pub struct Remove;

impl SearchOperator for Remove {
    fn name(&self) -> &str {
        "remove"
    }

    fn search(&self, problem: &Problem, solution: &Solution, random: &dyn Random) -> Solution {
        remove(problem, solution, random)
    }
}

/// Picks one route at random and drops one of its interior customers, the rest of the route is
/// optimized with 2-opt. A route with a single customer is left as is.
pub fn remove(problem: &Problem, solution: &Solution, random: &dyn Random) -> Solution {
    let Some(route) = select_random_route(solution, random).and_then(|route_id| solution.route(route_id)) else {
        return solution.clone();
    };

    let customers = route.customers();
    if customers.len() <= 3 {
        return solution.clone();
    }

    let position = random.uniform_int(1, customers.len() as i32 - 2) as usize;
    let (prev, removed, next) = (customers[position - 1], customers[position], customers[position + 1]);

    let length = route.length() - problem.distance(prev, removed) - problem.distance(removed, next)
        + problem.distance(prev, next);
    let reward = route.reward() - problem.reward(removed);
    let remaining = customers.iter().enumerate().filter(|(idx, _)| *idx != position).map(|(_, &c)| c).collect();

    let candidate = opt2(problem, &Route::new(route.id(), remaining, length, reward));

    if candidate.is_feasible(problem) { solution.with_route(candidate) } else { solution.clone() }
}
