#[cfg(test)]
#[path = "../../tests/unit/search/opt2_test.rs"]
mod opt2_test;

use crate::models::{Problem, Route, Solution};
use crate::utils::Float;

/// A minimal improvement required to apply a 2-opt move.
const IMPROVEMENT_THRESHOLD: Float = 1E-9;

/// Implements a classical 2-opt optimization with the first improvement strategy: once a move
/// shortening the route is found, it is applied and the sweep restarts. Source and sink
/// stay fixed. Distances are symmetric, so only two edges change on each move and the route
/// length is updated by the move's delta.
///
/// The result visits the same customers, its feasibility is not checked here.
/// For algorithm details, see https://en.wikipedia.org/wiki/2-opt
pub fn opt2(problem: &Problem, route: &Route) -> Route {
    let mut customers = route.customers().to_vec();
    let mut length = route.length();

    while let Some((i, j, delta)) = find_improvement(problem, customers.as_slice()) {
        customers[i..j].reverse();
        length += delta;
    }

    Route::new(route.id(), customers, length, route.reward())
}

/// Applies 2-opt to every route of the solution. Routes which cannot be shortened are shared
/// with the given solution.
pub fn opt2_routes(problem: &Problem, solution: &Solution) -> Solution {
    solution.routes().fold(solution.clone(), |optimized, route| {
        let candidate = opt2(problem, route);

        if candidate.customers() == route.customers() { optimized } else { optimized.with_route(candidate) }
    })
}

/// Finds the first pair of edges `(i - 1, i)` and `(j - 1, j)` which, when replaced by
/// `(i - 1, j - 1)` and `(i, j)`, makes the route shorter.
fn find_improvement(problem: &Problem, customers: &[usize]) -> Option<(usize, usize, Float)> {
    let size = customers.len();

    (1..size.saturating_sub(2))
        .flat_map(|i| (i + 2..size).map(move |j| (i, j)))
        .map(|(i, j)| {
            let current = problem.distance(customers[i - 1], customers[i])
                + problem.distance(customers[j - 1], customers[j]);
            let candidate = problem.distance(customers[i - 1], customers[j - 1])
                + problem.distance(customers[i], customers[j]);

            (i, j, candidate - current)
        })
        .find(|(_, _, delta)| *delta < -IMPROVEMENT_THRESHOLD)
}
