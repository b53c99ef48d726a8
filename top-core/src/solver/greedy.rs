#[cfg(test)]
#[path = "../../tests/unit/solver/greedy_test.rs"]
mod greedy_test;

use super::is_better;
use crate::construction::ConstructionHeuristic;
use crate::models::{Problem, Solution};
use crate::search::opt2_routes;
use crate::utils::{Float, Random};

/// A bias used to build almost deterministic greedy solutions.
pub const GREEDY_BETA: Float = 0.99999;

/// A step of the alpha grid explored by the greedy search.
pub const GREEDY_ALPHA_STEP: Float = 0.05;

/// Runs the heuristic once per alpha on the grid `0, 0.05, ..., 1` with a bias close to one,
/// every route of a constructed solution is shortened with 2-opt. Returns the solution with
/// the highest reward (the shortest one among equal rewards) and its alpha. On full ties,
/// the lowest alpha wins.
pub fn generate_greedy_solution(
    problem: &Problem,
    heuristic: &dyn ConstructionHeuristic,
    random: &dyn Random,
) -> (Solution, Float) {
    let steps = (1. / GREEDY_ALPHA_STEP).round() as usize;

    (0..=steps)
        .map(|step| step as Float * GREEDY_ALPHA_STEP)
        .map(|alpha| (opt2_routes(problem, &heuristic.construct(problem, alpha, GREEDY_BETA, random)), alpha))
        .fold(None, |best: Option<(Solution, Float)>, (solution, alpha)| match best {
            Some(best) if !is_better(&solution, &best.0) => Some(best),
            _ => Some((solution, alpha)),
        })
        .unwrap_or_else(|| (Solution::default(), 0.))
}
