#[cfg(test)]
#[path = "../../tests/unit/construction/savings_test.rs"]
mod savings_test;

use super::*;
use crate::models::{Route, RouteId};
use std::cmp::Ordering;

/// A candidate merge of a route ending with `from` customer and a route starting with `to` customer.
#[derive(Clone, Debug, PartialEq)]
pub struct Saving {
    /// A customer which has to be the last one in its route.
    pub from: usize,
    /// A customer which has to be the first one in its route.
    pub to: usize,
    /// A composite score of distance and reward savings.
    pub value: Float,
}

impl Scored for Saving {
    fn score(&self) -> Float {
        self.value
    }
}

/// A savings based heuristic: starts from one route per customer and merges routes using
/// biased randomized selection of savings.
#[derive(Clone, Copy, Debug, Default)]
pub struct SavingsHeuristic;

impl ConstructionHeuristic for SavingsHeuristic {
    fn name(&self) -> &str {
        "savings"
    }

    fn construct(&self, problem: &Problem, alpha: Float, beta: Float, random: &dyn Random) -> Solution {
        savings_heuristic(problem, alpha, beta, None, random)
    }
}

/// Builds a solution by merging routes according to savings. If no `seed` solution is given,
/// a solution with one route per reachable customer is used as a starting point.
/// The result has at most `n_trucks` routes, each of them fits into `tmax`.
pub fn savings_heuristic(
    problem: &Problem,
    alpha: Float,
    beta: Float,
    seed: Option<Solution>,
    random: &dyn Random,
) -> Solution {
    let mut solution = seed.unwrap_or_else(|| create_round_trip_solution(problem));
    let savings = generate_savings(problem, &solution, alpha);

    let mut selector = BiasedSelector::new(savings, beta, random);
    while solution.len() > problem.n_trucks {
        let Some(saving) = selector.take_next() else { break };

        try_merge(problem, &mut solution, &saving);
    }

    let solution = retain_best_routes(solution, problem.n_trucks);
    debug_assert!(solution.is_consistent(problem));

    solution
}

/// Creates a solution with a separate round trip route for every customer reachable within `tmax`.
pub fn create_round_trip_solution(problem: &Problem) -> Solution {
    Solution::new(
        problem
            .customer_ids()
            .filter(|&customer| problem.is_reachable(customer))
            .enumerate()
            .map(|(idx, customer)| Route::round_trip(problem, RouteId(idx), customer))
            .collect(),
    )
}

/// Generates savings for every ordered pair of customers served by the solution.
pub fn generate_savings(problem: &Problem, solution: &Solution, alpha: Float) -> Vec<Saving> {
    let (source, sink) = (problem.source(), problem.sink());
    let assigned = problem.customer_ids().filter(|&customer| solution.is_assigned(customer)).collect::<Vec<_>>();

    assigned
        .iter()
        .flat_map(|&from| assigned.iter().filter(move |&&to| to != from).map(move |&to| (from, to)))
        .map(|(from, to)| {
            let distance_saving =
                problem.distance(from, sink) + problem.distance(source, to) - problem.distance(from, to);
            let reward_saving = (problem.reward(from) + problem.reward(to)) as Float;

            Saving { from, to, value: alpha * distance_saving + (1. - alpha) * reward_saving }
        })
        .collect()
}

/// Merges two routes on the saving: the route which ends with `from` is followed by the route
/// which starts with `to`. The merged route reuses id of the first route.
/// Returns false and leaves the solution untouched when the merge is not possible or infeasible.
fn try_merge(problem: &Problem, solution: &mut Solution, saving: &Saving) -> bool {
    let (from_route, to_route) = match (solution.route_of(saving.from), solution.route_of(saving.to)) {
        (Some(from_route), Some(to_route)) if from_route != to_route => (from_route, to_route),
        _ => return false,
    };

    let merged = match (solution.route(from_route), solution.route(to_route)) {
        (Some(head), Some(tail))
            if head.interior().last() == Some(&saving.from) && tail.interior().first() == Some(&saving.to) =>
        {
            let length = head.length() - problem.distance(saving.from, problem.sink())
                + problem.distance(saving.from, saving.to)
                + tail.length()
                - problem.distance(problem.source(), saving.to);

            if length > problem.tmax {
                return false;
            }

            let head_customers = head.customers();
            let customers = head_customers[..head_customers.len() - 1]
                .iter()
                .chain(tail.customers()[1..].iter())
                .copied()
                .collect::<Vec<_>>();

            Route::new(from_route, customers, length, head.reward() + tail.reward())
        }
        _ => return false,
    };

    solution.remove_route(from_route);
    solution.remove_route(to_route);
    solution.insert_route(merged);

    true
}

/// Keeps at most `max_routes` routes with the highest reward: ties are resolved in favor of
/// a route with the lower id. Customers of dropped routes become unassigned.
fn retain_best_routes(mut solution: Solution, max_routes: usize) -> Solution {
    if solution.len() <= max_routes {
        return solution;
    }

    let mut ranked = solution.routes().map(|route| (route.id(), route.reward())).collect::<Vec<_>>();
    ranked.sort_by(|(a_id, a_reward), (b_id, b_reward)| match b_reward.cmp(a_reward) {
        Ordering::Equal => a_id.cmp(b_id),
        ordering => ordering,
    });

    ranked.into_iter().skip(max_routes).for_each(|(id, _)| {
        solution.remove_route(id);
    });

    solution
}
