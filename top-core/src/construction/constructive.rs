#[cfg(test)]
#[path = "../../tests/unit/construction/constructive_test.rs"]
mod constructive_test;

use super::*;
use crate::models::{Reward, Route, RouteId};

/// A candidate extension of a route under construction.
#[derive(Clone, Debug, PartialEq)]
pub struct ConstructiveStep {
    /// A customer to be visited next.
    pub customer: usize,
    /// A blended score of the customer's reward and its detour.
    pub value: Float,
}

impl Scored for ConstructiveStep {
    fn score(&self) -> Float {
        self.value
    }
}

/// A constructive heuristic which builds `n_trucks` routes one after another, extending the
/// current route with a biased randomized choice among all customers which still fit.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConstructiveHeuristic;

impl ConstructionHeuristic for ConstructiveHeuristic {
    fn name(&self) -> &str {
        "constructive"
    }

    fn construct(&self, problem: &Problem, alpha: Float, beta: Float, random: &dyn Random) -> Solution {
        constructive_heuristic(problem, alpha, beta, random)
    }
}

/// Builds exactly `n_trucks` routes sequentially, never merging them. A route for which no
/// customer fits stays trivial: it goes from the source directly to the sink.
pub fn constructive_heuristic(problem: &Problem, alpha: Float, beta: Float, random: &dyn Random) -> Solution {
    let mut visited = vec![false; problem.customers().len()];

    let routes = (0..problem.n_trucks)
        .map(|route_idx| build_route(problem, RouteId(route_idx), alpha, beta, &mut visited, random))
        .collect();

    Solution::new(routes)
}

fn build_route(
    problem: &Problem,
    id: RouteId,
    alpha: Float,
    beta: Float,
    visited: &mut [bool],
    random: &dyn Random,
) -> Route {
    let sink = problem.sink();
    let mut customers = vec![problem.source()];
    let (mut current, mut length, mut reward) = (problem.source(), 0., Reward::default());

    loop {
        let candidates = problem
            .customer_ids()
            .filter(|&customer| !visited[customer])
            .filter(|&customer| {
                length + problem.distance(current, customer) + problem.distance(customer, sink) <= problem.tmax
            })
            .map(|customer| {
                let detour = problem.distance(current, sink)
                    - problem.distance(current, customer)
                    - problem.distance(customer, sink);

                ConstructiveStep { customer, value: (1. - alpha) * problem.reward(customer) as Float + alpha * detour }
            })
            .collect::<Vec<_>>();

        let Some(step) = BiasedSelector::new(candidates, beta, random).take_next() else { break };

        visited[step.customer] = true;
        customers.push(step.customer);
        length += problem.distance(current, step.customer);
        reward += problem.reward(step.customer);
        current = step.customer;
    }

    customers.push(sink);
    length += problem.distance(current, sink);

    Route::new(id, customers, length, reward)
}
