#[cfg(test)]
#[path = "../../tests/unit/solver/multi_start_test.rs"]
mod multi_start_test;

use super::*;
use crate::construction::ConstructionHeuristic;
use crate::models::Problem;
use crate::search::opt2_routes;
use crate::simulation::StochasticReward;
use crate::utils::{Environment, Timer};

/// Runs the multi-start metaheuristic: the heuristic is restarted many times at the best greedy
/// alpha while its bias is decreased each time the search stagnates for too long. Every
/// constructed solution is shortened with 2-opt. A solution with a higher reward resets the bias,
/// a solution with the same reward and a shorter length replaces the best one without a reset.
///
/// Returns the best deterministic solution and the most robust solution from the elite pool.
pub fn multi_start_metaheuristic(
    problem: &Problem,
    heuristic: &dyn ConstructionHeuristic,
    config: &MultiStartConfig,
    environment: &Environment,
) -> (Solution, Solution) {
    let (random, logger) = (environment.random.as_ref(), &environment.logger);
    let timer = Timer::start();

    (logger)(&format!("multi-start on '{}' using '{}' heuristic", problem.id, heuristic.name()));

    let (greedy, alpha) = generate_greedy_solution(problem, heuristic, random);
    (logger)(&format!("greedy solution: reward {}, best alpha {alpha:.2}", greedy.reward()));

    let mut best = greedy.clone();
    let mut best_robust = RobustSolution {
        stochastic_reward: greedy.stochastic_reward(problem, config.short_simulation_iterations, random),
        solution: greedy.clone(),
    };
    let mut elites = ElitePool::new(config.elite_size);
    elites.add(greedy);

    let mut beta = config.beta_start;
    let (mut stalls, mut improvements, mut iterations) = (0, 0, 0);

    while iterations < config.max_iterations && !environment.is_quota_reached() {
        iterations += 1;

        let solution = opt2_routes(problem, &heuristic.construct(problem, alpha, beta, random));
        let stochastic_reward = solution.stochastic_reward(problem, config.short_simulation_iterations, random);

        if stochastic_reward > best_robust.stochastic_reward {
            best_robust = RobustSolution { solution: solution.clone(), stochastic_reward };
            elites.add(solution.clone());
        }

        if solution.reward() > best.reward() {
            best = solution;
            beta = config.beta_start;
            improvements += 1;
        } else {
            if is_better(&solution, &best) {
                best = solution;
            }

            stalls += 1;
            if stalls > config.enlarge_search_iterations {
                stalls = 0;
                beta = (beta - config.beta_step).max(config.min_beta);
            }
        }
    }

    (logger)(&format!(
        "explored {iterations} iterations with {improvements} improvements in {}ms, best reward {}",
        timer.elapsed_millis(),
        best.reward()
    ));

    let robust = select_robust(problem, &elites, best_robust, config.long_simulation_iterations, environment);

    (best, robust)
}

/// Ranks elites using a long simulation run, falls back to the given solution if the pool is empty.
pub(crate) fn select_robust(
    problem: &Problem,
    elites: &ElitePool,
    fallback: RobustSolution,
    n_iter: usize,
    environment: &Environment,
) -> Solution {
    let timer = Timer::start();
    (environment.logger)(&format!("running long simulation on {} elite solution(-s)", elites.len()));

    let robust = elites.select_robust(problem, n_iter, environment.random.as_ref()).unwrap_or(fallback);

    (environment.logger)(&format!(
        "long simulation done in {}ms, robust solution: reward {}, stochastic reward {:.2}",
        timer.elapsed_millis(),
        robust.solution.reward(),
        robust.stochastic_reward
    ));

    robust.solution
}
