#[cfg(test)]
#[path = "../../tests/unit/solver/local_search_test.rs"]
mod local_search_test;

use super::*;
use crate::construction::SavingsHeuristic;
use crate::models::{Problem, Reward};
use crate::search::{Insert, Remove, SearchOperator, Shake};
use crate::simulation::StochasticReward;
use crate::utils::{Environment, Float, Random, Timer};

/// Runs the annealing-like local search metaheuristic: starting from the best greedy savings
/// solution, it applies a random operator (remove, insert or shake) on each iteration. Improving
/// or equal solutions are always accepted, worse ones with a probability which decays with
/// the temperature.
///
/// Returns the best deterministic solution and the most robust solution from the elite pool.
pub fn local_search_metaheuristic(
    problem: &Problem,
    config: &LocalSearchConfig,
    environment: &Environment,
) -> (Solution, Solution) {
    let (random, logger) = (environment.random.as_ref(), &environment.logger);
    let timer = Timer::start();

    (logger)(&format!("local search on '{}'", problem.id));

    let (greedy, alpha) = generate_greedy_solution(problem, &SavingsHeuristic, random);
    (logger)(&format!("greedy solution: reward {}, best alpha {alpha:.2}", greedy.reward()));

    let operators: Vec<Box<dyn SearchOperator>> =
        vec![Box::new(Remove), Box::new(Insert), Box::new(Shake { alpha, beta: config.shake_beta })];

    let mut base = greedy.clone();
    let mut best = greedy.clone();
    let mut best_robust = RobustSolution {
        stochastic_reward: greedy.stochastic_reward(problem, config.short_simulation_iterations, random),
        solution: greedy.clone(),
    };
    let mut elites = ElitePool::new(config.elite_size);
    elites.add(greedy);

    let mut temperature = config.initial_temperature;
    let (mut improvements, mut iterations) = (0, 0);

    while iterations < config.max_iterations && !environment.is_quota_reached() {
        iterations += 1;

        let operator = &operators[random.uniform_int(0, operators.len() as i32 - 1) as usize];
        let candidate = operator.search(problem, &base, random);

        if candidate.reward() >= base.reward() {
            if is_better(&candidate, &best) {
                if candidate.reward() > best.reward() {
                    improvements += 1;
                }
                best = candidate.clone();
            }

            let stochastic_reward = candidate.stochastic_reward(problem, config.short_simulation_iterations, random);
            if stochastic_reward > best_robust.stochastic_reward {
                best_robust = RobustSolution { solution: candidate.clone(), stochastic_reward };
                elites.add(candidate.clone());
            }

            base = candidate;
        } else if is_accepted(candidate.reward() - base.reward(), temperature, random) {
            base = candidate;
        }

        temperature *= config.cooling_factor;
    }

    (logger)(&format!(
        "explored {iterations} iterations with {improvements} improvements in {}ms, best reward {}",
        timer.elapsed_millis(),
        best.reward()
    ));

    let robust = select_robust(problem, &elites, best_robust, config.long_simulation_iterations, environment);

    (best, robust)
}

/// Accepts a worse solution with probability `exp(delta / temperature)`.
fn is_accepted(delta: Reward, temperature: Float, random: &dyn Random) -> bool {
    (delta as Float / temperature).exp() > random.uniform_real(0., 1.)
}
