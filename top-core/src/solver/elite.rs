#[cfg(test)]
#[path = "../../tests/unit/solver/elite_test.rs"]
mod elite_test;

use super::RobustSolution;
use crate::models::{Problem, Solution};
use crate::simulation::StochasticReward;
use crate::utils::{Random, compare_floats};
use std::collections::VecDeque;

/// A bounded pool of robust solutions in insertion order: once the pool is full, the oldest
/// solution is evicted.
#[derive(Clone, Debug)]
pub struct ElitePool {
    capacity: usize,
    solutions: VecDeque<Solution>,
}

impl ElitePool {
    /// Creates a new instance of `ElitePool`.
    pub fn new(capacity: usize) -> Self {
        Self { capacity: capacity.max(1), solutions: VecDeque::with_capacity(capacity.max(1) + 1) }
    }

    /// Adds a solution to the pool evicting the oldest one on overflow.
    pub fn add(&mut self, solution: Solution) {
        self.solutions.push_back(solution);

        while self.solutions.len() > self.capacity {
            self.solutions.pop_front();
        }
    }

    /// Returns solutions from the oldest to the newest.
    pub fn solutions(&self) -> impl Iterator<Item = &Solution> + '_ {
        self.solutions.iter()
    }

    /// Returns amount of solutions in the pool.
    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    /// Returns true if the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    /// Re-evaluates every elite with `n_iter` simulation trials and returns the one with the
    /// highest stochastic reward. On ties, the oldest elite wins.
    pub fn select_robust(&self, problem: &Problem, n_iter: usize, random: &dyn Random) -> Option<RobustSolution> {
        self.solutions
            .iter()
            .map(|solution| RobustSolution {
                solution: solution.clone(),
                stochastic_reward: solution.stochastic_reward(problem, n_iter, random),
            })
            .fold(None, |best: Option<RobustSolution>, candidate| match best {
                Some(best) if compare_floats(candidate.stochastic_reward, best.stochastic_reward).is_le() => Some(best),
                _ => Some(candidate),
            })
    }
}
