//! Contains a Monte-Carlo evaluation of solutions under stochastic travel times.
//!
//! Each leg's travel time is modeled by a log-normal distribution whose mean equals the
//! deterministic leg distance and whose variance is a fixed share of it. A route's stochastic
//! reward is its deterministic reward multiplied by the share of simulated trials which finish
//! within `tmax`.

#[cfg(test)]
#[path = "../../tests/unit/simulation/simulation_test.rs"]
mod simulation_test;

use crate::models::{Problem, Route, Solution};
use crate::utils::{Float, Random};
use rand::prelude::Distribution;
use rand_distr::LogNormal;

/// A ratio of leg's travel time variance to its mean.
pub const LEG_VARIANCE_RATIO: Float = 0.05;

/// Estimates an expected reward under stochastic travel times.
pub trait StochasticReward {
    /// Runs `n_iter` simulation trials and returns the expected reward. Each call draws fresh
    /// randomness, so repeated calls return slightly different values.
    fn stochastic_reward(&self, problem: &Problem, n_iter: usize, random: &dyn Random) -> Float;
}

impl StochasticReward for Route {
    fn stochastic_reward(&self, problem: &Problem, n_iter: usize, random: &dyn Random) -> Float {
        if n_iter == 0 || self.reward() == 0 {
            return 0.;
        }

        let legs = self.legs().map(|(from, to)| LegTime::new(problem.distance(from, to))).collect::<Vec<_>>();
        let mut rng = random.get_rng();

        let successes = (0..n_iter)
            .filter(|_| legs.iter().map(|leg| leg.sample(&mut rng)).sum::<Float>() <= problem.tmax)
            .count();

        self.reward() as Float * successes as Float / n_iter as Float
    }
}

impl StochasticReward for Solution {
    fn stochastic_reward(&self, problem: &Problem, n_iter: usize, random: &dyn Random) -> Float {
        self.routes().map(|route| route.stochastic_reward(problem, n_iter, random)).sum()
    }
}

/// A travel time of a single leg.
enum LegTime {
    Fixed(Float),
    Random(LogNormal<Float>),
}

impl LegTime {
    fn new(mean: Float) -> Self {
        if mean <= 0. {
            return Self::Fixed(0.);
        }

        let variance = LEG_VARIANCE_RATIO * mean;
        let sigma_squared = (1. + variance / (mean * mean)).ln();
        let mu = mean.ln() - sigma_squared / 2.;

        LogNormal::new(mu, sigma_squared.sqrt()).map(Self::Random).unwrap_or(Self::Fixed(mean))
    }

    fn sample(&self, rng: &mut impl rand::Rng) -> Float {
        match self {
            Self::Fixed(value) => *value,
            Self::Random(distribution) => distribution.sample(rng),
        }
    }
}
