//! Runs metaheuristics over benchmark instances and tabulates their results.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/report_test.rs"]
mod report_test;

use super::config::Config;
use rayon::prelude::*;
use serde::Serialize;
use std::fmt::{Display, Formatter};
use std::io::Write;
use std::rc::Rc;
use std::str::FromStr;
use std::sync::Arc;
use top_core::construction::{ConstructiveHeuristic, SavingsHeuristic};
use top_core::models::{Problem, Reward, Solution};
use top_core::simulation::StochasticReward;
use top_core::solver::{LocalSearchConfig, MultiStartConfig, local_search_metaheuristic, multi_start_metaheuristic};
use top_core::utils::{DefaultRandom, Environment, Float, GenericError, GenericResult, InfoLogger};

/// A solution method.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    /// Multi-start metaheuristic over the constructive heuristic.
    Constructive,
    /// Multi-start metaheuristic over the savings heuristic.
    Savings,
    /// Annealing-like local search metaheuristic.
    LocalSearch,
}

impl Method {
    /// Returns all methods in the report order.
    pub fn all() -> Vec<Method> {
        vec![Method::Constructive, Method::Savings, Method::LocalSearch]
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Method::Constructive => "constructive",
            Method::Savings => "savings",
            Method::LocalSearch => "local-search",
        };

        write!(f, "{name}")
    }
}

impl FromStr for Method {
    type Err = GenericError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "constructive" => Ok(Method::Constructive),
            "savings" => Ok(Method::Savings),
            "local-search" => Ok(Method::LocalSearch),
            _ => Err(format!("unknown method: '{value}'").into()),
        }
    }
}

/// Settings shared by all runs of a report.
#[derive(Clone, Debug)]
pub struct RunSettings {
    /// Amount of independent runs per instance and method.
    pub runs: usize,
    /// A multi-start metaheuristic configuration.
    pub multi_start: MultiStartConfig,
    /// A local search metaheuristic configuration.
    pub local_search: LocalSearchConfig,
    /// A base seed: run `i` uses `seed + i`. Runs are seeded from entropy when omitted.
    pub seed: Option<u64>,
    /// A time limit of a single run in seconds.
    pub max_time: Option<usize>,
    /// Whether to print search progress.
    pub is_logging: bool,
}

impl RunSettings {
    /// Creates run settings from the config.
    pub fn new(config: &Config, seed: Option<u64>, max_time: Option<usize>, is_logging: bool) -> Self {
        Self {
            runs: config.runs(),
            multi_start: config.to_multi_start_config(),
            local_search: config.to_local_search_config(),
            seed,
            max_time,
            is_logging,
        }
    }

    fn create_environment(&self, run: usize, prefix: String) -> Environment {
        let logger: InfoLogger = if self.is_logging {
            Arc::new(move |msg: &str| println!("[{prefix}] {msg}"))
        } else {
            Arc::new(|_: &str| {})
        };
        let environment = Environment::new_with_time_quota(self.max_time);
        let environment = match self.seed {
            Some(seed) => {
                let random = Rc::new(DefaultRandom::new_with_seed(seed.wrapping_add(run as u64)));
                Environment { random, ..environment }
            }
            None => environment,
        };

        Environment { logger, ..environment }
    }
}

/// A report row which describes the best run of a method on an instance.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReportRow {
    /// An instance id.
    pub instance: String,
    /// A method name.
    pub method: String,
    /// A deterministic reward of the best deterministic solution.
    pub best_reward: Reward,
    /// A deterministic reward of the most robust solution.
    pub robust_reward: Reward,
    /// A long-run stochastic reward of the best deterministic solution.
    pub best_stochastic_reward: Float,
    /// A long-run stochastic reward of the most robust solution.
    pub robust_stochastic_reward: Float,
}

/// A result of the best run.
pub struct MethodResult {
    /// A report row.
    pub row: ReportRow,
    /// The best deterministic solution.
    pub best: Solution,
    /// The most robust solution.
    pub robust: Solution,
}

/// Runs the method `runs` times in parallel and returns the run with the highest deterministic
/// reward, on ties the earliest run wins. Both solutions are re-evaluated with a long simulation.
pub fn solve_with_method(problem: &Problem, method: Method, settings: &RunSettings) -> MethodResult {
    let results = (0..settings.runs)
        .into_par_iter()
        .map(|run| {
            let environment = settings.create_environment(run, format!("{}:{method}:{run}", problem.id));
            run_method(problem, method, settings, &environment)
        })
        .collect::<Vec<_>>();

    let (best, robust) = results
        .into_iter()
        .reduce(|acc, item| if item.0.reward() > acc.0.reward() { item } else { acc })
        .unwrap_or_default();

    let environment = settings.create_environment(settings.runs, format!("{}:{method}", problem.id));
    let n_iter = get_long_simulation_iterations(method, settings);
    let random = environment.random.as_ref();

    MethodResult {
        row: ReportRow {
            instance: problem.id.clone(),
            method: method.to_string(),
            best_reward: best.reward(),
            robust_reward: robust.reward(),
            best_stochastic_reward: best.stochastic_reward(problem, n_iter, random),
            robust_stochastic_reward: robust.stochastic_reward(problem, n_iter, random),
        },
        best,
        robust,
    }
}

/// Writes report rows as csv.
pub fn write_report<W: Write>(writer: W, rows: &[ReportRow]) -> GenericResult<()> {
    let mut writer = csv::Writer::from_writer(writer);

    rows.iter().try_for_each(|row| writer.serialize(row)).map_err(|err| format!("cannot write report: '{err}'"))?;
    writer.flush()?;

    Ok(())
}

fn run_method(
    problem: &Problem,
    method: Method,
    settings: &RunSettings,
    environment: &Environment,
) -> (Solution, Solution) {
    match method {
        Method::Constructive => {
            multi_start_metaheuristic(problem, &ConstructiveHeuristic, &settings.multi_start, environment)
        }
        Method::Savings => multi_start_metaheuristic(problem, &SavingsHeuristic, &settings.multi_start, environment),
        Method::LocalSearch => local_search_metaheuristic(problem, &settings.local_search, environment),
    }
}

fn get_long_simulation_iterations(method: Method, settings: &RunSettings) -> usize {
    match method {
        Method::Constructive | Method::Savings => settings.multi_start.long_simulation_iterations,
        Method::LocalSearch => settings.local_search.long_simulation_iterations,
    }
}
