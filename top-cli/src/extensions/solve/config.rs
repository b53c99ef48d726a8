//! Solver configuration.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/config_test.rs"]
mod config_test;

use serde::Deserialize;
use std::io::{BufReader, Read};
use top_core::solver::{LocalSearchConfig, MultiStartConfig};
use top_core::utils::{Float, GenericResult};

/// A default amount of independent runs per instance and method.
pub const DEFAULT_RUNS: usize = 5;

/// A solver configuration. Every omitted value falls back to its default.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Amount of independent runs per instance and method, the best one is reported.
    pub runs: Option<usize>,
    /// Multi-start metaheuristic settings.
    pub multi_start: Option<MultiStartSettings>,
    /// Local search metaheuristic settings.
    pub local_search: Option<LocalSearchSettings>,
}

/// Multi-start metaheuristic settings.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiStartSettings {
    /// Maximum amount of iterations. Default is 3000.
    pub max_iterations: Option<usize>,
    /// Amount of iterations without improvement before beta is decreased. Default is 30.
    pub enlarge_search_iterations: Option<usize>,
    /// Initial beta. Default is 0.99.
    pub beta_start: Option<Float>,
    /// Beta decrease step. Default is 0.05.
    pub beta_step: Option<Float>,
    /// Minimal beta. Default is 0.1.
    pub min_beta: Option<Float>,
    /// Elite pool size. Default is 5.
    pub elite_size: Option<usize>,
    /// Simulation trials during the search. Default is 1000.
    pub short_simulation_iterations: Option<usize>,
    /// Simulation trials to rank elites. Default is 50000.
    pub long_simulation_iterations: Option<usize>,
}

/// Local search metaheuristic settings.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalSearchSettings {
    /// Maximum amount of iterations. Default is 1000.
    pub max_iterations: Option<usize>,
    /// Elite pool size. Default is 5.
    pub elite_size: Option<usize>,
    /// Simulation trials during the search. Default is 1000.
    pub short_simulation_iterations: Option<usize>,
    /// Simulation trials to rank elites. Default is 50000.
    pub long_simulation_iterations: Option<usize>,
    /// Initial temperature. Default is 1000.
    pub initial_temperature: Option<Float>,
    /// Cooling factor. Default is 0.999.
    pub cooling_factor: Option<Float>,
    /// Beta of the shake operator. Default is 0.3.
    pub shake_beta: Option<Float>,
}

impl Config {
    /// Returns amount of runs.
    pub fn runs(&self) -> usize {
        self.runs.unwrap_or(DEFAULT_RUNS).max(1)
    }

    /// Creates a multi-start configuration overriding defaults with specified values.
    pub fn to_multi_start_config(&self) -> MultiStartConfig {
        let default = MultiStartConfig::default();
        let Some(settings) = self.multi_start.as_ref() else { return default };

        MultiStartConfig {
            max_iterations: settings.max_iterations.unwrap_or(default.max_iterations),
            enlarge_search_iterations: settings.enlarge_search_iterations.unwrap_or(default.enlarge_search_iterations),
            beta_start: settings.beta_start.unwrap_or(default.beta_start),
            beta_step: settings.beta_step.unwrap_or(default.beta_step),
            min_beta: settings.min_beta.unwrap_or(default.min_beta),
            elite_size: settings.elite_size.unwrap_or(default.elite_size),
            short_simulation_iterations: settings
                .short_simulation_iterations
                .unwrap_or(default.short_simulation_iterations),
            long_simulation_iterations: settings
                .long_simulation_iterations
                .unwrap_or(default.long_simulation_iterations),
        }
    }

    /// Creates a local search configuration overriding defaults with specified values.
    pub fn to_local_search_config(&self) -> LocalSearchConfig {
        let default = LocalSearchConfig::default();
        let Some(settings) = self.local_search.as_ref() else { return default };

        LocalSearchConfig {
            max_iterations: settings.max_iterations.unwrap_or(default.max_iterations),
            elite_size: settings.elite_size.unwrap_or(default.elite_size),
            short_simulation_iterations: settings
                .short_simulation_iterations
                .unwrap_or(default.short_simulation_iterations),
            long_simulation_iterations: settings
                .long_simulation_iterations
                .unwrap_or(default.long_simulation_iterations),
            initial_temperature: settings.initial_temperature.unwrap_or(default.initial_temperature),
            cooling_factor: settings.cooling_factor.unwrap_or(default.cooling_factor),
            shake_beta: settings.shake_beta.unwrap_or(default.shake_beta),
        }
    }
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> GenericResult<Config> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}
