use crate::utils::Float;

/// A configuration of the multi-start metaheuristic.
#[derive(Clone, Debug)]
pub struct MultiStartConfig {
    /// Maximum amount of iterations.
    pub max_iterations: usize,
    /// Amount of consecutive iterations without improvement after which beta is decreased.
    pub enlarge_search_iterations: usize,
    /// Initial beta, restored on every improvement.
    pub beta_start: Float,
    /// A step by which beta is decreased when the search stagnates.
    pub beta_step: Float,
    /// A lower bound of beta.
    pub min_beta: Float,
    /// Maximum size of the elite pool.
    pub elite_size: usize,
    /// Amount of simulation trials used to estimate robustness during the search.
    pub short_simulation_iterations: usize,
    /// Amount of simulation trials used to rank elites at the end.
    pub long_simulation_iterations: usize,
}

impl Default for MultiStartConfig {
    fn default() -> Self {
        Self {
            max_iterations: 3000,
            enlarge_search_iterations: 30,
            beta_start: 0.99,
            beta_step: 0.05,
            min_beta: 0.1,
            elite_size: 5,
            short_simulation_iterations: 1000,
            long_simulation_iterations: 50_000,
        }
    }
}

/// A configuration of the annealing-like local search metaheuristic.
#[derive(Clone, Debug)]
pub struct LocalSearchConfig {
    /// Maximum amount of iterations.
    pub max_iterations: usize,
    /// Maximum size of the elite pool.
    pub elite_size: usize,
    /// Amount of simulation trials used to estimate robustness during the search.
    pub short_simulation_iterations: usize,
    /// Amount of simulation trials used to rank elites at the end.
    pub long_simulation_iterations: usize,
    /// A starting temperature.
    pub initial_temperature: Float,
    /// A multiplier applied to the temperature after each iteration.
    pub cooling_factor: Float,
    /// Beta used by the shake operator when it rebuilds the solution.
    pub shake_beta: Float,
}

impl Default for LocalSearchConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            elite_size: 5,
            short_simulation_iterations: 1000,
            long_simulation_iterations: 50_000,
            initial_temperature: 1000.,
            cooling_factor: 0.999,
            shake_beta: 0.3,
        }
    }
}
