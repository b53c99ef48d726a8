//! This module reimports commonly used types.

pub use crate::construction::{ConstructionHeuristic, ConstructiveHeuristic, SavingsHeuristic};
pub use crate::construction::{constructive_heuristic, savings_heuristic};

pub use crate::models::{Customer, Problem, Reward, Route, RouteId, Solution, build_problem};

pub use crate::search::{Insert, Remove, SearchOperator, Shake};
pub use crate::search::{insert, opt2, opt2_routes, remove, shake};

pub use crate::simulation::StochasticReward;

pub use crate::solver::{LocalSearchConfig, MultiStartConfig};
pub use crate::solver::{local_search_metaheuristic, multi_start_metaheuristic};

pub use crate::utils::{DefaultRandom, Environment, InfoLogger, Quota, TimeQuota};
pub use crate::utils::{Float, GenericError, GenericResult};
pub use crate::utils::{Random, RandomGen};
