//! Core crate contains the main building blocks of metaheuristics which solve the
//! ***Team Orienteering Problem*** (TOP) and estimate robustness of its solutions under
//! stochastic travel times.
//!
//! # Overview
//!
//! A problem consists of a source depot, a sink depot and a set of customers, each customer has
//! a reward. A fleet of `n_trucks` vehicles travels from source to sink, each route must not be
//! longer than `tmax`. The goal is to maximize total collected reward.
//!
//! The crate provides:
//!
//! - **construction**: a biased randomized selector, a savings based heuristic and a sequential
//!   constructive heuristic
//! - **search**: 2-opt route optimization and insert/remove/shake solution operators
//! - **simulation**: a Monte-Carlo estimation of the reward under log-normal travel times
//! - **solver**: a multi-start metaheuristic and an annealing-like local search metaheuristic
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use top_core::prelude::*;
//!
//! let customers = vec![
//!     Customer { id: 0, x: 0., y: 0., reward: 0 },
//!     Customer { id: 1, x: 1., y: 0., reward: 10 },
//!     Customer { id: 2, x: 2., y: 0., reward: 20 },
//!     Customer { id: 3, x: 3., y: 0., reward: 0 },
//! ];
//! let problem = build_problem("example", 1, 10., customers).expect("cannot build problem");
//!
//! let environment = Environment { logger: Arc::new(|_| ()), ..Environment::new_with_seed(42) };
//! let config = MultiStartConfig { max_iterations: 10, ..MultiStartConfig::default() };
//! let (best, robust) = multi_start_metaheuristic(&problem, &SavingsHeuristic, &config, &environment);
//!
//! assert_eq!(best.reward(), 30);
//! assert!(robust.reward() <= best.reward());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod construction;
pub mod models;
pub mod prelude;
pub mod search;
pub mod simulation;
pub mod solver;
pub mod utils;
