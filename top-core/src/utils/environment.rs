use crate::utils::{DefaultRandom, Float, Random, Timer};
use std::rc::Rc;
use std::sync::Arc;

/// A logger type which is called with various information regarding the work done by the solver.
pub type InfoLogger = Arc<dyn Fn(&str)>;

/// Specifies a computational quota for an executed search run.
pub trait Quota {
    /// Returns true when computation should be stopped.
    fn is_reached(&self) -> bool;
}

/// A time quota which is reached once a given amount of seconds has passed since its creation.
pub struct TimeQuota {
    start: Timer,
    limit_in_secs: Float,
}

impl TimeQuota {
    /// Creates a new instance of `TimeQuota`.
    pub fn new(limit_in_secs: Float) -> Self {
        Self { start: Timer::start(), limit_in_secs }
    }
}

impl Quota for TimeQuota {
    fn is_reached(&self) -> bool {
        self.start.elapsed_secs_as_float() > self.limit_in_secs
    }
}

/// Keeps track of a run's environment: a random source, a logger and an optional quota.
/// An environment is owned by a single search run and is not shared between threads.
#[derive(Clone)]
pub struct Environment {
    /// A random generator.
    pub random: Rc<dyn Random>,

    /// An optional quota which can stop the search earlier.
    pub quota: Option<Arc<dyn Quota>>,

    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates a new instance of `Environment` with a seeded random generator.
    pub fn new_with_seed(seed: u64) -> Self {
        Self { random: Rc::new(DefaultRandom::new_with_seed(seed)), ..Self::default() }
    }

    /// Creates a new instance of `Environment` with the time quota.
    pub fn new_with_time_quota(max_time: Option<usize>) -> Self {
        let quota = max_time.map::<Arc<dyn Quota>, _>(|time| Arc::new(TimeQuota::new(time as Float)));

        Self { quota, ..Self::default() }
    }

    /// Returns true if the quota is set and reached.
    pub fn is_quota_reached(&self) -> bool {
        self.quota.as_ref().is_some_and(|quota| quota.is_reached())
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self { random: Rc::new(DefaultRandom::default()), quota: None, logger: Arc::new(|msg| println!("{msg}")) }
    }
}
