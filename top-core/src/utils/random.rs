#[cfg(test)]
#[path = "../../tests/unit/utils/random_test.rs"]
mod random_test;

use crate::utils::Float;
use rand::prelude::*;
use rand::Error;
use std::cell::RefCell;
use std::rc::Rc;

/// Provides the way to use randomized values in generic way.
pub trait Random {
    /// Produces integral random value, uniformly distributed on the closed interval [min, max]
    fn uniform_int(&self, min: i32, max: i32) -> i32;

    /// Produces real random value, uniformly distributed on the closed interval [min, max)
    fn uniform_real(&self, min: Float, max: Float) -> Float;

    /// Tests probability value in (0., 1.) range.
    fn is_hit(&self, probability: Float) -> bool {
        self.uniform_real(0., 1.) < probability
    }

    /// Returns RNG.
    fn get_rng(&self) -> RandomGen;
}

/// A default random implementation backed by a small, fast and seedable generator.
///
/// The generator is owned by a single search run: clones of [`RandomGen`] returned by
/// [`Random::get_rng`] share its state, so a run started with the same seed is reproducible.
#[derive(Clone)]
pub struct DefaultRandom {
    rng: Rc<RefCell<SmallRng>>,
}

impl DefaultRandom {
    /// Creates a new instance of `DefaultRandom` with seed.
    pub fn new_with_seed(seed: u64) -> Self {
        Self { rng: Rc::new(RefCell::new(SmallRng::seed_from_u64(seed))) }
    }
}

impl Default for DefaultRandom {
    fn default() -> Self {
        Self { rng: Rc::new(RefCell::new(SmallRng::from_entropy())) }
    }
}

impl Random for DefaultRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        if min == max {
            return min;
        }

        assert!(min < max);
        self.rng.borrow_mut().gen_range(min..=max)
    }

    fn uniform_real(&self, min: Float, max: Float) -> Float {
        if (min - max).abs() < Float::EPSILON {
            return min;
        }

        assert!(min < max);
        self.rng.borrow_mut().gen_range(min..max)
    }

    fn is_hit(&self, probability: Float) -> bool {
        self.rng.borrow_mut().gen_bool(probability.clamp(0., 1.))
    }

    fn get_rng(&self) -> RandomGen {
        RandomGen { rng: self.rng.clone() }
    }
}

/// Specifies underlying random generator type.
#[derive(Clone, Debug)]
pub struct RandomGen {
    rng: Rc<RefCell<SmallRng>>,
}

impl RandomGen {
    /// Creates a new instance of `RandomGen` using given seed.
    pub fn new_with_seed(seed: u64) -> Self {
        Self { rng: Rc::new(RefCell::new(SmallRng::seed_from_u64(seed))) }
    }
}

impl RngCore for RandomGen {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        self.rng.borrow_mut().next_u32()
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        self.rng.borrow_mut().next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.borrow_mut().fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.rng.borrow_mut().try_fill_bytes(dest)
    }
}
