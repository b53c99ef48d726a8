#[cfg(test)]
#[path = "../../tests/unit/construction/selector_test.rs"]
mod selector_test;

use crate::utils::{Float, Random, compare_floats};

/// A candidate which can be ranked by its score: the higher, the better.
pub trait Scored {
    /// Returns candidate's score.
    fn score(&self) -> Float;
}

/// A biased randomized selector which yields all candidates exactly once, preferring the ones
/// with a higher score.
///
/// An index of the next candidate among remaining ones (sorted from the best) is drawn from
/// a quasi-geometric distribution `f(x) = (1 - beta) ^ x`: when `beta` is close to 1, the
/// selector behaves greedy, when `beta` goes to 0, it approaches a uniform selection.
pub struct BiasedSelector<'a, T: Scored> {
    /// Remaining candidates sorted in ascending order: the best one is at the end.
    remaining: Vec<T>,
    log_base: Float,
    random: &'a dyn Random,
}

impl<'a, T: Scored> BiasedSelector<'a, T> {
    /// Creates a new instance of `BiasedSelector`. Beta is kept within (0, 1] range.
    pub fn new(candidates: Vec<T>, beta: Float, random: &'a dyn Random) -> Self {
        let mut remaining = candidates;
        // NOTE stable sort: candidates with equal score keep their original relative order
        remaining.sort_by(|a, b| compare_floats(b.score(), a.score()));
        remaining.reverse();

        let beta = beta.clamp(Float::EPSILON, 1.);

        Self { remaining, log_base: (1. - beta).ln(), random }
    }

    /// Returns amount of remaining candidates.
    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    /// Takes the next candidate or returns None when all candidates are consumed.
    pub fn take_next(&mut self) -> Option<T> {
        let size = self.remaining.len();
        if size == 0 {
            return None;
        }

        let offset = self.sample_offset(size);

        Some(self.remaining.remove(size - 1 - offset))
    }

    fn sample_offset(&self, size: usize) -> usize {
        // NOTE u is taken from (0, 1] to avoid logarithm of zero
        let u = 1. - self.random.uniform_real(0., 1.);
        let offset = (u.ln() / self.log_base).floor();

        if offset.is_finite() { (offset % size as Float) as usize } else { 0 }
    }
}

impl<T: Scored> Iterator for BiasedSelector<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.take_next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining.len(), Some(self.remaining.len()))
    }
}
