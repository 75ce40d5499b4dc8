//! Random source used for word selection and case mixing
//!
//! The default source is a `StdRng` seeded once from the wall clock. It is
//! NOT cryptographically secure: anyone who knows roughly when a password was
//! generated can replay the candidate seeds. Treat the output as memorable
//! suggestions, not as secrets for high-value accounts.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniform draws.
///
/// Draws are consumed strictly in call order, so a scripted implementation
/// makes every generator step reproducible in tests.
pub trait RandomSource {
    /// Uniform draw in `[0, bound)`. `bound` is always greater than zero.
    fn next_below(&mut self, bound: usize) -> usize;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn next_below(&mut self, bound: usize) -> usize {
        (**self).next_below(bound)
    }
}

/// Pseudo-random source backed by `StdRng`
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: StdRng,
    seed: u64,
}

impl SeededSource {
    /// Seed from the current wall-clock time (nanoseconds since the epoch)
    pub fn from_time() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::from_seed(nanos)
    }

    /// Seed explicitly, for reproducible output
    pub fn from_seed(seed: u64) -> Self {
        tracing::debug!(seed, "Seeding random source");
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this source started from
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for SeededSource {
    fn default() -> Self {
        Self::from_time()
    }
}

impl RandomSource for SeededSource {
    fn next_below(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }
}

/// Replays a fixed script of draws, cycling when it runs out.
///
/// Each scripted value is reduced modulo the requested bound. An empty script
/// always draws zero.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub(crate) struct ScriptedSource {
    script: Vec<usize>,
    position: usize,
}

#[cfg(test)]
impl ScriptedSource {
    pub fn new(script: Vec<usize>) -> Self {
        Self {
            script,
            position: 0,
        }
    }

    /// A source that draws the same value forever
    pub fn constant(value: usize) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws taken so far
    pub fn draws(&self) -> usize {
        self.position
    }
}

#[cfg(test)]
impl RandomSource for ScriptedSource {
    fn next_below(&mut self, bound: usize) -> usize {
        let value = if self.script.is_empty() {
            0
        } else {
            self.script[self.position % self.script.len()]
        };
        self.position += 1;
        value % bound
    }
}
