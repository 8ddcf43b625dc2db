//! The measurement coin flip is the only place randomness enters a simulation run, so it is
//! exposed as an injectable capability rather than reached for globally: tests pin a seed to make
//! the random branch of [`crate::state::CheckMatrixState::apply_measurement`] reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of the fair coin flips consumed by random-outcome measurements.
pub trait StabilizerRng {
    /// Returns `true` and `false` with equal probability.
    fn next_bool(&mut self) -> bool;
}

impl StabilizerRng for StdRng {
    fn next_bool(&mut self) -> bool {
        self.gen::<bool>()
    }
}

/// Builds a reproducible RNG from a caller-supplied seed.
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Builds an RNG seeded from system entropy.
pub fn from_entropy() -> StdRng {
    StdRng::from_entropy()
}
