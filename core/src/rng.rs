//! Deterministic random number generation for the random schedule.
//!
//! RULE: No generator may call a process-wide RNG for its draws.
//! All randomness flows through ScheduleRng instances derived from
//! the seed carried on the policy.
//!
//! Each draw purpose gets its own stream, seeded from
//! (seed XOR stream_index * golden ratio). This means:
//!   - Period selection never consumes perturbation draws.
//!   - The same seed selects the same periods whatever the
//!     perturbation bounds are.

use crate::types::Seed;
use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

const STREAM_SPREAD: u64 = 0x9e37_79b9_7f4a_7c15;

/// A named, deterministic RNG for a single draw purpose.
pub struct ScheduleRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl ScheduleRng {
    /// Create a stream from the policy seed and a stable stream slot.
    pub fn new(seed: Seed, slot: StreamSlot) -> Self {
        let derived_seed = seed ^ (slot as u64).wrapping_mul(STREAM_SPREAD);
        Self {
            name: slot.name(),
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    /// Roll a float in [0.0, 1.0) from the top 53 bits of one draw.
    pub fn next_f64(&mut self) -> f64 {
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Roll a u64 in [0, n) without modulo bias.
    ///
    /// Draws below `2^64 mod n` are discarded, so each residue is
    /// backed by the same number of raw values.
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        assert!(n > 0, "n must be > 0");
        let threshold = n.wrapping_neg() % n;
        loop {
            let r = self.inner.next_u64();
            if r >= threshold {
                return r % n;
            }
        }
    }

    /// Bernoulli trial: returns true with probability p.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

/// Both streams for one random schedule, keyed by the same seed.
pub struct RngBank {
    seed: Seed,
}

impl RngBank {
    pub fn new(seed: Seed) -> Self {
        Self { seed }
    }

    /// Bank keyed by a fresh seed from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(rand::random::<Seed>())
    }

    pub fn seed(&self) -> Seed {
        self.seed
    }

    pub fn stream(&self, slot: StreamSlot) -> ScheduleRng {
        ScheduleRng::new(self.seed, slot)
    }
}

/// Stable stream slot assignments.
/// NEVER reorder or remove entries, only append.
/// Reordering changes every recorded seeded schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum StreamSlot {
    Selection = 0,
    Perturbation = 1,
}

impl StreamSlot {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Selection    => "selection",
            Self::Perturbation => "perturbation",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = RngBank::new(12345).stream(StreamSlot::Selection);
        let mut b = RngBank::new(12345).stream(StreamSlot::Selection);

        for _ in 0..32 {
            assert_eq!(a.next_u64_below(u64::MAX), b.next_u64_below(u64::MAX));
        }
    }

    #[test]
    fn slots_are_independent_streams() {
        let bank = RngBank::new(12345);
        let mut selection = bank.stream(StreamSlot::Selection);
        let mut perturbation = bank.stream(StreamSlot::Perturbation);

        let a: Vec<u64> = (0..8).map(|_| selection.next_u64_below(u64::MAX)).collect();
        let b: Vec<u64> = (0..8).map(|_| perturbation.next_u64_below(u64::MAX)).collect();
        assert_ne!(a, b, "Selection and perturbation streams should differ");
    }

    #[test]
    fn bounded_draws_stay_in_range() {
        let mut rng = RngBank::new(7).stream(StreamSlot::Selection);

        for n in [1u64, 2, 3, 60, 360, u64::MAX] {
            for _ in 0..200 {
                assert!(rng.next_u64_below(n) < n);
            }
        }
    }

    #[test]
    fn unit_floats_stay_in_range() {
        let mut rng = RngBank::new(99).stream(StreamSlot::Perturbation);

        for _ in 0..1000 {
            let x = rng.next_f64();
            assert!((0.0..1.0).contains(&x), "{x} outside [0, 1)");
        }
    }
}
