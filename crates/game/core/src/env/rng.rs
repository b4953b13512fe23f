//! Deterministic RNG oracle.
//!
//! Gameplay rolls (spawn-type selection today, drop rolls tomorrow) go
//! through a seeded oracle so a session replays identically from its
//! `game_seed`. Seeds are derived per event with [`compute_seed`] rather
//! than by threading mutable RNG state through the engine.

/// Deterministic random number source.
///
/// Implementations must be pure: the same seed always produces the same
/// value.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Random value in `[min, max]` inclusive.
    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = max - min + 1;
        min + (self.next_u32(seed) % span)
    }
}

impl std::fmt::Debug for dyn RngOracle + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn RngOracle")
    }
}

/// PCG-XSH-RR random number generator.
///
/// Small state, fast, and passes the usual statistical batteries; more than
/// enough for spawn tables. Stateless by design: each call derives its
/// output from the seed alone.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    /// LCG step: `state' = state * multiplier + increment (mod 2^64)`.
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::pcg_output(Self::pcg_step(seed))
    }
}

/// Derives a unique seed for one random event.
///
/// Mixes the session seed with the action nonce and a per-call context so
/// multiple rolls inside one action stay independent. Constants come from
/// SplitMix64/FxHash.
pub fn compute_seed(game_seed: u64, nonce: u64, context: u32) -> u64 {
    let mut hash = game_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_output() {
        let rng = PcgRng;
        assert_eq!(rng.next_u32(42), rng.next_u32(42));
    }

    #[test]
    fn range_is_inclusive_and_degenerate_safe() {
        let rng = PcgRng;
        for seed in 0..200 {
            let value = rng.range(seed, 2, 5);
            assert!((2..=5).contains(&value));
        }
        assert_eq!(rng.range(9, 7, 7), 7);
        assert_eq!(rng.range(9, 7, 3), 7);
    }

    #[test]
    fn compute_seed_differs_by_context() {
        let a = compute_seed(1, 2, 0);
        let b = compute_seed(1, 2, 1);
        let c = compute_seed(1, 3, 0);
        assert_ne!(a, b);
        assert_ne!(a, c);
    }
}
