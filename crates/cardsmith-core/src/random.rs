use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform draws used by every generator.
///
/// Implemented for all [`rand::RngCore`] types, so callers pass a seeded
/// [`ChaCha8Rng`] for reproducible runs or any other RNG they own.
pub trait RandomSource {
    /// Next uniform draw in `[0, 1)`.
    fn next_uniform(&mut self) -> f64;

    /// Uniform index in `0..bound`; `0` when `bound` is zero.
    fn below(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        let scaled = (self.next_uniform() * bound as f64) as usize;
        scaled.min(bound - 1)
    }

    /// Uniform integer in `min..=max`.
    fn between(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        let span = (max - min) as usize + 1;
        min + self.below(span) as u32
    }

    fn digit(&mut self) -> char {
        char::from(b'0' + self.below(10) as u8)
    }

    /// Uniform upper-case ASCII letter.
    fn letter(&mut self) -> char {
        char::from(b'A' + self.below(26) as u8)
    }

    /// Fair coin flip.
    fn coin(&mut self) -> bool {
        self.next_uniform() < 0.5
    }
}

impl<R: RngCore + ?Sized> RandomSource for R {
    fn next_uniform(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Uniformly picks one element; `None` for an empty slice.
pub fn pick<'a, T>(items: &'a [T], rng: &mut (impl RandomSource + ?Sized)) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.below(items.len()))
}

/// Deterministic RNG for a given seed.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Fresh seed plus the RNG built from it, so unseeded runs can still be
/// logged and replayed.
pub fn entropy_rng() -> (u64, ChaCha8Rng) {
    let seed = rand::random::<u64>();
    (seed, seeded_rng(seed))
}
