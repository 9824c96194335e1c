//! Random stream helpers over the run's single seeded generator.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

pub type GameRng = ChaCha8Rng;

/// Uniform float in `[0, 1)` from the top 53 bits of the stream.
pub fn unit_f64(rng: &mut GameRng) -> f64 {
    (rng.next_u64() >> 11) as f64 / (1_u64 << 53) as f64
}

/// Uniform integer in `0..bound`. `bound` must be non-zero.
pub fn below(rng: &mut GameRng, bound: usize) -> usize {
    debug_assert!(bound > 0);
    (unit_f64(rng) * bound as f64) as usize
}

/// Fisher-Yates shuffle, walking from the back.
pub fn shuffle_in_place<T>(rng: &mut GameRng, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = below(rng, i + 1);
        items.swap(i, j);
    }
}
