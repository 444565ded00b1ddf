//! Small helpers over the game's seeded random stream.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

/// Uniform value in `0..bound`; zero when `bound` is zero.
pub(crate) fn random_below(rng: &mut ChaCha8Rng, bound: usize) -> usize {
    if bound == 0 {
        return 0;
    }
    (rng.next_u64() % bound as u64) as usize
}

pub(crate) fn roll_percent(rng: &mut ChaCha8Rng, chance: u32) -> bool {
    random_below(rng, 100) < chance as usize
}

pub(crate) fn coin_flip(rng: &mut ChaCha8Rng) -> bool {
    rng.next_u64() & 1 == 0
}
