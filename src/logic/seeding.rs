//! Bracket sizing, canonical seed order, and reproducible shuffles.

use crate::models::ScheduleError;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Smallest power of two that is >= `n` (6 -> 8, 8 -> 8, 9 -> 16).
pub fn highest_power_of_two(n: usize) -> usize {
    n.max(1).next_power_of_two()
}

/// Seed order for a bracket of `n` slots, read as consecutive pairs.
///
/// order(1) = [1]; order(2k) replaces each seed s of order(k) with `s, 2k + 1 - s`.
/// Seed 1 meets seed n first, and seeds 1 and 2 stay in opposite halves until the final.
pub fn generate_seed_order(n: usize) -> Result<Vec<u32>, ScheduleError> {
    if n == 0 || !n.is_power_of_two() {
        return Err(ScheduleError::InvalidBracketSize(n));
    }
    let mut order = vec![1u32];
    while order.len() < n {
        let size = order.len() as u32 * 2;
        order = order.iter().flat_map(|&s| [s, size + 1 - s]).collect();
    }
    Ok(order)
}

/// Shuffle `numbers` deterministically: the same `rng_seed` always gives the same order.
pub fn shuffle_numbers(numbers: &[u32], rng_seed: u64) -> Vec<u32> {
    let mut rng = ChaCha8Rng::seed_from_u64(rng_seed);
    let mut shuffled = numbers.to_vec();
    shuffled.shuffle(&mut rng);
    shuffled
}
