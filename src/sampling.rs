//! Random sampling helpers.
//!
//! Every helper takes its random source explicitly so strategies stay
//! reproducible under a fixed seed.

use rand::Rng;

/// Picks one element of `items` uniformly at random.
///
/// Returns `None` if `items` is empty.
pub fn pick<'a, T, R: Rng>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let i = rng.random_range(0..items.len());
    items.get(i)
}

/// Draws two distinct indices from `0..n` uniformly at random.
///
/// Returns `None` if `n < 2`.
pub fn sample_distinct_pair<R: Rng>(n: usize, rng: &mut R) -> Option<(usize, usize)> {
    if n < 2 {
        return None;
    }
    let first = rng.random_range(0..n);
    let mut second = rng.random_range(0..n - 1);
    if second >= first {
        second += 1;
    }
    Some((first, second))
}

/// Returns `true` with the given probability.
///
/// Probabilities at or above 1 always succeed; at or below 0 (or NaN)
/// never do.
pub fn weighted_coin_flip<R: Rng>(probability: f64, rng: &mut R) -> bool {
    rng.random_range(0.0..1.0) < probability
}
