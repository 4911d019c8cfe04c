//! Fisher–Yates shuffle.

#[cfg(test)]
#[path = "shuffle_test.rs"]
mod shuffle_test;

use rand::Rng;

/// Return a uniformly random permutation of `items`, leaving `items` untouched.
///
/// Walks from the last index down to 1, swapping each position with a
/// uniformly chosen index in `0..=i`.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.random_range(0..=i);
        out.swap(i, j);
    }
    out
}
