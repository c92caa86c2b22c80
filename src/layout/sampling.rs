//! Sampling photos with repetition to fill every grid cell

use crate::model::ImageRef;
use rand::Rng;
use rand::seq::SliceRandom;

/// Draw `count` photo references from a pool of `pool_size`
///
/// The pool is walked in independently shuffled passes until enough
/// references are collected, so every photo appears before any repeats
/// within a pass. The combined list is shuffled once more. Returns an empty
/// list for an empty pool.
pub fn sample_with_repetition<R: Rng + ?Sized>(
    pool_size: usize,
    count: usize,
    rng: &mut R,
) -> Vec<ImageRef> {
    if pool_size == 0 {
        return Vec::new();
    }

    let mut pass: Vec<ImageRef> = (0..pool_size).map(ImageRef).collect();
    let mut selected = Vec::with_capacity(count);

    while selected.len() < count {
        pass.shuffle(rng);
        let remaining = count - selected.len();
        selected.extend(pass.iter().copied().take(remaining));
    }

    selected.shuffle(rng);
    selected
}
