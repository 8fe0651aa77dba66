//! Uniform random selection over slices and integer ranges.

use std::ops::Range;

use rand::prelude::IndexedRandom;
use rand::Rng;

/// Picks a uniformly random element of `items`.
///
/// Returns `None` for an empty slice.
pub fn pick_one<T>(items: &[T]) -> Option<&T> {
    items.choose(&mut rand::rng())
}

/// Picks a uniformly random integer out of a half-open range.
///
/// Returns `None` for an empty range.
pub fn pick_range(range: Range<i64>) -> Option<i64> {
    if range.is_empty() {
        return None;
    }
    Some(rand::rng().random_range(range))
}
