//! Seeded random inputs for property checks.

use crate::math::vector2::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generate `count` vectors whose components are drawn uniformly from
/// `[-range, range)`.
///
/// The same `seed` always yields the same vectors.
///
/// `range` must be finite and strictly positive. Debug builds check this
/// before sampling; release builds leave it to `rand`, which also panics on
/// an empty or non-finite range.
pub fn random_vectors(seed: u64, count: usize, range: f64) -> Vec<Vector2> {
    debug_assert!(
        range.is_finite() && range > 0.0,
        "range must be finite and positive, got {}",
        range
    );

    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            Vector2::new(
                rng.random_range(-range..range),
                rng.random_range(-range..range),
            )
        })
        .collect()
}
