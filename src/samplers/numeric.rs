//! Numeric column samplers.

use rand::Rng;

/// Sample `count` integers uniformly from the half-open range `[low, high)`.
///
/// The caller must ensure `low < high`.
pub fn sample_integers<R: Rng>(rng: &mut R, low: i64, high: i64, count: usize) -> Vec<i64> {
    (0..count).map(|_| rng.gen_range(low..high)).collect()
}

/// Sample `count` floats uniformly from the half-open range `[low, high)`.
///
/// The caller must ensure `low < high` and that neither bound is NaN.
pub fn sample_floats<R: Rng>(rng: &mut R, low: f64, high: f64, count: usize) -> Vec<f64> {
    (0..count).map(|_| rng.gen_range(low..high)).collect()
}
