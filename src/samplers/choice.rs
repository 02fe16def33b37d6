//! Samplers that pick uniformly from a finite set.

use rand::Rng;

/// Sample `count` labels uniformly, with replacement, from `pool`.
///
/// The caller must ensure `pool` is non-empty when `count > 0`.
pub fn sample_labels<R: Rng, S: AsRef<str>>(rng: &mut R, pool: &[S], count: usize) -> Vec<String> {
    (0..count)
        .map(|_| pool[rng.gen_range(0..pool.len())].as_ref().to_string())
        .collect()
}

/// Sample `count` booleans uniformly from {true, false}.
pub fn sample_booleans<R: Rng>(rng: &mut R, count: usize) -> Vec<bool> {
    (0..count).map(|_| rng.gen_bool(0.5)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sample_labels_from_pool() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool = ["cat", "dog", "mouse"];

        let values = sample_labels(&mut rng, &pool, 100);
        assert_eq!(values.len(), 100);
        for v in &values {
            assert!(pool.contains(&v.as_str()));
        }
    }

    #[test]
    fn test_sample_labels_single_label() {
        let mut rng = StdRng::seed_from_u64(42);

        let values = sample_labels(&mut rng, &["only"], 10);
        assert!(values.iter().all(|v| v == "only"));
    }

    #[test]
    fn test_sample_booleans_both_values_appear() {
        let mut rng = StdRng::seed_from_u64(42);

        let values = sample_booleans(&mut rng, 200);
        assert_eq!(values.len(), 200);
        assert!(values.contains(&true));
        assert!(values.contains(&false));
    }

    #[test]
    fn test_zero_count_yields_empty() {
        let mut rng = StdRng::seed_from_u64(42);

        let empty: &[&str] = &[];
        assert!(sample_labels(&mut rng, empty, 0).is_empty());
        assert!(sample_booleans(&mut rng, 0).is_empty());
    }
}
