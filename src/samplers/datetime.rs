//! Datetime column samplers.
//!
//! Datetime columns draw from a fixed pool of `count` consecutive calendar
//! days starting at a given date. Draws are made with replacement, so a
//! column can contain duplicate dates and skip days from the pool; this
//! mirrors the behavior of sampling from the day range rather than
//! enumerating it.

use chrono::{Days, NaiveDate};
use rand::Rng;

/// Build the pool of `count` consecutive days starting at `start`.
///
/// Day `i` is `start + i` days for `i` in `[0, count)`. Returns `None` if
/// any day would fall outside chrono's representable calendar range.
pub fn day_sequence(start: NaiveDate, count: usize) -> Option<Vec<NaiveDate>> {
    (0..count)
        .map(|i| start.checked_add_days(Days::new(i as u64)))
        .collect()
}

/// Sample `count` dates uniformly, with replacement, from `pool`.
///
/// The caller must ensure `pool` is non-empty when `count > 0`.
pub fn sample_dates<R: Rng>(rng: &mut R, pool: &[NaiveDate], count: usize) -> Vec<NaiveDate> {
    (0..count)
        .map(|_| pool[rng.gen_range(0..pool.len())])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_sequence_consecutive() {
        let days = day_sequence(date(2020, 1, 30), 4).unwrap();
        assert_eq!(
            days,
            vec![
                date(2020, 1, 30),
                date(2020, 1, 31),
                date(2020, 2, 1),
                date(2020, 2, 2),
            ]
        );
    }

    #[test]
    fn test_day_sequence_overflow() {
        assert_eq!(day_sequence(NaiveDate::MAX, 2), None);
    }

    #[test]
    fn test_day_sequence_zero_count() {
        assert_eq!(day_sequence(date(2020, 1, 1), 0), Some(vec![]));
    }

    #[test]
    fn test_sample_dates_stay_in_pool() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool = day_sequence(date(2020, 1, 1), 10).unwrap();

        let values = sample_dates(&mut rng, &pool, 100);
        assert_eq!(values.len(), 100);
        for v in values {
            assert!(pool.contains(&v));
        }
    }

    #[test]
    fn test_sample_dates_with_replacement() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool = day_sequence(date(2020, 1, 1), 3);

        // 30 draws from 3 days must repeat
        let values = sample_dates(&mut rng, &pool.unwrap(), 30);
        let first = values[0];
        assert!(values.iter().filter(|&&v| v == first).count() > 1);
    }
}
