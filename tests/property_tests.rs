//! Property-based tests for the builder invariants.
//!
//! Uses proptest to check the length and value-domain invariants across
//! random row counts, bounds, and label sets.

use chrono::Days;
use proptest::prelude::*;
use synthgen::{default_start_date, TableBuilder};

proptest! {
    /// Property: integer columns have exactly `row_count` values, all in `[low, high)`.
    #[test]
    fn prop_integer_columns_respect_bounds(
        rows in 0usize..64,
        low in -1000i64..1000,
        span in 1i64..1000,
        seed in any::<u64>(),
    ) {
        let high = low + span;
        let mut builder = TableBuilder::with_seed(rows, seed);
        builder.add_integer("v", low, high).unwrap();

        let table = builder.data();
        let values = table.column("v").unwrap().as_integers().unwrap();
        prop_assert_eq!(values.len(), rows);
        prop_assert!(values.iter().all(|v| (low..high).contains(v)));
    }

    /// Property: float columns have exactly `row_count` values, all in `[low, high)`.
    #[test]
    fn prop_float_columns_respect_bounds(
        rows in 0usize..64,
        low in -1000.0f64..1000.0,
        span in 0.001f64..1000.0,
        seed in any::<u64>(),
    ) {
        let high = low + span;
        let mut builder = TableBuilder::with_seed(rows, seed);
        builder.add_float("v", low, high).unwrap();

        let table = builder.data();
        let values = table.column("v").unwrap().as_floats().unwrap();
        prop_assert_eq!(values.len(), rows);
        prop_assert!(values.iter().all(|v| (low..high).contains(v)));
    }

    /// Property: categorical values are always members of the label set.
    #[test]
    fn prop_categorical_values_are_members(
        rows in 0usize..64,
        categories in proptest::collection::vec("[a-z]{1,8}", 1..6),
        seed in any::<u64>(),
    ) {
        let mut builder = TableBuilder::with_seed(rows, seed);
        builder.add_categorical("v", &categories).unwrap();

        let table = builder.data();
        let values = table.column("v").unwrap().as_labels().unwrap();
        prop_assert_eq!(values.len(), rows);
        prop_assert!(values.iter().all(|v| categories.contains(v)));
        if rows > 0 {
            prop_assert!(!values.is_empty());
        }
    }

    /// Property: datetime values fall within the consecutive-day pool.
    #[test]
    fn prop_datetime_values_stay_in_pool(
        rows in 1usize..64,
        offset in 0u64..40_000,
        seed in any::<u64>(),
    ) {
        let start = default_start_date().checked_add_days(Days::new(offset)).unwrap();
        let end = start.checked_add_days(Days::new(rows as u64)).unwrap();

        let mut builder = TableBuilder::with_seed(rows, seed);
        builder.add_datetime("v", start).unwrap();

        let table = builder.data();
        let values = table.column("v").unwrap().as_dates().unwrap();
        prop_assert_eq!(values.len(), rows);
        prop_assert!(values.iter().all(|v| (start..end).contains(v)));
    }

    /// Property: boolean columns always have exactly `row_count` values.
    #[test]
    fn prop_boolean_columns_have_row_count_values(
        rows in 0usize..64,
        seed in any::<u64>(),
    ) {
        let mut builder = TableBuilder::with_seed(rows, seed);
        builder.add_boolean("v");

        let table = builder.data();
        let values = table.column("v").unwrap().as_booleans().unwrap();
        prop_assert_eq!(values.len(), rows);
    }

    /// Property: invalid ranges are always rejected and commit nothing.
    #[test]
    fn prop_reversed_ranges_are_rejected(
        rows in 0usize..64,
        low in -1000i64..1000,
        back in 0i64..1000,
        seed in any::<u64>(),
    ) {
        let high = low - back; // high <= low
        let mut builder = TableBuilder::with_seed(rows, seed);
        prop_assert!(builder.add_integer("v", low, high).is_err());
        prop_assert!(builder.data().column("v").is_none());
    }
}
