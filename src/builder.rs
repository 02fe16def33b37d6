//! Incremental builder for synthetic tables.

use crate::samplers::{choice, datetime, numeric};
use crate::table::{ColumnValues, Table};
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Default number of rows for a builder.
pub const DEFAULT_ROW_COUNT: usize = 100;

/// Default lower bound for integer columns (inclusive).
pub const DEFAULT_INTEGER_LOW: i64 = 0;

/// Default upper bound for integer columns (exclusive).
pub const DEFAULT_INTEGER_HIGH: i64 = 100;

/// Default lower bound for float columns (inclusive).
pub const DEFAULT_FLOAT_LOW: f64 = 0.0;

/// Default upper bound for float columns (exclusive).
pub const DEFAULT_FLOAT_HIGH: f64 = 1.0;

/// Default start date for datetime columns: 2020-01-01.
///
/// Computed per call rather than shared, so no caller can observe or mutate
/// another caller's default.
pub fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).expect("2020-01-01 is a valid calendar date")
}

/// Error type for builder operations.
#[derive(Debug, thiserror::Error)]
pub enum BuilderError {
    /// `low >= high` passed to an integer or float column
    #[error("invalid range for column '{column}': low ({low}) must be strictly less than high ({high})")]
    InvalidRange {
        /// Name of the column being added
        column: String,
        /// Lower bound, as given
        low: String,
        /// Upper bound, as given
        high: String,
    },

    /// Argument that cannot produce a column, such as an empty category set
    #[error("invalid argument for column '{column}': {reason}")]
    InvalidArgument {
        /// Name of the column being added
        column: String,
        /// What made the argument unusable
        reason: String,
    },
}

impl BuilderError {
    fn invalid_range(
        column: &str,
        low: impl std::fmt::Display,
        high: impl std::fmt::Display,
    ) -> Self {
        Self::InvalidRange {
            column: column.to_string(),
            low: low.to_string(),
            high: high.to_string(),
        }
    }

    fn invalid_argument(column: &str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            column: column.to_string(),
            reason: reason.into(),
        }
    }
}

/// Builder that accumulates independently-sampled columns into one
/// row-aligned table.
///
/// The row count is fixed at construction; every `add_*` call samples a full
/// column of that length. Adding a column under an existing name replaces
/// the old values while keeping the column's position, so re-running the
/// same call simply re-randomizes that column.
///
/// Arguments are validated before any sampling, so a failed call leaves the
/// table untouched.
///
/// The builder is single-writer: it is not meant for concurrent mutation.
pub struct TableBuilder {
    /// Number of values every column must hold
    row_count: usize,
    /// Random number generator; seeded construction makes output reproducible
    rng: StdRng,
    /// The evolving table
    table: Table,
}

impl TableBuilder {
    /// Create a builder with the given row count, seeded from OS entropy.
    pub fn new(row_count: usize) -> Self {
        Self {
            row_count,
            rng: StdRng::from_entropy(),
            table: Table::new(),
        }
    }

    /// Create a builder with the given row count and RNG seed.
    ///
    /// Two builders with the same seed and the same sequence of `add_*`
    /// calls produce identical tables.
    pub fn with_seed(row_count: usize, seed: u64) -> Self {
        Self {
            row_count,
            rng: StdRng::seed_from_u64(seed),
            table: Table::new(),
        }
    }

    /// The fixed row count.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Add a column of integers drawn uniformly from `[low, high)`.
    pub fn add_integer(&mut self, name: &str, low: i64, high: i64) -> Result<(), BuilderError> {
        if low >= high {
            return Err(BuilderError::invalid_range(name, low, high));
        }
        let values = numeric::sample_integers(&mut self.rng, low, high, self.row_count);
        self.table.insert(name, ColumnValues::Integer(values));
        Ok(())
    }

    /// Add a column of floats drawn uniformly from `[low, high)`.
    pub fn add_float(&mut self, name: &str, low: f64, high: f64) -> Result<(), BuilderError> {
        // `!(low < high)` also rejects NaN bounds
        if !(low < high) {
            return Err(BuilderError::invalid_range(name, low, high));
        }
        let values = numeric::sample_floats(&mut self.rng, low, high, self.row_count);
        self.table.insert(name, ColumnValues::Float(values));
        Ok(())
    }

    /// Add a column of labels drawn uniformly, with replacement, from
    /// `categories`.
    pub fn add_categorical<S: AsRef<str>>(
        &mut self,
        name: &str,
        categories: &[S],
    ) -> Result<(), BuilderError> {
        if categories.is_empty() {
            return Err(BuilderError::invalid_argument(
                name,
                "categories must not be empty",
            ));
        }
        let values = choice::sample_labels(&mut self.rng, categories, self.row_count);
        self.table.insert(name, ColumnValues::Categorical(values));
        Ok(())
    }

    /// Add a column of dates drawn uniformly, with replacement, from the
    /// `row_count` consecutive days starting at `start_date`.
    ///
    /// Sampling with replacement means duplicate dates and missing days are
    /// both possible within the column. Fails only if the day sequence would
    /// leave the representable calendar range.
    pub fn add_datetime(&mut self, name: &str, start_date: NaiveDate) -> Result<(), BuilderError> {
        let pool = datetime::day_sequence(start_date, self.row_count).ok_or_else(|| {
            BuilderError::invalid_argument(
                name,
                format!(
                    "day sequence of length {} starting at {start_date} exceeds the calendar range",
                    self.row_count
                ),
            )
        })?;
        let values = datetime::sample_dates(&mut self.rng, &pool, self.row_count);
        self.table.insert(name, ColumnValues::Datetime(values));
        Ok(())
    }

    /// Add a column of booleans drawn uniformly from {true, false}.
    pub fn add_boolean(&mut self, name: &str) {
        let values = choice::sample_booleans(&mut self.rng, self.row_count);
        self.table.insert(name, ColumnValues::Boolean(values));
    }

    /// Snapshot of the current table.
    ///
    /// Returns a defensive copy: later `add_*` calls do not affect a
    /// previously returned table. Reading never resamples, so two snapshots
    /// taken without intervening `add_*` calls are equal.
    pub fn data(&self) -> Table {
        self.table.clone()
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_ROW_COUNT)
    }
}
