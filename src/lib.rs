//! Synthetic tabular data generator.
//!
//! This crate builds rectangular datasets column by column: a
//! [`TableBuilder`] holds a fixed row count, and each `add_*` call samples a
//! full column of that length (integer, float, categorical, datetime, or
//! boolean). The assembled [`Table`] preserves column insertion order, and
//! re-adding a column name re-randomizes that column in place.
//!
//! # Architecture
//!
//! ```text
//! TableBuilder
//!   - row_count
//!   - rng (StdRng)
//!        │ add_integer / add_float / add_categorical
//!        │ add_datetime / add_boolean
//!        ▼
//!     samplers (per-type uniform draws)
//!        │
//!        ▼
//! Table { columns: [Column { name, ColumnValues }] }
//! ```
//!
//! # Example
//!
//! ```rust
//! use synthgen::TableBuilder;
//!
//! let mut builder = TableBuilder::with_seed(5, 42);
//! builder.add_integer("id", 0, 100).unwrap();
//! builder.add_categorical("color", &["red", "blue"]).unwrap();
//! builder.add_boolean("active");
//!
//! let table = builder.data();
//! assert_eq!(table.num_rows(), 5);
//! assert_eq!(table.column_names().collect::<Vec<_>>(), ["id", "color", "active"]);
//! ```
//!
//! # Sampling rules
//!
//! - `add_integer(name, low, high)` - uniform over `[low, high)`; requires `low < high`
//! - `add_float(name, low, high)` - uniform over `[low, high)`; requires `low < high`
//! - `add_categorical(name, categories)` - uniform over a non-empty label set
//! - `add_datetime(name, start_date)` - uniform, with replacement, over the
//!   `row_count` consecutive days starting at `start_date`
//! - `add_boolean(name)` - uniform over {true, false}
//!
//! All draws are independent per row. Builders created with
//! [`TableBuilder::with_seed`] are deterministic.

pub mod builder;
pub mod render;
pub mod samplers;
pub mod table;

// Re-exports for convenience
pub use builder::{
    default_start_date, BuilderError, TableBuilder, DEFAULT_FLOAT_HIGH, DEFAULT_FLOAT_LOW,
    DEFAULT_INTEGER_HIGH, DEFAULT_INTEGER_LOW, DEFAULT_ROW_COUNT,
};
pub use render::render_table;
pub use table::{Column, ColumnValues, Table};
