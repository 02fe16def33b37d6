//! Table container types.
//!
//! A [`Table`] is an ordered collection of named columns. Every column holds
//! exactly one semantic type of value, represented by the [`ColumnValues`]
//! enum, and all columns in a table have the same length.

use chrono::NaiveDate;

/// Typed value storage for a single column.
///
/// `ColumnValues` keeps each column homogeneous: the variant fixes the
/// semantic type at the moment the column is added, and the contained vector
/// holds one value per row.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValues {
    /// 64-bit signed integers
    Integer(Vec<i64>),

    /// 64-bit floating point values
    Float(Vec<f64>),

    /// Labels drawn from a closed category set
    Categorical(Vec<String>),

    /// Calendar dates
    Datetime(Vec<NaiveDate>),

    /// Boolean values
    Boolean(Vec<bool>),
}

impl ColumnValues {
    /// Number of values in the column.
    pub fn len(&self) -> usize {
        match self {
            Self::Integer(v) => v.len(),
            Self::Float(v) => v.len(),
            Self::Categorical(v) => v.len(),
            Self::Datetime(v) => v.len(),
            Self::Boolean(v) => v.len(),
        }
    }

    /// Check whether the column has no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Name of the column's semantic type, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Categorical(_) => "categorical",
            Self::Datetime(_) => "datetime",
            Self::Boolean(_) => "boolean",
        }
    }

    /// Try to get the values as integers.
    pub fn as_integers(&self) -> Option<&[i64]> {
        match self {
            Self::Integer(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get the values as floats.
    pub fn as_floats(&self) -> Option<&[f64]> {
        match self {
            Self::Float(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get the values as category labels.
    pub fn as_labels(&self) -> Option<&[String]> {
        match self {
            Self::Categorical(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get the values as dates.
    pub fn as_dates(&self) -> Option<&[NaiveDate]> {
        match self {
            Self::Datetime(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get the values as booleans.
    pub fn as_booleans(&self) -> Option<&[bool]> {
        match self {
            Self::Boolean(v) => Some(v),
            _ => None,
        }
    }

    /// Format the value at `row` for display.
    ///
    /// Returns `None` when `row` is out of bounds. Floats are rendered with
    /// six decimal places, dates as `YYYY-MM-DD`.
    pub fn format_value(&self, row: usize) -> Option<String> {
        match self {
            Self::Integer(v) => v.get(row).map(|x| x.to_string()),
            Self::Float(v) => v.get(row).map(|x| format!("{x:.6}")),
            Self::Categorical(v) => v.get(row).cloned(),
            Self::Datetime(v) => v.get(row).map(|d| d.format("%Y-%m-%d").to_string()),
            Self::Boolean(v) => v.get(row).map(|x| x.to_string()),
        }
    }
}

/// A named column within a table.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Column name
    pub name: String,

    /// Column values, one per row
    pub values: ColumnValues,
}

/// An ordered collection of named, equal-length columns.
///
/// Columns keep their insertion order. Inserting a name that already exists
/// replaces that column's values in place without moving the column, so the
/// observable column order is stable under re-insertion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a column, replacing any existing column of the same name.
    ///
    /// A replaced column keeps its original position; a new name is appended
    /// at the end.
    pub fn insert(&mut self, name: impl Into<String>, values: ColumnValues) {
        let name = name.into();
        match self.columns.iter_mut().find(|c| c.name == name) {
            Some(column) => column.values = values,
            None => self.columns.push(Column { name, values }),
        }
    }

    /// Look up a column's values by name.
    pub fn column(&self, name: &str) -> Option<&ColumnValues> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| &c.values)
    }

    /// All columns, in insertion order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column names, in insertion order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Number of columns.
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows.
    ///
    /// All columns have the same length, so this reads the first column;
    /// a table with no columns has zero rows.
    pub fn num_rows(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }

    /// Check whether the table has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
