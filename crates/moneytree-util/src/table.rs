use serde::{Deserialize, Serialize};

use crate::format::NumberFormat;

/// Named single column with row labels.
///
/// `map` and the formatting helpers always return a new structure with the
/// name and labels carried over; the source is never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column<T> {
    pub name: String,
    pub labels: Vec<String>,
    pub values: Vec<T>,
}

impl<T> Column<T> {
    pub fn new(
        name: impl Into<String>,
        labels: Vec<String>,
        values: Vec<T>,
    ) -> Self {
        Self {
            name: name.into(),
            labels,
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Applies `f` element-wise, preserving name and labels.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> Column<U> {
        Column {
            name: self.name.clone(),
            labels: self.labels.clone(),
            values: self.values.iter().map(f).collect(),
        }
    }
}

/// Rows-by-named-columns table with row labels, stored row-major.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table<T> {
    pub index: Vec<String>,
    pub columns: Vec<String>,
    pub values: Vec<Vec<T>>,
}

impl<T> Table<T> {
    pub fn new(index: Vec<String>, columns: Vec<String>, values: Vec<Vec<T>>) -> Self {
        Self {
            index,
            columns,
            values,
        }
    }

    pub fn n_rows(&self) -> usize {
        self.values.len()
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// Applies `f` element-wise, preserving index and column names.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> Table<U> {
        Table {
            index: self.index.clone(),
            columns: self.columns.clone(),
            values: self
                .values
                .iter()
                .map(|row| row.iter().map(&f).collect())
                .collect(),
        }
    }
}

/// Element-wise display formatting over a label-preserving container.
pub trait AsFormat {
    type Formatted;

    /// Maps `format` over every element, keeping row/column labels.
    fn as_format(&self, format: NumberFormat) -> Self::Formatted;

    /// Percent rendering with the given decimal digits.
    fn as_percent(&self, digits: usize) -> Self::Formatted {
        self.as_format(NumberFormat::Percent { digits })
    }
}

impl AsFormat for Column<f64> {
    type Formatted = Column<String>;

    fn as_format(&self, format: NumberFormat) -> Column<String> {
        self.map(|value| format.apply(*value))
    }
}

impl AsFormat for Table<f64> {
    type Formatted = Table<String>;

    fn as_format(&self, format: NumberFormat) -> Table<String> {
        self.map(|value| format.apply(*value))
    }
}

/// Free-function mirror of [`AsFormat::as_format`].
pub fn as_format<T: AsFormat>(item: &T, format: NumberFormat) -> T::Formatted {
    item.as_format(format)
}

/// Free-function mirror of [`AsFormat::as_percent`]; two digits is the usual
/// call.
pub fn as_percent<T: AsFormat>(item: &T, digits: usize) -> T::Formatted {
    item.as_percent(digits)
}
