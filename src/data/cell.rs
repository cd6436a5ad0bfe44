//! Named cell of a row.

use serde::{Deserialize, Serialize};

use super::Value;

/// A named, typed cell. Immutable once constructed.
///
/// Name uniqueness is a [`Row`](super::Row) concern: building a cell never
/// fails, building a row with two cells of the same name does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    name: String,
    value: Value,
}

impl Cell {
    /// Creates a cell holding the given value.
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// The cell name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The cell payload.
    pub fn value(&self) -> &Value {
        &self.value
    }
}
