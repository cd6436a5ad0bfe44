//! Ordered, uniquely-named, optionally tagged record value.

use serde::{Deserialize, Serialize};

use super::Cell;
use crate::error::{ArgumentError, ArgumentResult};

/// An ordered sequence of uniquely-named cells plus an ordered sequence of
/// string tags.
///
/// Cell order is part of the value's identity for indexed access, and cells
/// are also addressable by name. Construction rejects duplicate cell names;
/// after construction the row is immutable. Deserialization routes through
/// [`Row::with_tags`], so external bytes cannot smuggle in a duplicate name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRow")]
pub struct Row {
    tags: Vec<String>,
    cells: Vec<Cell>,
}

/// Unvalidated wire shape of a row.
#[derive(Deserialize)]
struct RawRow {
    tags: Vec<String>,
    cells: Vec<Cell>,
}

impl TryFrom<RawRow> for Row {
    type Error = ArgumentError;

    fn try_from(raw: RawRow) -> ArgumentResult<Self> {
        Row::with_tags(raw.tags, raw.cells)
    }
}

impl Row {
    /// The distinguished empty row: no tags, no cells.
    pub const EMPTY: Row = Row {
        tags: Vec::new(),
        cells: Vec::new(),
    };

    /// Constructs a row with no tags.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::Illegal`] when two cells share a name.
    pub fn of(cells: Vec<Cell>) -> ArgumentResult<Self> {
        Self::with_tags(Vec::new(), cells)
    }

    /// Constructs a row with the given tags.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::Illegal`] when two cells share a name.
    pub fn with_tags(tags: Vec<String>, cells: Vec<Cell>) -> ArgumentResult<Self> {
        for (i, cell) in cells.iter().enumerate() {
            if cells[..i].iter().any(|prior| prior.name() == cell.name()) {
                return Err(ArgumentError::illegal(format!(
                    "duplicate cell name: {}",
                    cell.name()
                )));
            }
        }
        Ok(Self { tags, cells })
    }

    /// Number of cells.
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Cells in construction order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell at the given position, `None` when out of range.
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Cell with the given name, `None` when absent.
    pub fn cell_by_name(&self, name: &str) -> Option<&Cell> {
        self.cells.iter().find(|cell| cell.name() == name)
    }

    /// Tags in construction order.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Compares two rows, optionally ignoring tags.
    ///
    /// With `compare_tags` set this agrees with `==`; without it only the
    /// cell sequences are compared (order-sensitive).
    pub fn equals(&self, other: &Row, compare_tags: bool) -> bool {
        if compare_tags && self.tags != other.tags {
            return false;
        }
        self.cells == other.cells
    }
}
