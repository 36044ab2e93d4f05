//! Errors raised while building a renderer.

use std::fmt;

/// Which row-set of a table a row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Header rows.
    Head,
    /// Body rows.
    Body,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Head => write!(f, "head"),
            Self::Body => write!(f, "body"),
        }
    }
}

/// Error type for table construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// The table has no header rows, so there is no column count.
    EmptyHead,
    /// The first header row contains no cells.
    NoColumns,
    /// A row's cell count is not a multiple of the column count.
    RaggedRow {
        /// Row-set containing the row.
        section: Section,
        /// Zero-based row index within the section.
        index: usize,
        /// Number of cells in the row after flattening.
        cells: usize,
        /// Column count taken from the first header row.
        columns: usize,
    },
    /// A JSON leaf could not be converted to a cell.
    InvalidCell {
        /// JSON-pointer style location of the value.
        path: String,
        /// Kind of value found.
        found: &'static str,
    },
    /// JSON input does not have the `{ "head": [...], "body": [...] }` shape.
    InvalidShape(String),
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyHead => write!(f, "table head has no rows"),
            Self::NoColumns => write!(f, "first head row has no cells"),
            Self::RaggedRow {
                section,
                index,
                cells,
                columns,
            } => write!(
                f,
                "{section} row {index} has {cells} cells, expected a multiple of {columns}"
            ),
            Self::InvalidCell { path, found } => {
                write!(f, "invalid cell at {path}: expected string, found {found}")
            }
            Self::InvalidShape(msg) => write!(f, "invalid table shape: {msg}"),
        }
    }
}

impl std::error::Error for TableError {}
