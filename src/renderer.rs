//! The simple-table renderer.
//!
//! [`TableRenderer`] measures a [`Table`] once and then draws it as
//! rule / header rows / rule / body rows / rule. Every cell is padded to the
//! width of the widest cell in the whole table, and cells in a row are
//! separated by a single space:
//!
//! ```text
//! == ==
//! A  B
//! -- --
//! 1  22
//! == ==
//! ```
//!
//! # Examples
//!
//! ```
//! use rst_table::prelude::*;
//!
//! let table = Table::new()
//!     .with_head_row(["A", "B"])
//!     .with_body_row(["1", "22"]);
//! let renderer = TableRenderer::new(table, Settings::default())?;
//!
//! assert_eq!(renderer.render(), "== ==\nA  B \n-- --\n1  22\n== ==");
//! # Ok::<(), rst_table::TableError>(())
//! ```

use std::fmt;
use std::iter;

use crate::cells;
use crate::error::{Section, TableError};
use crate::settings::Settings;
use crate::table::{self, Node, Table};

const LINE: char = '\n';
const SEPARATOR: char = ' ';

/// Renders a [`Table`] with fixed rule symbols.
///
/// Column count and cell width are computed at construction and never
/// change, so rendering is a pure function of the instance and can run
/// from several threads at once.
#[derive(Debug, Clone)]
pub struct TableRenderer {
    table: Table,
    settings: Settings,
    column_count: usize,
    cell_width: usize,
}

impl TableRenderer {
    /// Create a renderer, rejecting tables that cannot line up.
    ///
    /// # Errors
    ///
    /// - [`TableError::EmptyHead`] if the table has no header rows.
    /// - [`TableError::NoColumns`] if the first header row has no cells.
    /// - [`TableError::RaggedRow`] if any row is empty or its cell count
    ///   is not a multiple of the column count.
    pub fn new(table: Table, settings: impl Into<Settings>) -> Result<Self, TableError> {
        validate(&table)?;
        Ok(Self::build(table, settings.into()))
    }

    /// Create a renderer without validating the table.
    ///
    /// Malformed tables render misaligned instead of failing. With no
    /// header every cell is drawn on its own line and rules are empty.
    #[must_use]
    pub fn lenient(table: Table, settings: impl Into<Settings>) -> Self {
        if let Err(err) = validate(&table) {
            log::warn!("rendering malformed table: {err}");
        }
        Self::build(table, settings.into())
    }

    fn build(table: Table, settings: Settings) -> Self {
        let column_count = table.column_count();
        let cell_width = table.cell_width();
        log::debug!("table renderer: {column_count} columns, cell width {cell_width}");
        Self {
            table,
            settings,
            column_count,
            cell_width,
        }
    }

    /// Replace the computed cell width.
    ///
    /// A width smaller than some cell leaves that cell untruncated, so
    /// its row will overhang the rules.
    #[must_use]
    pub fn with_cell_width(mut self, width: usize) -> Self {
        self.cell_width = width;
        self
    }

    /// Number of cells per logical row.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Width every cell is padded to.
    #[must_use]
    pub fn cell_width(&self) -> usize {
        self.cell_width
    }

    /// Resolved rule symbols.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The table being rendered.
    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Right-pad a cell with spaces to the cell width.
    #[must_use]
    pub fn pad_cell(&self, cell: &str) -> String {
        cells::set_cell_size(cell, self.cell_width)
    }

    /// Draw a row-set, one logical row per line.
    ///
    /// A newline follows every `column_count`-th cell; other cells are
    /// followed by a space.
    #[must_use]
    pub fn draw_cells(&self, rows: &[Node]) -> String {
        let cells = table::flatten(rows);
        let mut out = String::with_capacity(cells.len() * (self.cell_width + 1));

        for (i, cell) in cells.iter().enumerate() {
            out.push_str(&self.pad_cell(cell));
            if self.column_count == 0 || (i + 1) % self.column_count == 0 {
                out.push(LINE);
            } else {
                out.push(SEPARATOR);
            }
        }
        out
    }

    /// Draw a horizontal rule, optionally ending in a newline.
    #[must_use]
    pub fn draw_rule(&self, symbol: &str, newline: bool) -> String {
        let segment = cells::pad(self.cell_width, Some(symbol));
        let mut out = iter::repeat_n(segment.as_str(), self.column_count)
            .collect::<Vec<_>>()
            .join(" ");
        if newline {
            out.push(LINE);
        }
        out
    }

    /// Draw a horizontal rule followed by a newline.
    #[must_use]
    pub fn draw_rule_line(&self, symbol: &str) -> String {
        self.draw_rule(symbol, true)
    }

    /// Render the whole table.
    ///
    /// The result has no trailing newline after the closing rule.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.draw_rule_line(&self.settings.head_top));
        out.push_str(&self.draw_cells(self.table.head()));
        out.push_str(&self.draw_rule_line(&self.settings.head_bottom));
        out.push_str(&self.draw_cells(self.table.body()));
        out.push_str(&self.draw_rule(&self.settings.body_bottom, false));
        log::trace!("rendered table: {} bytes", out.len());
        out
    }
}

impl fmt::Display for TableRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Validate and render a table in one call.
///
/// # Errors
///
/// Returns the same errors as [`TableRenderer::new`].
pub fn render(table: Table, settings: impl Into<Settings>) -> Result<String, TableError> {
    Ok(TableRenderer::new(table, settings)?.render())
}

fn validate(table: &Table) -> Result<(), TableError> {
    if table.head().is_empty() {
        return Err(TableError::EmptyHead);
    }
    let columns = table.column_count();
    if columns == 0 {
        return Err(TableError::NoColumns);
    }

    let head_rows: Vec<usize> = if table.head_is_flat() {
        vec![table.head().iter().map(Node::leaf_count).sum()]
    } else {
        table.head().iter().map(Node::leaf_count).collect()
    };
    let body_rows: Vec<usize> = table.body().iter().map(Node::leaf_count).collect();

    for (section, rows) in [(Section::Head, head_rows), (Section::Body, body_rows)] {
        for (index, cells) in rows.into_iter().enumerate() {
            if cells == 0 || cells % columns != 0 {
                return Err(TableError::RaggedRow {
                    section,
                    index,
                    cells,
                    columns,
                });
            }
        }
    }
    Ok(())
}
