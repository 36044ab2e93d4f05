//! Table data model.
//!
//! A [`Table`] holds a header row-set and a body row-set. Each row is a
//! [`Node`]: either a single cell or a nested sequence of nodes, so a row
//! can itself carry several logical rows. Rendering only ever sees the
//! flattened, left-to-right sequence of leaf cells.
//!
//! ```
//! use rst_table::table::Table;
//!
//! let table = Table::new()
//!     .with_head_row(["Name", "Age"])
//!     .with_body_row(["Alice", "30"])
//!     .with_body_row(["Bob", "25"]);
//!
//! assert_eq!(table.column_count(), 2);
//! assert_eq!(table.cell_width(), 5);
//! ```

use smallvec::SmallVec;

use crate::cells;

/// Flattened cells of a row-set, borrowed from the table.
pub type CellBuf<'a> = SmallVec<[&'a str; 16]>;

/// A cell or a nested group of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A single text cell.
    Leaf(String),
    /// A sequence of nodes, flattened in order.
    Branch(Vec<Node>),
}

impl Node {
    /// Create a branch from anything convertible to nodes.
    #[must_use]
    pub fn branch<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Node>,
    {
        Self::Branch(items.into_iter().map(Into::into).collect())
    }

    /// Number of leaf cells below this node.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Branch(children) => children.iter().map(Self::leaf_count).sum(),
        }
    }

    /// Largest leaf width below this node, starting from `running`.
    #[must_use]
    pub fn max_width(&self, running: usize) -> usize {
        match self {
            Self::Leaf(text) => running.max(cells::cell_len(text)),
            Self::Branch(children) => children
                .iter()
                .fold(running, |width, child| child.max_width(width)),
        }
    }

    /// Append the leaf cells below this node to `out`, depth first.
    pub fn extend_leaves<'a>(&'a self, out: &mut CellBuf<'a>) {
        match self {
            Self::Leaf(text) => out.push(text.as_str()),
            Self::Branch(children) => {
                for child in children {
                    child.extend_leaves(out);
                }
            }
        }
    }

    /// The leaf cells below this node, in order.
    #[must_use]
    pub fn leaves(&self) -> CellBuf<'_> {
        let mut out = CellBuf::new();
        self.extend_leaves(&mut out);
        out
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::Leaf(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::Leaf(text)
    }
}

impl From<&String> for Node {
    fn from(text: &String) -> Self {
        Self::Leaf(text.clone())
    }
}

impl<T: Into<Node>> From<Vec<T>> for Node {
    fn from(items: Vec<T>) -> Self {
        Self::branch(items)
    }
}

impl<T: Into<Node>, const N: usize> From<[T; N]> for Node {
    fn from(items: [T; N]) -> Self {
        Self::branch(items)
    }
}

/// Flatten a row-set into its leaf cells.
#[must_use]
pub fn flatten(rows: &[Node]) -> CellBuf<'_> {
    let mut out = CellBuf::new();
    for row in rows {
        row.extend_leaves(&mut out);
    }
    out
}

/// A table of text cells: header rows and body rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    head: Vec<Node>,
    body: Vec<Node>,
}

impl Table {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table from already-built row-sets.
    #[must_use]
    pub fn from_rows(head: Vec<Node>, body: Vec<Node>) -> Self {
        Self { head, body }
    }

    /// Add a header row (builder style).
    #[must_use]
    pub fn with_head_row<I, T>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Node>,
    {
        self.add_head_row(cells);
        self
    }

    /// Add a body row (builder style).
    #[must_use]
    pub fn with_body_row<I, T>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Node>,
    {
        self.add_body_row(cells);
        self
    }

    /// Add a header row.
    pub fn add_head_row<I, T>(&mut self, cells: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<Node>,
    {
        self.head.push(Node::branch(cells));
    }

    /// Add a body row.
    pub fn add_body_row<I, T>(&mut self, cells: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<Node>,
    {
        self.body.push(Node::branch(cells));
    }

    /// Header rows.
    #[must_use]
    pub fn head(&self) -> &[Node] {
        &self.head
    }

    /// Body rows.
    #[must_use]
    pub fn body(&self) -> &[Node] {
        &self.body
    }

    /// Whether the header is a single flat row of cells rather than a
    /// sequence of rows, i.e. its first entry is a bare cell.
    #[must_use]
    pub fn head_is_flat(&self) -> bool {
        matches!(self.head.first(), Some(Node::Leaf(_)))
    }

    /// Number of cells in the first header row, or 0 without a header.
    ///
    /// A flat header counts as one row holding every header cell.
    #[must_use]
    pub fn column_count(&self) -> usize {
        if self.head_is_flat() {
            return self.head.iter().map(Node::leaf_count).sum();
        }
        self.head.first().map_or(0, Node::leaf_count)
    }

    /// Widest cell anywhere in the table.
    ///
    /// One width is shared by every column; it is not computed per column.
    #[must_use]
    pub fn cell_width(&self) -> usize {
        self.head
            .iter()
            .chain(&self.body)
            .fold(0, |width, row| row.max_width(width))
    }

    /// Every cell of the table, header first.
    #[must_use]
    pub fn leaves(&self) -> CellBuf<'_> {
        let mut out = flatten(&self.head);
        for row in &self.body {
            row.extend_leaves(&mut out);
        }
        out
    }
}
