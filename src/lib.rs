//! # rst_table
//!
//! Render header/body text tables as reStructuredText-style simple tables.
//!
//! Every cell is padded to the width of the widest cell in the table, cells
//! are separated by one space, and the header and body are framed by
//! horizontal rules whose symbols are configurable.
//!
//! ## Quick Start
//!
//! ```rust
//! use rst_table::prelude::*;
//!
//! let table = Table::new()
//!     .with_head_row(["Name", "Role"])
//!     .with_body_row(["Ada", "Engineer"]);
//!
//! let text = TableRenderer::new(table, Settings::default())?.render();
//! assert_eq!(
//!     text,
//!     "======== ========\n\
//!      Name     Role    \n\
//!      -------- --------\n\
//!      Ada      Engineer\n\
//!      ======== ========",
//! );
//! # Ok::<(), rst_table::TableError>(())
//! ```
//!
//! ## Core Concepts
//!
//! - **Table**: header rows and body rows of text cells
//! - **Settings**: the rule symbols, overridable with `SettingsOverride`
//! - **TableRenderer**: measures a table once and renders it to a string
//!
//! ## Features
//!
//! - `json`: build tables and settings from `serde_json` values

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cells;
pub mod error;
pub mod renderer;
pub mod settings;
pub mod table;

#[cfg(feature = "json")]
pub mod json;

/// Re-exports for convenient usage
pub mod prelude {
    pub use crate::error::{Section, TableError};
    pub use crate::renderer::{TableRenderer, render};
    pub use crate::settings::{Settings, SettingsOverride};
    pub use crate::table::{Node, Table};
}

// Re-export key types at crate root
pub use error::{Section, TableError};
pub use renderer::{TableRenderer, render};
pub use settings::{Settings, SettingsOverride};
pub use table::{Node, Table};
