//! Building tables and settings from JSON.
//!
//! Tables use the `{ "head": [...], "body": [...] }` shape, where rows are
//! arrays that may nest to any depth. A row-set whose top level holds a
//! bare value instead of an array is read as a single row, so
//! `{"head": ["A", "B"]}` has two columns.
//!
//! Numbers and booleans become their JSON text, `null` becomes an empty
//! cell, and objects are rejected.

use serde_json::{Map, Value};

use crate::error::TableError;
use crate::settings::SettingsOverride;
use crate::table::{Node, Table};

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn node(value: &Value, path: &str) -> Result<Node, TableError> {
    match value {
        Value::String(text) => Ok(Node::Leaf(text.clone())),
        Value::Number(n) => Ok(Node::Leaf(n.to_string())),
        Value::Bool(b) => Ok(Node::Leaf(b.to_string())),
        Value::Null => Ok(Node::Leaf(String::new())),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| node(item, &format!("{path}/{i}")))
            .collect::<Result<Vec<_>, _>>()
            .map(Node::Branch),
        Value::Object(_) => Err(TableError::InvalidCell {
            path: path.to_string(),
            found: kind(value),
        }),
    }
}

fn rows(object: &Map<String, Value>, key: &str) -> Result<Vec<Node>, TableError> {
    let items = match object.get(key) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(TableError::InvalidShape(format!(
                "\"{key}\" must be an array, found {}",
                kind(other)
            )));
        }
    };

    let path = format!("/{key}");
    if items.iter().all(Value::is_array) {
        items
            .iter()
            .enumerate()
            .map(|(i, item)| node(item, &format!("{path}/{i}")))
            .collect()
    } else {
        Ok(vec![node(&Value::Array(items.clone()), &path)?])
    }
}

impl Table {
    /// Build a table from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidShape`] if `value` is not an object or
    /// `head`/`body` is not an array, and [`TableError::InvalidCell`] for
    /// object-valued cells.
    pub fn from_json(value: &Value) -> Result<Self, TableError> {
        let Value::Object(object) = value else {
            return Err(TableError::InvalidShape(format!(
                "expected an object, found {}",
                kind(value)
            )));
        };
        Ok(Self::from_rows(rows(object, "head")?, rows(object, "body")?))
    }

    /// Parse a table from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidShape`] if the text is not valid JSON,
    /// otherwise the errors of [`Table::from_json`].
    pub fn from_json_str(text: &str) -> Result<Self, TableError> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| TableError::InvalidShape(e.to_string()))?;
        Self::from_json(&value)
    }
}

fn symbol(object: &Map<String, Value>, key: &str) -> Result<Option<String>, TableError> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(TableError::InvalidShape(format!(
            "\"{key}\" must be a string, found {}",
            kind(other)
        ))),
    }
}

impl SettingsOverride {
    /// Read rule symbols from `headTop`, `headBottom` and `bodyBottom`.
    ///
    /// The keys are looked up under `"symbols"` when that is an object,
    /// otherwise at the top level. Unknown keys are ignored and `null`
    /// input yields an empty override.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidShape`] if `value` is neither an object
    /// nor `null`, or a symbol is an array or object.
    pub fn from_json(value: &Value) -> Result<Self, TableError> {
        let object = match value {
            Value::Null => return Ok(Self::default()),
            Value::Object(object) => object,
            other => {
                return Err(TableError::InvalidShape(format!(
                    "expected settings object, found {}",
                    kind(other)
                )));
            }
        };
        let object = match object.get("symbols") {
            Some(Value::Object(symbols)) => symbols,
            _ => object,
        };

        Ok(Self {
            head_top: symbol(object, "headTop")?,
            head_bottom: symbol(object, "headBottom")?,
            body_bottom: symbol(object, "bodyBottom")?,
        })
    }
}
