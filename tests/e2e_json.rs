//! End-to-end tests for JSON table input.
//!
//! Run with: cargo test --features json --test e2e_json

#![cfg(feature = "json")]

mod common;

use common::assertions::{assert_eq_logged, assert_err_logged};
use common::init_test_logging;
use rst_table::prelude::*;
use serde_json::json;

#[test]
fn e2e_json_flat_head() {
    init_test_logging();

    let table = Table::from_json(&json!({
        "head": ["A", "B"],
        "body": [["1", "22"]],
    }))
    .unwrap();
    let output = TableRenderer::new(table, Settings::default())
        .unwrap()
        .render();
    assert_eq_logged(
        "output",
        output.as_str(),
        "== ==\nA  B \n-- --\n1  22\n== ==",
    );
}

#[test]
fn e2e_json_with_symbols() {
    init_test_logging();

    let table = Table::from_json_str(r#"{"head": [["id", "qty"]], "body": [[1, 250], [2, 3]]}"#)
        .unwrap();
    let overrides = SettingsOverride::from_json(&json!({
        "symbols": { "headTop": "*", "bodyBottom": "+" }
    }))
    .unwrap();
    let output = TableRenderer::new(table, overrides).unwrap().render();

    let expected = ["*** ***", "id  qty", "--- ---", "1   250", "2   3  ", "+++ +++"].join("\n");
    assert_eq_logged("output", output.as_str(), expected.as_str());
}

#[test]
fn e2e_json_empty_head_rejected_at_render() {
    init_test_logging();

    let table = Table::from_json(&json!({ "body": [["x"]] })).unwrap();
    let err = assert_err_logged("no head", TableRenderer::new(table, Settings::default()));
    assert_eq_logged("error", err, TableError::EmptyHead);
}
