//! Common test utilities and logging infrastructure
//!
//! Call `init_test_logging()` at the start of tests that want the
//! renderer's `log` output. Records from the library are forwarded into
//! `tracing` and printed through the test writer.
//!
//! # Environment Variables
//!
//! - `RUST_LOG=debug` - Enable debug logging in tests
//! - `RUST_LOG=rst_table::renderer=trace` - Module-specific tracing
//! - `TEST_LOG_JSON=1` - Output JSON format for CI parsing

#![allow(dead_code)]

pub mod assertions;

use std::sync::Once;

use rst_table::{Node, Table};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Initialize test logging infrastructure.
///
/// Idempotent; only the first call installs a subscriber.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let use_json = std::env::var("TEST_LOG_JSON").is_ok();

        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("rst_table=debug,test=info"));

        if use_json {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_test_writer())
                .try_init()
                .ok();
        } else {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    fmt::layer()
                        .with_test_writer()
                        .with_file(true)
                        .with_line_number(true)
                        .with_target(true)
                        .compact(),
                )
                .try_init()
                .ok();
        }
    });
}

/// A two-column table: `Name`/`Language` over three rows.
pub fn languages() -> Table {
    Table::new()
        .with_head_row(["Name", "Language"])
        .with_body_row(["ripgrep", "Rust"])
        .with_body_row(["jq", "C"])
        .with_body_row(["pandoc", "Haskell"])
}

/// Build a rectangular table from string slices.
pub fn rectangular(head: &[&[&str]], body: &[&[&str]]) -> Table {
    Table::from_rows(
        head.iter().map(|row| Node::branch(row.iter().copied())).collect(),
        body.iter().map(|row| Node::branch(row.iter().copied())).collect(),
    )
}
