//! Logged assertion helpers for rst_table tests.
//!
//! These wrap standard assertions with tracing logs, so a failing
//! comparison of two rendered tables shows both sides in the CI log.

#![allow(dead_code)]

use std::fmt::Debug;

/// Assert equality with detailed logging.
#[track_caller]
pub fn assert_eq_logged<T: PartialEq + Debug>(context: &str, actual: T, expected: T) {
    tracing::debug!(
        context = context,
        expected = ?expected,
        actual = ?actual,
        "asserting equality"
    );

    if actual != expected {
        tracing::error!(
            context = context,
            expected = ?expected,
            actual = ?actual,
            "assertion failed: values not equal"
        );
    }

    assert_eq!(
        actual, expected,
        "{context}: expected {expected:?}, got {actual:?}"
    );
}

/// Assert that a Result is Ok with logging, returning the value.
#[track_caller]
pub fn assert_ok_logged<T: Debug, E: Debug>(context: &str, result: Result<T, E>) -> T {
    tracing::debug!(context = context, result = ?result, "asserting Ok");

    match result {
        Ok(value) => value,
        Err(ref e) => {
            tracing::error!(context = context, error = ?e, "assertion failed: expected Ok, got Err");
            panic!("{context}: expected Ok, got Err({e:?})");
        }
    }
}

/// Assert that a Result is Err with logging, returning the error.
#[track_caller]
pub fn assert_err_logged<T: Debug, E: Debug>(context: &str, result: Result<T, E>) -> E {
    tracing::debug!(context = context, result = ?result, "asserting Err");

    match result {
        Err(e) => e,
        Ok(ref value) => {
            tracing::error!(context = context, value = ?value, "assertion failed: expected Err, got Ok");
            panic!("{context}: expected Err, got Ok({value:?})");
        }
    }
}

/// Assert that every line of a rendered table has the same width.
#[track_caller]
pub fn assert_aligned(context: &str, rendered: &str) {
    let widths: Vec<usize> = rendered.lines().map(|l| l.chars().count()).collect();
    tracing::debug!(context = context, widths = ?widths, "asserting aligned lines");

    if let Some(first) = widths.first() {
        assert!(
            widths.iter().all(|w| w == first),
            "{context}: line widths differ: {widths:?}\n{rendered}"
        );
    }
}
