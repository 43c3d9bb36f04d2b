// ABOUTME: Error types and message constructors for evaluation and driver failures

//! Error handling has two layers.
//!
//! Language-level evaluation failures are `Value::Error` — ordinary data the
//! evaluator produces and propagates, never a Rust `Result::Err` (the
//! evaluator's own functions never fail in the Rust-type sense; see
//! `eval.rs`). This module supplies small constructors for the exact message
//! shapes the language's error taxonomy requires, so every builtin formats
//! its failures identically.
//!
//! Implementation-level failures — the parser rejecting malformed input, or
//! the driver failing to read a file — are distinct from the language's own
//! error model and are kept as ordinary `thiserror`-derived Rust errors.

use thiserror::Error;

use crate::value::Value;

pub fn type_mismatch(function: &str, position: usize, got: &Value, expected: &str) -> Value {
    Value::Error(format!(
        "Function '{function}' passed incorrect type for argument {position}. Got {}, Expected {expected}.",
        got.type_name()
    ))
}

pub fn arity_mismatch(function: &str, got: usize, expected: usize) -> Value {
    Value::Error(format!(
        "Function '{function}' passed too many arguments. Got {got}, Expected {expected}."
    ))
}

pub fn empty_argument(function: &str) -> Value {
    Value::Error(format!("Function '{function}' passed {{}}!"))
}

pub fn invalid_formals() -> Value {
    Value::Error("Function format invalid. Symbol '&' not followed by single symbol.".to_string())
}

pub fn unbound_symbol(name: &str) -> Value {
    Value::Error(format!("Unbound Symbol '{name}'"))
}

pub fn non_number() -> Value {
    Value::Error("Cannot operate on non-number!".to_string())
}

pub fn division_by_zero() -> Value {
    Value::Error("Division By Zero!".to_string())
}

pub fn not_a_function(got: &Value) -> Value {
    Value::Error(format!(
        "S-Expression starts with incorrect type. Got {}, Expected Function.",
        got.type_name()
    ))
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReaderError {
    #[error("Parse error: {0}")]
    Syntax(String),
}

#[derive(Error, Debug)]
pub enum DriverError {
    #[error("Could not load Library {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Could not load Library {path}: {reason}")]
    Parse { path: String, reason: ReaderError },
}
