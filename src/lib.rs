//! # reckon
//!
//! reckon tokenizes and evaluates integer arithmetic expressions written in
//! Rust. It supports `+`, `-`, `*`, `/` and parenthesized grouping with the
//! usual precedence, and fails fast on the first malformed token.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::evaluator::core::{EvalResult, Evaluator};

/// Provides unified error types for tokenizing and evaluation.
///
/// This module defines every error a single `evaluate` call can return. Each
/// error carries the byte offset where it was detected, and [`EvalError`]
/// exposes a coarse [`ErrorKind`](error::ErrorKind) so callers can tell the
/// categories apart without inspecting messages.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, arithmetic).
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Orchestrates tokenizing and evaluation.
///
/// This module ties together the token types, the tokenizer and the
/// recursive-descent evaluator. Control flow is pull based: the evaluator
/// requests tokens one at a time and the tokenizer knows nothing about the
/// grammar.
pub mod interpreter;

pub use error::{ErrorKind, EvalError};
pub use interpreter::evaluator::core::{DEFAULT_MAX_DEPTH, EvalConfig};

/// Evaluates an expression with the default configuration.
///
/// # Errors
/// Returns an [`EvalError`] on the first unrecognized character, grammar
/// violation, division by zero, overflow or excessive nesting.
///
/// # Examples
/// ```
/// use reckon::{ErrorKind, evaluate};
///
/// assert_eq!(evaluate("3 + 5 * (10 - 2)").unwrap(), 43);
/// assert_eq!(evaluate("20 - 5 - 3").unwrap(), 12);
/// assert_eq!(evaluate("7 / 2").unwrap(), 3);
///
/// let err = evaluate("5 / 0").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::DivisionByZero);
/// ```
pub fn evaluate(input: &str) -> EvalResult<i64> {
    evaluate_with_config(input, EvalConfig::default())
}

/// Evaluates an expression with explicit limits.
///
/// # Errors
/// Same as [`evaluate`].
///
/// # Examples
/// ```
/// use reckon::{ErrorKind, EvalConfig, evaluate_with_config};
///
/// let config = EvalConfig { max_depth: 2 };
/// assert_eq!(evaluate_with_config("((1 + 2))", config).unwrap(), 3);
///
/// let err = evaluate_with_config("(((1)))", config).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::NestingTooDeep);
/// ```
pub fn evaluate_with_config(input: &str, config: EvalConfig) -> EvalResult<i64> {
    Evaluator::with_config(input, config)?.evaluate()
}
