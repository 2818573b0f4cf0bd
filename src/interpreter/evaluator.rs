/// Core evaluation state and the single-token advance primitive.
///
/// Contains the `Evaluator` itself, its configuration and the shared result
/// type.
pub mod core;

/// Binary operator evaluation.
///
/// Implements the additive and multiplicative precedence levels together with
/// checked integer arithmetic for `+`, `-`, `*` and `/`.
pub mod binary;

/// Operand evaluation.
///
/// Handles number literals and parenthesized groups, including the nesting
/// depth limit.
pub mod factor;
