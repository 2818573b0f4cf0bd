/// The evaluator module parses tokens and computes the result on the fly.
///
/// The evaluator is a recursive-descent parser with one token of lookahead
/// that applies each operator as soon as both operands are known. No syntax
/// tree is built.
///
/// # Responsibilities
/// - Pulls tokens from the tokenizer on demand.
/// - Enforces precedence and left associativity.
/// - Reports syntax errors, division by zero, overflow and excessive nesting.
pub mod evaluator;
/// The lexer module declares the raw lexemes of the input alphabet.
///
/// # Responsibilities
/// - Recognizes digit runs and the six operator and grouping symbols.
/// - Skips runs of spaces.
pub mod lexer;
/// The token module defines the values passed from tokenizer to evaluator.
///
/// # Responsibilities
/// - Defines the closed `Token` union and its payload-free `TokenKind` tag.
/// - Attaches byte offsets to tokens for error reporting.
pub mod token;
/// The tokenizer module turns text into tokens one at a time.
///
/// # Responsibilities
/// - Wraps the lexer behind a narrow `next_token` method.
/// - Tracks the scan position and reports end of input idempotently.
/// - Reports unrecognized characters and oversized literals.
pub mod tokenizer;
