use log::debug;

use crate::{
    error::{EvalError, SyntaxError},
    interpreter::{
        token::{Spanned, Token, TokenKind},
        tokenizer::Tokenizer,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// [`EvalError`] describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Default limit on parenthesis nesting.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Tunable limits for a single evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalConfig {
    /// Maximum number of simultaneously open parentheses.
    pub max_depth: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH }
    }
}

/// Recursive-descent parser that computes the value while it parses.
///
/// The evaluator owns one [`Tokenizer`] and a single token of lookahead. The
/// lookahead is always the next unconsumed token: [`Evaluator::consume`]
/// replaces it immediately after a match. Grammar rules only read the
/// lookahead and call `consume`; none of them touch the tokenizer.
///
/// ```text
/// expression := term ( ('+' | '-') term )*
/// term       := factor ( ('*' | '/') factor )*
/// factor     := NUMBER | '(' expression ')'
/// ```
///
/// An evaluator is single use: [`Evaluator::evaluate`] takes it by value.
pub struct Evaluator<'src> {
    tokenizer:            Tokenizer<'src>,
    pub(super) lookahead: Spanned,
    pub(super) depth:     usize,
    pub(super) config:    EvalConfig,
}

impl<'src> Evaluator<'src> {
    /// Creates an evaluator with the default configuration and reads the
    /// first token.
    ///
    /// # Errors
    /// Returns a lexical error if the first significant character is not
    /// recognized.
    pub fn new(input: &'src str) -> EvalResult<Self> {
        Self::with_config(input, EvalConfig::default())
    }

    /// Creates an evaluator with the given configuration and reads the first
    /// token.
    ///
    /// # Errors
    /// Returns a lexical error if the first significant character is not
    /// recognized.
    pub fn with_config(input: &'src str, config: EvalConfig) -> EvalResult<Self> {
        let mut tokenizer = Tokenizer::new(input);
        let lookahead = tokenizer.next_token()?;

        Ok(Self { tokenizer,
                  lookahead,
                  depth: 0,
                  config })
    }

    /// Evaluates the whole input as a single expression.
    ///
    /// After the top-level expression the lookahead must be end of input.
    ///
    /// # Errors
    /// Any lexical, syntax or runtime error aborts the evaluation.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::evaluator::core::Evaluator;
    ///
    /// let value = Evaluator::new("3 + 5 * (10 - 2)").unwrap().evaluate().unwrap();
    /// assert_eq!(value, 43);
    ///
    /// assert!(Evaluator::new("3 4").unwrap().evaluate().is_err());
    /// ```
    pub fn evaluate(mut self) -> EvalResult<i64> {
        let value = self.expression()?;

        match self.lookahead.token {
            Token::EndOfInput => {
                debug!("evaluated {:?} to {value}", self.tokenizer.input());
                Ok(value)
            },
            token => Err(SyntaxError::UnexpectedTrailingInput { found:  token.kind(),
                                                                offset: self.lookahead.offset, }.into()),
        }
    }

    /// Consumes the lookahead if it has the expected kind and fetches the
    /// next token.
    ///
    /// # Errors
    /// - `SyntaxError::UnexpectedToken` if the lookahead has another kind.
    /// - A lexical error from fetching the replacement token.
    pub(super) fn consume(&mut self, expected: TokenKind) -> EvalResult<()> {
        let found = self.lookahead.token.kind();
        if found != expected {
            return Err(SyntaxError::UnexpectedToken { expected,
                                                      found,
                                                      offset: self.lookahead.offset }.into());
        }

        self.lookahead = self.tokenizer.next_token()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Evaluator;
    use crate::{
        error::{EvalError, SyntaxError},
        interpreter::token::{Token, TokenKind},
    };

    #[test]
    fn consume_rejects_mismatched_kind() {
        let mut evaluator = Evaluator::new("+").unwrap();
        let err = evaluator.consume(TokenKind::Number).unwrap_err();
        assert_eq!(err,
                   EvalError::Syntax(SyntaxError::UnexpectedToken { expected: TokenKind::Number,
                                                                    found:    TokenKind::Plus,
                                                                    offset:   0, }));
        assert_eq!(evaluator.lookahead.token, Token::Plus);
    }

    #[test]
    fn consume_advances_on_match() {
        let mut evaluator = Evaluator::new("( 7").unwrap();
        evaluator.consume(TokenKind::LParen).unwrap();
        assert_eq!(evaluator.lookahead.token, Token::Number(7));
        assert_eq!(evaluator.lookahead.offset, 2);
        evaluator.consume(TokenKind::Number).unwrap();
        assert_eq!(evaluator.lookahead.token, Token::EndOfInput);
    }
}
