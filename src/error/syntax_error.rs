use crate::interpreter::token::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur when the token stream does not match
/// the expression grammar.
pub enum SyntaxError {
    /// A specific token kind was required but another one was found.
    UnexpectedToken {
        /// The token kind the grammar required.
        expected: TokenKind,
        /// The token kind actually found.
        found:    TokenKind,
        /// Byte offset of the found token.
        offset:   usize,
    },
    /// A parenthesized group was not closed.
    ExpectedClosingParen {
        /// The token found in place of `)`.
        found:  TokenKind,
        /// Byte offset of the found token.
        offset: usize,
    },
    /// A number or `(` was expected at the start of an operand.
    ExpectedOperand {
        /// The token found instead.
        found:  TokenKind,
        /// Byte offset of the found token.
        offset: usize,
    },
    /// A complete expression was followed by more tokens.
    UnexpectedTrailingInput {
        /// The first unconsumed token.
        found:  TokenKind,
        /// Byte offset of the unconsumed token.
        offset: usize,
    },
}

impl SyntaxError {
    /// Returns the token kind the parser was looking for.
    #[must_use]
    pub const fn expected(&self) -> &'static str {
        match self {
            Self::UnexpectedToken { expected, .. } => expected.describe(),
            Self::ExpectedClosingParen { .. } => TokenKind::RParen.describe(),
            Self::ExpectedOperand { .. } => "number or '('",
            Self::UnexpectedTrailingInput { .. } => TokenKind::EndOfInput.describe(),
        }
    }

    /// Returns the token kind that was actually found.
    #[must_use]
    pub const fn found(&self) -> TokenKind {
        match self {
            Self::UnexpectedToken { found, .. }
            | Self::ExpectedClosingParen { found, .. }
            | Self::ExpectedOperand { found, .. }
            | Self::UnexpectedTrailingInput { found, .. } => *found,
        }
    }

    /// Returns the byte offset of the offending token.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::UnexpectedToken { offset, .. }
            | Self::ExpectedClosingParen { offset, .. }
            | Self::ExpectedOperand { offset, .. }
            | Self::UnexpectedTrailingInput { offset, .. } => *offset,
        }
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found, offset } => write!(f,
                                                                        "Error at offset {offset}: Expected {}, found {}.",
                                                                        expected.describe(),
                                                                        found.describe()),
            Self::ExpectedClosingParen { found, offset } => write!(f,
                                                                   "Error at offset {offset}: Expected closing parenthesis ')' but found {}.",
                                                                   found.describe()),
            Self::ExpectedOperand { found, offset } => write!(f,
                                                              "Error at offset {offset}: Expected number or '(', found {}.",
                                                              found.describe()),
            Self::UnexpectedTrailingInput { found, offset } => write!(f,
                                                                      "Error at offset {offset}: Unexpected trailing input starting with {}.",
                                                                      found.describe()),
        }
    }
}

impl std::error::Error for SyntaxError {}
