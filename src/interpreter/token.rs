/// A classified unit of input text.
///
/// Tokens are plain values: the tokenizer creates one per scan step and the
/// evaluator drops it once consumed. Only [`Token::Number`] carries a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// Unsigned decimal integer literal, such as `42`.
    Number(i64),
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// No significant characters remain.
    EndOfInput,
}

/// The tag of a [`Token`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Number,
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
    EndOfInput,
}

impl Token {
    /// Returns the tag of this token.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::token::{Token, TokenKind};
    ///
    /// assert_eq!(Token::Number(7).kind(), TokenKind::Number);
    /// assert_eq!(Token::EndOfInput.kind(), TokenKind::EndOfInput);
    /// ```
    #[must_use]
    pub const fn kind(self) -> TokenKind {
        match self {
            Self::Number(_) => TokenKind::Number,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Star => TokenKind::Star,
            Self::Slash => TokenKind::Slash,
            Self::LParen => TokenKind::LParen,
            Self::RParen => TokenKind::RParen,
            Self::EndOfInput => TokenKind::EndOfInput,
        }
    }

    /// Returns the integer payload, present only for numbers.
    #[must_use]
    pub const fn value(self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(n),
            _ => None,
        }
    }
}

impl TokenKind {
    /// Human readable name used in error messages.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::Slash => "'/'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::EndOfInput => "end of input",
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::EndOfInput => write!(f, "end of input"),
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}

/// A token together with the byte offset of its first character.
///
/// [`Token::EndOfInput`] is reported at the length of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spanned {
    /// The classified token.
    pub token:  Token,
    /// Zero-based byte offset into the input.
    pub offset: usize,
}
