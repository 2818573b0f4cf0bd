/// Lexical errors.
///
/// Defines the errors raised while scanning raw text: characters outside the
/// recognized alphabet and integer literals that do not fit into an `i64`.
pub mod lex_error;
/// Runtime errors.
///
/// Contains the errors raised while computing a grammatically valid
/// expression: division by zero, integer overflow and excessive nesting.
pub mod runtime_error;
/// Syntax errors.
///
/// Defines the errors raised when the token stream does not match the
/// expression grammar, such as a missing `)` or input left over after a
/// complete expression.
pub mod syntax_error;

pub use lex_error::LexError;
pub use runtime_error::RuntimeError;
pub use syntax_error::SyntaxError;

/// Coarse classification of an [`EvalError`].
///
/// Lets callers branch on the failure category without matching on every
/// variant or inspecting messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An unrecognized character or an oversized literal.
    Lex,
    /// The tokens do not form a valid expression.
    Syntax,
    /// A division had a zero divisor.
    DivisionByZero,
    /// An intermediate result left the `i64` range.
    Overflow,
    /// Parentheses were nested beyond the configured limit.
    NestingTooDeep,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Any failure of a single `evaluate` call.
pub enum EvalError {
    /// Tokenizing failed.
    Lex(LexError),
    /// Parsing failed.
    Syntax(SyntaxError),
    /// Computing the value failed.
    Runtime(RuntimeError),
}

impl EvalError {
    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Lex(_) => ErrorKind::Lex,
            Self::Syntax(_) => ErrorKind::Syntax,
            Self::Runtime(RuntimeError::DivisionByZero { .. }) => ErrorKind::DivisionByZero,
            Self::Runtime(RuntimeError::Overflow { .. }) => ErrorKind::Overflow,
            Self::Runtime(RuntimeError::NestingTooDeep { .. }) => ErrorKind::NestingTooDeep,
        }
    }

    /// Returns the byte offset in the input where the failure was detected.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::Lex(e) => e.offset(),
            Self::Syntax(e) => e.offset(),
            Self::Runtime(e) => e.offset(),
        }
    }
}

impl From<LexError> for EvalError {
    fn from(error: LexError) -> Self {
        Self::Lex(error)
    }
}

impl From<SyntaxError> for EvalError {
    fn from(error: SyntaxError) -> Self {
        Self::Syntax(error)
    }
}

impl From<RuntimeError> for EvalError {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Syntax(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Syntax(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
