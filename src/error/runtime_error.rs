#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while computing a well-formed
/// expression.
pub enum RuntimeError {
    /// The right-hand operand of `/` evaluated to zero.
    DivisionByZero {
        /// Byte offset of the `/` operator.
        offset: usize,
    },
    /// An intermediate result does not fit into a 64-bit signed integer.
    Overflow {
        /// Byte offset of the operator that overflowed.
        offset: usize,
    },
    /// Parentheses were nested deeper than the configured limit.
    NestingTooDeep {
        /// The configured maximum depth.
        limit:  usize,
        /// Byte offset of the `(` that exceeded the limit.
        offset: usize,
    },
}

impl RuntimeError {
    /// Returns the byte offset at which evaluation failed.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::DivisionByZero { offset }
            | Self::Overflow { offset }
            | Self::NestingTooDeep { offset, .. } => *offset,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { offset } => {
                write!(f, "Error at offset {offset}: Division by zero.")
            },
            Self::Overflow { offset } => write!(f,
                                                "Error at offset {offset}: Integer overflow while trying to compute result."),
            Self::NestingTooDeep { limit, offset } => write!(f,
                                                             "Error at offset {offset}: Parentheses nested deeper than {limit} levels."),
        }
    }
}

impl std::error::Error for RuntimeError {}
