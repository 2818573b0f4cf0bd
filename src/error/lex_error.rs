#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while turning text into tokens.
pub enum LexError {
    /// A character outside the recognized alphabet was found.
    UnrecognizedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the input.
        offset:    usize,
    },
    /// A run of digits does not fit into a 64-bit signed integer.
    LiteralTooLarge {
        /// The digits as written in the input.
        literal: String,
        /// Byte offset of the first digit.
        offset:  usize,
    },
}

impl LexError {
    /// Returns the byte offset at which lexing failed.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::UnrecognizedCharacter { offset, .. } | Self::LiteralTooLarge { offset, .. } => {
                *offset
            },
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedCharacter { character, offset } => write!(f,
                                                                        "Error at offset {offset}: Unrecognized character {character:?}."),
            Self::LiteralTooLarge { literal, offset } => {
                write!(f, "Error at offset {offset}: Literal {literal} is too large.")
            },
        }
    }
}

impl std::error::Error for LexError {}
