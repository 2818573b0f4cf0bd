use logos::Logos;

/// Raw lexemes recognized in the input text.
///
/// This is the declarative scanner behind the
/// [`Tokenizer`](crate::interpreter::tokenizer::Tokenizer). Runs of ASCII
/// spaces are skipped inside logos and never surface as lexemes; any other
/// character outside the alphabet is reported by logos as an error slice.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r" +")]
pub enum Lexeme {
    /// Integer literal tokens, such as `42`. Only ASCII digits are accepted.
    #[regex(r"[0-9]+", parse_integer)]
    Number(i64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed value if it fits.
/// - `None`: If the digit run overflows an `i64`.
fn parse_integer(lex: &logos::Lexer<Lexeme>) -> Option<i64> {
    lex.slice().parse().ok()
}
