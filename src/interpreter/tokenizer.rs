use log::trace;
use logos::Logos;

use crate::{
    error::LexError,
    interpreter::{
        lexer::Lexeme,
        token::{Spanned, Token},
    },
};

/// Pull-based tokenizer over a single input string.
///
/// The tokenizer owns nothing but the input and a scan position. Each call to
/// [`Tokenizer::next_token`] skips spaces and classifies exactly one token.
/// Once the input is exhausted every further call yields
/// [`Token::EndOfInput`]. A lexical error is sticky: the offending character
/// is never skipped, so every later call reports the same error.
pub struct Tokenizer<'src> {
    inner:    logos::Lexer<'src, Lexeme>,
    position: usize,
    failed:   Option<LexError>,
    finished: bool,
}

impl<'src> Tokenizer<'src> {
    /// Creates a tokenizer positioned at the start of `input`.
    #[must_use]
    pub fn new(input: &'src str) -> Self {
        Self { inner:    Lexeme::lexer(input),
               position: 0,
               failed:   None,
               finished: false, }
    }

    /// Returns the text being tokenized.
    #[must_use]
    pub fn input(&self) -> &'src str {
        self.inner.source()
    }

    /// Returns the byte offset just past the last consumed lexeme.
    ///
    /// The position never decreases and never exceeds the input length.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Scans and returns the next token.
    ///
    /// # Errors
    /// - `LexError::UnrecognizedCharacter` if the next significant character
    ///   is not a digit, one of `+ - * / ( )`, or a space.
    /// - `LexError::LiteralTooLarge` if a digit run does not fit in an `i64`.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::{token::Token, tokenizer::Tokenizer};
    ///
    /// let mut tokenizer = Tokenizer::new(" 12+");
    /// assert_eq!(tokenizer.next_token().unwrap().token, Token::Number(12));
    /// assert_eq!(tokenizer.next_token().unwrap().token, Token::Plus);
    /// assert_eq!(tokenizer.next_token().unwrap().token, Token::EndOfInput);
    /// assert_eq!(tokenizer.next_token().unwrap().token, Token::EndOfInput);
    /// ```
    pub fn next_token(&mut self) -> Result<Spanned, LexError> {
        if let Some(error) = &self.failed {
            return Err(error.clone());
        }

        let Some(lexeme) = self.inner.next() else {
            self.position = self.input().len();
            return Ok(self.emit(Token::EndOfInput, self.position));
        };

        let span = self.inner.span();
        let token = match lexeme {
            Ok(Lexeme::Number(n)) => Token::Number(n),
            Ok(Lexeme::Plus) => Token::Plus,
            Ok(Lexeme::Minus) => Token::Minus,
            Ok(Lexeme::Star) => Token::Star,
            Ok(Lexeme::Slash) => Token::Slash,
            Ok(Lexeme::LParen) => Token::LParen,
            Ok(Lexeme::RParen) => Token::RParen,
            Err(()) => {
                self.position = span.start;
                let error = self.classify_error(span.start);
                self.failed = Some(error.clone());
                return Err(error);
            },
        };

        self.position = span.end;
        Ok(self.emit(token, span.start))
    }

    /// Builds the error for the unmatched slice starting at `offset`.
    fn classify_error(&self, offset: usize) -> LexError {
        let slice = self.inner.slice();
        if slice.starts_with(|c: char| c.is_ascii_digit()) {
            return LexError::LiteralTooLarge { literal: slice.to_string(),
                                               offset };
        }

        let character = self.input()[offset..].chars()
                                              .next()
                                              .unwrap_or(char::REPLACEMENT_CHARACTER);
        LexError::UnrecognizedCharacter { character,
                                          offset }
    }

    fn emit(&self, token: Token, offset: usize) -> Spanned {
        trace!("token {token:?} at offset {offset}");
        Spanned { token, offset }
    }
}

/// Yields every token before [`Token::EndOfInput`], stopping after the first
/// error.
impl Iterator for Tokenizer<'_> {
    type Item = Result<Spanned, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.next_token() {
            Ok(Spanned { token: Token::EndOfInput,
                         .. }) => {
                self.finished = true;
                None
            },
            Ok(spanned) => Some(Ok(spanned)),
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            },
        }
    }
}

/// Tokenizes a whole input string.
///
/// The returned list excludes the final [`Token::EndOfInput`].
///
/// # Errors
/// Returns the first [`LexError`] encountered.
///
/// # Example
/// ```
/// use reckon::interpreter::{token::Token, tokenizer::tokenize};
///
/// let tokens = tokenize("10 - 5").unwrap();
/// let kinds: Vec<Token> = tokens.iter().map(|s| s.token).collect();
/// assert_eq!(kinds, vec![Token::Number(10), Token::Minus, Token::Number(5)]);
///
/// assert!(tokenize("3 + @").is_err());
/// ```
pub fn tokenize(input: &str) -> Result<Vec<Spanned>, LexError> {
    Tokenizer::new(input).collect()
}
