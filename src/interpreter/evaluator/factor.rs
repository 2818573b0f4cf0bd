use crate::{
    error::{RuntimeError, SyntaxError},
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        token::{Token, TokenKind},
    },
};

impl Evaluator<'_> {
    /// Evaluates a number or a parenthesized expression.
    ///
    /// The rule is: `factor := NUMBER | "(" expression ")"`
    ///
    /// # Errors
    /// - `SyntaxError::ExpectedOperand` if the lookahead is neither a number
    ///   nor `(`.
    /// - `SyntaxError::ExpectedClosingParen` if a group is not closed.
    /// - `RuntimeError::NestingTooDeep` if opening the group would exceed
    ///   the configured depth.
    pub(super) fn factor(&mut self) -> EvalResult<i64> {
        match self.lookahead.token {
            Token::Number(value) => {
                self.consume(TokenKind::Number)?;
                Ok(value)
            },
            Token::LParen => self.group(),
            token @ (Token::Plus
                     | Token::Minus
                     | Token::Star
                     | Token::Slash
                     | Token::RParen
                     | Token::EndOfInput) => {
                Err(SyntaxError::ExpectedOperand { found:  token.kind(),
                                                   offset: self.lookahead.offset, }.into())
            },
        }
    }

    /// Evaluates `"(" expression ")"` one nesting level deeper.
    fn group(&mut self) -> EvalResult<i64> {
        if self.depth >= self.config.max_depth {
            return Err(RuntimeError::NestingTooDeep { limit:  self.config.max_depth,
                                                      offset: self.lookahead.offset, }.into());
        }

        self.consume(TokenKind::LParen)?;
        self.depth += 1;
        let value = self.expression()?;
        self.depth -= 1;

        if self.lookahead.token != Token::RParen {
            return Err(SyntaxError::ExpectedClosingParen { found:  self.lookahead.token.kind(),
                                                           offset: self.lookahead.offset, }.into());
        }
        self.consume(TokenKind::RParen)?;

        Ok(value)
    }
}
