use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        token::{Token, TokenKind},
    },
};

/// The four arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`, truncating toward zero.
    Div,
}

impl BinaryOperator {
    /// Applies the operator with checked `i64` arithmetic.
    ///
    /// Division truncates toward zero, so `7 / 2` is `3` and `(0 - 7) / 2` is
    /// `-3`.
    ///
    /// # Parameters
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `offset`: Byte offset of the operator, for error reporting.
    ///
    /// # Errors
    /// - `RuntimeError::DivisionByZero` if dividing by zero.
    /// - `RuntimeError::Overflow` if the result does not fit in an `i64`.
    ///
    /// # Example
    /// ```
    /// use reckon::{error::RuntimeError, interpreter::evaluator::binary::BinaryOperator};
    ///
    /// assert_eq!(BinaryOperator::Div.apply(7, 2, 0), Ok(3));
    /// assert_eq!(BinaryOperator::Div.apply(-7, 2, 0), Ok(-3));
    /// assert_eq!(BinaryOperator::Div.apply(5, 0, 2),
    ///            Err(RuntimeError::DivisionByZero { offset: 2 }));
    /// assert_eq!(BinaryOperator::Add.apply(i64::MAX, 1, 4),
    ///            Err(RuntimeError::Overflow { offset: 4 }));
    /// ```
    pub const fn apply(self, left: i64, right: i64, offset: usize) -> Result<i64, RuntimeError> {
        let result = match self {
            Self::Add => left.checked_add(right),
            Self::Sub => left.checked_sub(right),
            Self::Mul => left.checked_mul(right),
            Self::Div => {
                if right == 0 {
                    return Err(RuntimeError::DivisionByZero { offset });
                }
                left.checked_div(right)
            },
        };

        match result {
            Some(value) => Ok(value),
            None => Err(RuntimeError::Overflow { offset }),
        }
    }

    /// Returns the operator a token stands for, if any.
    #[must_use]
    pub const fn from_token(token: Token) -> Option<Self> {
        match token {
            Token::Plus => Some(Self::Add),
            Token::Minus => Some(Self::Sub),
            Token::Star => Some(Self::Mul),
            Token::Slash => Some(Self::Div),
            Token::Number(_) | Token::LParen | Token::RParen | Token::EndOfInput => None,
        }
    }

    /// Returns the token kind that spells this operator.
    #[must_use]
    pub const fn token_kind(self) -> TokenKind {
        match self {
            Self::Add => TokenKind::Plus,
            Self::Sub => TokenKind::Minus,
            Self::Mul => TokenKind::Star,
            Self::Div => TokenKind::Slash,
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Add => write!(f, "+"),
            Self::Sub => write!(f, "-"),
            Self::Mul => write!(f, "*"),
            Self::Div => write!(f, "/"),
        }
    }
}

impl Evaluator<'_> {
    /// Evaluates addition and subtraction.
    ///
    /// Folds left to right, so `20 - 5 - 3` is `12`.
    ///
    /// The rule is: `expression := term (("+" | "-") term)*`
    pub(super) fn expression(&mut self) -> EvalResult<i64> {
        let mut left = self.term()?;
        while let Some(op) = self.additive_operator() {
            let offset = self.lookahead.offset;
            self.consume(op.token_kind())?;
            let right = self.term()?;
            left = op.apply(left, right, offset)?;
        }
        Ok(left)
    }

    /// Evaluates multiplication and division.
    ///
    /// The rule is: `term := factor (("*" | "/") factor)*`
    pub(super) fn term(&mut self) -> EvalResult<i64> {
        let mut left = self.factor()?;
        while let Some(op) = self.multiplicative_operator() {
            let offset = self.lookahead.offset;
            self.consume(op.token_kind())?;
            let right = self.factor()?;
            left = op.apply(left, right, offset)?;
        }
        Ok(left)
    }

    fn additive_operator(&self) -> Option<BinaryOperator> {
        BinaryOperator::from_token(self.lookahead.token).filter(|op| {
                                                            matches!(op,
                                                                     BinaryOperator::Add
                                                                     | BinaryOperator::Sub)
                                                        })
    }

    fn multiplicative_operator(&self) -> Option<BinaryOperator> {
        BinaryOperator::from_token(self.lookahead.token).filter(|op| {
                                                            matches!(op,
                                                                     BinaryOperator::Mul
                                                                     | BinaryOperator::Div)
                                                        })
    }
}
