//! Recursive descent evaluator for calculator expressions
//!
//! Consumes the token stream produced by the lexer and computes the value
//! eagerly during parsing; no AST is built. Three precedence levels, each a
//! method on [`Parser`]:
//!
//! - `parse_additive` — `+` and `-`, lowest precedence, left-associative
//! - `parse_multiplicative` — `*` and `/`, left-associative
//! - `parse_primary` — number literals and parenthesized groups
//!
//! The grammar is resolvable with single-token lookahead at every decision
//! point, so the cursor only ever moves forward. Division by zero is not an
//! error: it follows IEEE `f64` semantics and yields ±infinity or NaN.

use crate::parser::lexer::Token;
use std::fmt;

/// Parser error type
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// A number token's text could not convert to `f64` (e.g. `1.2.3`)
    InvalidNumber(String),

    /// A `(` was not matched by a `)` at the expected position
    MismatchedParen,

    /// A token appeared where the grammar required a number or `(`,
    /// or was left over after the expression ended
    UnexpectedToken(Token),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidNumber(text) => {
                write!(f, "invalid number '{}'", text)
            }
            ParseError::MismatchedParen => {
                write!(f, "mismatched parentheses")
            }
            ParseError::UnexpectedToken(token) => {
                write!(f, "unexpected token: {} at position {}", token, token.position())
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Recursive descent parser over a token stream
///
/// Owns the tokens and a cursor; each [`Parser::evaluate`] call starts at
/// position 0 and advances monotonically. The token vector is never mutated.
pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Evaluate the full expression.
    ///
    /// The whole input must be consumed: a token left over after the
    /// top-level expression (`"2+2)"`, `"2 2"`) is an
    /// [`ParseError::UnexpectedToken`] rather than silently ignored.
    pub fn evaluate(&mut self) -> Result<f64, ParseError> {
        let value = self.parse_additive()?;

        if !self.is_at_end() {
            return Err(ParseError::UnexpectedToken(self.peek_token()));
        }

        Ok(value)
    }

    /// Parse additive (+ -)
    fn parse_additive(&mut self) -> Result<f64, ParseError> {
        let mut value = self.parse_multiplicative()?;

        loop {
            if self.match_token(&Token::Plus(0)) {
                value += self.parse_multiplicative()?;
            } else if self.match_token(&Token::Minus(0)) {
                value -= self.parse_multiplicative()?;
            } else {
                break;
            }
        }

        Ok(value)
    }

    /// Parse multiplicative (* /)
    fn parse_multiplicative(&mut self) -> Result<f64, ParseError> {
        let mut value = self.parse_primary()?;

        loop {
            if self.match_token(&Token::Star(0)) {
                value *= self.parse_primary()?;
            } else if self.match_token(&Token::Slash(0)) {
                // IEEE semantics: x/0 is ±inf, 0/0 is NaN
                value /= self.parse_primary()?;
            } else {
                break;
            }
        }

        Ok(value)
    }

    /// Parse primary (number literals, parenthesized expressions)
    fn parse_primary(&mut self) -> Result<f64, ParseError> {
        if let Token::Number(text, _) = self.peek_token() {
            self.advance();
            return text
                .parse::<f64>()
                .map_err(|_| ParseError::InvalidNumber(text));
        }

        if self.match_token(&Token::LParen(0)) {
            let value = self.parse_additive()?;
            if !self.match_token(&Token::RParen(0)) {
                return Err(ParseError::MismatchedParen);
            }
            return Ok(value);
        }

        Err(ParseError::UnexpectedToken(self.peek_token()))
    }

    // ===== Helper methods =====

    fn match_token(&mut self, token: &Token) -> bool {
        if std::mem::discriminant(&self.peek_token())
            == std::mem::discriminant(token)
        {
            self.advance();
            true
        } else {
            false
        }
    }

    fn advance(&mut self) {
        if !self.is_at_end() {
            self.position += 1;
        }
    }

    fn is_at_end(&self) -> bool {
        matches!(self.peek_token(), Token::Eof(_))
    }

    fn peek_token(&self) -> Token {
        self.tokens[self.position].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lexer::Lexer;

    fn eval(input: &str) -> Result<f64, ParseError> {
        let tokens = Lexer::new(input).tokenize().unwrap();
        Parser::new(tokens).evaluate()
    }

    #[test]
    fn test_precedence() {
        assert_eq!(eval("2+3*4").unwrap(), 14.0);
        assert_eq!(eval("2*3+4").unwrap(), 10.0);
        assert_eq!(eval("10-4/2").unwrap(), 8.0);
    }

    #[test]
    fn test_parentheses() {
        assert_eq!(eval("(2+3)*4").unwrap(), 20.0);
        assert_eq!(eval("((1+1))").unwrap(), 2.0);
        assert_eq!(eval("2*(3+(4-1))").unwrap(), 12.0);
    }

    #[test]
    fn test_left_associativity() {
        assert_eq!(eval("10-2-3").unwrap(), 5.0);
        assert_eq!(eval("100/5/2").unwrap(), 10.0);
    }

    #[test]
    fn test_division_by_zero_is_ieee() {
        assert_eq!(eval("1/0").unwrap(), f64::INFINITY);
        assert!(eval("0/0").unwrap().is_nan());
    }

    #[test]
    fn test_invalid_number() {
        assert_eq!(
            eval("1.2.3"),
            Err(ParseError::InvalidNumber("1.2.3".to_string()))
        );
    }

    #[test]
    fn test_mismatched_paren() {
        assert_eq!(eval("(2+3"), Err(ParseError::MismatchedParen));
        assert_eq!(eval("(1+(2*3)"), Err(ParseError::MismatchedParen));
    }

    #[test]
    fn test_operator_in_value_position() {
        assert!(matches!(
            eval("2+*3"),
            Err(ParseError::UnexpectedToken(Token::Star(_)))
        ));
        assert!(matches!(
            eval("*2"),
            Err(ParseError::UnexpectedToken(Token::Star(_)))
        ));
    }

    #[test]
    fn test_value_expected_at_end() {
        assert!(matches!(
            eval("2+"),
            Err(ParseError::UnexpectedToken(Token::Eof(_)))
        ));
        assert!(matches!(
            eval(""),
            Err(ParseError::UnexpectedToken(Token::Eof(_)))
        ));
    }

    #[test]
    fn test_trailing_tokens_rejected() {
        assert!(matches!(
            eval("2+2)"),
            Err(ParseError::UnexpectedToken(Token::RParen(_)))
        ));
        assert!(matches!(
            eval("2 2"),
            Err(ParseError::UnexpectedToken(Token::Number(_, _)))
        ));
        assert!(matches!(
            eval("(1+1))"),
            Err(ParseError::UnexpectedToken(Token::RParen(_)))
        ));
    }
}
