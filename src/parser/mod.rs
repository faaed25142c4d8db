//! Expression evaluation core
//!
//! This module transforms calculator input text into a numeric value:
//! - [`lexer`]: Tokenization (input text → tokens)
//! - [`parser`]: Recursive descent evaluation (tokens → `f64`)
//!
//! # Supported grammar
//!
//! Non-negative decimal literals, the four binary operators `+ - * /` with
//! standard precedence, and parenthesized grouping. No unary minus,
//! exponentiation, functions, or variables.
//!
//! # Implementation
//!
//! Hand-written recursive descent with single-token lookahead. Values are
//! computed eagerly while parsing; no AST is built. The whole pipeline is
//! pure: [`evaluate`] has no side effects and repeated calls with the same
//! input always return the same result.

pub mod lexer;
pub mod parser;

use crate::parser::lexer::{LexError, Lexer};
use crate::parser::parser::{ParseError, Parser};
use std::fmt;

/// Any error produced while evaluating an expression
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    Lex(LexError),
    Parse(ParseError),
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::Lex(e) => write!(f, "{}", e),
            EvalError::Parse(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EvalError::Lex(e) => Some(e),
            EvalError::Parse(e) => Some(e),
        }
    }
}

impl From<LexError> for EvalError {
    fn from(err: LexError) -> Self {
        EvalError::Lex(err)
    }
}

impl From<ParseError> for EvalError {
    fn from(err: ParseError) -> Self {
        EvalError::Parse(err)
    }
}

/// Evaluate an expression string to a number.
///
/// This is the single boundary the UI calls into. On success the result is
/// a finite number, or ±infinity/NaN per IEEE division semantics; on failure
/// the error's `Display` impl is a human-readable message naming the cause.
pub fn evaluate(input: &str) -> Result<f64, EvalError> {
    let mut lexer = Lexer::new(input);
    let tokens = lexer.tokenize()?;

    let mut parser = Parser::new(tokens);
    Ok(parser.evaluate()?)
}
