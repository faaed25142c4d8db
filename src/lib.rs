//! # Introduction
//!
//! calctty evaluates four-function arithmetic expressions and presents them
//! through a keypad-style terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Evaluation pipeline
//!
//! ```text
//! Input text → Lexer → Tokens → Recursive descent evaluator → f64
//! ```
//!
//! 1. [`parser`] — tokenises the input and evaluates it in one pass; the
//!    public boundary is [`parser::evaluate`], a pure function returning
//!    either a number or a descriptive error.
//! 2. [`ui`] — ratatui-based keypad and display; not part of the stable
//!    library API. All error state lives here, never in the core.
//!
//! ## Supported expressions
//!
//! Non-negative decimal literals, `+ - * /` with standard precedence and
//! left associativity, and parentheses. Division by zero follows IEEE
//! floating-point semantics (±infinity, NaN) rather than erroring.

pub mod parser;
pub mod ui;

pub use parser::{evaluate, EvalError};
