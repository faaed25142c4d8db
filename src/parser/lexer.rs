//! Lexer (tokenizer) for calculator expressions
//!
//! Converts raw input text into a flat [`Token`] stream consumed by the
//! parser. The lexer is deliberately permissive about number literals: it
//! greedily collects digits and decimal points into one token without
//! checking that only a single point appears, deferring that to numeric
//! conversion in the parser.

use std::fmt;

/// All token variants produced by the lexer.
///
/// Every variant carries the character index where the token starts so that
/// parse errors can report an accurate position without a separate
/// token→position table.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Number literal, kept as raw text until conversion at parse time
    Number(String, usize),

    // Operators
    Plus(usize),  // +
    Minus(usize), // -
    Star(usize),  // *
    Slash(usize), // /

    // Grouping
    LParen(usize), // (
    RParen(usize), // )

    // End of input
    Eof(usize),
}

impl Token {
    /// Returns the character index where this token appears.
    pub fn position(&self) -> usize {
        match self {
            Token::Number(_, pos)
            | Token::Plus(pos)
            | Token::Minus(pos)
            | Token::Star(pos)
            | Token::Slash(pos)
            | Token::LParen(pos)
            | Token::RParen(pos)
            | Token::Eof(pos) => *pos,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(text, _) => write!(f, "number '{}'", text),
            Token::Plus(_) => write!(f, "'+'"),
            Token::Minus(_) => write!(f, "'-'"),
            Token::Star(_) => write!(f, "'*'"),
            Token::Slash(_) => write!(f, "'/'"),
            Token::LParen(_) => write!(f, "'('"),
            Token::RParen(_) => write!(f, "')'"),
            Token::Eof(_) => write!(f, "end of input"),
        }
    }
}

/// Lexer error type
///
/// Carries the offending character and its index. Tokenization aborts
/// immediately; no partial token stream is returned.
#[derive(Debug, Clone, PartialEq)]
pub struct LexError {
    pub character: char,
    pub position: usize,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid character '{}' at position {}",
            self.character, self.position
        )
    }
}

impl std::error::Error for LexError {}

/// Lexer for calculator expressions
pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    /// Create a new lexer for the given input string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();

            if self.is_at_end() {
                tokens.push(Token::Eof(self.position));
                break;
            }

            tokens.push(self.next_token()?);
        }

        Ok(tokens)
    }

    /// Get next token
    fn next_token(&mut self) -> Result<Token, LexError> {
        let pos = self.position;
        // skip_whitespace already ensured a character is present
        let ch = self.advance().ok_or(LexError {
            character: '\0',
            position: pos,
        })?;

        match ch {
            '0'..='9' => Ok(self.number_literal(ch, pos)),
            '+' => Ok(Token::Plus(pos)),
            '-' => Ok(Token::Minus(pos)),
            '*' => Ok(Token::Star(pos)),
            '/' => Ok(Token::Slash(pos)),
            '(' => Ok(Token::LParen(pos)),
            ')' => Ok(Token::RParen(pos)),
            _ => Err(LexError {
                character: ch,
                position: pos,
            }),
        }
    }

    /// Scan a number literal (digits and decimal points)
    ///
    /// Greedy: `1.2.3` is collected into a single token and only fails later
    /// at numeric conversion.
    fn number_literal(&mut self, first_digit: char, pos: usize) -> Token {
        let mut num_str = String::new();
        num_str.push(first_digit);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() || ch == '.' {
                num_str.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        Token::Number(num_str, pos)
    }

    /// Skip whitespace
    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.input.get(self.position).copied();
        if ch.is_some() {
            self.position += 1;
        }
        ch
    }

    /// Check if at end of input
    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }
}
