//! Lexer for the fact/rule/query language
//!
//! The lexer produces tokens on demand and keeps one token of lookahead.
//! An unrecognized character is fatal: there is no resynchronization.

use super::token::{Token, TokenKind};
use thiserror::Error;

/// Unrecognized character in the input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unexpected character '{ch}' at {line}:{column}")]
pub struct LexError {
    pub ch: char,
    pub line: usize,
    pub column: usize,
}

/// Lexer for tokenizing source text
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
    peeked: Option<Token>,
}

impl Lexer {
    /// Create a new lexer from source code
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
            peeked: None,
        }
    }

    /// Consume and return the next token
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        match self.peeked.take() {
            Some(token) => Ok(token),
            None => self.scan_token(),
        }
    }

    /// Look at the next token without consuming it
    pub fn peek_token(&mut self) -> Result<&Token, LexError> {
        let token = match self.peeked.take() {
            Some(token) => token,
            None => self.scan_token()?,
        };
        Ok(&*self.peeked.insert(token))
    }

    fn scan_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();

        let start_line = self.line;
        let start_column = self.column;

        if self.is_at_end() {
            return Ok(Token::new(TokenKind::Eof, String::new(), start_line, start_column));
        }

        let ch = self.current_char();

        if ch.is_alphabetic() || ch == '_' {
            return Ok(self.lex_identifier());
        }

        if let Some(kind) = TokenKind::punctuation(ch) {
            self.advance();
            return Ok(Token::new(kind, ch.to_string(), start_line, start_column));
        }

        if ch == ':' && self.peek_char() == Some('-') {
            self.advance();
            self.advance();
            return Ok(Token::new(TokenKind::ColonDash, ":-".to_string(), start_line, start_column));
        }

        Err(LexError { ch, line: start_line, column: start_column })
    }

    fn current_char(&self) -> char {
        self.input[self.position]
    }

    fn peek_char(&self) -> Option<char> {
        self.input.get(self.position + 1).copied()
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn advance(&mut self) -> char {
        let ch = self.current_char();
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        ch
    }

    fn skip_whitespace(&mut self) {
        while !self.is_at_end() && self.current_char().is_whitespace() {
            self.advance();
        }
    }

    fn lex_identifier(&mut self) -> Token {
        let start_line = self.line;
        let start_column = self.column;

        let mut ident = String::new();
        while !self.is_at_end() {
            let ch = self.current_char();
            if ch.is_alphabetic() || ch == '_' {
                ident.push(self.advance());
            } else {
                break;
            }
        }

        Token::new(TokenKind::Ident(ident.clone()), ident, start_line, start_column)
    }
}
