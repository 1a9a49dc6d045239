//! Token definitions for the fact/rule/query language

use std::fmt;

/// A token with position information
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The source text for this token
    pub text: String,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

impl Token {
    /// Create a new token
    pub fn new(kind: TokenKind, text: String, line: usize, column: usize) -> Self {
        Self { kind, text, line, column }
    }
}

/// The kind of token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    // Identifiers (atoms, variables and predicates alike)
    Ident(String),

    // Punctuation
    LParen,    // (
    RParen,    // )
    Period,    // .
    Comma,     // ,
    Semicolon, // ;
    ColonDash, // :-

    // Special
    Eof,
}

impl TokenKind {
    /// Map a single punctuation character to its token
    pub fn punctuation(ch: char) -> Option<TokenKind> {
        match ch {
            '(' => Some(TokenKind::LParen),
            ')' => Some(TokenKind::RParen),
            '.' => Some(TokenKind::Period),
            ',' => Some(TokenKind::Comma),
            ';' => Some(TokenKind::Semicolon),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Ident(s) => write!(f, "{}", s),
            TokenKind::LParen => write!(f, "("),
            TokenKind::RParen => write!(f, ")"),
            TokenKind::Period => write!(f, "."),
            TokenKind::Comma => write!(f, ","),
            TokenKind::Semicolon => write!(f, ";"),
            TokenKind::ColonDash => write!(f, ":-"),
            TokenKind::Eof => write!(f, "EOF"),
        }
    }
}
