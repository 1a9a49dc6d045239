//! Fact, rule and query parser
//!
//! Grammar, outermost first:
//!
//! ```text
//! statement := fact [":-" and_expr] "."
//! query     := and_expr "."
//! and_expr  := or_expr {"," or_expr}
//! or_expr   := primary {";" primary}
//! primary   := "(" and_expr ")" | fact
//! fact      := ident "(" [ident {"," ident}] ")"
//! ```

pub mod lexer;
pub mod parse;
pub mod token;

pub use lexer::{LexError, Lexer};
pub use parse::{ParseError, Parser};
pub use token::{Token, TokenKind};
