//! Parser implementation for statements and queries
//!
//! Recursive descent with a small precedence table for the two connectives.
//! Identifiers are interned into the symbol table as they are parsed; the
//! caller is responsible for rolling the table back if parsing fails.

use super::lexer::Lexer;
use super::token::{Token, TokenKind};
use crate::ast::{Expression, Fact, Goal, LogicalOp, Rule, Statement};
use crate::symbol::{SymbolTable, Term, TermKind};
use crate::{Error, Result};

/// Parse error
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unexpected token at {line}:{column}: expected {expected}, got {got}")]
    UnexpectedToken {
        expected: String,
        got: String,
        line: usize,
        column: usize,
    },
}

/// Connectives by precedence level, outermost first.
///
/// Every level takes its operands from the next one down, so `;` binds
/// tighter than `,`: `a, b; c` is `a, (b; c)`.
const PRECEDENCE: [LogicalOp; 2] = [LogicalOp::And, LogicalOp::Or];

fn operator_token(op: LogicalOp) -> TokenKind {
    match op {
        LogicalOp::And => TokenKind::Comma,
        LogicalOp::Or => TokenKind::Semicolon,
    }
}

/// Parser for a single line of input
pub struct Parser<'a> {
    lexer: Lexer,
    symbols: &'a mut SymbolTable,
}

impl<'a> Parser<'a> {
    /// Create a new parser over `source`, interning names into `symbols`
    pub fn new(source: &str, symbols: &'a mut SymbolTable) -> Self {
        Self { lexer: Lexer::new(source), symbols }
    }

    /// Parse a ground fact or a rule, terminated by a period
    pub fn parse_statement(&mut self) -> Result<Statement> {
        let head = self.parse_fact()?;

        if self.take_token(&TokenKind::ColonDash)? {
            let body = self.parse_expression()?;
            self.expect_end()?;
            return Ok(Statement::Rule(Rule::new(head, body)?));
        }

        self.expect_end()?;
        if head.has_variables() {
            return Err(Error::InvalidStatement(
                "a fact with variables needs a rule body".to_string(),
            ));
        }
        Ok(Statement::Fact(head))
    }

    /// Parse a fact or expression, terminated by a period
    pub fn parse_query(&mut self) -> Result<Goal> {
        let goal = self.parse_expression()?;
        self.expect_end()?;
        Ok(goal)
    }

    /// Parse a fact or expression
    pub fn parse_expression(&mut self) -> Result<Goal> {
        self.parse_level(0)
    }

    fn parse_level(&mut self, level: usize) -> Result<Goal> {
        let Some(&op) = PRECEDENCE.get(level) else {
            return self.parse_primary();
        };
        let token = operator_token(op);

        let mut left = self.parse_level(level + 1)?;
        while self.take_token(&token)? {
            let right = self.parse_level(level + 1)?;
            left = Goal::Expression(Expression::new(left, op, right));
        }

        Ok(left)
    }

    fn parse_primary(&mut self) -> Result<Goal> {
        if self.take_token(&TokenKind::LParen)? {
            let goal = self.parse_expression()?;
            self.expect_token(TokenKind::RParen)?;
            return Ok(goal);
        }

        Ok(Goal::Fact(self.parse_fact()?))
    }

    /// Parse `name(arg, ...)`; zero arguments are allowed
    pub fn parse_fact(&mut self) -> Result<Fact> {
        let name = self.expect_identifier()?;
        self.expect_token(TokenKind::LParen)?;

        let mut arguments = Vec::new();
        if !self.check_token(&TokenKind::RParen)? {
            arguments.push(self.parse_atom_or_variable()?);
            while self.take_token(&TokenKind::Comma)? {
                arguments.push(self.parse_atom_or_variable()?);
            }
        }
        self.expect_token(TokenKind::RParen)?;

        let predicate = self.symbols.predicate(&name)?;
        Fact::new(predicate, arguments)
    }

    fn parse_atom_or_variable(&mut self) -> Result<Term> {
        let name = self.expect_identifier()?;
        let kind = if TermKind::Variable.accepts(&name) {
            TermKind::Variable
        } else {
            TermKind::Atom
        };
        self.symbols.intern(&name, kind)
    }

    // Helper methods

    fn check_token(&mut self, kind: &TokenKind) -> Result<bool> {
        Ok(&self.lexer.peek_token()?.kind == kind)
    }

    fn take_token(&mut self, kind: &TokenKind) -> Result<bool> {
        if self.check_token(kind)? {
            self.lexer.next_token()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn expect_token(&mut self, expected: TokenKind) -> Result<Token> {
        let token = self.lexer.next_token()?;
        if token.kind == expected {
            Ok(token)
        } else {
            Err(unexpected(expected.to_string(), &token))
        }
    }

    fn expect_identifier(&mut self) -> Result<String> {
        let token = self.lexer.next_token()?;
        match token.kind {
            TokenKind::Ident(name) => Ok(name),
            _ => Err(unexpected("identifier".to_string(), &token)),
        }
    }

    fn expect_end(&mut self) -> Result<()> {
        self.expect_token(TokenKind::Period)?;
        self.expect_token(TokenKind::Eof)?;
        Ok(())
    }
}

fn unexpected(expected: String, token: &Token) -> Error {
    Error::Syntax(ParseError::UnexpectedToken {
        expected,
        got: token.kind.to_string(),
        line: token.line,
        column: token.column,
    })
}
