//! Text rendering of AST nodes
//!
//! Nodes only hold symbol handles, so rendering goes through a [`Pretty`]
//! wrapper that borrows the symbol table.

use super::nodes::{Expression, Fact, Goal, Rule, Statement};
use crate::symbol::{SymbolTable, Term};
use std::fmt;

/// Something that can be written out given the symbol table
pub trait Render {
    fn render(&self, symbols: &SymbolTable, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// `Display` adapter pairing a node with its symbol table
pub struct Pretty<'a, T: ?Sized> {
    value: &'a T,
    symbols: &'a SymbolTable,
}

impl<'a, T: Render + ?Sized> Pretty<'a, T> {
    pub fn new(value: &'a T, symbols: &'a SymbolTable) -> Self {
        Self { value, symbols }
    }
}

impl<T: Render + ?Sized> fmt::Display for Pretty<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.render(self.symbols, f)
    }
}

impl Render for Term {
    fn render(&self, symbols: &SymbolTable, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", symbols.name(self.symbol()))
    }
}

impl Render for Fact {
    fn render(&self, symbols: &SymbolTable, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", symbols.name(self.predicate()))?;
        for (i, arg) in self.arguments().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            arg.render(symbols, f)?;
        }
        write!(f, ")")
    }
}

impl Render for Expression {
    fn render(&self, symbols: &SymbolTable, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        self.left().render(symbols, f)?;
        write!(f, "{} ", self.op())?;
        self.right().render(symbols, f)?;
        write!(f, ")")
    }
}

impl Render for Goal {
    fn render(&self, symbols: &SymbolTable, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Goal::Fact(fact) => fact.render(symbols, f),
            Goal::Expression(expr) => expr.render(symbols, f),
        }
    }
}

impl Render for Rule {
    fn render(&self, symbols: &SymbolTable, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.head().render(symbols, f)?;
        write!(f, " :- ")?;
        self.body().render(symbols, f)
    }
}

impl Render for Statement {
    fn render(&self, symbols: &SymbolTable, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Fact(fact) => fact.render(symbols, f),
            Statement::Rule(rule) => rule.render(symbols, f),
        }
    }
}
