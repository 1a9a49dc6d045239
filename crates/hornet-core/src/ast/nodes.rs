//! AST node definitions

use crate::symbol::{Symbol, Term, TermKind};
use crate::{Error, Result};
use std::fmt;

/// A predicate applied to atoms and variables
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fact {
    predicate: Symbol,
    arguments: Vec<Term>,
    has_variables: bool,
}

impl Fact {
    /// Create a fact, checking the kinds of the predicate and its arguments
    pub fn new(predicate: Term, arguments: Vec<Term>) -> Result<Self> {
        let predicate = match predicate {
            Term::Predicate(symbol) => symbol,
            other => {
                return Err(Error::InvalidStatement(format!(
                    "a {} cannot be applied as a predicate",
                    other.kind()
                )))
            }
        };

        if let Some(bad) = arguments.iter().find(|arg| arg.kind() == TermKind::Predicate) {
            return Err(Error::InvalidStatement(format!(
                "a {} cannot appear as an argument",
                bad.kind()
            )));
        }

        let has_variables = arguments.iter().any(Term::is_variable);
        Ok(Self { predicate, arguments, has_variables })
    }

    pub fn predicate(&self) -> Symbol {
        self.predicate
    }

    pub fn arguments(&self) -> &[Term] {
        &self.arguments
    }

    pub fn arity(&self) -> usize {
        self.arguments.len()
    }

    /// True if any argument is a variable
    pub fn has_variables(&self) -> bool {
        self.has_variables
    }
}

/// Logical connectives between goals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalOp {
    And,
    Or,
}

impl fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicalOp::And => write!(f, ","),
            LogicalOp::Or => write!(f, ";"),
        }
    }
}

/// A binary connective over two goals
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Expression {
    left: Box<Goal>,
    op: LogicalOp,
    right: Box<Goal>,
    has_variables: bool,
}

impl Expression {
    pub fn new(left: Goal, op: LogicalOp, right: Goal) -> Self {
        let has_variables = left.has_variables() || right.has_variables();
        Self {
            left: Box::new(left),
            op,
            right: Box::new(right),
            has_variables,
        }
    }

    pub fn left(&self) -> &Goal {
        &self.left
    }

    pub fn right(&self) -> &Goal {
        &self.right
    }

    pub fn op(&self) -> LogicalOp {
        self.op
    }

    pub fn has_variables(&self) -> bool {
        self.has_variables
    }
}

/// Something that can be proven: a single fact or a connective of goals
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Goal {
    Fact(Fact),
    Expression(Expression),
}

impl Goal {
    pub fn has_variables(&self) -> bool {
        match self {
            Goal::Fact(fact) => fact.has_variables(),
            Goal::Expression(expr) => expr.has_variables(),
        }
    }
}

impl From<Fact> for Goal {
    fn from(fact: Fact) -> Self {
        Goal::Fact(fact)
    }
}

impl From<Expression> for Goal {
    fn from(expr: Expression) -> Self {
        Goal::Expression(expr)
    }
}

/// `head :- body`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rule {
    head: Fact,
    body: Goal,
}

impl Rule {
    /// Create a rule. Both the head and the body must mention a variable.
    pub fn new(head: Fact, body: Goal) -> Result<Self> {
        if !head.has_variables() {
            return Err(Error::InvalidStatement(
                "rule head must contain a variable".to_string(),
            ));
        }
        if !body.has_variables() {
            return Err(Error::InvalidStatement(
                "rule body must contain a variable".to_string(),
            ));
        }
        Ok(Self { head, body })
    }

    pub fn head(&self) -> &Fact {
        &self.head
    }

    pub fn body(&self) -> &Goal {
        &self.body
    }
}

/// A line of a program: a ground fact or a rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Fact(Fact),
    Rule(Rule),
}
