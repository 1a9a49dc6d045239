//! Variable bindings and their application to facts and goals
//!
//! Applying a substitution never touches the original node: it builds a new
//! one through the regular constructors.

use crate::ast::{Expression, Fact, Goal};
use crate::symbol::{Symbol, Term};
use crate::Result;

/// Ordered mapping from variables to the terms bound to them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitution {
    bindings: Vec<(Symbol, Term)>,
}

impl Substitution {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { bindings: Vec::with_capacity(capacity) }
    }

    /// Bind `variable` to `term`, replacing an earlier binding
    pub fn bind(&mut self, variable: Symbol, term: Term) {
        match self.bindings.iter_mut().find(|(bound, _)| *bound == variable) {
            Some(slot) => slot.1 = term,
            None => self.bindings.push((variable, term)),
        }
    }

    pub fn get(&self, variable: Symbol) -> Option<Term> {
        self.bindings
            .iter()
            .find(|(bound, _)| *bound == variable)
            .map(|(_, term)| *term)
    }

    /// Bindings in the order they were made
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, Term)> + '_ {
        self.bindings.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Replace bound variables among the arguments of `fact`
    pub fn apply_fact(&self, fact: &Fact) -> Result<Fact> {
        let arguments = fact
            .arguments()
            .iter()
            .map(|term| match term {
                Term::Variable(symbol) => self.get(*symbol).unwrap_or(*term),
                Term::Atom(_) | Term::Predicate(_) => *term,
            })
            .collect();
        Fact::new(Term::Predicate(fact.predicate()), arguments)
    }

    /// Replace bound variables throughout `goal`
    pub fn apply(&self, goal: &Goal) -> Result<Goal> {
        match goal {
            Goal::Fact(fact) => Ok(Goal::Fact(self.apply_fact(fact)?)),
            Goal::Expression(expr) => Ok(Goal::Expression(Expression::new(
                self.apply(expr.left())?,
                expr.op(),
                self.apply(expr.right())?,
            ))),
        }
    }
}

impl FromIterator<(Symbol, Term)> for Substitution {
    fn from_iter<I: IntoIterator<Item = (Symbol, Term)>>(iter: I) -> Self {
        let mut substitution = Substitution::new();
        for (variable, term) in iter {
            substitution.bind(variable, term);
        }
        substitution
    }
}
