//! Visitor pattern for traversing goals

use super::nodes::{Expression, Fact, Goal, Rule};
use crate::symbol::{Symbol, Term};

/// Visitor trait for goal traversal
pub trait Visitor: Sized {
    /// Visit a rule
    fn visit_rule(&mut self, rule: &Rule) {
        walk_rule(self, rule);
    }

    /// Visit a goal
    fn visit_goal(&mut self, goal: &Goal) {
        walk_goal(self, goal);
    }

    /// Visit an expression
    fn visit_expression(&mut self, expr: &Expression) {
        walk_expression(self, expr);
    }

    /// Visit a fact
    fn visit_fact(&mut self, fact: &Fact) {
        walk_fact(self, fact);
    }

    /// Visit a term
    fn visit_term(&mut self, _term: &Term) {
        // Leaf node, no children
    }
}

/// Walk a rule: head first, then body
pub fn walk_rule<V: Visitor>(visitor: &mut V, rule: &Rule) {
    visitor.visit_fact(rule.head());
    visitor.visit_goal(rule.body());
}

/// Walk a goal
pub fn walk_goal<V: Visitor>(visitor: &mut V, goal: &Goal) {
    match goal {
        Goal::Fact(fact) => visitor.visit_fact(fact),
        Goal::Expression(expr) => visitor.visit_expression(expr),
    }
}

/// Walk an expression, left operand first
pub fn walk_expression<V: Visitor>(visitor: &mut V, expr: &Expression) {
    visitor.visit_goal(expr.left());
    visitor.visit_goal(expr.right());
}

/// Walk the arguments of a fact
pub fn walk_fact<V: Visitor>(visitor: &mut V, fact: &Fact) {
    for term in fact.arguments() {
        visitor.visit_term(term);
    }
}

/// Collects distinct variables in first-seen order
#[derive(Debug, Default)]
pub struct VariableCollector {
    variables: Vec<Symbol>,
}

impl VariableCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_variables(self) -> Vec<Symbol> {
        self.variables
    }
}

impl Visitor for VariableCollector {
    fn visit_term(&mut self, term: &Term) {
        if let Term::Variable(symbol) = term {
            if !self.variables.contains(symbol) {
                self.variables.push(*symbol);
            }
        }
    }
}

/// Distinct variables of a goal, depth-first and left to right
pub fn collect_variables(goal: &Goal) -> Vec<Symbol> {
    let mut collector = VariableCollector::new();
    collector.visit_goal(goal);
    collector.into_variables()
}
