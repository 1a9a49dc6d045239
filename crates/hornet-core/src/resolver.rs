//! Resolution engine
//!
//! Ground goals are proven by backward chaining: rules for the goal's
//! predicate are tried in insertion order, and the stored facts are the
//! fallback. Goals with free variables are answered by trying every
//! assignment of atoms to the variables (see [`Candidates`]).
//!
//! There is no cycle detection. A rule that calls itself with unchanged
//! arguments recurses until `max_depth` rule applications are nested, and
//! evaluation then fails with [`Error::RecursionLimit`]. [`Resolver::evaluate`]
//! runs on its own thread whose stack is sized from `max_depth`, so the limit
//! is hit before the stack is exhausted whatever thread the caller is on.

use crate::ast::{collect_variables, Fact, Goal, LogicalOp, Pretty};
use crate::config::{EngineConfig, MAX_DEPTH_CEILING};
use crate::knowledge::KnowledgeBase;
use crate::matcher::match_head;
use crate::search::Candidates;
use crate::substitution::Substitution;
use crate::symbol::SymbolTable;
use crate::{Error, Result};
use std::{panic, thread};

/// Result of evaluating a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// A ground query is simply true or false
    Truth(bool),
    /// Every satisfying assignment of a query with variables, in search order
    Solutions(Vec<Substitution>),
}

impl Answer {
    /// True if the query holds at least once
    pub fn is_success(&self) -> bool {
        match self {
            Answer::Truth(holds) => *holds,
            Answer::Solutions(solutions) => !solutions.is_empty(),
        }
    }
}

/// Evaluates goals against a knowledge base
pub struct Resolver<'a> {
    symbols: &'a SymbolTable,
    knowledge: &'a KnowledgeBase,
    max_depth: usize,
    stack_size: usize,
}

impl<'a> Resolver<'a> {
    pub fn new(symbols: &'a SymbolTable, knowledge: &'a KnowledgeBase, config: &EngineConfig) -> Self {
        Self {
            symbols,
            knowledge,
            max_depth: config.max_depth.min(MAX_DEPTH_CEILING),
            stack_size: config.stack_size(),
        }
    }

    /// Evaluate a query: all solutions if it has variables, else true/false
    pub fn evaluate(&self, goal: &Goal) -> Result<Answer> {
        thread::scope(|scope| {
            let handle = thread::Builder::new()
                .name("hornet-resolver".to_string())
                .stack_size(self.stack_size)
                .spawn_scoped(scope, || self.evaluate_here(goal))
                .map_err(|e| Error::Thread(e.to_string()))?;
            handle.join().unwrap_or_else(|payload| panic::resume_unwind(payload))
        })
    }

    /// [`evaluate`](Self::evaluate) on the caller's stack
    fn evaluate_here(&self, goal: &Goal) -> Result<Answer> {
        if goal.has_variables() {
            Ok(Answer::Solutions(self.evaluate_existential(goal, true, 0)?))
        } else {
            Ok(Answer::Truth(self.evaluate_ground(goal, 0)?))
        }
    }

    /// Prove a goal without variables. Runs on the caller's stack.
    pub fn evaluate_ground(&self, goal: &Goal, depth: usize) -> Result<bool> {
        if goal.has_variables() {
            return Err(Error::InvalidQuery(format!(
                "ground evaluation of {}",
                Pretty::new(goal, self.symbols)
            )));
        }
        tracing::trace!(depth, goal = %Pretty::new(goal, self.symbols), "ground query");

        match goal {
            Goal::Fact(fact) => self.prove_fact(fact, depth),
            Goal::Expression(expr) => match expr.op() {
                LogicalOp::And => Ok(self.evaluate_ground(expr.left(), depth)?
                    && self.evaluate_ground(expr.right(), depth)?),
                LogicalOp::Or => Ok(self.evaluate_ground(expr.left(), depth)?
                    || self.evaluate_ground(expr.right(), depth)?),
            },
        }
    }

    /// Find assignments of atoms to the goal's variables that make it hold.
    ///
    /// With `need_all_answers` false the search stops at the first solution.
    pub fn evaluate_existential(
        &self,
        goal: &Goal,
        need_all_answers: bool,
        depth: usize,
    ) -> Result<Vec<Substitution>> {
        if !goal.has_variables() {
            return Err(Error::InvalidQuery(format!(
                "existential evaluation of {}",
                Pretty::new(goal, self.symbols)
            )));
        }

        let variables = collect_variables(goal);
        let candidates = Candidates::new(self.symbols.atoms(), &variables);
        tracing::trace!(
            depth,
            goal = %Pretty::new(goal, self.symbols),
            candidates = candidates.total(),
            "existential query"
        );

        let mut solutions = Vec::new();
        for candidate in candidates {
            let grounded = candidate.apply(goal)?;
            if self.evaluate_ground(&grounded, depth)? {
                solutions.push(candidate);
                if !need_all_answers {
                    break;
                }
            }
        }

        Ok(solutions)
    }

    fn prove_fact(&self, fact: &Fact, depth: usize) -> Result<bool> {
        for rule in self.knowledge.rules_for(fact.predicate()) {
            let bindings = match match_head(rule.head(), fact) {
                Ok(Some(bindings)) => bindings,
                Ok(None) => continue,
                Err(repeated) => {
                    return Err(Error::UnsupportedPattern {
                        predicate: self.symbols.name(fact.predicate()).to_string(),
                        name: self.symbols.name(repeated.name).to_string(),
                    })
                }
            };

            let next_depth = depth + 1;
            if next_depth > self.max_depth {
                return Err(Error::RecursionLimit { limit: self.max_depth });
            }

            let body = bindings.apply(rule.body())?;
            if self.holds(&body, next_depth)? {
                return Ok(true);
            }
        }

        Ok(self.knowledge.contains_fact(fact))
    }

    /// Existence check used for rule bodies: one witness is enough
    fn holds(&self, goal: &Goal, depth: usize) -> Result<bool> {
        if goal.has_variables() {
            Ok(!self.evaluate_existential(goal, false, depth)?.is_empty())
        } else {
            self.evaluate_ground(goal, depth)
        }
    }
}
