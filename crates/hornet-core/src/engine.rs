//! Interpreter environment
//!
//! An [`Environment`] owns the symbol table and the knowledge base. It is the
//! boundary the read loop talks to: parse a statement or a query, insert
//! statements, evaluate queries. A line that fails leaves both tables as they
//! were before it started.

use crate::ast::{Fact, Goal, Pretty, Render, Rule, Statement};
use crate::config::EngineConfig;
use crate::knowledge::KnowledgeBase;
use crate::parser::Parser;
use crate::resolver::{Answer, Resolver};
use crate::substitution::Substitution;
use crate::symbol::SymbolTable;
use crate::Result;
use serde::{Deserialize, Serialize};

/// One variable binding of a solution, by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    pub variable: String,
    pub value: String,
}

/// Symbol table, knowledge base and configuration of one interpreter
#[derive(Debug, Clone, Default)]
pub struct Environment {
    symbols: SymbolTable,
    knowledge: KnowledgeBase,
    config: EngineConfig,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self { config, ..Self::default() }
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Parse a fact or rule. Names it introduces stay registered only if
    /// parsing succeeds.
    pub fn parse_statement(&mut self, source: &str) -> Result<Statement> {
        self.transaction(|symbols| Parser::new(source, symbols).parse_statement())
    }

    /// Parse a query. Names it introduces stay registered only if parsing
    /// succeeds.
    pub fn parse_query(&mut self, source: &str) -> Result<Goal> {
        self.transaction(|symbols| Parser::new(source, symbols).parse_query())
    }

    /// Store a ground fact; `false` if it was already known
    pub fn insert_fact(&mut self, fact: Fact) -> Result<bool> {
        self.knowledge.insert_fact(fact)
    }

    /// Store a rule; `false` if it was already known
    pub fn insert_rule(&mut self, rule: Rule) -> bool {
        self.knowledge.insert_rule(rule)
    }

    pub fn insert(&mut self, statement: Statement) -> Result<bool> {
        match statement {
            Statement::Fact(fact) => self.insert_fact(fact),
            Statement::Rule(rule) => Ok(self.insert_rule(rule)),
        }
    }

    /// Parse a statement and store it
    pub fn consult(&mut self, source: &str) -> Result<bool> {
        let statement = self.parse_statement(source)?;
        self.insert(statement)
    }

    /// Evaluate an already parsed query
    pub fn evaluate(&self, goal: &Goal) -> Result<Answer> {
        Resolver::new(&self.symbols, &self.knowledge, &self.config).evaluate(goal)
    }

    /// Parse and evaluate a query. If evaluation fails, the names the query
    /// introduced are forgotten as well.
    pub fn query(&mut self, source: &str) -> Result<Answer> {
        let mark = self.symbols.mark();
        let goal = self.parse_query(source)?;
        let answer = self.evaluate(&goal);
        if answer.is_err() {
            self.symbols.rollback(mark);
        }
        answer
    }

    /// Render a node with this environment's names
    pub fn pretty<'a, T: Render + ?Sized>(&'a self, value: &'a T) -> Pretty<'a, T> {
        Pretty::new(value, &self.symbols)
    }

    /// Name the bindings of a solution
    pub fn bindings(&self, solution: &Substitution) -> Vec<Binding> {
        solution
            .iter()
            .map(|(variable, term)| Binding {
                variable: self.symbols.name(variable).to_string(),
                value: self.symbols.name(term.symbol()).to_string(),
            })
            .collect()
    }

    fn transaction<T>(&mut self, parse: impl FnOnce(&mut SymbolTable) -> Result<T>) -> Result<T> {
        let mark = self.symbols.mark();
        let result = parse(&mut self.symbols);
        if result.is_err() {
            self.symbols.rollback(mark);
        }
        result
    }
}
