//! Knowledge base of ground facts and rules
//!
//! Both lists are append-only and keep insertion order. Rules are indexed by
//! head predicate; the index keeps insertion order within each predicate.

use crate::ast::{Fact, Rule};
use crate::symbol::Symbol;
use crate::{Error, Result};
use ahash::{AHashMap, AHashSet};

/// Stored facts and rules
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    facts: Vec<Fact>,
    known: AHashSet<Fact>,
    rules: Vec<Rule>,
    index_by_predicate: AHashMap<Symbol, Vec<usize>>,
}

impl KnowledgeBase {
    /// Create an empty knowledge base
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a ground fact. Returns `false` if an equal fact is already stored.
    pub fn insert_fact(&mut self, fact: Fact) -> Result<bool> {
        if fact.has_variables() {
            return Err(Error::InvalidStatement(
                "only ground facts can be stored".to_string(),
            ));
        }
        if self.known.contains(&fact) {
            tracing::debug!(total = self.facts.len(), "fact already known");
            return Ok(false);
        }

        self.known.insert(fact.clone());
        self.facts.push(fact);
        tracing::debug!(total = self.facts.len(), "fact stored");
        Ok(true)
    }

    /// Add a rule. Returns `false` if an equal rule is already stored.
    pub fn insert_rule(&mut self, rule: Rule) -> bool {
        let predicate = rule.head().predicate();
        if self.rules_for(predicate).any(|existing| *existing == rule) {
            tracing::debug!(total = self.rules.len(), "rule already known");
            return false;
        }

        let rule_idx = self.rules.len();
        self.index_by_predicate.entry(predicate).or_default().push(rule_idx);
        self.rules.push(rule);
        tracing::debug!(total = self.rules.len(), "rule stored");
        true
    }

    /// Whether this exact ground fact is stored
    pub fn contains_fact(&self, fact: &Fact) -> bool {
        self.known.contains(fact)
    }

    /// Rules whose head uses `predicate`, in insertion order
    pub fn rules_for(&self, predicate: Symbol) -> impl Iterator<Item = &Rule> + '_ {
        self.index_by_predicate
            .get(&predicate)
            .into_iter()
            .flatten()
            .filter_map(|&idx| self.rules.get(idx))
    }

    /// All facts, in insertion order
    pub fn facts(&self) -> &[Fact] {
        &self.facts
    }

    /// All rules, in insertion order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.facts.len() + self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty() && self.rules.is_empty()
    }
}
