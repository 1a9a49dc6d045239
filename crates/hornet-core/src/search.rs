//! Candidate substitutions for existential queries
//!
//! Every assignment of atoms to the query's variables, in lexicographic order
//! over the atom domain with the rightmost variable cycling fastest. The
//! sequence is produced lazily, so stopping at the first solution never
//! builds the whole product.

use crate::substitution::Substitution;
use crate::symbol::{Symbol, Term};

/// Lazy Cartesian product of the atom domain over a list of variables
#[derive(Debug, Clone)]
pub struct Candidates<'a> {
    domain: &'a [Symbol],
    variables: &'a [Symbol],
    odometer: Vec<usize>,
    exhausted: bool,
}

impl<'a> Candidates<'a> {
    pub fn new(domain: &'a [Symbol], variables: &'a [Symbol]) -> Self {
        Self {
            domain,
            variables,
            odometer: vec![0; variables.len()],
            exhausted: domain.is_empty() && !variables.is_empty(),
        }
    }

    /// Number of candidates the full sequence holds
    pub fn total(&self) -> usize {
        self.domain.len().saturating_pow(self.variables.len() as u32)
    }

    fn advance(&mut self) {
        for digit in self.odometer.iter_mut().rev() {
            *digit += 1;
            if *digit < self.domain.len() {
                return;
            }
            *digit = 0;
        }
        self.exhausted = true;
    }
}

impl Iterator for Candidates<'_> {
    type Item = Substitution;

    fn next(&mut self) -> Option<Substitution> {
        if self.exhausted {
            return None;
        }

        let substitution = self
            .variables
            .iter()
            .zip(&self.odometer)
            .map(|(&variable, &digit)| (variable, Term::Atom(self.domain[digit])))
            .collect();

        self.advance();
        Some(substitution)
    }
}
