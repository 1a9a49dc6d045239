//! Rule head matching
//!
//! A call matches a rule head when both have the same predicate and arity.
//! Head variables are bound positionally to the call's arguments. A head atom
//! accepts whatever argument sits in its position and binds nothing. Matching
//! failure is a plain `None`, never an error.

use crate::ast::Fact;
use crate::substitution::Substitution;
use crate::symbol::{Symbol, Term};

/// A rule head that names the same variable or atom twice
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("name repeated in rule head")]
pub struct RepeatedName {
    pub name: Symbol,
}

/// Match a rule head against a call
pub fn match_head(head: &Fact, call: &Fact) -> Result<Option<Substitution>, RepeatedName> {
    if head.predicate() != call.predicate() {
        return Ok(None);
    }
    match_arguments(head.arguments(), call.arguments())
}

/// Zip `pattern` with `terms` into a substitution.
///
/// Arity is checked before anything else, so a head with a repeated name
/// only fails once a call of the right arity reaches it.
pub fn match_arguments(pattern: &[Term], terms: &[Term]) -> Result<Option<Substitution>, RepeatedName> {
    if pattern.len() != terms.len() {
        return Ok(None);
    }

    if let Some(i) = (1..pattern.len()).find(|&i| pattern[..i].contains(&pattern[i])) {
        return Err(RepeatedName { name: pattern[i].symbol() });
    }

    let mut substitution = Substitution::with_capacity(pattern.len());
    for (expected, actual) in pattern.iter().zip(terms) {
        if let Term::Variable(variable) = expected {
            substitution.bind(*variable, *actual);
        }
    }

    Ok(Some(substitution))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::SymbolTable;

    #[test]
    fn test_binds_positionally() {
        let mut symbols = SymbolTable::new();
        let x = symbols.variable("X").unwrap();
        let y = symbols.variable("Y").unwrap();
        let tom = symbols.atom("tom").unwrap();
        let bob = symbols.atom("bob").unwrap();

        let substitution = match_arguments(&[x, y], &[tom, bob]).unwrap().unwrap();
        assert_eq!(substitution.get(x.symbol()), Some(tom));
        assert_eq!(substitution.get(y.symbol()), Some(bob));
    }

    #[test]
    fn test_arity_mismatch_is_no_match() {
        let mut symbols = SymbolTable::new();
        let x = symbols.variable("X").unwrap();
        let tom = symbols.atom("tom").unwrap();
        assert_eq!(match_arguments(&[x], &[tom, tom]).unwrap(), None);
        assert_eq!(match_arguments(&[x, x], &[tom]).unwrap(), None);
    }

    #[test]
    fn test_repeated_variable_is_an_error() {
        let mut symbols = SymbolTable::new();
        let x = symbols.variable("X").unwrap();
        let tom = symbols.atom("tom").unwrap();
        let err = match_arguments(&[x, x], &[tom, tom]).unwrap_err();
        assert_eq!(err.name, x.symbol());
    }

    #[test]
    fn test_repeated_atom_is_an_error() {
        let mut symbols = SymbolTable::new();
        let a = symbols.atom("a").unwrap();
        let b = symbols.atom("b").unwrap();
        let x = symbols.variable("X").unwrap();
        let err = match_arguments(&[a, a, x], &[a, a, b]).unwrap_err();
        assert_eq!(err.name, a.symbol());
    }

    #[test]
    fn test_head_atoms_accept_any_argument() {
        let mut symbols = SymbolTable::new();
        let mary = symbols.atom("mary").unwrap();
        let john = symbols.atom("john").unwrap();
        let x = symbols.variable("X").unwrap();
        let wine = symbols.atom("wine").unwrap();

        for caller in [john, mary] {
            let substitution = match_arguments(&[mary, x], &[caller, wine]).unwrap().unwrap();
            assert_eq!(substitution.len(), 1);
            assert_eq!(substitution.get(x.symbol()), Some(wine));
        }
    }

    #[test]
    fn test_match_head_checks_predicate() {
        let mut symbols = SymbolTable::new();
        let likes = symbols.predicate("likes").unwrap();
        let hates = symbols.predicate("hates").unwrap();
        let x = symbols.variable("X").unwrap();
        let tom = symbols.atom("tom").unwrap();

        let head = Fact::new(likes, vec![x]).unwrap();
        assert!(match_head(&head, &Fact::new(hates, vec![tom]).unwrap()).unwrap().is_none());
        assert!(match_head(&head, &Fact::new(likes, vec![tom]).unwrap()).unwrap().is_some());
    }
}
