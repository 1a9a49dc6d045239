//! Statements entering the knowledge base

use super::load;
use hornet_core::{Environment, Statement};

#[test]
fn test_statements_are_idempotent() {
    let mut env = load(
        "
        parent(tom, bob).
        kin(X, Y) :- parent(X, Y).
        ",
    );
    assert!(!env.consult("parent(tom, bob).").unwrap());
    assert!(!env.consult("kin(X, Y) :- parent(X, Y).").unwrap());
    assert_eq!(env.knowledge().facts().len(), 1);
    assert_eq!(env.knowledge().rules().len(), 1);
}

#[test]
fn test_listing_in_insertion_order() {
    let env = load(
        "
        b(x).
        a(y).
        r(X) :- b(X).
        q(X) :- a(X), b(X).
        ",
    );
    let facts: Vec<String> =
        env.knowledge().facts().iter().map(|f| env.pretty(f).to_string()).collect();
    assert_eq!(facts, vec!["b(x)", "a(y)"]);

    let rules: Vec<String> =
        env.knowledge().rules().iter().map(|r| env.pretty(r).to_string()).collect();
    assert_eq!(rules, vec!["r(X) :- b(X)", "q(X) :- (a(X), b(X))"]);
}

#[test]
fn test_parse_statement_does_not_insert() {
    let mut env = Environment::new();
    let statement = env.parse_statement("p(a).").unwrap();
    assert!(matches!(statement, Statement::Fact(_)));
    assert!(env.knowledge().is_empty());
    assert!(env.insert(statement).unwrap());
    assert_eq!(env.knowledge().len(), 1);
}

#[test]
fn test_whitespace_is_insignificant() {
    let mut env = Environment::new();
    env.consult("  parent ( tom ,bob ) .  ").unwrap();
    assert!(env.query("parent(tom, bob).").unwrap().is_success());
}
