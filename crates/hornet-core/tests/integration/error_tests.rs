//! Failing lines abort cleanly and leave the environment untouched

use super::load;
use hornet_core::{Answer, Environment, Error, TermKind};

#[test]
fn test_name_kind_conflict_leaves_state_untouched() {
    let mut env = load("parent(tom, bob).");
    let names = env.symbols().len();
    let stored = env.knowledge().len();

    let err = env.consult("tom(parent).").unwrap_err();
    assert_eq!(
        err,
        Error::NameKindConflict {
            name: "parent".to_string(),
            existing: TermKind::Predicate,
            requested: TermKind::Atom,
        }
    );
    assert_eq!(env.symbols().len(), names);
    assert_eq!(env.knowledge().len(), stored);
}

#[test]
fn test_repeated_head_variable_fails_at_first_call() {
    let mut env = Environment::new();
    env.consult("thing(a).").unwrap();
    // Defining it is fine
    assert!(env.consult("same(X, X) :- thing(X).").unwrap());
    // Calls of another arity never reach the head
    assert_eq!(env.query("same(a).").unwrap(), Answer::Truth(false));

    match env.query("same(a, a).") {
        Err(Error::UnsupportedPattern { predicate, name }) => {
            assert_eq!(predicate, "same");
            assert_eq!(name, "X");
        }
        other => panic!("Expected unsupported pattern, got {other:?}"),
    }
}

#[test]
fn test_repeated_head_atom_fails_at_first_call() {
    let mut env = Environment::new();
    env.consult("q(b).").unwrap();
    assert!(env.consult("p(a, a, X) :- q(X).").unwrap());

    match env.query("p(a, a, b).") {
        Err(Error::UnsupportedPattern { predicate, name }) => {
            assert_eq!(predicate, "p");
            assert_eq!(name, "a");
        }
        other => panic!("Expected unsupported pattern, got {other:?}"),
    }
}

#[test]
fn test_lex_and_syntax_errors() {
    let mut env = Environment::new();
    assert!(matches!(env.consult("p(a) # q(b)."), Err(Error::Lex(_))));
    assert!(matches!(env.consult("p(a) q(b)."), Err(Error::Syntax(_))));
    assert!(matches!(env.query("p(a), ."), Err(Error::Syntax(_))));
    assert!(env.symbols().is_empty());
}

#[test]
fn test_invalid_statements() {
    let mut env = Environment::new();
    assert!(matches!(env.consult("p(X)."), Err(Error::InvalidStatement(_))));
    assert!(matches!(env.consult("p(a) :- q(b)."), Err(Error::InvalidStatement(_))));
    assert!(env.knowledge().is_empty());
}

#[test]
fn test_error_messages() {
    let mut env = Environment::new();
    let err = env.consult("p(a)").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Syntax error: Unexpected token at 1:5: expected ., got EOF"
    );
    let err = env.consult("p(a) & q(b).").unwrap_err();
    assert_eq!(err.to_string(), "Lex error: unexpected character '&' at 1:6");
}
