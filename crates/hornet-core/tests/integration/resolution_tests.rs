//! Query answering: backward chaining and existential search

use super::{load, pairs, solutions};
use hornet_core::{Answer, EngineConfig, Environment, Error};

const FAMILY: &str = "
    parent(tom, bob).
    parent(bob, ann).
    grandparent(X, Z) :- parent(X, Y), parent(Y, Z).
";

#[test]
fn test_ground_round_trip() {
    let mut env = load("parent(tom, bob).");
    assert_eq!(env.query("parent(tom, bob).").unwrap(), Answer::Truth(true));
    assert_eq!(env.query("parent(bob, tom).").unwrap(), Answer::Truth(false));
}

#[test]
fn test_rule_chaining() {
    let mut env = load(FAMILY);
    assert_eq!(env.query("grandparent(tom, ann).").unwrap(), Answer::Truth(true));
    assert_eq!(env.query("grandparent(tom, bob).").unwrap(), Answer::Truth(false));
}

#[test]
fn test_existential_returns_only_satisfying_atoms() {
    let mut env = load(FAMILY);
    let answer = env.query("parent(tom, Y).").unwrap();
    assert_eq!(solutions(&env, answer), vec![pairs(&[("Y", "bob")])]);
}

#[test]
fn test_solutions_follow_atom_registration_order() {
    let mut env = load(
        "
        likes(zed, pie).
        likes(amy, pie).
        likes(bo, pie).
        ",
    );
    let answer = env.query("likes(X, pie).").unwrap();
    assert_eq!(
        solutions(&env, answer),
        vec![pairs(&[("X", "zed")]), pairs(&[("X", "amy")]), pairs(&[("X", "bo")])]
    );
}

#[test]
fn test_rightmost_variable_cycles_fastest() {
    let mut env = load(FAMILY);
    let answer = env.query("parent(X, Y).").unwrap();
    assert_eq!(
        solutions(&env, answer),
        vec![pairs(&[("X", "tom"), ("Y", "bob")]), pairs(&[("X", "bob"), ("Y", "ann")])]
    );
}

#[test]
fn test_variables_in_first_seen_order() {
    let mut env = load(FAMILY);
    let answer = env.query("parent(Y, ann), parent(X, Y).").unwrap();
    assert_eq!(solutions(&env, answer), vec![pairs(&[("Y", "bob"), ("X", "tom")])]);
}

#[test]
fn test_existential_through_rule() {
    let mut env = load(FAMILY);
    let answer = env.query("grandparent(Who, ann).").unwrap();
    assert_eq!(solutions(&env, answer), vec![pairs(&[("Who", "tom")])]);
}

#[test]
fn test_disjunction_binds_tighter() {
    let mut env = load(
        "
        x(a).
        y(a).
        ",
    );
    // Parsed as x(X), (y(X); z(X)); z has no facts at all
    let answer = env.query("x(X), y(X); z(X).").unwrap();
    assert_eq!(solutions(&env, answer), vec![pairs(&[("X", "a")])]);
}

#[test]
fn test_precedence_changes_answers() {
    let mut env = load(
        "
        x(a).
        z(b).
        ",
    );
    // x(X), (y(X); z(X)): no atom is both x and z
    let answer = env.query("x(X), y(X); z(X).").unwrap();
    assert!(solutions(&env, answer).is_empty());

    // Explicit grouping gives the conventional reading
    let answer = env.query("(x(X), y(X)); z(X).").unwrap();
    assert_eq!(solutions(&env, answer), vec![pairs(&[("X", "b")])]);
}

#[test]
fn test_empty_result_is_not_an_error() {
    let mut env = load(FAMILY);
    let answer = env.query("parent(ann, Y).").unwrap();
    assert_eq!(answer, Answer::Solutions(vec![]));
}

#[test]
fn test_rules_tried_in_insertion_order_and_fall_back_to_facts() {
    let mut env = load(
        "
        friend(tom, bob).
        ally(X, Y) :- enemy(X, Y).
        ally(X, Y) :- friend(X, Y).
        ally(sue, ann).
        ",
    );
    assert_eq!(env.query("ally(tom, bob).").unwrap(), Answer::Truth(true));
    assert_eq!(env.query("ally(sue, ann).").unwrap(), Answer::Truth(true));
    assert_eq!(env.query("ally(bob, tom).").unwrap(), Answer::Truth(false));
}

#[test]
fn test_rule_body_with_disjunction() {
    let mut env = load(
        "
        mother(ann, bob).
        father(tom, sue).
        parent(X, Y) :- mother(X, Y); father(X, Y).
        ",
    );
    assert_eq!(env.query("parent(ann, bob).").unwrap(), Answer::Truth(true));
    assert_eq!(env.query("parent(tom, sue).").unwrap(), Answer::Truth(true));
    assert_eq!(env.query("parent(tom, bob).").unwrap(), Answer::Truth(false));
}

#[test]
fn test_head_atom_accepts_any_argument() {
    let mut env = load(
        "
        good(wine).
        likes(mary, X) :- good(X).
        ",
    );
    assert_eq!(env.query("likes(mary, wine).").unwrap(), Answer::Truth(true));
    // The head atom binds nothing, so only the body decides
    assert_eq!(env.query("likes(john, wine).").unwrap(), Answer::Truth(true));
    assert_eq!(env.query("likes(mary, beer).").unwrap(), Answer::Truth(false));
}

#[test]
fn test_recursive_rule_terminates_on_finite_chain() {
    let mut env = load(
        "
        edge(a, b).
        edge(b, c).
        edge(c, d).
        path(X, Y) :- edge(X, Y).
        path(X, Y) :- edge(X, Z), path(Z, Y).
        ",
    );
    assert_eq!(env.query("path(a, d).").unwrap(), Answer::Truth(true));
    assert_eq!(env.query("path(d, a).").unwrap(), Answer::Truth(false));
}

#[test]
fn test_cyclic_rule_hits_recursion_limit() {
    let mut env = Environment::with_config(EngineConfig::default().with_max_depth(32));
    env.consult("loop(X) :- loop(X).").unwrap();
    env.consult("thing(a).").unwrap();
    assert_eq!(env.query("loop(a)."), Err(Error::RecursionLimit { limit: 32 }));
}

#[test]
fn test_atoms_from_queries_join_the_domain() {
    let mut env = load("p(a).");
    assert_eq!(env.query("p(b).").unwrap(), Answer::Truth(false));
    let answer = env.query("p(X); q(X).").unwrap();
    // b is part of the domain now but still fails
    assert_eq!(solutions(&env, answer), vec![pairs(&[("X", "a")])]);
    assert_eq!(env.symbols().atoms().len(), 2);
}
