//! Test utilities for building populated environments
//!
//! These helpers panic on malformed input; they are meant for tests only.

use crate::engine::Environment;

/// Create an environment and consult every statement in order
pub fn environment_with(statements: &[&str]) -> Environment {
    let mut env = Environment::new();
    for statement in statements {
        if let Err(e) = env.consult(statement) {
            panic!("failed to consult {statement:?}: {e}");
        }
    }
    env
}

/// The tom/bob/ann family with a grandparent rule, atoms registered in
/// that order
pub fn family() -> Environment {
    environment_with(&[
        "parent(tom, bob).",
        "parent(bob, ann).",
        "grandparent(X, Z) :- parent(X, Y), parent(Y, Z).",
    ])
}
