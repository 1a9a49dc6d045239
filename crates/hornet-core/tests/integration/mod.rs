//! Integration tests for parsing, storing and resolving programs

mod error_tests;
mod parsing_tests;
mod resolution_tests;

use hornet_core::{Answer, Environment};

/// Build an environment from a program, one statement per line
pub fn load(program: &str) -> Environment {
    let mut env = Environment::new();
    for line in program.lines().map(str::trim).filter(|line| !line.is_empty()) {
        env.consult(line).unwrap();
    }
    env
}

/// Solutions as name pairs; panics on a boolean answer
pub fn solutions(env: &Environment, answer: Answer) -> Vec<Vec<(String, String)>> {
    match answer {
        Answer::Solutions(solutions) => solutions
            .iter()
            .map(|solution| {
                env.bindings(solution)
                    .into_iter()
                    .map(|binding| (binding.variable, binding.value))
                    .collect()
            })
            .collect(),
        Answer::Truth(holds) => panic!("Expected solutions, got Truth({holds})"),
    }
}

pub fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items.iter().map(|(var, value)| (var.to_string(), value.to_string())).collect()
}
