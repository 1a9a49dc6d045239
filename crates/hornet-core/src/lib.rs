//! Core of a small logic-programming interpreter
//!
//! Facts, rules and queries over predicates applied to atoms and variables.
//! Queries are answered by backward chaining, and queries with free variables
//! by trying every assignment of known atoms to those variables.
//!
//! ```
//! use hornet_core::{Answer, Environment};
//!
//! let mut env = Environment::new();
//! env.consult("parent(tom, bob).").unwrap();
//! env.consult("parent(bob, ann).").unwrap();
//! env.consult("grandparent(X, Z) :- parent(X, Y), parent(Y, Z).").unwrap();
//!
//! assert_eq!(env.query("grandparent(tom, ann).").unwrap(), Answer::Truth(true));
//! ```

pub mod ast;
pub mod config;
pub mod engine;
pub mod knowledge;
pub mod matcher;
pub mod parser;
pub mod resolver;
pub mod search;
pub mod substitution;
pub mod symbol;

// Test utilities (available in tests and when used as a dependency with the feature)
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use ast::{Expression, Fact, Goal, LogicalOp, Rule, Statement};
pub use config::EngineConfig;
pub use engine::{Binding, Environment};
pub use knowledge::KnowledgeBase;
pub use resolver::{Answer, Resolver};
pub use substitution::Substitution;
pub use symbol::{Symbol, SymbolTable, Term, TermKind};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Lex error: {0}")]
    Lex(#[from] parser::LexError),

    #[error("Syntax error: {0}")]
    Syntax(#[from] parser::ParseError),

    #[error("Name '{name}' is already a {existing}, cannot use it as a {requested}")]
    NameKindConflict {
        name: String,
        existing: TermKind,
        requested: TermKind,
    },

    #[error("Name '{name}' cannot be a {kind}")]
    InvalidName { name: String, kind: TermKind },

    #[error("Unsupported pattern: repeated name {name} in head of {predicate}")]
    UnsupportedPattern { predicate: String, name: String },

    #[error("Invalid statement: {0}")]
    InvalidStatement(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Recursion limit of {limit} rule applications exceeded")]
    RecursionLimit { limit: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Cannot start evaluation thread: {0}")]
    Thread(String),
}

pub type Result<T> = std::result::Result<T, Error>;
