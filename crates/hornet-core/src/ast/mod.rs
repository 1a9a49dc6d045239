//! Abstract Syntax Tree (AST) for facts, rules and queries
//!
//! Terms inside the tree are handles into a [`SymbolTable`](crate::symbol::SymbolTable);
//! rendering a tree back to text needs that table, see [`Pretty`].

pub mod display;
pub mod nodes;
pub mod visitor;

pub use display::{Pretty, Render};
pub use nodes::{Expression, Fact, Goal, LogicalOp, Rule, Statement};
pub use visitor::{collect_variables, walk_goal, Visitor};
