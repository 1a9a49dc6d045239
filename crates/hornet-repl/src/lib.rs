// Hornet REPL - line-oriented front end for the hornet-core interpreter

#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

/// Command-line options of the `hornet` binary
pub mod cli;

/// `:`-prefixed commands and comment stripping
pub mod command;

/// Text and JSON rendering of answers and listings
pub mod render;

/// The read loop and file loading
pub mod session;

pub use cli::{CliError, Options, USAGE};
pub use command::{strip_comment, Command, CommandError, COMMAND_PREFIX};
pub use render::OutputFormat;
pub use session::{Flow, Session};
