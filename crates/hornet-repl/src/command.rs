use std::path::PathBuf;
use thiserror::Error;

/// Lines starting with this character are commands rather than queries
pub const COMMAND_PREFIX: char = ':';

/// Character that starts a comment running to the end of the line
const COMMENT: char = '%';

/// A parsed `:`-command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `:q`
    Quit,
    /// `:l <path>`
    Load(PathBuf),
    /// `:rules`
    Rules,
    /// `:terms`
    Terms,
    /// `:facts`
    Facts,
}

/// Errors from parsing a command line
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The command word, or its number of arguments, is not recognized
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// The command needs an argument that was not given
    #[error("Command '{command}' expects a {argument}")]
    MissingArgument {
        /// Command word
        command: String,
        /// Description of the missing argument
        argument: &'static str,
    },
}

impl Command {
    /// Parse the text after the command prefix
    pub fn parse(text: &str) -> Result<Self, CommandError> {
        let words: Vec<&str> = text.split_whitespace().collect();
        match words.as_slice() {
            ["q"] => Ok(Command::Quit),
            ["l", path] => Ok(Command::Load(PathBuf::from(path))),
            ["l"] => Err(CommandError::MissingArgument {
                command: "l".to_string(),
                argument: "file path",
            }),
            ["rules"] => Ok(Command::Rules),
            ["terms"] => Ok(Command::Terms),
            ["facts"] => Ok(Command::Facts),
            _ => Err(CommandError::UnknownCommand(text.trim().to_string())),
        }
    }
}

/// Drop everything from the first `%` on, then surrounding whitespace
pub fn strip_comment(line: &str) -> &str {
    match line.split_once(COMMENT) {
        Some((code, _)) => code.trim(),
        None => line.trim(),
    }
}
