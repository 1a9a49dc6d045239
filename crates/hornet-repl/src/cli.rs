use crate::render::OutputFormat;
use anyhow::{Context, Result};
use hornet_core::EngineConfig;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// Help text for `hornet -h`
pub const USAGE: &str = "\
hornet - interactive logic-programming interpreter

Usage: hornet [options] [file...]

Files are loaded, one statement per line, before the prompt starts.

Options:
  --config <file>   Engine configuration (JSON, e.g. {\"max_depth\": 64})
  --json            Print answers as JSON
  --log <filter>    Log filter for stderr (default: RUST_LOG or \"warn\")
  -h, --help        Show this help";

/// Errors from reading the command line
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// An option that takes a value came last
    #[error("Option {0} requires an argument")]
    MissingValue(String),

    /// A `-`-prefixed argument that is not an option
    #[error("Unknown option: {0}")]
    UnknownOption(String),
}

/// Parsed command-line options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Files to load before reading input
    pub files: Vec<PathBuf>,
    /// Engine configuration file
    pub config: Option<PathBuf>,
    /// Print answers as JSON
    pub json: bool,
    /// Log filter directive
    pub log: Option<String>,
    /// Print usage and exit
    pub help: bool,
}

impl Options {
    /// Parse arguments, not including the program name
    pub fn parse<I>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = Options::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => options.help = true,
                "--json" => options.json = true,
                "--config" => {
                    let value = args.next().ok_or_else(|| CliError::MissingValue(arg.clone()))?;
                    options.config = Some(PathBuf::from(value));
                }
                "--log" => {
                    options.log = Some(args.next().ok_or_else(|| CliError::MissingValue(arg.clone()))?);
                }
                other if other.starts_with('-') => {
                    return Err(CliError::UnknownOption(other.to_string()));
                }
                path => options.files.push(PathBuf::from(path)),
            }
        }
        Ok(options)
    }

    /// Read the engine configuration, or the defaults when none was given
    pub fn engine_config(&self) -> Result<EngineConfig> {
        let Some(path) = &self.config else {
            return Ok(EngineConfig::default());
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        EngineConfig::from_json(&text).with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Answer format selected by the flags
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}
