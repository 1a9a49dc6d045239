use crate::command::{strip_comment, Command, COMMAND_PREFIX};
use crate::render::{self, OutputFormat};
use anyhow::{Context, Result};
use hornet_core::Environment;
use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::{debug, info};

const PROMPT: &str = "?- ";

/// Whether the read loop should keep going after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line
    Continue,
    /// Stop reading
    Quit,
}

/// An interpreter environment wired to an output stream
pub struct Session<W: Write> {
    env: Environment,
    format: OutputFormat,
    out: W,
}

impl<W: Write> Session<W> {
    /// Create a session printing answers to `out`
    pub fn new(env: Environment, format: OutputFormat, out: W) -> Self {
        Self { env, format, out }
    }

    /// The underlying environment
    pub fn environment(&self) -> &Environment {
        &self.env
    }

    /// Give back the output stream
    pub fn into_output(self) -> W {
        self.out
    }

    /// Read lines from `input` until end of input or `:q`.
    ///
    /// A line that fails is reported to `errors` and the loop moves on.
    pub fn run<R: BufRead, E: Write>(&mut self, mut input: R, errors: &mut E, prompt: bool) -> Result<()> {
        let mut line = String::new();
        loop {
            if prompt {
                write!(self.out, "{PROMPT}")?;
                self.out.flush()?;
            }
            line.clear();
            if input.read_line(&mut line).context("Failed to read input")? == 0 {
                break;
            }
            match self.handle_line(&line) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(err) => {
                    debug!(line = line.trim_end(), "line failed");
                    writeln!(errors, "Error: {err:#}")?;
                }
            }
        }
        self.out.flush()?;
        Ok(())
    }

    /// Handle one line: a command when it starts with `:`, a query otherwise
    pub fn handle_line(&mut self, line: &str) -> Result<Flow> {
        let line = strip_comment(line);
        if line.is_empty() {
            return Ok(Flow::Continue);
        }
        if let Some(command) = line.strip_prefix(COMMAND_PREFIX) {
            return self.execute(Command::parse(command)?);
        }

        let answer = self.env.query(line)?;
        let text = render::answer(&self.env, &answer, self.format)?;
        self.out.write_all(text.as_bytes())?;
        Ok(Flow::Continue)
    }

    /// Run a parsed command
    pub fn execute(&mut self, command: Command) -> Result<Flow> {
        let listing = match command {
            Command::Quit => return Ok(Flow::Quit),
            Command::Load(path) => {
                self.load_file(&path)?;
                return Ok(Flow::Continue);
            }
            Command::Facts => render::facts(&self.env),
            Command::Rules => render::rules(&self.env),
            Command::Terms => render::terms(&self.env),
        };
        self.out.write_all(listing.as_bytes())?;
        Ok(Flow::Continue)
    }

    /// Load statements from a file; returns how many were new
    pub fn load_file(&mut self, path: &Path) -> Result<usize> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        self.load_source(&source, &path.display().to_string())
    }

    /// Load one statement per line of `source`.
    ///
    /// Stops at the first line that fails; the lines before it stay loaded.
    /// `origin` names the source in error messages.
    pub fn load_source(&mut self, source: &str, origin: &str) -> Result<usize> {
        let mut added = 0;
        for (index, line) in source.lines().enumerate() {
            let statement = strip_comment(line);
            if statement.is_empty() {
                continue;
            }
            if self
                .env
                .consult(statement)
                .with_context(|| format!("{origin}:{}", index + 1))?
            {
                added += 1;
            }
        }
        info!(origin, added, "loaded statements");
        Ok(added)
    }
}
