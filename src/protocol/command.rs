//! Command definitions
//!
//! Builds command lines sent to the server.

use std::fmt::{self, Display};

use super::NEWLINE;

/// A command line: verb plus ordered arguments
///
/// Arguments are stored in their string form. Nothing is escaped, so an
/// argument must never contain `\r\n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    verb: String,
    args: Vec<String>,
}

impl Command {
    /// Create a command with no arguments
    pub fn new(verb: impl Into<String>) -> Self {
        Self {
            verb: verb.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument
    pub fn arg(mut self, arg: impl Display) -> Self {
        self.args.push(arg.to_string());
        self
    }

    /// Append several arguments in order
    pub fn args<I, A>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Display,
    {
        self.args.extend(args.into_iter().map(|a| a.to_string()));
        self
    }

    pub fn verb(&self) -> &str {
        &self.verb
    }

    pub fn arguments(&self) -> &[String] {
        &self.args
    }

    /// Wire form, terminator included
    pub fn encode(&self) -> String {
        let len = self.verb.len()
            + self.args.iter().map(|a| a.len() + 1).sum::<usize>()
            + NEWLINE.len();

        let mut line = String::with_capacity(len);
        line.push_str(&self.verb);
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line.push_str(NEWLINE);
        line
    }
}

impl Display for Command {
    /// Renders the line without its terminator, for logs
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.verb)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Encode a verb and its arguments into a command line
///
/// Format: verb and args joined by single spaces, then `\r\n`
pub fn encode_command<I, A>(verb: &str, args: I) -> String
where
    I: IntoIterator<Item = A>,
    A: Display,
{
    Command::new(verb).args(args).encode()
}
