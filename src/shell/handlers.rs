//! Command handlers for the agenda shell.
//!
//! A [`Session`] owns the agenda for one program run and executes parsed
//! commands against it, writing their output to any `Write` sink.

use super::command::Command;
use crate::config::{Config, ErrorPolicy};
use crate::error::{ShellError, ShellResult};
use crate::models::agenda::FAVORITE_MARK;
use crate::models::Agenda;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// Prefix of every reported failure line.
pub const FAIL_PREFIX: &str = "fail: ";

/// Whether the loop keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// One run of the shell: the agenda plus the output options.
#[derive(Debug, Clone)]
pub struct Session {
    agenda: Agenda,
    echo: bool,
    error_policy: ErrorPolicy,
}

impl Session {
    /// Create a session with an empty agenda, echo on and failures reported.
    pub fn new() -> Self {
        Self::from_config(&Config::default())
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            agenda: Agenda::new(),
            echo: config.echo,
            error_policy: config.error_policy,
        }
    }

    pub fn agenda(&self) -> &Agenda {
        &self.agenda
    }

    pub fn into_agenda(self) -> Agenda {
        self.agenda
    }

    /// Read and execute lines until `end` or end of input.
    ///
    /// # Errors
    ///
    /// I/O failures always stop the loop. Under [`ErrorPolicy::Abort`] the
    /// first failed command does too, except for unknown verbs.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        output: &mut W,
    ) -> ShellResult<()> {
        let mut buf = Vec::new();
        while let Some(line) = read_line(&mut input, &mut buf)? {
            if self.echo {
                writeln!(output, "${}", line)?;
            }

            match self.handle_line(&line, output) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Stop) => {
                    info!("Received end command");
                    output.flush()?;
                    return Ok(());
                }
                Err(err @ ShellError::Io(_)) => return Err(err),
                Err(err) => {
                    warn!("Command failed: {:?} ({})", line, err);
                    if self.error_policy == ErrorPolicy::Abort && !err.is_always_recoverable() {
                        output.flush()?;
                        return Err(err);
                    }
                    writeln!(output, "{}{}", FAIL_PREFIX, err)?;
                }
            }
        }

        info!("End of input reached");
        output.flush()?;
        Ok(())
    }

    /// Parse and execute a single line.
    pub fn handle_line<W: Write>(&mut self, line: &str, output: &mut W) -> ShellResult<Flow> {
        let command = Command::parse(line)?;
        self.execute(command, output)
    }

    /// Execute an already parsed command.
    pub fn execute<W: Write>(&mut self, command: Command, output: &mut W) -> ShellResult<Flow> {
        debug!("Executing {:?}", command);

        match command {
            Command::Add { name, phones } => {
                self.agenda.add_contact(&name, phones);
            }
            Command::Show => {
                writeln!(output, "{}", self.agenda)?;
            }
            Command::End => return Ok(Flow::Stop),
            Command::RmFone { name, index } => {
                let mut contact = self
                    .agenda
                    .rm_contact(&name)
                    .ok_or_else(|| ShellError::ContactNotFound(name.clone()))?;
                if let Some(index) = index {
                    contact.rm_phone(index);
                }
                // re-adding builds a fresh contact, so the favorite flag resets
                self.agenda.add_contact(&name, contact.into_phones());
            }
            Command::Rm { name } => {
                if self.agenda.rm_contact(&name).is_none() {
                    debug!("No contact named {} to remove", name);
                }
            }
            Command::Search { pattern } => {
                writeln!(output, "{}", self.agenda.search(&pattern))?;
            }
            Command::Tfav { name } => {
                self.agenda.favorite_contact(&name);
            }
            Command::Favs => {
                let favs: Vec<String> = self
                    .agenda
                    .favorited()
                    .into_iter()
                    .map(|c| format!("{}{}", FAVORITE_MARK, c))
                    .collect();
                writeln!(output, "{}", favs.join("\n"))?;
            }
        }

        Ok(Flow::Continue)
    }
}

/// Read one line without its terminator (`\n` or `\r\n`).
///
/// Invalid UTF-8 is replaced with U+FFFD rather than ending the session.
/// Returns `None` at end of input.
fn read_line<R: BufRead>(input: &mut R, buf: &mut Vec<u8>) -> ShellResult<Option<String>> {
    buf.clear();
    if input.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(Some(String::from_utf8_lossy(&buf[..]).into_owned()))
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
