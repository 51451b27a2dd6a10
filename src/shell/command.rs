//! Parsing of a single input line into a [`Command`].

use crate::domain::Phone;
use crate::error::{ShellError, ShellResult};
use std::num::IntErrorKind;

/// A fully parsed shell command.
///
/// Every argument is validated while parsing, so executing a command never
/// fails halfway through a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `add <name> [id:number ...]`
    Add { name: String, phones: Vec<Phone> },
    /// `show`
    Show,
    /// `end`
    End,
    /// `rmFone <name> <index>`; `None` is an integer no phone list can reach
    /// (negative or wider than `usize`).
    RmFone { name: String, index: Option<usize> },
    /// `rm <name>`
    Rm { name: String },
    /// `search <pattern>`
    Search { pattern: String },
    /// `tfav <name>`
    Tfav { name: String },
    /// `favs`
    Favs,
}

impl Command {
    /// Split `line` on whitespace and parse it. Extra arguments are ignored.
    pub fn parse(line: &str) -> ShellResult<Self> {
        let mut tokens = line.split_whitespace();
        let verb = tokens.next().ok_or(ShellError::EmptyLine)?;

        let command = match verb {
            "add" => {
                let name = required(&mut tokens, "add", "name")?;
                let phones = tokens
                    .map(|token| token.parse::<Phone>())
                    .collect::<Result<Vec<_>, _>>()?;
                Command::Add { name, phones }
            }
            "show" => Command::Show,
            "end" => Command::End,
            "rmFone" => {
                let name = required(&mut tokens, "rmFone", "name")?;
                let raw = required(&mut tokens, "rmFone", "index")?;
                let index = parse_index(raw)?;
                Command::RmFone { name, index }
            }
            "rm" => Command::Rm {
                name: required(&mut tokens, "rm", "name")?,
            },
            "search" => Command::Search {
                pattern: required(&mut tokens, "search", "pattern")?,
            },
            "tfav" => Command::Tfav {
                name: required(&mut tokens, "tfav", "name")?,
            },
            "favs" => Command::Favs,
            other => return Err(ShellError::UnknownCommand(other.to_string())),
        };

        Ok(command)
    }
}

/// Parse a phone index. Any integer is accepted; only non-numeric tokens fail.
fn parse_index(raw: String) -> ShellResult<Option<usize>> {
    match raw.parse::<i64>() {
        Ok(value) => Ok(usize::try_from(value).ok()),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Ok(None),
            _ => Err(ShellError::InvalidIndex(raw)),
        },
    }
}

fn required<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    command: &'static str,
    argument: &'static str,
) -> ShellResult<String> {
    tokens
        .next()
        .map(str::to_string)
        .ok_or(ShellError::MissingArgument { command, argument })
}
