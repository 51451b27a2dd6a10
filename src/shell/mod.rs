//! Line-oriented command shell for the agenda.
//!
//! Each input line is echoed as `$<line>`, parsed into a [`Command`] and
//! executed against the session's [`Agenda`](crate::models::Agenda). The loop
//! ends on `end` or at end of input.

pub mod command;
pub mod handlers;

pub use command::Command;
pub use handlers::{Flow, Session, FAIL_PREFIX};

use crate::config::Config;
use crate::error::ShellResult;
use crate::models::Agenda;
use std::io::{BufRead, Write};

/// Run a fresh session over `input`, writing the transcript to `output`.
///
/// # Returns
/// The agenda as it stood when the loop ended.
pub fn run_shell<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    config: &Config,
) -> ShellResult<Agenda> {
    let mut session = Session::from_config(config);
    session.run(input, output)?;
    Ok(session.into_agenda())
}
