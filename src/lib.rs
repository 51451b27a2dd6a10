//! Agenda - an in-memory contact address book driven by a command shell.
//!
//! Contacts have a name, a favorite flag and an ordered list of phones. The
//! shell reads one command per line, echoes it and prints the result.
//!
//! # Architecture
//!
//! - **domain**: Value objects parsed from command tokens (phones)
//! - **models**: The contact entity and the agenda aggregate
//! - **shell**: Command parsing, dispatch and the read loop
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod shell;

pub use config::{Config, ErrorPolicy};
pub use domain::{Phone, ValidationError};
pub use error::{ConfigError, ShellError};
pub use models::{Agenda, Contact};
pub use shell::{run_shell, Command, Session};
