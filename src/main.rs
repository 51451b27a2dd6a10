//! Agenda - Main entry point
//!
//! Runs the contact shell over stdin/stdout until `end` or end of input.

use agenda::{run_shell, Config};
use anyhow::Result;
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so AGENDA_LOG_LEVEL can drive the filter
    let config = Config::from_env();

    let default_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    // Initialize logging (stderr only to keep stdout for the transcript)
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!("Starting agenda shell with error policy {:?}", config.error_policy);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let agenda = run_shell(stdin.lock(), &mut stdout, &config)?;

    info!("Agenda shell finished with {} contacts", agenda.len());
    Ok(())
}
