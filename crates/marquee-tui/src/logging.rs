use anyhow::{Context, Result};
use marquee_core::settings::Settings;
use std::{fs::OpenOptions, sync::Mutex};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber.
///
/// Logs only ever go to the configured file: anything written to stdout or
/// stderr would land on top of the terminal UI. Without a log file the filter
/// is installed with no output layer.
pub fn init_tracing(settings: &Settings) -> Result<()> {
    let filter = EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let Some(path) = &settings.log_file else {
        tracing_subscriber::registry().with(filter).try_init()?;
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .with(filter)
        .try_init()?;

    tracing::info!(path = %path.display(), level = %settings.log_level, "logging initialized");
    Ok(())
}
