use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingSettings;

/// Environment variable holding an `EnvFilter` directive string.
pub const LOG_ENV_VAR: &str = "CADENZA_LOG";

/// Build the filter: `CADENZA_LOG` when set, else `settings.level`, else `info`.
pub fn build_filter(settings: &LoggingSettings) -> EnvFilter {
    let default_directive = settings
        .level
        .parse::<Directive>()
        .unwrap_or_else(|_| LevelFilter::INFO.into());

    EnvFilter::builder()
        .with_default_directive(default_directive)
        .with_env_var(LOG_ENV_VAR)
        .from_env_lossy()
}

/// Install the global subscriber writing to `settings.file`.
///
/// Without a log file nothing is installed: the terminal belongs to the TUI.
/// Returns a warning when the file cannot be opened.
pub fn init(settings: &LoggingSettings) -> Option<String> {
    let path = settings.file.as_ref()?;

    let file = match OpenOptions::new().create(true).append(true).open(path) {
        Ok(f) => f,
        Err(e) => return Some(format!("cannot open log file {}: {e}", path.display())),
    };

    let result = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(build_filter(settings))
        .try_init();

    result
        .err()
        .map(|e| format!("logging already initialised: {e}"))
}
