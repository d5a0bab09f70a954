//! Logging setup for the mailroom binary.
//!
//! The library only emits `tracing` events. Nothing is printed unless the
//! caller installs a subscriber, which `init_logging` does for the CLI.

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Verbosity level for logging output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only.
    Quiet,
    /// Warnings and errors, such as replaced donors or skipped letters.
    #[default]
    Normal,
    /// Info and above: donations, snapshot saves and loads.
    Verbose,
    /// Everything, including lookups.
    Trace,
}

impl Verbosity {
    #[must_use]
    pub fn to_level_filter(&self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::INFO,
            Self::Trace => Level::TRACE,
        }
    }
}

/// Installs a stderr subscriber. `RUST_LOG` takes precedence over
/// `verbosity`. Calling this more than once is harmless.
pub fn init_logging(verbosity: Verbosity) {
    let default_filter = format!("mailroom={}", verbosity.to_level_filter());

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .compact(),
    );

    let _ = subscriber.try_init();
}
