//! # intake-log
//!
//! Subscriber setup shared by intake binaries. Libraries only emit
//! `tracing` events; binaries call one of the init functions once.
//!
//! ```rust,no_run
//! fn main() -> Result<(), intake_log::LogError> {
//!     let _guard = intake_log::auto_init()?;
//!     tracing::info!(port = 8080, "starting");
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]

mod builder;
mod config;

pub use builder::{LoggerBuilder, LoggerGuard};
pub use config::{Config, DisplayConfig, Format};

/// Result type for logger operations.
pub type LogResult<T> = Result<T, LogError>;

/// Error type for logger operations.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// The level filter could not be parsed.
    #[error("Invalid filter: {0}")]
    Filter(String),

    /// A global subscriber is already installed.
    #[error("Logger initialization failed: {0}")]
    Init(String),
}

/// Picks a configuration from the environment and initializes the logger.
///
/// Uses [`Config::from_env`] when `INTAKE_LOG` or `RUST_LOG` is set,
/// otherwise [`Config::development`] in debug builds and
/// [`Config::production`] in release builds.
pub fn auto_init() -> LogResult<LoggerGuard> {
    if std::env::var_os(config::LEVEL_VAR).is_some() || std::env::var_os("RUST_LOG").is_some() {
        init_with(Config::from_env())
    } else if cfg!(debug_assertions) {
        init_with(Config::development())
    } else {
        init_with(Config::production())
    }
}

/// Initializes with the default configuration.
pub fn init() -> LogResult<LoggerGuard> {
    init_with(Config::default())
}

/// Initializes with a custom configuration.
pub fn init_with(config: Config) -> LogResult<LoggerGuard> {
    LoggerBuilder::from_config(config).build()
}
