//! Logger builder implementation

use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, Format};
use crate::{LogError, LogResult};

/// Logger builder
#[derive(Debug)]
pub struct LoggerBuilder {
    config: Config,
}

/// Keeps the root span entered for as long as it lives.
#[derive(Debug)]
pub struct LoggerGuard {
    _root_span: Option<tracing::span::EnteredSpan>,
}

/// Builds the fmt layer shared by the text formats.
macro_rules! text_layer {
    ($style:ident, $display:expr) => {
        fmt::layer()
            .$style()
            .with_writer(std::io::stderr)
            .with_ansi($display.colors)
            .with_target($display.target)
            .with_file($display.source)
            .with_line_number($display.source)
    };
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Build and install the global subscriber.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The level filter cannot be parsed
    /// - A global subscriber is already installed
    pub fn build(self) -> LogResult<LoggerGuard> {
        let filter = EnvFilter::try_new(&self.config.level)
            .map_err(|e| LogError::Filter(format!("{}: {e}", self.config.level)))?;

        let display = &self.config.display;
        let registry = Registry::default().with(filter);

        let installed = match (self.config.format, display.time) {
            (Format::Pretty, true) => registry.with(text_layer!(pretty, display)).try_init(),
            (Format::Pretty, false) => registry
                .with(text_layer!(pretty, display).without_time())
                .try_init(),
            (Format::Compact, true) => registry.with(text_layer!(compact, display)).try_init(),
            (Format::Compact, false) => registry
                .with(text_layer!(compact, display).without_time())
                .try_init(),
            (Format::Json, true) => registry
                .with(
                    fmt::layer()
                        .json()
                        .with_writer(std::io::stderr)
                        .with_target(display.target)
                        .with_file(display.source)
                        .with_line_number(display.source),
                )
                .try_init(),
            (Format::Json, false) => registry
                .with(
                    fmt::layer()
                        .json()
                        .with_writer(std::io::stderr)
                        .with_target(display.target)
                        .with_file(display.source)
                        .with_line_number(display.source)
                        .without_time(),
                )
                .try_init(),
        };
        installed.map_err(|e| LogError::Init(e.to_string()))?;

        let root_span = self
            .config
            .service
            .as_deref()
            .map(|service| tracing::info_span!("app", service = service).entered());

        Ok(LoggerGuard {
            _root_span: root_span,
        })
    }
}
