//! Configuration types and presets

use serde::{Deserialize, Serialize};

pub(crate) const LEVEL_VAR: &str = "INTAKE_LOG";
const FORMAT_VAR: &str = "INTAKE_LOG_FORMAT";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Level filter in `EnvFilter` syntax (e.g. "info", "debug,intake_form=trace")
    pub level: String,

    /// Output format
    pub format: Format,

    /// Display configuration
    pub display: DisplayConfig,

    /// Service name recorded on the root span; no root span when `None`
    pub service: Option<String>,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Human-readable, multi-line
    Pretty,
    /// Single-line
    #[default]
    Compact,
    /// Structured JSON, one object per line
    Json,
}

impl Format {
    /// Parses a format name; unknown names fall back to compact.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "pretty" => Format::Pretty,
            "json" => Format::Json,
            _ => Format::Compact,
        }
    }
}

/// Display configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show timestamps
    pub time: bool,
    /// Show source location (file:line)
    pub source: bool,
    /// Show target module
    pub target: bool,
    /// Use ANSI colors
    pub colors: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            time: true,
            source: false,
            target: true,
            colors: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: Format::Compact,
            display: DisplayConfig::default(),
            service: None,
        }
    }
}

impl Config {
    /// Configuration from `INTAKE_LOG` (or `RUST_LOG`) and `INTAKE_LOG_FORMAT`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`Config::from_env`], reading variables through `lookup`.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(level) = lookup(LEVEL_VAR).or_else(|| lookup("RUST_LOG")) {
            config.level = level;
        }
        if let Some(format) = lookup(FORMAT_VAR) {
            config.format = Format::from_name(&format);
        }

        config
    }

    /// Development configuration (pretty, debug level)
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: "debug".to_string(),
            format: Format::Pretty,
            display: DisplayConfig {
                colors: true,
                source: true,
                ..DisplayConfig::default()
            },
            ..Self::default()
        }
    }

    /// Production configuration (JSON, info level)
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: "info".to_string(),
            format: Format::Json,
            ..Self::default()
        }
    }

    /// Test configuration (no colors, no timestamps)
    #[must_use]
    pub fn test() -> Self {
        Self {
            level: "trace".to_string(),
            display: DisplayConfig {
                time: false,
                ..DisplayConfig::default()
            },
            ..Self::default()
        }
    }

    /// Sets the level filter.
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Sets the service name recorded on the root span.
    #[must_use]
    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = Some(service.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn empty_environment_is_default() {
        assert_eq!(Config::from_lookup(lookup(&[])), Config::default());
    }

    #[test]
    fn intake_log_wins_over_rust_log() {
        let config = Config::from_lookup(lookup(&[("INTAKE_LOG", "trace"), ("RUST_LOG", "warn")]));
        assert_eq!(config.level, "trace");

        let config = Config::from_lookup(lookup(&[("RUST_LOG", "warn")]));
        assert_eq!(config.level, "warn");
    }

    #[rstest]
    #[case("pretty", Format::Pretty)]
    #[case("JSON", Format::Json)]
    #[case("compact", Format::Compact)]
    #[case("logfmt", Format::Compact)]
    fn format_names(#[case] name: &str, #[case] expected: Format) {
        let config = Config::from_lookup(lookup(&[("INTAKE_LOG_FORMAT", name)]));
        assert_eq!(config.format, expected);
    }

    #[test]
    fn presets() {
        assert_eq!(Config::development().format, Format::Pretty);
        assert_eq!(Config::production().format, Format::Json);
        assert!(!Config::test().display.time);
        assert_eq!(
            Config::default().with_service("intake").service.as_deref(),
            Some("intake")
        );
    }
}
