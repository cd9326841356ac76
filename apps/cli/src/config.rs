//! Layered form rules: defaults, then a TOML file, then `INTAKE_*` variables.

use std::path::Path;

use anyhow::{Context, bail};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use intake_form::FormRules;

/// Rules file read from the working directory when `--config` is absent.
pub const DEFAULT_FILE: &str = "intake.toml";

const ENV_PREFIX: &str = "INTAKE_";

/// Variables sharing the prefix that are not form rules.
const RESERVED_KEYS: [&str; 3] = ["log", "log_format", "config"];

/// Builds the provider chain. An explicit `path` must exist; the default
/// file is optional.
pub fn figment(path: Option<&Path>) -> anyhow::Result<Figment> {
    let file = match path {
        Some(path) => {
            if !path.is_file() {
                bail!("config file not found: {}", path.display());
            }
            Toml::file(path)
        }
        None => Toml::file(DEFAULT_FILE),
    };

    Ok(Figment::from(Serialized::defaults(FormRules::default()))
        .merge(file)
        .merge(
            Env::prefixed(ENV_PREFIX)
                .split("__")
                .ignore(&RESERVED_KEYS),
        ))
}

/// Loads the effective form rules.
pub fn load_rules(path: Option<&Path>) -> anyhow::Result<FormRules> {
    let rules: FormRules = figment(path)?
        .extract()
        .context("invalid form rules")?;
    tracing::debug!(?rules, "form rules loaded");
    Ok(rules)
}
