//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

/// Validate project submissions against the intake form rules.
#[derive(Debug, Parser)]
#[command(name = "intake", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Rules file (TOML). Defaults to ./intake.toml when present.
    #[arg(long, global = true, env = "INTAKE_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Level filter implied by `-v`, if any.
    pub fn log_level(&self) -> Option<&'static str> {
        match self.verbose {
            0 => None,
            1 => Some("debug"),
            _ => Some("trace"),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Submit a project through the form.
    Submit(SubmitArgs),

    /// Check a single value against ad-hoc constraints.
    Check(CheckArgs),

    /// Print the effective form rules as TOML.
    Rules,
}

#[derive(Debug, Args)]
pub struct SubmitArgs {
    /// Project title.
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub title: String,

    /// Project description.
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub description: String,

    /// Team size, as typed.
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub people: String,

    /// Output format.
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub value: ValueArgs,

    /// Value must be present.
    #[arg(long)]
    pub required: bool,

    /// Minimum trimmed length (text values).
    #[arg(long, value_name = "N")]
    pub min_length: Option<usize>,

    /// Maximum trimmed length (text values).
    #[arg(long, value_name = "N")]
    pub max_length: Option<usize>,

    /// Minimum value (number values).
    #[arg(long, value_name = "X", allow_negative_numbers = true)]
    pub min: Option<f64>,

    /// Maximum value (number values).
    #[arg(long, value_name = "X", allow_negative_numbers = true)]
    pub max: Option<f64>,

    /// Output format.
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

/// The value under test; exactly one source.
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct ValueArgs {
    /// Text value.
    #[arg(long, allow_hyphen_values = true)]
    pub text: Option<String>,

    /// Numeric value ("NaN" is accepted).
    #[arg(long, allow_negative_numbers = true)]
    pub number: Option<f64>,

    /// Full descriptor as JSON, e.g. '{"value": "hi", "required": true}'.
    #[arg(long, value_name = "JSON")]
    pub descriptor: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
