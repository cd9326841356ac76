//! Subcommand handlers. Each writes its report to `out` (stdout) and its
//! rejection reasons to `err` (stderr).

use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, bail};
use intake_form::{FormInputs, FormRejected, FormRules, ProjectForm};
use intake_validator::foundation::ValidationErrors;
use intake_validator::{Constraints, Descriptor, check};
use serde_json::json;

use crate::cli::{CheckArgs, OutputFormat, SubmitArgs};

/// How a command ended, mapped to the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Input was accepted.
    Accepted,
    /// Input was rejected; reasons were reported.
    Rejected,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Accepted => ExitCode::SUCCESS,
            Outcome::Rejected => ExitCode::from(1),
        }
    }
}

pub fn submit(
    rules: FormRules,
    args: SubmitArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> anyhow::Result<Outcome> {
    let inputs = FormInputs {
        title: args.title,
        description: args.description,
        people: args.people,
    };
    let mut form = ProjectForm::with_inputs(rules, inputs);

    match form.submit() {
        Ok(project) => {
            match args.format {
                OutputFormat::Text => {
                    writeln!(out, "Project accepted")?;
                    writeln!(out, "  title:       {}", project.title)?;
                    writeln!(out, "  description: {}", project.description)?;
                    writeln!(out, "  people:      {}", project.people)?;
                }
                OutputFormat::Json => {
                    let body = serde_json::to_string_pretty(&project)?;
                    writeln!(out, "{body}")?;
                }
            }
            Ok(Outcome::Accepted)
        }
        Err(rejected) => {
            report_rejection(&rejected, args.format, out, err)?;
            Ok(Outcome::Rejected)
        }
    }
}

fn report_rejection(
    rejected: &FormRejected,
    format: OutputFormat,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> anyhow::Result<()> {
    writeln!(err, "{rejected}")?;
    for error in rejected.errors() {
        writeln!(err, "  - {error}")?;
    }

    if format == OutputFormat::Json {
        let fields: serde_json::Map<_, _> = rejected
            .fields()
            .iter()
            .map(|(name, errors)| (name.to_string(), error_list(errors)))
            .collect();
        let body = json!({ "accepted": false, "fields": fields });
        writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
    }
    Ok(())
}

pub fn check_value(args: CheckArgs, out: &mut dyn Write) -> anyhow::Result<Outcome> {
    let descriptor = descriptor_from(&args)?;
    let result = check(&descriptor);

    match args.format {
        OutputFormat::Text => match &result {
            Ok(()) => writeln!(out, "valid")?,
            Err(errors) => {
                writeln!(out, "invalid")?;
                for error in errors {
                    writeln!(out, "  - {error}")?;
                }
            }
        },
        OutputFormat::Json => {
            let errors = result
                .as_ref()
                .err()
                .map_or_else(|| json!([]), error_list);
            let body = json!({ "valid": result.is_ok(), "errors": errors });
            writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
        }
    }

    Ok(if result.is_ok() {
        Outcome::Accepted
    } else {
        Outcome::Rejected
    })
}

/// Builds the descriptor from the value source; constraint flags are
/// layered over whatever a JSON descriptor already declares.
fn descriptor_from(args: &CheckArgs) -> anyhow::Result<Descriptor> {
    let mut descriptor = if let Some(raw) = &args.value.descriptor {
        parse_descriptor(raw)?
    } else if let Some(number) = args.value.number {
        Descriptor::new(number)
    } else {
        Descriptor::new(args.value.text.clone().unwrap_or_default())
    };

    let flags = Constraints {
        required: args.required,
        min_length: args.min_length,
        max_length: args.max_length,
        min: args.min,
        max: args.max,
    };
    let declared = &mut descriptor.constraints;
    declared.required |= flags.required;
    declared.min_length = flags.min_length.or(declared.min_length);
    declared.max_length = flags.max_length.or(declared.max_length);
    declared.min = flags.min.or(declared.min);
    declared.max = flags.max.or(declared.max);

    Ok(descriptor)
}

/// Parses a JSON descriptor, refusing keys that are neither the value nor a
/// known constraint.
fn parse_descriptor(raw: &str) -> anyhow::Result<Descriptor> {
    let object: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(raw).context("invalid descriptor JSON")?;

    let unknown: Vec<&str> = object
        .keys()
        .map(String::as_str)
        .filter(|key| *key != "value" && !Constraints::KEYS.contains(key))
        .collect();
    if !unknown.is_empty() {
        bail!("unknown descriptor keys: {}", unknown.join(", "));
    }

    serde_json::from_value(serde_json::Value::Object(object)).context("invalid descriptor JSON")
}

pub fn print_rules(rules: &FormRules, out: &mut dyn Write) -> anyhow::Result<Outcome> {
    let body = toml::to_string_pretty(rules).context("failed to render rules")?;
    write!(out, "{body}")?;
    Ok(Outcome::Accepted)
}

fn error_list(errors: &ValidationErrors) -> serde_json::Value {
    errors
        .errors()
        .iter()
        .map(|error| {
            let params: serde_json::Map<_, _> = error
                .params
                .iter()
                .map(|(key, value)| (key.to_string(), json!(value)))
                .collect();
            json!({
                "code": error.code,
                "message": error.message,
                "params": params,
            })
        })
        .collect()
}
