use intake_validator::validators::trim_form_text;
use intake_validator::{Descriptor, check};
use serde::{Deserialize, Serialize};

use crate::error::{FieldErrors, FormRejected};
use crate::rules::{FieldName, FormRules};

/// Raw input contents, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInputs {
    /// Title input.
    pub title: String,
    /// Description text area.
    pub description: String,
    /// Team size input, parsed as a number on submit.
    pub people: String,
}

impl FormInputs {
    /// Returns true when every input is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.description.is_empty() && self.people.is_empty()
    }

    /// Empties every input.
    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
        self.people.clear();
    }
}

/// A validated submission.
///
/// Title and description are forwarded as entered; only validation looks
/// at their trimmed form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Project title.
    pub title: String,
    /// Project description.
    pub description: String,
    /// Team size.
    pub people: f64,
}

/// The project-entry form.
#[derive(Debug, Clone, Default)]
pub struct ProjectForm {
    inputs: FormInputs,
    rules: FormRules,
}

impl ProjectForm {
    /// Creates an empty form enforcing `rules`.
    #[must_use]
    pub fn new(rules: FormRules) -> Self {
        Self {
            inputs: FormInputs::default(),
            rules,
        }
    }

    /// Creates a form pre-filled with `inputs`.
    #[must_use]
    pub fn with_inputs(rules: FormRules, inputs: FormInputs) -> Self {
        Self { inputs, rules }
    }

    /// The rules this form enforces.
    #[must_use]
    pub fn rules(&self) -> &FormRules {
        &self.rules
    }

    /// Current input contents.
    #[must_use]
    pub fn inputs(&self) -> &FormInputs {
        &self.inputs
    }

    /// Replaces the title input.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.inputs.title = title.into();
    }

    /// Replaces the description input.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.inputs.description = description.into();
    }

    /// Replaces the team size input.
    pub fn set_people(&mut self, people: impl Into<String>) {
        self.inputs.people = people.into();
    }

    /// Empties every input.
    pub fn clear(&mut self) {
        self.inputs.clear();
    }

    /// Validates the current inputs without changing them.
    ///
    /// Every field is checked, so a rejection lists all failing fields.
    pub fn gather(&self) -> Result<Project, FormRejected> {
        let people = parse_people(&self.inputs.people);

        let descriptors = [
            (
                FieldName::Title,
                Descriptor::text(self.inputs.title.as_str(), self.rules.title),
            ),
            (
                FieldName::Description,
                Descriptor::text(self.inputs.description.as_str(), self.rules.description),
            ),
            (
                FieldName::People,
                Descriptor::number(people, self.rules.people),
            ),
        ];

        let failed: FieldErrors = descriptors
            .iter()
            .filter_map(|(name, descriptor)| {
                check(descriptor)
                    .err()
                    .map(|errors| (*name, errors.with_field(name.as_str())))
            })
            .collect();

        if !failed.is_empty() {
            return Err(FormRejected::new(failed));
        }

        Ok(Project {
            title: self.inputs.title.clone(),
            description: self.inputs.description.clone(),
            people,
        })
    }

    /// Validates the inputs; on success clears them and returns the project.
    ///
    /// A rejected submission leaves the inputs untouched.
    pub fn submit(&mut self) -> Result<Project, FormRejected> {
        match self.gather() {
            Ok(project) => {
                tracing::debug!(
                    title = %project.title,
                    people = project.people,
                    "project accepted"
                );
                self.clear();
                Ok(project)
            }
            Err(rejected) => {
                tracing::debug!(fields = ?rejected.field_names(), "project rejected");
                Err(rejected)
            }
        }
    }

    /// Submits and hands an accepted project to `on_accept`.
    ///
    /// The closure captures whatever downstream consumer it needs.
    pub fn submit_with<F>(&mut self, on_accept: F) -> Result<(), FormRejected>
    where
        F: FnOnce(Project),
    {
        let project = self.submit()?;
        on_accept(project);
        Ok(())
    }
}

/// Parses the team size. Empty or non-numeric text becomes NaN, which the
/// `required` and range rules reject.
fn parse_people(raw: &str) -> f64 {
    let trimmed = trim_form_text(raw);
    if trimmed.is_empty() {
        return f64::NAN;
    }
    trimmed.parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("4", 4.0)]
    #[case(" 7 ", 7.0)]
    #[case("2.5", 2.5)]
    #[case("-1", -1.0)]
    #[case("\u{3000}3\u{FEFF}", 3.0)]
    fn parses_numbers(#[case] raw: &str, #[case] expected: f64) {
        assert_eq!(parse_people(raw), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("four")]
    #[case("4 people")]
    fn unparsable_is_nan(#[case] raw: &str) {
        assert!(parse_people(raw).is_nan());
    }

    #[test]
    fn inputs_clear() {
        let mut inputs = FormInputs {
            title: "t".into(),
            description: "d".into(),
            people: "1".into(),
        };
        assert!(!inputs.is_empty());
        inputs.clear();
        assert!(inputs.is_empty());
    }
}
