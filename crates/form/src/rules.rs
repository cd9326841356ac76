//! Per-field business rules.

use std::fmt;

use intake_validator::{NumberRules, TextRules};
use serde::{Deserialize, Serialize};

/// The three inputs of the project form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    /// Project title.
    Title,
    /// Project description.
    Description,
    /// Team size.
    People,
}

impl FieldName {
    /// All fields in form order.
    pub const ALL: [FieldName; 3] = [FieldName::Title, FieldName::Description, FieldName::People];

    /// The field's identifier, as used in error reports.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::Title => "title",
            FieldName::Description => "description",
            FieldName::People => "people",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Constraints applied to each form field.
///
/// Deserializes from a table per field; missing tables keep their
/// defaults:
///
/// ```toml
/// [title]
/// required = true
/// min_length = 3
/// max_length = 100
///
/// [people]
/// max = 25
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormRules {
    /// Rules for the project title.
    pub title: TextRules,
    /// Rules for the project description.
    pub description: TextRules,
    /// Rules for the team size.
    pub people: NumberRules,
}

impl Default for FormRules {
    fn default() -> Self {
        Self {
            title: TextRules::new().required().length(3, 100),
            description: TextRules::new().required().length(10, 500),
            people: NumberRules::new().required().range(1.0, 10.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let rules = FormRules::default();
        assert!(rules.title.required);
        assert_eq!(rules.title.min_length, Some(3));
        assert_eq!(rules.title.max_length, Some(100));
        assert_eq!(rules.description.min_length, Some(10));
        assert_eq!(rules.description.max_length, Some(500));
        assert_eq!(rules.people.min, Some(1.0));
        assert_eq!(rules.people.max, Some(10.0));
    }

    #[test]
    fn field_names() {
        let names: Vec<_> = FieldName::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(names, vec!["title", "description", "people"]);
    }

    #[test]
    fn partial_tables_replace_only_their_field() {
        let rules: FormRules = toml::from_str(
            r"
            [people]
            required = true
            min = 2
            max = 25
            ",
        )
        .unwrap();

        assert_eq!(rules.title, FormRules::default().title);
        assert_eq!(rules.people, NumberRules::new().required().range(2.0, 25.0));
    }
}
