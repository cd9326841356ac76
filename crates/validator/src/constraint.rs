//! Declarative field constraints.
//!
//! A [`Descriptor`] pairs a [`FieldValue`] with a set of optional
//! [`Constraints`]. Which constraints apply depends on the value kind:
//!
//! | constraint   | text (trimmed)    | number        |
//! |--------------|-------------------|---------------|
//! | `required`   | not blank         | not NaN       |
//! | `min_length` | length `>=` bound | inert         |
//! | `max_length` | length `<=` bound | inert         |
//! | `min`        | inert             | `>=` bound    |
//! | `max`        | inert             | `<=` bound    |
//!
//! Text is trimmed with [`trim_form_text`] and its length counted in UTF-16
//! code units, as a browser form input reports it.
//!
//! Inert constraints are skipped, not reported. Callers that know the kind
//! up front should use [`TextRules`] or [`NumberRules`], which only expose
//! the constraints that can apply.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::foundation::{Validate, ValidationError, ValidationErrors};
use crate::validators::{MaxLength, MinLength, NotBlank, Present, max, min, trim_form_text};

// ============================================================================
// FIELD VALUE
// ============================================================================

/// The value under test: text or a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Raw text as entered, untrimmed.
    Text(String),
    /// A number; NaN stands for "could not be parsed".
    Number(f64),
}

/// The kind of a [`FieldValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// A [`FieldValue::Text`].
    Text,
    /// A [`FieldValue::Number`].
    Number,
}

impl FieldValue {
    /// Returns the kind of this value.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            FieldValue::Text(_) => ValueKind::Text,
            FieldValue::Number(_) => ValueKind::Number,
        }
    }

    /// Returns the text, if this is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::Number(_) => None,
        }
    }

    /// Returns the number, if this is a numeric value.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Text(_) => None,
            FieldValue::Number(n) => Some(*n),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Text => f.write_str("text"),
            ValueKind::Number => f.write_str("number"),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => write!(f, "{text:?}"),
            FieldValue::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Number(f64::from(value))
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Number(f64::from(value))
    }
}

// ============================================================================
// TEXT RULES
// ============================================================================

/// Constraints for a text value.
///
/// Every check runs on the value with leading and trailing form whitespace
/// removed. Length bounds are inclusive and count UTF-16 code units.
///
/// ```rust
/// use intake_validator::TextRules;
/// use intake_validator::foundation::Validate;
///
/// let title = TextRules::new().required().length(3, 100);
/// assert!(title.validate("My Project").is_ok());
/// assert!(title.validate("   ").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TextRules {
    /// The trimmed value must not be empty.
    pub required: bool,
    /// Minimum trimmed length.
    #[serde(alias = "minLength", skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    /// Maximum trimmed length.
    #[serde(alias = "maxLength", skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
}

impl TextRules {
    /// Rules with no constraints; every text passes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires a non-blank value.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the minimum trimmed length.
    #[must_use]
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Sets the maximum trimmed length.
    #[must_use]
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Sets both length bounds.
    #[must_use]
    pub fn length(self, min: usize, max: usize) -> Self {
        self.min_length(min).max_length(max)
    }

    /// Checks `input`, collecting every violated constraint in the order
    /// required, min_length, max_length.
    pub fn check(&self, input: &str) -> Result<(), ValidationErrors> {
        let trimmed = trim_form_text(input);
        let mut errors = ValidationErrors::new();

        if self.required {
            errors.collect(NotBlank.validate(trimmed));
        }
        if let Some(min) = self.min_length {
            errors.collect(MinLength::new(min).validate(trimmed));
        }
        if let Some(max) = self.max_length {
            errors.collect(MaxLength::new(max).validate(trimmed));
        }

        errors.into_result(())
    }
}

impl Validate for TextRules {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.check(input).map_err(into_error)
    }
}

// ============================================================================
// NUMBER RULES
// ============================================================================

/// Constraints for a numeric value.
///
/// Bounds are inclusive. A NaN value fails `required` and every declared
/// bound.
///
/// ```rust
/// use intake_validator::NumberRules;
/// use intake_validator::foundation::Validate;
///
/// let people = NumberRules::new().required().range(1.0, 10.0);
/// assert!(people.validate(&4.0).is_ok());
/// assert!(people.validate(&11.0).is_err());
/// assert!(people.validate(&f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberRules {
    /// The value must not be NaN.
    pub required: bool,
    /// Minimum value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Maximum value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl NumberRules {
    /// Rules with no constraints; every number passes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires a number (not NaN).
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the minimum value.
    #[must_use]
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Sets the maximum value.
    #[must_use]
    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Sets both bounds.
    #[must_use]
    pub fn range(self, min: f64, max: f64) -> Self {
        self.min(min).max(max)
    }

    /// Checks `input`, collecting every violated constraint in the order
    /// required, min, max.
    pub fn check(&self, input: f64) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.required {
            errors.collect(Present.validate(&input));
        }
        if let Some(bound) = self.min {
            errors.collect(min(bound).validate(&input));
        }
        if let Some(bound) = self.max {
            errors.collect(max(bound).validate(&input));
        }

        errors.into_result(())
    }
}

impl Validate for NumberRules {
    type Input = f64;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.check(*input).map_err(into_error)
    }
}

// ============================================================================
// CONSTRAINTS
// ============================================================================

/// The full, kind-agnostic constraint set of a descriptor.
///
/// Unset fields mean "no constraint". Constraints that do not apply to the
/// value's kind are ignored: `min` on a text value is not an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Constraints {
    /// Text: not blank after trimming. Number: not NaN.
    pub required: bool,
    /// Text only: minimum trimmed length.
    #[serde(alias = "minLength", skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    /// Text only: maximum trimmed length.
    #[serde(alias = "maxLength", skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    /// Number only: minimum value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Number only: maximum value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl Constraints {
    /// Keys a serialized constraint set may use, aliases included.
    pub const KEYS: [&'static str; 7] = [
        "required",
        "min_length",
        "minLength",
        "max_length",
        "maxLength",
        "min",
        "max",
    ];

    /// The subset that applies to text values.
    #[must_use]
    pub fn text_rules(&self) -> TextRules {
        TextRules {
            required: self.required,
            min_length: self.min_length,
            max_length: self.max_length,
        }
    }

    /// The subset that applies to numeric values.
    #[must_use]
    pub fn number_rules(&self) -> NumberRules {
        NumberRules {
            required: self.required,
            min: self.min,
            max: self.max,
        }
    }

    /// Returns true when no constraint is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Checks `value` against the constraints that apply to its kind.
    pub fn check(&self, value: &FieldValue) -> Result<(), ValidationErrors> {
        match value {
            FieldValue::Text(text) => self.text_rules().check(text),
            FieldValue::Number(n) => self.number_rules().check(*n),
        }
    }
}

impl From<TextRules> for Constraints {
    fn from(rules: TextRules) -> Self {
        Self {
            required: rules.required,
            min_length: rules.min_length,
            max_length: rules.max_length,
            ..Self::default()
        }
    }
}

impl From<NumberRules> for Constraints {
    fn from(rules: NumberRules) -> Self {
        Self {
            required: rules.required,
            min: rules.min,
            max: rules.max,
            ..Self::default()
        }
    }
}

impl Validate for Constraints {
    type Input = FieldValue;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.check(input).map_err(into_error)
    }
}

fn into_error(errors: ValidationErrors) -> ValidationError {
    let mut errors = errors.into_iter();
    match (errors.next(), errors.next()) {
        (Some(only), None) => only,
        (first, second) => first
            .into_iter()
            .chain(second)
            .chain(errors)
            .collect::<ValidationErrors>()
            .into_single_error("Value violates several constraints"),
    }
}

// ============================================================================
// DESCRIPTOR
// ============================================================================

/// A value plus the constraints it must satisfy, built fresh for one
/// validation call.
///
/// ```rust
/// use intake_validator::{Descriptor, validate};
///
/// let people = Descriptor::new(11).required().min(1.0).max(10.0);
/// assert!(!validate(&people));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Descriptor {
    /// The value under test.
    pub value: FieldValue,
    /// The declared constraints.
    #[serde(flatten)]
    pub constraints: Constraints,
}

impl Descriptor {
    /// Creates a descriptor with no constraints.
    pub fn new(value: impl Into<FieldValue>) -> Self {
        Self {
            value: value.into(),
            constraints: Constraints::default(),
        }
    }

    /// Creates a text descriptor from typed rules.
    pub fn text(value: impl Into<String>, rules: TextRules) -> Self {
        Self {
            value: FieldValue::Text(value.into()),
            constraints: rules.into(),
        }
    }

    /// Creates a numeric descriptor from typed rules.
    #[must_use]
    pub fn number(value: f64, rules: NumberRules) -> Self {
        Self {
            value: FieldValue::Number(value),
            constraints: rules.into(),
        }
    }

    /// Replaces the constraint set.
    #[must_use]
    pub fn with_constraints(mut self, constraints: impl Into<Constraints>) -> Self {
        self.constraints = constraints.into();
        self
    }

    /// Declares `required`.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.constraints.required = true;
        self
    }

    /// Declares `min_length`.
    #[must_use]
    pub fn min_length(mut self, min: usize) -> Self {
        self.constraints.min_length = Some(min);
        self
    }

    /// Declares `max_length`.
    #[must_use]
    pub fn max_length(mut self, max: usize) -> Self {
        self.constraints.max_length = Some(max);
        self
    }

    /// Declares `min`.
    #[must_use]
    pub fn min(mut self, min: f64) -> Self {
        self.constraints.min = Some(min);
        self
    }

    /// Declares `max`.
    #[must_use]
    pub fn max(mut self, max: f64) -> Self {
        self.constraints.max = Some(max);
        self
    }
}

/// Returns true iff every applicable constraint of `descriptor` holds.
///
/// Never fails and never panics, whatever combination of constraints and
/// value kind it is given.
#[must_use]
pub fn validate(descriptor: &Descriptor) -> bool {
    check(descriptor).is_ok()
}

/// Like [`validate`], but reports every violated constraint in the order
/// required, min_length, max_length, min, max.
pub fn check(descriptor: &Descriptor) -> Result<(), ValidationErrors> {
    descriptor.constraints.check(&descriptor.value)
}
