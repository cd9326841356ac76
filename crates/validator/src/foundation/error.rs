//! Error types for validation failures
//!
//! All string fields use `Cow<'static, str>` so the common case of static
//! error codes and messages does not allocate.

use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt;

type Param = (Cow<'static, str>, Cow<'static, str>);

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation error.
///
/// ```rust
/// use intake_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("min_length", "String is too short")
///     .with_field("title")
///     .with_param("min", "3")
///     .with_param("actual", "2");
///
/// assert_eq!(error.param("min"), Some("3"));
/// assert_eq!(error.to_string(), "[title] min_length: String is too short (params: [min=3, actual=2])");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code for programmatic handling.
    ///
    /// Examples: "required", "min_length", "max"
    pub code: Cow<'static, str>,

    /// Human-readable error message in English.
    pub message: Cow<'static, str>,

    /// Name of the form field the error belongs to, if known.
    pub field: Option<Cow<'static, str>>,

    /// Ordered key-value parameters (typically 1-3).
    /// Example: `[("min", "5"), ("actual", "3")]`
    pub params: SmallVec<[Param; 3]>,

    /// Nested validation errors, used when several constraints failed at once.
    pub nested: Vec<ValidationError>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: SmallVec::new(),
            nested: Vec::new(),
        }
    }

    /// Sets the field name for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Replaces the nested errors.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested(mut self, errors: Vec<ValidationError>) -> Self {
        self.nested = errors;
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        for (i, error) in self.nested.iter().enumerate() {
            write!(f, "\n    {}. {}", i + 1, error)?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// A collection of validation errors, in the order they were found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates a new empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Adds an error to the collection.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Records the error of a failed result; a passing result is ignored.
    pub fn collect(&mut self, result: Result<(), ValidationError>) {
        if let Err(error) = result {
            self.add(error);
        }
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Returns the error codes in order.
    #[must_use]
    pub fn codes(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.code.as_ref()).collect()
    }

    /// Tags every error with a field name.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(self, field: impl Into<Cow<'static, str>>) -> Self {
        let field = field.into();
        self.errors
            .into_iter()
            .map(|e| e.with_field(field.clone()))
            .collect()
    }

    /// Converts to a single error with nested errors.
    pub fn into_single_error(self, message: impl Into<Cow<'static, str>>) -> ValidationError {
        ValidationError::new("validation_errors", message).with_nested(self.errors)
    }

    /// Converts to a Result.
    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok_value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(ok_value)
        } else {
            Err(self)
        }
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_error() {
        let error = ValidationError::new("test", "Test error");
        assert_eq!(error.code, "test");
        assert_eq!(error.message, "Test error");
        assert!(error.field.is_none());
    }

    #[test]
    fn test_error_with_params() {
        let error = ValidationError::new("min", "Too small")
            .with_param("min", "5")
            .with_param("actual", "3");

        assert_eq!(error.param("min"), Some("5"));
        assert_eq!(error.param("actual"), Some("3"));
        assert_eq!(error.param("max"), None);
    }

    #[test]
    fn test_error_collection() {
        let mut errors = ValidationErrors::new();
        errors.add(ValidationError::new("error1", "First error"));
        errors.collect(Ok(()));
        errors.collect(Err(ValidationError::new("error2", "Second error")));

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.codes(), vec!["error1", "error2"]);
    }

    #[test]
    fn test_with_field_tags_every_error() {
        let errors: ValidationErrors = vec![
            ValidationError::new("a", "A"),
            ValidationError::new("b", "B"),
        ]
        .into_iter()
        .collect();

        let tagged = errors.with_field("description");
        assert!(
            tagged
                .errors()
                .iter()
                .all(|e| e.field.as_deref() == Some("description"))
        );
    }

    #[test]
    fn test_into_single_error() {
        let errors: ValidationErrors = vec![
            ValidationError::new("a", "A"),
            ValidationError::new("b", "B"),
        ]
        .into_iter()
        .collect();

        let single = errors.into_single_error("Several constraints failed");
        assert_eq!(single.code, "validation_errors");
        assert_eq!(single.nested.len(), 2);
    }

    #[test]
    fn test_into_result() {
        assert_eq!(ValidationErrors::new().into_result(7), Ok(7));

        let mut errors = ValidationErrors::new();
        errors.add(ValidationError::new("required", "Value must not be blank"));
        assert!(errors.into_result(()).is_err());
    }

    #[test]
    fn test_zero_alloc_static_strings() {
        let error = ValidationError::new("required", "This field is required");
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }
}
