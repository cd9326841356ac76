use intake_validator::foundation::{ValidationError, ValidationErrors};

use crate::rules::FieldName;

/// Validation failures grouped by field, in form order.
pub type FieldErrors = Vec<(FieldName, ValidationErrors)>;

/// A submission was rejected because at least one field is invalid.
///
/// The display message is the user-facing notice; per-field reasons are in
/// [`FormRejected::fields`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Wrong input value, please try again.")]
pub struct FormRejected {
    fields: FieldErrors,
}

impl FormRejected {
    pub(crate) fn new(fields: FieldErrors) -> Self {
        Self { fields }
    }

    /// Fields that failed, with their errors.
    #[must_use]
    pub fn fields(&self) -> &[(FieldName, ValidationErrors)] {
        &self.fields
    }

    /// Names of the fields that failed.
    #[must_use]
    pub fn field_names(&self) -> Vec<FieldName> {
        self.fields.iter().map(|(name, _)| *name).collect()
    }

    /// Every error, tagged with its field name.
    pub fn errors(&self) -> impl Iterator<Item = &ValidationError> {
        self.fields.iter().flat_map(|(_, errors)| errors.errors())
    }
}
