//! Core traits for the validation system

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators must implement.
///
/// Generic over the input type, so a text validator cannot be handed a
/// number by accident. Every validator returns `Result<(), ValidationError>`.
///
/// # Type Parameters
///
/// * `Input` - The type being validated (can be `?Sized` for DSTs like `str`)
pub trait Validate {
    /// The type of input being validated.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if validation succeeds
    /// * `Err(ValidationError)` if validation fails
    fn validate(&self, input: &Self::Input) -> Result<(), crate::foundation::ValidationError>;

    /// Returns `true` when `input` passes this validator.
    fn is_valid(&self, input: &Self::Input) -> bool {
        self.validate(input).is_ok()
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), crate::foundation::ValidationError> {
        (**self).validate(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidationError;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    #[test]
    fn test_validator_trait() {
        let validator = AlwaysValid;
        assert!(validator.validate("test").is_ok());
        assert!(validator.is_valid("test"));
    }

    #[test]
    fn test_reference_is_a_validator() {
        fn check_all<V: Validate<Input = str>>(validators: &[V], input: &str) -> bool {
            validators.iter().all(|v| v.is_valid(input))
        }

        let validator = AlwaysValid;
        assert!(check_all(&[&validator, &validator], "test"));
    }
}
