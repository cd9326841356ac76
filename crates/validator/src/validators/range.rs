//! Numeric range validators
//!
//! All bounds are inclusive. Comparisons go through `PartialOrd`, so a NaN
//! input never satisfies a bound.

use std::fmt::Display;

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a value is at least a minimum.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Min<T: PartialOrd + Display + Copy> { min: T } for T;
    rule(self, input) { *input >= self.min }
    error(self, input) {
        ValidationError::new("min", format!("Value must be at least {}", self.min))
            .with_param("min", self.min.to_string())
            .with_param("actual", input.to_string())
    }
    fn min(value: T);
}

crate::validator! {
    /// Validates that a value does not exceed a maximum.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Max<T: PartialOrd + Display + Copy> { max: T } for T;
    rule(self, input) { *input <= self.max }
    error(self, input) {
        ValidationError::new("max", format!("Value must be at most {}", self.max))
            .with_param("max", self.max.to_string())
            .with_param("actual", input.to_string())
    }
    fn max(value: T);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn test_min() {
        let validator = min(5);
        assert!(validator.validate(&5).is_ok());
        assert!(validator.validate(&10).is_ok());
        assert!(validator.validate(&3).is_err());
    }

    #[test]
    fn test_max() {
        let validator = max(10);
        assert!(validator.validate(&5).is_ok());
        assert!(validator.validate(&10).is_ok());
        assert!(validator.validate(&15).is_err());
    }

    #[test]
    fn test_float_bounds() {
        assert!(min(1.0_f64).validate(&1.0).is_ok());
        assert!(min(1.0_f64).validate(&0.999).is_err());
        assert!(max(10.0_f64).validate(&9.5).is_ok());
        assert!(max(10.0_f64).validate(&10.001).is_err());
    }

    #[test]
    fn test_nan_never_satisfies_a_bound() {
        assert!(min(1.0_f64).validate(&f64::NAN).is_err());
        assert!(max(10.0_f64).validate(&f64::NAN).is_err());
    }

    #[test]
    fn test_error_params() {
        let error = max(10.0_f64).validate(&11.0).unwrap_err();
        assert_eq!(error.code, "max");
        assert_eq!(error.param("max"), Some("10"));
        assert_eq!(error.param("actual"), Some("11"));
    }
}
