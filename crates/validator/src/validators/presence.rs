//! Presence validators for numeric input.
//!
//! A number parsed from a form field is "absent" when parsing produced NaN
//! (empty or non-numeric text).

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a number is present, i.e. not NaN.
    ///
    /// Infinities are numbers and count as present; bound them with
    /// [`Max`](super::Max) or [`Min`](super::Min).
    pub Present for f64;
    rule(input) { !input.is_nan() }
    error(input) {
        ValidationError::new("required", "Value must be a number")
            .with_param("actual", input.to_string())
    }
    fn present();
}
