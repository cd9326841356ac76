//! Text validators.
//!
//! Lengths are counted in UTF-16 code units, the unit browser form inputs
//! report: `"é"` is 1, `"𝒜"` is 2. Blankness and trimming use the same
//! whitespace set as `String.prototype.trim`: Unicode `White_Space`
//! without NEL (U+0085), plus the byte order mark (U+FEFF).
//!
//! [`MinLength`] and [`MaxLength`] measure the input exactly as given;
//! [`TextRules`](crate::TextRules) trims with [`trim_form_text`] first.

use crate::foundation::ValidationError;

/// Returns true for characters stripped from the ends of form text.
#[must_use]
pub fn is_form_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// Strips leading and trailing form whitespace.
#[must_use]
pub fn trim_form_text(input: &str) -> &str {
    input.trim_matches(is_form_whitespace)
}

/// Length of `input` in UTF-16 code units.
#[must_use]
pub fn text_length(input: &str) -> usize {
    input.encode_utf16().count()
}

crate::validator! {
    /// Validates that a string has content besides form whitespace.
    ///
    /// `" "`, `""` and `"\u{FEFF}"` all fail; this is what a required text
    /// field means.
    pub NotBlank for str;
    rule(input) { !trim_form_text(input).is_empty() }
    error(input) { ValidationError::new("required", "Value must not be blank") }
    fn not_blank();
}

crate::validator! {
    /// Validates that a string has at least `min` UTF-16 code units.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize } for str;
    rule(self, input) { text_length(input) >= self.min }
    error(self, input) {
        ValidationError::new("min_length", format!("Must be at least {} characters", self.min))
            .with_param("min", self.min.to_string())
            .with_param("actual", text_length(input).to_string())
    }
    new(min: usize) { Self { min } }
    fn min_length(min: usize);
}

crate::validator! {
    /// Validates that a string has at most `max` UTF-16 code units.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize } for str;
    rule(self, input) { text_length(input) <= self.max }
    error(self, input) {
        ValidationError::new("max_length", format!("Must be at most {} characters", self.max))
            .with_param("max", self.max.to_string())
            .with_param("actual", text_length(input).to_string())
    }
    new(max: usize) { Self { max } }
    fn max_length(max: usize);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use rstest::rstest;

    #[rstest]
    #[case::ascii("hello", 5)]
    #[case::latin_precomposed("h\u{e9}llo", 5)]
    #[case::cjk("\u{4e2d}\u{6587}", 2)]
    #[case::astral("\u{1D49C}\u{1D49C}", 4)]
    #[case::emoji("\u{1F600}", 2)]
    fn counts_utf16_units(#[case] input: &str, #[case] expected: usize) {
        assert_eq!(text_length(input), expected);
    }

    #[rstest]
    #[case::ascii_spaces(" \t\n hi \r\n", "hi")]
    #[case::ideographic_space("\u{3000}hi\u{3000}", "hi")]
    #[case::no_break_space("\u{a0}hi\u{a0}", "hi")]
    #[case::byte_order_mark("\u{FEFF}hi\u{FEFF}", "hi")]
    #[case::line_separator("\u{2028}hi\u{2029}", "hi")]
    #[case::next_line_kept("\u{85}hi", "\u{85}hi")]
    #[case::inner_kept(" a b ", "a b")]
    fn trims_form_whitespace(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(trim_form_text(input), expected);
    }

    #[test]
    fn test_not_blank() {
        assert!(not_blank().validate("hello").is_ok());
        assert!(not_blank().validate("  x  ").is_ok());
        assert!(not_blank().validate("").is_err());
        assert!(not_blank().validate(" \t\n ").is_err());
        assert!(not_blank().validate("\u{FEFF}").is_err());
        assert!(not_blank().validate("\u{3000}").is_err());
    }

    #[test]
    fn test_not_blank_error_code() {
        let error = NotBlank.validate("   ").unwrap_err();
        assert_eq!(error.code, "required");
    }

    #[test]
    fn test_min_length() {
        let validator = MinLength::new(5);
        assert!(validator.validate("hello").is_ok());
        assert!(validator.validate("hi").is_err());
        assert!(validator.validate("").is_err());
        assert!(MinLength::new(4).validate("\u{1D49C}\u{1D49C}").is_ok());
    }

    #[test]
    fn test_min_length_error_params() {
        let error = min_length(10).validate("short").unwrap_err();
        assert_eq!(error.code, "min_length");
        assert_eq!(error.param("min"), Some("10"));
        assert_eq!(error.param("actual"), Some("5"));
    }

    #[test]
    fn test_max_length() {
        let validator = MaxLength::new(5);
        assert!(validator.validate("hello").is_ok());
        assert!(validator.validate("").is_ok());
        assert!(validator.validate("toolong").is_err());
        assert!(MaxLength::new(3).validate("\u{1D49C}\u{1D49C}").is_err());

        let error = max_length(3).validate("\u{1F600}\u{1F600}").unwrap_err();
        assert_eq!(error.param("actual"), Some("4"));
    }
}
