//! Descriptor behaviour over concrete inputs.

use intake_validator::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case::empty("", false)]
#[case::whitespace_only("   \t", false)]
#[case::single_char("x", true)]
#[case::padded("  x  ", true)]
fn required_text(#[case] value: &str, #[case] expected: bool) {
    assert_eq!(validate(&Descriptor::new(value).required()), expected);
}

#[rstest]
#[case::below_min("ab", false)]
#[case::at_min("abc", true)]
#[case::at_max("abcde", true)]
#[case::above_max("abcdef", false)]
#[case::padding_ignored("   abcde   ", true)]
fn text_length(#[case] value: &str, #[case] expected: bool) {
    let descriptor = Descriptor::text(value, TextRules::new().length(3, 5));
    assert_eq!(validate(&descriptor), expected);
}

#[rstest]
#[case::below_min(0.0, false)]
#[case::at_min(1.0, true)]
#[case::fractional(2.5, true)]
#[case::at_max(10.0, true)]
#[case::above_max(11.0, false)]
#[case::nan(f64::NAN, false)]
fn number_range(#[case] value: f64, #[case] expected: bool) {
    let descriptor = Descriptor::number(value, NumberRules::new().required().range(1.0, 10.0));
    assert_eq!(validate(&descriptor), expected);
}

#[rstest]
#[case::accented("\u{e9}t\u{e9}", 3, true)]
#[case::cjk("\u{4e2d}\u{6587}\u{5b57}", 3, true)]
#[case::astral_counts_two_units("\u{1D49C}\u{1D49C}", 4, true)]
#[case::astral_short("\u{1D49C}", 3, false)]
#[case::emoji("\u{1F600}x", 3, true)]
#[case::ideographic_padding("\u{3000}ab\u{3000}", 3, false)]
#[case::bom_padding("\u{FEFF}ab\u{FEFF}", 3, false)]
#[case::next_line_is_content("\u{85}ab", 3, true)]
fn text_length_in_utf16_units(#[case] value: &str, #[case] min: usize, #[case] expected: bool) {
    assert_eq!(validate(&Descriptor::new(value).min_length(min)), expected);
}

#[rstest]
#[case::byte_order_mark("\u{FEFF}")]
#[case::ideographic_space("\u{3000}")]
#[case::no_break_space("\u{a0}\u{a0}")]
#[case::line_separator("\u{2028}")]
fn required_rejects_unicode_blank(#[case] value: &str) {
    assert!(!validate(&Descriptor::new(value).required()));
}

#[test]
fn padded_value_is_measured_trimmed() {
    let descriptor = Descriptor::new("  hi  ").required().min_length(3);
    assert!(!validate(&descriptor));
}

#[test]
fn string_with_range_constraints_is_valid() {
    assert!(validate(&Descriptor::new("abc").min(10.0).max(20.0)));
}

#[test]
fn project_form_rejection_scenario() {
    let title = Descriptor::text("My Project", TextRules::new().required().length(3, 100));
    let description = Descriptor::text("Short", TextRules::new().required().length(10, 500));
    let people = Descriptor::number(11.0, NumberRules::new().required().range(1.0, 10.0));

    assert!(validate(&title));
    assert!(!validate(&description));
    assert!(!validate(&people));

    let accepted = [&title, &description, &people]
        .into_iter()
        .all(validate);
    assert!(!accepted);
}

#[test]
fn check_reports_reasons() {
    let errors = check(&Descriptor::number(11.0, NumberRules::new().range(1.0, 10.0))).unwrap_err();
    assert_eq!(errors.len(), 1);

    let error = &errors.errors()[0];
    assert_eq!(error.code, "max");
    assert_eq!(error.param("max"), Some("10"));
    assert_eq!(error.param("actual"), Some("11"));
}

#[test]
fn descriptor_from_json() {
    let descriptor: Descriptor = serde_json::from_value(json!({
        "value": "  hi  ",
        "required": true,
        "min_length": 3
    }))
    .unwrap();

    assert_eq!(descriptor, Descriptor::new("  hi  ").required().min_length(3));
    assert!(!validate(&descriptor));

    let numeric: Descriptor = serde_json::from_value(json!({ "value": 4, "max": 10 })).unwrap();
    assert_eq!(numeric.value.kind(), ValueKind::Number);
    assert!(validate(&numeric));
}

#[test]
fn descriptor_from_camel_case_json() {
    let descriptor: Descriptor = serde_json::from_value(json!({
        "value": "ab",
        "required": true,
        "minLength": 3,
        "maxLength": 10
    }))
    .unwrap();

    assert_eq!(
        descriptor,
        Descriptor::new("ab").required().min_length(3).max_length(10)
    );
    assert!(!validate(&descriptor));
}

#[test]
fn descriptor_to_json_omits_unset_constraints() {
    let descriptor = Descriptor::new(3).required().max(10.0);
    assert_eq!(
        serde_json::to_value(&descriptor).unwrap(),
        json!({ "value": 3.0, "required": true, "max": 10.0 })
    );
}

#[test]
fn validators_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Descriptor>();
    assert_send_sync::<Constraints>();
    assert_send_sync::<ValidationErrors>();
}
