//! # intake-validator
//!
//! Declarative field constraints for the intake project form.
//!
//! ## Quick Start
//!
//! ```rust
//! use intake_validator::prelude::*;
//!
//! let title = Descriptor::text("My Project", TextRules::new().required().length(3, 100));
//! assert!(validate(&title));
//!
//! // Length is measured after trimming: "hi" is two characters.
//! let padded = Descriptor::new("  hi  ").required().min_length(3);
//! assert!(!validate(&padded));
//!
//! // Range constraints are inert on text values.
//! let inert = Descriptor::new("abc").min(10.0).max(20.0);
//! assert!(validate(&inert));
//! ```
//!
//! ## Building Blocks
//!
//! Descriptors are evaluated with the same [`Validate`](foundation::Validate)
//! validators that are usable on their own:
//!
//! - **Text**: [`NotBlank`](validators::NotBlank), [`MinLength`](validators::MinLength),
//!   [`MaxLength`](validators::MaxLength). Lengths count UTF-16 code units
//!   of the text after [`trim_form_text`](validators::trim_form_text).
//! - **Numeric**: [`Present`](validators::Present), [`Min`](validators::Min),
//!   [`Max`](validators::Max)

// Validators return ValidationError by value.
#![allow(clippy::result_large_err)]

pub mod constraint;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;

pub use constraint::{
    Constraints, Descriptor, FieldValue, NumberRules, TextRules, ValueKind, check, validate,
};
