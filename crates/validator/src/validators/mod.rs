//! Built-in validators
//!
//! - **Text**: blank check and length bounds, in UTF-16 code units
//! - **Numeric**: presence and range bounds
//!
//! ```rust
//! use intake_validator::prelude::*;
//!
//! assert!(min_length(3).validate("My Project").is_ok());
//! assert!(max_length(3).validate("\u{1D49C}\u{1D49C}").is_err());
//!
//! assert!(max(10.0).validate(&11.0).is_err());
//! assert!(present().validate(&f64::NAN).is_err());
//! ```

pub mod length;
pub mod presence;
pub mod range;

pub use length::{
    MaxLength, MinLength, NotBlank, is_form_whitespace, max_length, min_length, not_blank,
    text_length, trim_form_text,
};
pub use presence::{Present, present};
pub use range::{Max, Min, max, min};
