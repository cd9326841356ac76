//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Traits**: `Validate`
//! - **Errors**: `ValidationError`, `ValidationErrors`
//!
//! Validators are generic over their input type:
//!
//! ```rust
//! use intake_validator::foundation::{Validate, ValidationError};
//!
//! struct NoTabs;
//!
//! impl Validate for NoTabs {
//!     type Input = str;
//!
//!     fn validate(&self, input: &str) -> Result<(), ValidationError> {
//!         if input.contains('\t') {
//!             Err(ValidationError::new("no_tabs", "Tabs are not allowed"))
//!         } else {
//!             Ok(())
//!         }
//!     }
//! }
//!
//! assert!(NoTabs.validate("plain").is_ok());
//! assert!(NoTabs.validate("a\tb").is_err());
//! ```

pub mod error;
pub mod traits;

pub use error::{ValidationError, ValidationErrors};
pub use traits::Validate;
