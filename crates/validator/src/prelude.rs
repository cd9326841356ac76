//! Prelude module for convenient imports.
//!
//! ```rust
//! use intake_validator::prelude::*;
//!
//! let description = Descriptor::text("short", TextRules::new().required().min_length(10));
//! assert!(!validate(&description));
//! ```

pub use crate::constraint::{
    Constraints, Descriptor, FieldValue, NumberRules, TextRules, ValueKind, check, validate,
};
pub use crate::foundation::{Validate, ValidationError, ValidationErrors};

#[allow(clippy::wildcard_imports, ambiguous_glob_reexports)]
pub use crate::validators::*;
