//! # intake-form
//!
//! A headless model of the project-entry form: three raw inputs (title,
//! description, team size), one descriptor per field, and a submit step
//! that either hands back the validated [`Project`] and clears the inputs,
//! or rejects the submission and leaves the inputs as they were.
//!
//! ```rust
//! use intake_form::{FormRules, ProjectForm};
//!
//! let mut form = ProjectForm::new(FormRules::default());
//! form.set_title("My Project");
//! form.set_description("A project with a long enough description");
//! form.set_people("4");
//!
//! let project = form.submit().unwrap();
//! assert_eq!(project.people, 4.0);
//! assert!(form.inputs().is_empty());
//! ```

mod error;
mod form;
mod rules;

pub use error::{FieldErrors, FormRejected};
pub use form::{FormInputs, Project, ProjectForm};
pub use rules::{FieldName, FormRules};
