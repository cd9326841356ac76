//! Macros for creating validators with minimal boilerplate.
//!
//! ```rust,ignore
//! use intake_validator::validator;
//! use intake_validator::foundation::ValidationError;
//!
//! validator! {
//!     pub NoTabs for str;
//!     rule(input) { !input.contains('\t') }
//!     error(input) { ValidationError::new("no_tabs", "must not contain tabs") }
//!     fn no_tabs();
//! }
//! ```

/// Creates a complete validator: struct definition, `Validate` implementation,
/// constructor, and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via `#[derive(...)]`.
///
/// # Variants
///
/// **Unit validator** (zero-sized, no fields):
/// ```rust,ignore
/// validator! {
///     pub NotBlank for str;
///     rule(input) { !trim_form_text(input).is_empty() }
///     error(input) { ValidationError::new("required", "blank") }
///     fn not_blank();
/// }
/// ```
///
/// **Struct with fields and a custom constructor**:
/// ```rust,ignore
/// validator! {
///     pub MinLength { min: usize } for str;
///     rule(self, input) { text_length(input) >= self.min }
///     error(self, input) { ValidationError::new("min_length", "too short") }
///     new(min: usize) { Self { min } }
///     fn min_length(min: usize);
/// }
/// ```
///
/// **Generic validator**:
/// ```rust,ignore
/// validator! {
///     #[derive(Copy, PartialEq)]
///     pub Min<T: PartialOrd + Display + Copy> { min: T } for T;
///     rule(self, input) { *input >= self.min }
///     error(self, input) { ValidationError::new("min", format!("must be >= {}", self.min)) }
///     fn min(value: T);
/// }
/// ```
#[macro_export]
macro_rules! validator {
    // ── Unit validator (no fields) + factory fn ──────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name for $input;
            rule($inp) $rule
            error($einp) $err
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Unit validator (no fields), no factory ───────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&self, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // ── Struct with fields + custom new + factory fn ─────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error($self2, $einp) $err
            new($($narg: $naty),*) $new_body
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + custom new, no factory ──────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        #[allow(clippy::new_without_default)]
        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // ── Generic struct + auto new + factory fn ───────────────────────────
    //
    // A single generic type parameter with one or more trait bounds.
    // Bounds must be simple identifiers (use imports for paths).
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident: $first_bound:ident $(+ $rest_bound:ident)*>
            { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name<$gen: $first_bound $(+ $rest_bound)*>
                { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error($self2, $einp) $err
        }

        #[must_use]
        $vis fn $factory<$gen: $first_bound $(+ $rest_bound)*>($($farg: $faty),*) -> $name<$gen> {
            $name::new($($farg),*)
        }
    };

    // ── Generic struct + auto new, no factory ────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident: $first_bound:ident $(+ $rest_bound:ident)*>
            { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name<$gen> {
            $(pub $field: $fty,)+
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $name<$gen> {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $crate::foundation::Validate for $name<$gen> {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };
}
