//! Macros for creating validators with minimal boilerplate.
//!
//! [`validator!`] generates the struct, its `Validate` impl, a constructor
//! and a factory function from a rule expression and an error expression.
//!
//! ```
//! use litefi_validator::validator;
//! use litefi_validator::foundation::{Validate, ValidationError};
//!
//! validator! {
//!     /// Account numbers are NUBAN: ten digits.
//!     pub Nuban for str;
//!     rule(input) { input.len() == 10 && input.bytes().all(|b| b.is_ascii_digit()) }
//!     error(input) { ValidationError::new("invalid_nuban", "Account number must be 10 digits") }
//!     fn nuban();
//! }
//!
//! assert!(nuban().validate("0123456789").is_ok());
//! assert!(nuban().validate("12345").is_err());
//! ```

/// Creates a complete validator: struct definition, `Validate` implementation,
/// constructor, and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied; unit validators additionally
/// derive `Copy, PartialEq, Eq, Hash`.
///
/// **Unit validator** (zero-sized, no fields):
/// ```rust,ignore
/// validator! {
///     pub Bvn for str;
///     rule(input) { is_eleven_digits(input) }
///     error(input) { ValidationError::new("invalid_bvn", "BVN must be 11 digits") }
///     fn bvn();
/// }
/// ```
///
/// **Struct with fields** (auto `new` from all fields):
/// ```rust,ignore
/// validator! {
///     #[derive(Copy, PartialEq, Eq, Hash)]
///     pub ExactLength { length: usize } for str;
///     rule(self, input) { input.chars().count() == self.length }
///     error(self, input) { ValidationError::new("exact_length", "wrong length") }
///     fn exact_length(length: usize);
/// }
/// ```
///
/// **Custom constructor** (overrides auto `new`):
/// ```rust,ignore
/// validator! {
///     pub MinLength { min: usize, trim: bool } for str;
///     rule(self, input) { measure(input, self.trim) >= self.min }
///     error(self, input) { ValidationError::min_length(self.min, measure(input, self.trim)) }
///     new(min: usize) { Self { min, trim: true } }
///     fn min_length(min: usize);
/// }
/// ```
#[macro_export]
macro_rules! validator {
    // ── Unit validator (no fields) + factory fn ─────────────────────────
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

    // ── Unit validator (no fields), no factory ──────────────────────────
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

    // ── Struct with fields + custom new + factory fn ────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        $crate::validator!(@impl $name, $input, $self_, $inp, $rule, $einp, $err);

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + auto new + factory fn ──────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        $crate::validator!(@impl $name, $input, $self_, $inp, $rule, $einp, $err);

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Shared `Validate` impl for struct validators ────────────────────
    (@impl $name:ident, $input:ty, $self_:ident, $inp:ident, $rule:block, $einp:ident, $err:block) => {
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
}
