//! # litefi-form
//!
//! Per-form validation state for LiteFi forms.
//!
//! A [`FormValidator`] owns the values of one form, the set of fields the
//! user has touched, and a [`Ruleset`] mapping fields to [`Rule`]s. Every
//! change is revalidated immediately; errors are only shown for touched
//! fields.
//!
//! ```
//! use litefi_form::{rules, FieldValue, FormValidator, Ruleset};
//!
//! let rules = Ruleset::new()
//!     .with("full_name", rules::min_length(3))
//!     .with("bvn", rules::bvn())
//!     .with("nin", rules::nin());
//!
//! let mut form = FormValidator::new(
//!     [
//!         ("full_name", FieldValue::from("")),
//!         ("bvn", FieldValue::from("")),
//!         ("nin", FieldValue::from("")),
//!     ],
//!     rules,
//! );
//!
//! form.handle_change(&"full_name", "Ada Obi")?;
//! form.touch_all_fields();
//! assert_eq!(form.error_messages(), vec![(&"bvn", "BVN must be exactly 11 digits")]);
//!
//! form.handle_change(&"bvn", "22212345678")?;
//! assert!(form.is_form_valid());
//! # Ok::<(), litefi_form::FormError>(())
//! ```
//!
//! Rulesets can also be loaded from JSON, see [`config`].

pub mod config;
pub mod error;
pub mod rule;
pub mod rules;
pub mod state;
pub mod validator;
pub mod value;

pub use config::{FieldRules, RuleKind, RuleSpec, RulesetConfig};
pub use error::FormError;
pub use rule::{DEFAULT_ERROR_MESSAGE, Predicate, Rule, Ruleset};
pub use state::{FieldFlags, FieldState};
pub use validator::{FieldKey, FormValidator};
pub use value::{FieldValue, FileRef};
