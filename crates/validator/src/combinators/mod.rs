//! Validator combinators
//!
//! Combinators build bigger rules out of small ones without allocating:
//!
//! - [`And`]: both must pass, first error wins
//! - [`Or`]: either may pass, both errors nested on failure
//! - [`Not`]: inverts a validator
//! - [`WithMessage`]: swaps the message shown to the user
//!
//! ```
//! use litefi_validator::prelude::*;
//!
//! let optional_email = exact_length(0).or(email());
//! assert!(optional_email.validate("").is_ok());
//! assert!(optional_email.validate("ada@litefi.ng").is_ok());
//! assert!(optional_email.validate("ada@").is_err());
//! ```

pub mod and;
pub mod message;
pub mod not;
pub mod or;

pub use and::{And, and};
pub use message::{WithMessage, with_message};
pub use not::{Not, not};
pub use or::{Or, or};
