//! # ruleline-validator
//!
//! Fluent, reusable rule pipelines for validating and coercing single values.
//!
//! ## Quick Start
//!
//! ```rust
//! use ruleline_validator::prelude::*;
//!
//! // Declare the rules once, before any value exists.
//! let username = Validator::new().required().is_alphanumeric().max_length(16);
//!
//! // Clone per value, bind, evaluate.
//! let checked = username.clone().verifi("alice", "username");
//! assert_eq!(checked.result(), Ok("alice".to_owned()));
//!
//! let missing = username.clone().verifi("", "username");
//! assert_eq!(missing.error().map(|e| e.code().to_owned()).as_deref(), Some("required"));
//! ```
//!
//! ## Evaluation
//!
//! Steps run in the order they were chained. Ordinary rules stop doing work
//! once one of them fails; [`customize`](Validator::customize) steps always
//! run and may replace or clear the error. The outcome is computed on the
//! first terminal call and cached for the lifetime of the binding.
//!
//! ## Typed results
//!
//! ```rust
//! use ruleline_validator::{int, text};
//!
//! assert_eq!(text("true").bool(), Ok(true));
//! assert_eq!(int(6).max_int(60).int(), Ok(6));
//! assert!(int(64).max_int(60).int().is_err());
//! ```

// Error carries a ValidationError payload inline; every accessor clones it out of the cache.
#![allow(clippy::result_large_err)]

pub mod batch;
pub mod engine;
pub mod foundation;
pub mod prelude;
pub mod rules;

pub use batch::Batch;
pub use engine::{Pipeline, Validator};
pub use foundation::{Error, RuleStep, ValidationError};

/// Starts a validator bound to `value` with an empty label.
pub fn text(value: impl Into<String>) -> Validator {
    Validator::from_text(value)
}

/// Starts a validator bound to the decimal form of `value`.
#[must_use]
pub fn int(value: i64) -> Validator {
    Validator::from_int(value)
}
