//! Building blocks shared by the engine and the rule library
//!
//! - **Errors**: [`Error`], [`ValidationError`], [`CoercionError`], [`ValidationErrors`]
//! - **Steps**: [`RuleStep`], the `(value, error) -> (value, error)` unit of work
//!
//! Built-in rules and caller-defined rules are both plain [`RuleStep`]s:
//!
//! ```rust
//! use ruleline_validator::foundation::{RuleStep, ValidationError};
//!
//! let even_length = RuleStep::check("even_length", |input| {
//!     if input.chars().count() % 2 == 0 {
//!         Ok(())
//!     } else {
//!         Err(ValidationError::new("even_length", "Length must be even"))
//!     }
//! });
//! # let _ = even_length;
//! ```

pub mod error;
pub mod step;

pub use error::{CoercionError, Error, ScalarKind, ValidationError, ValidationErrors};
pub use step::{RuleStep, StepFn, StepKind};
