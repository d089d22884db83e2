//! The rule-pipeline engine
//!
//! - [`Pipeline`]: the ordered, append-only list of steps
//! - [`Validator`]: a pipeline plus an optional bound value and a cached outcome
//! - evaluation: ordered walk with short-circuit for ordinary steps and
//!   override for `customize` steps
//! - coercion: `int`, `float64`, `bool` and `parse` on the evaluated string
//!
//! # Template reuse
//!
//! ```rust
//! use ruleline_validator::Validator;
//!
//! let template = Validator::new().required().has_letter();
//!
//! let a = template.clone().verifi("abc", "first");
//! let b = template.clone().verifi("123", "second");
//!
//! assert!(a.result().is_ok());
//! assert!(b.result().is_err());
//! assert!(!template.is_bound());
//! ```

mod chain;
mod coerce;
mod evaluate;
mod pipeline;
mod validator;

pub use pipeline::Pipeline;
pub use validator::Validator;
