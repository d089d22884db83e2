//! Prelude module for convenient imports.
//!
//! ```rust
//! use ruleline_validator::prelude::*;
//!
//! let age = int(30).min_int(18).max_int(120);
//! assert_eq!(age.int(), Ok(30));
//! ```

// ============================================================================
// FOUNDATION: Errors and steps
// ============================================================================

pub use crate::foundation::{
    CoercionError, Error, RuleStep, ScalarKind, StepKind, ValidationError, ValidationErrors,
};

// ============================================================================
// ENGINE: Validator and pipeline
// ============================================================================

pub use crate::engine::{Pipeline, Validator};
pub use crate::{int, text};

// ============================================================================
// EXTRAS
// ============================================================================

pub use crate::batch::Batch;
pub use crate::rules::PasswordPolicy;
