//! Validating several bound values together, e.g. every field of a form.
//!
//! ```rust
//! use ruleline_validator::{Batch, Validator};
//!
//! let name = Validator::new().required().verifi("ada", "name");
//! let age = Validator::new().required().max_int(150).verifi("200", "age");
//!
//! let batch = Batch::new().with(name).with(age);
//! assert_eq!(batch.first_error().map(|e| e.code().to_owned()).as_deref(), Some("max_int"));
//! assert_eq!(batch.check_all().unwrap_err().len(), 1);
//! ```

use crate::engine::Validator;
use crate::foundation::{Error, ValidationErrors};

/// An ordered group of bound validators.
#[derive(Debug, Default)]
pub struct Batch {
    validators: Vec<Validator>,
}

impl Batch {
    /// Creates an empty batch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a validator, builder style.
    pub fn with(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    /// Adds a validator.
    pub fn add(&mut self, validator: Validator) {
        self.validators.push(validator);
    }

    /// Number of validators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Returns true if the batch holds no validators.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// The first failure in insertion order.
    ///
    /// Validators after the first failing one are not evaluated.
    pub fn first_error(&self) -> Option<Error> {
        self.validators.iter().find_map(Validator::error)
    }

    /// Evaluates every validator and gathers all failures.
    pub fn check_all(&self) -> Result<(), ValidationErrors> {
        self.validators
            .iter()
            .filter_map(Validator::error)
            .collect::<ValidationErrors>()
            .into_result(())
    }

    /// Iterates over the validators.
    pub fn iter(&self) -> std::slice::Iter<'_, Validator> {
        self.validators.iter()
    }
}

impl FromIterator<Validator> for Batch {
    fn from_iter<I: IntoIterator<Item = Validator>>(iter: I) -> Self {
        Self {
            validators: iter.into_iter().collect(),
        }
    }
}

impl Extend<Validator> for Batch {
    fn extend<I: IntoIterator<Item = Validator>>(&mut self, iter: I) {
        self.validators.extend(iter);
    }
}
