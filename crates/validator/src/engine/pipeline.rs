//! Ordered, append-only sequence of rule steps.

use crate::foundation::RuleStep;

/// The ordered steps of a validator. Insertion order is evaluation order.
///
/// Steps are only ever appended. Cloning copies the step list, so appending
/// to a clone never shows up in the original and vice versa.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    steps: Vec<RuleStep>,
}

impl Pipeline {
    /// Creates an empty pipeline.
    #[must_use]
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Appends a step at the end.
    pub fn push(&mut self, step: RuleStep) {
        self.steps.push(step);
    }

    /// Number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true if no steps were added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Iterates over the steps in evaluation order.
    pub fn iter(&self) -> std::slice::Iter<'_, RuleStep> {
        self.steps.iter()
    }

    /// Names of the steps in evaluation order.
    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(RuleStep::name).collect()
    }
}

impl<'a> IntoIterator for &'a Pipeline {
    type Item = &'a RuleStep;
    type IntoIter = std::slice::Iter<'a, RuleStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<RuleStep> for Pipeline {
    fn extend<I: IntoIterator<Item = RuleStep>>(&mut self, iter: I) {
        self.steps.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &'static str) -> RuleStep {
        RuleStep::check(name, |_| Ok(()))
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut pipeline = Pipeline::new();
        pipeline.push(named("a"));
        pipeline.extend([named("b"), named("c")]);
        assert_eq!(pipeline.step_names(), vec!["a", "b", "c"]);
        assert_eq!(pipeline.len(), 3);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = Pipeline::new();
        original.push(named("a"));

        let mut copy = original.clone();
        copy.push(named("b"));
        original.push(named("c"));

        assert_eq!(original.step_names(), vec!["a", "c"]);
        assert_eq!(copy.step_names(), vec!["a", "b"]);
    }
}
