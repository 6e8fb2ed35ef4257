use super::rules::VerificationRule;
use super::{VerificationContext, VerificationResult};
use crate::Result;

pub struct VerificationEngine<'a> {
    rules: Vec<&'a dyn VerificationRule>,
}

impl<'a> VerificationEngine<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn add_rule(&mut self, rule: &'a dyn VerificationRule) {
        self.rules.push(rule);
    }

    /// Runs every rule in insertion order, accumulating into one result.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a rule; later rules do not run.
    pub fn verify(&self, context: &VerificationContext) -> Result<VerificationResult> {
        let mut result = VerificationResult::default();

        for rule in &self.rules {
            rule.check(context, &mut result)?;
        }

        Ok(result)
    }
}

impl Default for VerificationEngine<'_> {
    fn default() -> Self {
        Self::new()
    }
}
