use precommit_core::CommitMessageConfig;

use super::{VerificationContext, VerificationResult, VerificationRule};
use crate::Result;
use crate::verification::Violation;

pub struct CommitMessageRule {
    min_length: usize,
}

impl CommitMessageRule {
    #[must_use]
    pub fn new(config: &CommitMessageConfig) -> Self {
        Self {
            min_length: config.min_length(),
        }
    }
}

impl VerificationRule for CommitMessageRule {
    fn check(&self, context: &VerificationContext, result: &mut VerificationResult) -> Result<()> {
        let actual = context.message.char_len();
        if actual < self.min_length {
            result.violations.push(Violation::MessageTooShort {
                minimum: self.min_length,
                actual,
            });
        }
        Ok(())
    }
}
