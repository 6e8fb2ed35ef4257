use precommit_core::TagConfig;
use precommit_svnlook::ChangeKind;
use regex::Regex;
use tracing::info;

use super::{VerificationContext, VerificationResult, VerificationRule};
use crate::Result;
use crate::verification::pattern::compile_anchored;
use crate::verification::{SkipOverride, Violation};

/// Tags may be created by copy and removed, but never written in place.
pub struct TagImmutabilityRule {
    tag_path: Regex,
    skip: SkipOverride,
}

impl TagImmutabilityRule {
    /// # Errors
    ///
    /// Returns [`crate::OperationError::InvalidPattern`] if the tag path
    /// pattern is not a valid regex.
    pub fn new(config: &TagConfig) -> Result<Self> {
        Ok(Self {
            tag_path: compile_anchored(config.path_pattern())?,
            skip: SkipOverride::new(config.skip_keyword()),
        })
    }
}

impl VerificationRule for TagImmutabilityRule {
    fn check(&self, context: &VerificationContext, result: &mut VerificationResult) -> Result<()> {
        if self.skip.applies(&context.message) {
            info!(keyword = self.skip.keyword(), "tag check skipped");
            return Ok(());
        }

        let written = context.changes.iter().find(|change| {
            self.tag_path.is_match(&change.path)
                && !change.was_copied
                && change.kind != ChangeKind::Deleted
        });

        if let Some(change) = written {
            result.violations.push(Violation::TaggedPathWrite {
                path: change.path.clone(),
            });
        }

        Ok(())
    }
}
