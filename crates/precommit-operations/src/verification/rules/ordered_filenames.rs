use precommit_core::{OrderedFilenameConfig, filename_of, module_of};
use tracing::info;

use super::{VerificationContext, VerificationResult, VerificationRule};
use crate::Result;
use crate::traits::RepositoryView;
use crate::verification::baseline::BaselineIndex;
use crate::verification::{MigrationPattern, SkipOverride, Violation};

/// Rejects migration changes that sort before the latest migration already
/// present in the same module.
///
/// Every change kind counts: adding, modifying or deleting a migration that
/// is older than an existing one is equally rejected.
pub struct OrderedFilenameRule<'a, R: RepositoryView> {
    repository: &'a R,
    pattern: MigrationPattern,
    skip: SkipOverride,
}

impl<'a, R: RepositoryView> OrderedFilenameRule<'a, R> {
    /// # Errors
    ///
    /// Returns [`crate::OperationError::InvalidPattern`] if the filename
    /// pattern is not a valid regex.
    pub fn new(repository: &'a R, config: &OrderedFilenameConfig) -> Result<Self> {
        Ok(Self {
            repository,
            pattern: MigrationPattern::new(config)?,
            skip: SkipOverride::new(config.skip_keyword()),
        })
    }
}

impl<R: RepositoryView> VerificationRule for OrderedFilenameRule<'_, R> {
    fn check(&self, context: &VerificationContext, result: &mut VerificationResult) -> Result<()> {
        if self.skip.applies(&context.message) {
            info!(keyword = self.skip.keyword(), "migration order check skipped");
            return Ok(());
        }

        let mut baselines = BaselineIndex::new(self.repository, &self.pattern, &context.changes);
        let mut found = 0;

        for change in &context.changes {
            if !self.pattern.matches(&change.path) {
                continue;
            }
            let Some(module) = module_of(&change.path) else {
                continue;
            };
            let Some(baseline) = baselines.baseline(module)? else {
                continue;
            };

            if baseline > filename_of(&change.path) {
                result.violations.push(Violation::OutOfOrder {
                    path: change.path.clone(),
                    kind: change.kind,
                    baseline: baseline.to_string(),
                });
                found += 1;
            }
        }

        if found > 0 {
            result.hints.push(self.skip.hint());
        }

        Ok(())
    }
}
