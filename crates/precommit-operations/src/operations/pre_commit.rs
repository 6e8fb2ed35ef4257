use precommit_core::HookConfig;
use tracing::debug;

use crate::Result;
use crate::traits::{CommitView, RepositoryView};
use crate::verification::rules::{CommitMessageRule, OrderedFilenameRule, TagImmutabilityRule};
use crate::verification::{VerificationContext, VerificationEngine, VerificationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookKind {
    CommitMessage,
    Tags,
    OrderedFilenames,
}

impl HookKind {
    /// Every hook, in the order their diagnostics are reported.
    pub const ALL: [Self; 3] = [Self::CommitMessage, Self::Tags, Self::OrderedFilenames];
}

pub struct PreCommitOperation<C, R> {
    commit: C,
    repository: R,
    config: HookConfig,
}

impl<C, R> PreCommitOperation<C, R>
where
    C: CommitView,
    R: RepositoryView,
{
    pub fn new(commit: C, repository: R, config: HookConfig) -> Self {
        Self {
            commit,
            repository,
            config,
        }
    }

    /// Runs the selected hooks against the commit. Rules run in the order of
    /// [`HookKind::ALL`] regardless of the order in `hooks`. The change list
    /// is only queried when a selected hook inspects paths.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured pattern is invalid or the commit or
    /// repository cannot be queried.
    pub fn execute(&self, hooks: &[HookKind]) -> Result<VerificationResult> {
        let selected = |kind: HookKind| hooks.contains(&kind);

        let message_rule = selected(HookKind::CommitMessage)
            .then(|| CommitMessageRule::new(self.config.commit_message()));
        let tag_rule = selected(HookKind::Tags)
            .then(|| TagImmutabilityRule::new(self.config.tags()))
            .transpose()?;
        let ordered_rule = selected(HookKind::OrderedFilenames)
            .then(|| OrderedFilenameRule::new(&self.repository, self.config.ordered_filenames()))
            .transpose()?;

        let changes = if tag_rule.is_some() || ordered_rule.is_some() {
            self.commit.changed_paths()?
        } else {
            Vec::new()
        };
        let context = VerificationContext {
            changes,
            message: self.commit.commit_message()?,
        };
        debug!(changes = context.changes.len(), ?hooks, "verifying commit");

        let mut engine = VerificationEngine::new();
        if let Some(rule) = &message_rule {
            engine.add_rule(rule);
        }
        if let Some(rule) = &tag_rule {
            engine.add_rule(rule);
        }
        if let Some(rule) = &ordered_rule {
            engine.add_rule(rule);
        }

        engine.verify(&context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OperationError;
    use crate::mocks::{MockCommitView, MockRepositoryView, migration};
    use crate::verification::Violation;
    use precommit_svnlook::{ChangeKind, ChangedPath};

    const MIGRATIONS: &str = "trunk/db/migrations/";

    fn repository_with_migration() -> MockRepositoryView {
        MockRepositoryView::new().with_module_files("module", MIGRATIONS, &["1.rb"])
    }

    #[test]
    fn ordered_filenames_reports_violation_and_hint() -> anyhow::Result<()> {
        let commit = MockCommitView::new()
            .with_message("Add migration")
            .with_change(ChangedPath::new(migration("module", "0.rb"), ChangeKind::Added));
        let operation =
            PreCommitOperation::new(commit, repository_with_migration(), HookConfig::default());

        let result = operation.execute(&[HookKind::OrderedFilenames])?;

        assert_eq!(result.violation_count(), 1);
        assert_eq!(result.hints.len(), 1);
        Ok(())
    }

    #[test]
    fn ordered_filenames_skip_keyword_accepts() -> anyhow::Result<()> {
        let commit = MockCommitView::new()
            .with_message("skip-migration-check")
            .with_change(ChangedPath::new(migration("module", "0.rb"), ChangeKind::Added));
        let operation =
            PreCommitOperation::new(commit, repository_with_migration(), HookConfig::default());

        let result = operation.execute(&[HookKind::OrderedFilenames])?;

        assert!(result.is_success());
        assert!(result.hints.is_empty());
        Ok(())
    }

    #[test]
    fn unselected_hooks_do_not_run() -> anyhow::Result<()> {
        let commit = MockCommitView::new()
            .with_message("")
            .with_change(ChangedPath::new("module/tags/v1/a.txt", ChangeKind::Modified));
        let repository = MockRepositoryView::new();
        let operation = PreCommitOperation::new(commit, repository, HookConfig::default());

        let result = operation.execute(&[HookKind::OrderedFilenames])?;

        assert!(result.is_success());
        Ok(())
    }

    #[test]
    fn all_hooks_report_in_fixed_order() -> anyhow::Result<()> {
        let commit = MockCommitView::new()
            .with_message("x")
            .with_change(ChangedPath::new(migration("module", "0.rb"), ChangeKind::Added))
            .with_change(ChangedPath::new("module/tags/v1/a.txt", ChangeKind::Modified));
        let operation =
            PreCommitOperation::new(commit, repository_with_migration(), HookConfig::default());

        let result = operation.execute(&[
            HookKind::OrderedFilenames,
            HookKind::Tags,
            HookKind::CommitMessage,
        ])?;

        assert!(matches!(
            result.violations.as_slice(),
            [
                Violation::MessageTooShort { .. },
                Violation::TaggedPathWrite { .. },
                Violation::OutOfOrder { .. },
            ]
        ));
        Ok(())
    }

    #[test]
    fn configured_migration_path_is_used() -> anyhow::Result<()> {
        let config = HookConfig::parse(
            r#"
[ordered_filenames]
migration_path = "db/migrate/"
"#,
        )?;
        let commit = MockCommitView::new()
            .with_message("Add migration")
            .with_change(ChangedPath::new("app/db/migrate/1.rb", ChangeKind::Added));
        let repository = MockRepositoryView::new().with_module_files("app", "db/migrate/", &["2.rb"]);
        let operation = PreCommitOperation::new(commit, repository, config);

        let result = operation.execute(&[HookKind::OrderedFilenames])?;

        assert_eq!(result.violation_count(), 1);
        Ok(())
    }

    #[test]
    fn invalid_pattern_of_selected_hook_is_an_error() -> anyhow::Result<()> {
        let config = HookConfig::parse("[tags]\npath_pattern = \"(\"\n")?;
        let operation = PreCommitOperation::new(MockCommitView::new(), MockRepositoryView::new(), config);

        assert!(matches!(
            operation.execute(&[HookKind::Tags]),
            Err(OperationError::InvalidPattern { .. })
        ));
        assert!(operation.execute(&[HookKind::OrderedFilenames])?.is_success());
        Ok(())
    }

    #[test]
    fn message_hook_does_not_query_changes() -> anyhow::Result<()> {
        let commit = MockCommitView::new()
            .with_message("Fix login redirect")
            .failing_changes();
        let operation = PreCommitOperation::new(commit, MockRepositoryView::new(), HookConfig::default());

        let result = operation.execute(&[HookKind::CommitMessage])?;

        assert!(result.is_success());
        assert!(matches!(
            operation.execute(&[HookKind::Tags]),
            Err(OperationError::SvnLook(_))
        ));
        Ok(())
    }

    #[test]
    fn repository_failure_propagates() {
        let commit = MockCommitView::new()
            .with_change(ChangedPath::new(migration("module", "0.rb"), ChangeKind::Added));
        let operation = PreCommitOperation::new(
            commit,
            MockRepositoryView::new().failing(),
            HookConfig::default(),
        );

        assert!(matches!(
            operation.execute(&[HookKind::OrderedFilenames]),
            Err(OperationError::SvnLook(_))
        ));
    }
}
