use std::path::PathBuf;

use precommit_core::CommitMessage;
use precommit_svnlook::{ChangedPath, LookTarget, SvnLook};

use crate::Result;
use crate::traits::{CommitView, RepositoryView};

pub struct SvnLookCommitView {
    look: SvnLook,
}

pub struct SvnLookRepositoryView {
    look: SvnLook,
}

/// Builds both read-only handles for one repository and target.
#[must_use]
pub fn open_views(
    program: impl Into<PathBuf>,
    repository: impl Into<PathBuf>,
    target: LookTarget,
) -> (SvnLookCommitView, SvnLookRepositoryView) {
    let look = SvnLook::new(program, repository, target);
    (
        SvnLookCommitView { look: look.clone() },
        SvnLookRepositoryView { look },
    )
}

impl CommitView for SvnLookCommitView {
    fn changed_paths(&self) -> Result<Vec<ChangedPath>> {
        Ok(self.look.changed()?)
    }

    fn commit_message(&self) -> Result<CommitMessage> {
        Ok(CommitMessage::new(self.look.log()?))
    }
}

impl RepositoryView for SvnLookRepositoryView {
    fn list_directory(&self, path: &str) -> Result<Vec<String>> {
        Ok(self.look.tree(path)?)
    }
}
