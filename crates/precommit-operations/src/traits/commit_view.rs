use precommit_core::CommitMessage;
use precommit_svnlook::ChangedPath;

use crate::Result;

/// Read-only view of the commit under inspection.
pub trait CommitView {
    /// # Errors
    ///
    /// Returns an error if the change list cannot be retrieved or parsed.
    fn changed_paths(&self) -> Result<Vec<ChangedPath>>;

    /// # Errors
    ///
    /// Returns an error if the log message cannot be retrieved.
    fn commit_message(&self) -> Result<CommitMessage>;
}
