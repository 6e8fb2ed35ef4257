use precommit_core::CommitMessage;
use precommit_svnlook::ChangedPath;

pub struct VerificationContext {
    pub changes: Vec<ChangedPath>,
    pub message: CommitMessage,
}
