use std::fmt;

use precommit_svnlook::ChangeKind;

/// A business-rule failure reported back to the committer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// A migration change sorts before the latest existing migration of its module.
    OutOfOrder {
        path: String,
        kind: ChangeKind,
        baseline: String,
    },
    MessageTooShort {
        minimum: usize,
        actual: usize,
    },
    /// Content written in place below a tag instead of copied or deleted.
    TaggedPathWrite { path: String },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfOrder {
                path,
                kind: ChangeKind::Added,
                baseline,
            } => write!(
                f,
                "Error: The added file \"{path}\" must have a filename alphabetically after the existing \"{baseline}\"."
            ),
            Self::OutOfOrder {
                path,
                kind: ChangeKind::Modified,
                baseline,
            } => write!(
                f,
                "Error: The file \"{path}\" may not be modified since later migrations exist (\"{baseline}\")."
            ),
            Self::OutOfOrder {
                path,
                kind: ChangeKind::Deleted,
                baseline,
            } => write!(
                f,
                "Error: The file \"{path}\" may not be deleted since later migrations exist (\"{baseline}\")."
            ),
            Self::MessageTooShort { .. } => {
                f.write_str("Error: Please enter a descriptive commit message!")
            }
            Self::TaggedPathWrite { .. } => {
                f.write_str("Error: Modifying tagged files is not permitted!")
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct VerificationResult {
    pub violations: Vec<Violation>,
    /// Lines printed after all violations, e.g. how to bypass a check.
    pub hints: Vec<String>,
}

impl VerificationResult {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.violations.is_empty()
    }

    #[must_use]
    pub fn violation_count(&self) -> usize {
        self.violations.len()
    }
}
