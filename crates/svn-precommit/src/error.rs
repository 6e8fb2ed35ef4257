use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to load configuration")]
    Config(#[from] precommit_core::CoreError),

    #[error("hook could not be run")]
    Operation(#[from] precommit_operations::OperationError),

    #[error("invalid revision number '{value}'")]
    InvalidRevision {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("commit rejected with {violation_count} violation(s)")]
    Rejected { violation_count: usize },
}

impl CliError {
    /// Rejections are already explained by the hook diagnostics.
    #[must_use]
    pub fn is_reported(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
