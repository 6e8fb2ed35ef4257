use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("repository query failed")]
    SvnLook(#[from] precommit_svnlook::SvnLookError),

    #[error("invalid pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: Box<regex::Error>,
    },
}

pub type Result<T> = std::result::Result<T, OperationError>;
