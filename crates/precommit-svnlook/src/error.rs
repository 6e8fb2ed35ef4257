use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SvnLookError {
    #[error("failed to run '{program}'")]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("svnlook {subcommand} failed ({status}): {stderr}")]
    CommandFailed {
        subcommand: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("svnlook {subcommand} produced non-UTF-8 output")]
    InvalidUtf8 {
        subcommand: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("unrecognized line in svnlook changed output: '{line}'")]
    MalformedChangedLine { line: String },
}
