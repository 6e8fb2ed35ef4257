mod hook;

use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use precommit_operations::operations::HookKind;
use precommit_svnlook::LookTarget;

use crate::error::{CliError, Result};

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Reject migrations that sort before the latest existing migration
    OrderedFilenames(LookArgs),
    /// Reject commits without a descriptive log message
    CommitMessage(LookArgs),
    /// Reject changes written in place below a tag
    Tags(LookArgs),
    /// Run every hook
    All(LookArgs),
}

#[derive(Args)]
pub(crate) struct LookArgs {
    /// Path to the repository
    #[arg(value_name = "REPOS")]
    repository: PathBuf,

    /// Transaction name, or revision number with --revision
    #[arg(value_name = "TXN")]
    transaction: String,

    /// Test mode. Specify a revision instead of a transaction.
    #[arg(short = 'r', long)]
    revision: bool,
}

impl LookArgs {
    fn target(&self) -> Result<LookTarget> {
        if !self.revision {
            return Ok(LookTarget::Transaction(self.transaction.clone()));
        }

        self.transaction
            .parse()
            .map(LookTarget::Revision)
            .map_err(|source| CliError::InvalidRevision {
                value: self.transaction.clone(),
                source,
            })
    }
}

impl Commands {
    pub(crate) fn execute(self, config_path: Option<&Path>) -> Result<()> {
        match self {
            Self::OrderedFilenames(args) => {
                hook::run(&args, &[HookKind::OrderedFilenames], config_path)
            }
            Self::CommitMessage(args) => hook::run(&args, &[HookKind::CommitMessage], config_path),
            Self::Tags(args) => hook::run(&args, &[HookKind::Tags], config_path),
            Self::All(args) => hook::run(&args, &HookKind::ALL, config_path),
        }
    }
}
