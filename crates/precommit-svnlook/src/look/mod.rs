mod changed;
mod log;
mod tree;

use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use crate::{LookTarget, Result, SvnLookError};

/// Read-only access to one repository through the `svnlook` executable.
#[derive(Debug, Clone)]
pub struct SvnLook {
    program: PathBuf,
    repository: PathBuf,
    target: LookTarget,
}

impl SvnLook {
    #[must_use]
    pub fn new(
        program: impl Into<PathBuf>,
        repository: impl Into<PathBuf>,
        target: LookTarget,
    ) -> Self {
        Self {
            program: program.into(),
            repository: repository.into(),
            target,
        }
    }

    /// Runs `svnlook <subcommand> [options] REPOS --transaction|--revision ID [args]`
    /// and returns its stdout.
    fn run(&self, subcommand: &str, options: &[&str], args: &[&str]) -> Result<String> {
        let mut command = Command::new(&self.program);
        command
            .arg(subcommand)
            .args(options)
            .arg(&self.repository)
            .arg(self.target.flag())
            .arg(self.target.value())
            .args(args);

        debug!(?command, "running svnlook");

        let output = command.output().map_err(|source| SvnLookError::Spawn {
            program: self.program.clone(),
            source,
        })?;

        if !output.status.success() {
            return Err(SvnLookError::CommandFailed {
                subcommand: subcommand.to_string(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|source| SvnLookError::InvalidUtf8 {
            subcommand: subcommand.to_string(),
            source,
        })
    }
}
