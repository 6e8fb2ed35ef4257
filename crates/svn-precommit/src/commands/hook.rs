use std::path::Path;

use precommit_core::HookConfig;
use precommit_operations::operations::{HookKind, PreCommitOperation};
use precommit_operations::providers::open_views;
use tracing::debug;

use super::LookArgs;
use crate::error::{CliError, Result};
use crate::output::{OutputFormatter, PlainTextFormatter};

pub(crate) fn run(args: &LookArgs, hooks: &[HookKind], config_path: Option<&Path>) -> Result<()> {
    let config = HookConfig::load(config_path)?;
    let target = args.target()?;
    debug!(repository = %args.repository.display(), %target, ?hooks, "running hooks");

    let (commit, repository) = open_views(config.svnlook(), &args.repository, target);
    let operation = PreCommitOperation::new(commit, repository, config);

    let result = operation.execute(hooks)?;

    if result.is_success() {
        return Ok(());
    }

    eprint!("{}", PlainTextFormatter.format_failure(&result));
    Err(CliError::Rejected {
        violation_count: result.violation_count(),
    })
}
