use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

pub(crate) const LOG_ENV: &str = "SVN_PRECOMMIT_LOG";

/// Logs go to stderr alongside hook diagnostics, so the default level stays
/// at `warn`; set `SVN_PRECOMMIT_LOG=debug` to trace svnlook calls.
pub(crate) fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init();
}
