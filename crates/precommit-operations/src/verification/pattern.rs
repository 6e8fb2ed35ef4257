use precommit_core::{OrderedFilenameConfig, directory_of, filename_of, module_of};
use regex::Regex;

use crate::{OperationError, Result};

/// Recognises migration files: paths anywhere below `<module>/<migration path>`
/// whose last segment matches the configured filename pattern.
#[derive(Debug, Clone)]
pub struct MigrationPattern {
    migration_path: String,
    filename: Regex,
}

impl MigrationPattern {
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidPattern`] if the filename pattern is
    /// not a valid regex.
    pub fn new(config: &OrderedFilenameConfig) -> Result<Self> {
        Ok(Self {
            migration_path: normalize_migration_path(config.migration_path()),
            filename: compile_anchored(config.file_pattern())?,
        })
    }

    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        let Some(module) = module_of(path) else {
            return false;
        };

        let in_migrations = directory_of(path)
            .strip_prefix(module)
            .and_then(|rest| rest.strip_prefix('/'))
            .is_some_and(|subpath| subpath.starts_with(&self.migration_path));

        in_migrations && self.filename.is_match(filename_of(path))
    }

    /// The monitored directory of `module`, with a trailing `/`.
    #[must_use]
    pub fn directory_for(&self, module: &str) -> String {
        format!("{module}/{}", self.migration_path)
    }
}

fn normalize_migration_path(path: &str) -> String {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("{trimmed}/")
    }
}

/// Compiles `pattern` so that it must match from the start of the input.
pub(crate) fn compile_anchored(pattern: &str) -> Result<Regex> {
    Regex::new(&format!("^(?:{pattern})")).map_err(|source| OperationError::InvalidPattern {
        pattern: pattern.to_string(),
        source: Box::new(source),
    })
}
