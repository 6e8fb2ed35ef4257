use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{CoreError, Result};

pub const DEFAULT_SVNLOOK: &str = "svnlook";
pub const DEFAULT_MIGRATION_PATH: &str = "trunk/db/migrations/";
pub const DEFAULT_FILE_PATTERN: &str = r"[0-9]+.*\.rb$";
pub const DEFAULT_MIGRATION_SKIP_KEYWORD: &str = "skip-migration-check";
pub const DEFAULT_MIN_MESSAGE_LENGTH: usize = 3;
pub const DEFAULT_TAG_PATH_PATTERN: &str = "^[^/]+/tags/.+";
pub const DEFAULT_TAG_SKIP_KEYWORD: &str = "skip-tag-check";

/// Settings for every hook, read from an optional TOML file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HookConfig {
    svnlook: PathBuf,
    ordered_filenames: OrderedFilenameConfig,
    commit_message: CommitMessageConfig,
    tags: TagConfig,
}

impl Default for HookConfig {
    fn default() -> Self {
        Self {
            svnlook: PathBuf::from(DEFAULT_SVNLOOK),
            ordered_filenames: OrderedFilenameConfig::default(),
            commit_message: CommitMessageConfig::default(),
            tags: TagConfig::default(),
        }
    }
}

impl HookConfig {
    /// Loads the config file at `path`, or the defaults when `path` is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML for
    /// this schema.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path).map_err(|source| CoreError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content).map_err(|source| CoreError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// # Errors
    ///
    /// Returns an error if `content` is not valid TOML for this schema.
    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    #[must_use]
    pub fn svnlook(&self) -> &Path {
        &self.svnlook
    }

    #[must_use]
    pub fn ordered_filenames(&self) -> &OrderedFilenameConfig {
        &self.ordered_filenames
    }

    #[must_use]
    pub fn commit_message(&self) -> &CommitMessageConfig {
        &self.commit_message
    }

    #[must_use]
    pub fn tags(&self) -> &TagConfig {
        &self.tags
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OrderedFilenameConfig {
    /// Directory below each top-level module that holds migrations.
    migration_path: String,
    /// Regex applied to the bare filename, anchored at its start.
    file_pattern: String,
    skip_keyword: String,
}

impl Default for OrderedFilenameConfig {
    fn default() -> Self {
        Self {
            migration_path: String::from(DEFAULT_MIGRATION_PATH),
            file_pattern: String::from(DEFAULT_FILE_PATTERN),
            skip_keyword: String::from(DEFAULT_MIGRATION_SKIP_KEYWORD),
        }
    }
}

impl OrderedFilenameConfig {
    #[must_use]
    pub fn migration_path(&self) -> &str {
        &self.migration_path
    }

    #[must_use]
    pub fn file_pattern(&self) -> &str {
        &self.file_pattern
    }

    #[must_use]
    pub fn skip_keyword(&self) -> &str {
        &self.skip_keyword
    }

    #[must_use]
    pub fn with_migration_path(mut self, migration_path: impl Into<String>) -> Self {
        self.migration_path = migration_path.into();
        self
    }

    #[must_use]
    pub fn with_file_pattern(mut self, file_pattern: impl Into<String>) -> Self {
        self.file_pattern = file_pattern.into();
        self
    }

    #[must_use]
    pub fn with_skip_keyword(mut self, skip_keyword: impl Into<String>) -> Self {
        self.skip_keyword = skip_keyword.into();
        self
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CommitMessageConfig {
    min_length: usize,
}

impl Default for CommitMessageConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_MESSAGE_LENGTH,
        }
    }
}

impl CommitMessageConfig {
    #[must_use]
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    #[must_use]
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TagConfig {
    /// Regex applied to the full repository path.
    path_pattern: String,
    skip_keyword: String,
}

impl Default for TagConfig {
    fn default() -> Self {
        Self {
            path_pattern: String::from(DEFAULT_TAG_PATH_PATTERN),
            skip_keyword: String::from(DEFAULT_TAG_SKIP_KEYWORD),
        }
    }
}

impl TagConfig {
    #[must_use]
    pub fn path_pattern(&self) -> &str {
        &self.path_pattern
    }

    #[must_use]
    pub fn skip_keyword(&self) -> &str {
        &self.skip_keyword
    }

    #[must_use]
    pub fn with_path_pattern(mut self, path_pattern: impl Into<String>) -> Self {
        self.path_pattern = path_pattern.into();
        self
    }

    #[must_use]
    pub fn with_skip_keyword(mut self, skip_keyword: impl Into<String>) -> Self {
        self.skip_keyword = skip_keyword.into();
        self
    }
}
