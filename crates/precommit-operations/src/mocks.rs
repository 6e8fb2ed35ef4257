use std::collections::HashMap;
use std::sync::Mutex;

use precommit_core::CommitMessage;
use precommit_svnlook::{ChangedPath, SvnLookError};

use crate::Result;
use crate::traits::{CommitView, RepositoryView};

/// Full path of a migration under the default migration directory.
#[must_use]
pub fn migration(module: &str, filename: &str) -> String {
    format!("{module}/trunk/db/migrations/{filename}")
}

pub struct MockCommitView {
    changes: Vec<ChangedPath>,
    message: CommitMessage,
    changes_fail: bool,
}

impl MockCommitView {
    #[must_use]
    pub fn new() -> Self {
        Self {
            changes: Vec::new(),
            message: CommitMessage::default(),
            changes_fail: false,
        }
    }

    #[must_use]
    pub fn with_change(mut self, change: ChangedPath) -> Self {
        self.changes.push(change);
        self
    }

    #[must_use]
    pub fn with_message(mut self, message: &str) -> Self {
        self.message = CommitMessage::new(message);
        self
    }

    /// The change list cannot be read, as if `svnlook changed` failed.
    #[must_use]
    pub fn failing_changes(mut self) -> Self {
        self.changes_fail = true;
        self
    }
}

impl Default for MockCommitView {
    fn default() -> Self {
        Self::new()
    }
}

impl CommitView for MockCommitView {
    fn changed_paths(&self) -> Result<Vec<ChangedPath>> {
        if self.changes_fail {
            return Err(SvnLookError::MalformedChangedLine {
                line: "?".to_string(),
            }
            .into());
        }
        Ok(self.changes.clone())
    }

    fn commit_message(&self) -> Result<CommitMessage> {
        Ok(self.message.clone())
    }
}

/// In-memory repository tree. Unknown directories list as empty; every
/// listing request is recorded.
pub struct MockRepositoryView {
    listings: HashMap<String, Vec<String>>,
    calls: Mutex<Vec<String>>,
    failing: bool,
}

impl MockRepositoryView {
    #[must_use]
    pub fn new() -> Self {
        let mut listings = HashMap::new();
        listings.insert(".".to_string(), vec!["/".to_string()]);
        Self {
            listings,
            calls: Mutex::new(Vec::new()),
            failing: false,
        }
    }

    /// Adds `module/` to the root listing and lists `filenames` (plus the
    /// directory itself) under `module/subpath`.
    #[must_use]
    pub fn with_module_files(mut self, module: &str, subpath: &str, filenames: &[&str]) -> Self {
        let module_dir = format!("{module}/");
        let root = self.listings.entry(".".to_string()).or_default();
        if !root.contains(&module_dir) {
            root.push(module_dir);
        }

        let directory = format!("{module}/{subpath}");
        let mut entries = vec![directory.clone()];
        entries.extend(filenames.iter().map(|name| format!("{directory}{name}")));
        self.listings.insert(directory, entries);
        self
    }

    /// Every listing request fails as if `svnlook` could not be run.
    #[must_use]
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    #[must_use]
    pub fn listing_calls(&self) -> Vec<String> {
        self.calls.lock().expect("lock poisoned").clone()
    }
}

impl Default for MockRepositoryView {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryView for MockRepositoryView {
    fn list_directory(&self, path: &str) -> Result<Vec<String>> {
        self.calls
            .lock()
            .expect("lock poisoned")
            .push(path.to_string());

        if self.failing {
            return Err(SvnLookError::Spawn {
                program: "svnlook".into(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "svnlook not found"),
            }
            .into());
        }

        Ok(self.listings.get(path).cloned().unwrap_or_default())
    }
}
