use std::collections::HashSet;

use indexmap::IndexMap;
use precommit_core::filename_of;
use precommit_svnlook::ChangedPath;
use tracing::debug;

use super::MigrationPattern;
use crate::Result;
use crate::traits::RepositoryView;

/// Memoised lookup of the latest existing migration filename per module.
///
/// Paths touched by the commit never count as existing, so a change is not
/// compared against its own pre-commit state. The root listing and every
/// module listing are fetched at most once.
pub(crate) struct BaselineIndex<'a, R: RepositoryView> {
    repository: &'a R,
    pattern: &'a MigrationPattern,
    changed: HashSet<&'a str>,
    root_modules: Option<HashSet<String>>,
    baselines: IndexMap<String, Option<String>>,
}

impl<'a, R: RepositoryView> BaselineIndex<'a, R> {
    pub(crate) fn new(
        repository: &'a R,
        pattern: &'a MigrationPattern,
        changes: &'a [ChangedPath],
    ) -> Self {
        Self {
            repository,
            pattern,
            changed: changes.iter().map(|c| c.path.as_str()).collect(),
            root_modules: None,
            baselines: IndexMap::new(),
        }
    }

    /// The greatest matching filename in `module`, or `None` when the module
    /// has no migrations outside this commit.
    pub(crate) fn baseline(&mut self, module: &str) -> Result<Option<&str>> {
        if !self.baselines.contains_key(module) {
            let baseline = self.compute(module)?;
            debug!(module, ?baseline, "computed migration baseline");
            self.baselines.insert(module.to_string(), baseline);
        }

        Ok(self.baselines.get(module).and_then(Option::as_deref))
    }

    fn compute(&mut self, module: &str) -> Result<Option<String>> {
        if !self.has_root_module(module)? {
            return Ok(None);
        }

        let listing = self
            .repository
            .list_directory(&self.pattern.directory_for(module))?;

        Ok(listing
            .iter()
            .filter(|path| self.pattern.matches(path) && !self.changed.contains(path.as_str()))
            .map(|path| filename_of(path))
            .max()
            .map(str::to_string))
    }

    fn has_root_module(&mut self, module: &str) -> Result<bool> {
        if self.root_modules.is_none() {
            let modules = self
                .repository
                .list_directory(".")?
                .iter()
                .filter_map(|entry| root_module_name(entry))
                .map(str::to_string)
                .collect();
            self.root_modules = Some(modules);
        }

        Ok(self
            .root_modules
            .as_ref()
            .is_some_and(|modules| modules.contains(module)))
    }
}

/// Module name of a root listing entry such as `shop/`. Files and the
/// repository root itself (`/`) yield `None`.
fn root_module_name(entry: &str) -> Option<&str> {
    let name = entry.strip_suffix('/')?.trim_start_matches('/');
    (!name.is_empty() && !name.contains('/')).then_some(name)
}
