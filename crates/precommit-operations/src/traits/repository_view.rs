use crate::Result;

/// Read-only view of the repository tree the commit is checked against.
pub trait RepositoryView {
    /// Immediate children of `path` as full repository paths, directories
    /// with a trailing `/`.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing cannot be retrieved.
    fn list_directory(&self, path: &str) -> Result<Vec<String>>;
}
