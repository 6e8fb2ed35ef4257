//! Helpers for `/`-separated repository paths as reported by `svnlook`.
//!
//! These operate on repository paths, not filesystem paths, so they never
//! consult the platform separator.

/// Text before the first `/`, or `None` when the path has no separator or
/// starts with one.
#[must_use]
pub fn module_of(path: &str) -> Option<&str> {
    match path.split_once('/') {
        Some((module, _)) if !module.is_empty() => Some(module),
        _ => None,
    }
}

/// Text after the last `/`; the whole path when there is none.
#[must_use]
pub fn filename_of(path: &str) -> &str {
    path.rfind('/').map_or(path, |idx| &path[idx + 1..])
}

/// Text up to and including the last `/`; empty when there is none.
#[must_use]
pub fn directory_of(path: &str) -> &str {
    path.rfind('/').map_or("", |idx| &path[..=idx])
}
