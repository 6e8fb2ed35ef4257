use crate::{Result, SvnLookError};

use super::SvnLook;

/// Subversion error code for a path absent from the inspected tree.
const PATH_NOT_FOUND: &str = "E160013";

impl SvnLook {
    /// Immediate children of `path` as full repository paths. Directories
    /// keep their trailing `/`; the listed directory itself is included first.
    /// A path that does not exist lists as empty.
    ///
    /// # Errors
    ///
    /// Returns an error if `svnlook tree` fails for any other reason.
    pub fn tree(&self, path: &str) -> Result<Vec<String>> {
        let output = match self.run("tree", &["--full-paths", "--non-recursive"], &[path]) {
            Ok(output) => output,
            Err(SvnLookError::CommandFailed { stderr, .. }) if stderr.contains(PATH_NOT_FOUND) => {
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };

        Ok(output
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }
}
