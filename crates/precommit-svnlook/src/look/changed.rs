use crate::{ChangeKind, ChangedPath, Result, SvnLookError};

use super::SvnLook;

/// Width of the status columns preceding the path in `svnlook changed`.
const STATUS_WIDTH: usize = 4;

impl SvnLook {
    /// Paths touched by the target, in the order `svnlook changed` reports them.
    ///
    /// # Errors
    ///
    /// Returns an error if `svnlook` fails or prints a line that is not a
    /// change record.
    pub fn changed(&self) -> Result<Vec<ChangedPath>> {
        let output = self.run("changed", &[], &[])?;
        parse_changed(&output)
    }
}

pub(crate) fn parse_changed(output: &str) -> Result<Vec<ChangedPath>> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_changed_line)
        .collect()
}

fn parse_changed_line(line: &str) -> Result<ChangedPath> {
    let malformed = || SvnLookError::MalformedChangedLine {
        line: line.to_string(),
    };

    if line.len() <= STATUS_WIDTH || !line.is_char_boundary(STATUS_WIDTH) {
        return Err(malformed());
    }

    let (status, path) = line.split_at(STATUS_WIDTH);
    let status = status.as_bytes();

    let kind = match status[0] {
        b'A' => ChangeKind::Added,
        b'D' => ChangeKind::Deleted,
        b'U' | b'_' => ChangeKind::Modified,
        _ => return Err(malformed()),
    };

    Ok(ChangedPath {
        path: path.to_string(),
        kind,
        was_copied: status[2] == b'+',
    })
}
