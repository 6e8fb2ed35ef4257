use crate::Result;

use super::SvnLook;

impl SvnLook {
    /// The log message of the target, without the one newline `svnlook` appends.
    ///
    /// # Errors
    ///
    /// Returns an error if `svnlook log` fails.
    pub fn log(&self) -> Result<String> {
        let output = self.run("log", &[], &[])?;
        Ok(strip_appended_newline(&output).to_string())
    }
}

fn strip_appended_newline(output: &str) -> &str {
    output.strip_suffix('\n').unwrap_or(output)
}
