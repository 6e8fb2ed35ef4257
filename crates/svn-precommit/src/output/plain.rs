use std::fmt::Write;

use precommit_operations::verification::VerificationResult;

use super::OutputFormatter;

/// One line per violation, then the hint lines.
pub(crate) struct PlainTextFormatter;

impl OutputFormatter for PlainTextFormatter {
    fn format_failure(&self, result: &VerificationResult) -> String {
        let mut output = String::new();
        for violation in &result.violations {
            let _ = writeln!(output, "{violation}");
        }
        for hint in &result.hints {
            let _ = writeln!(output, "{hint}");
        }
        output
    }
}
