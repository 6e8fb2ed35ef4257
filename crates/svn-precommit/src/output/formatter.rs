use precommit_operations::verification::VerificationResult;

pub(crate) trait OutputFormatter {
    fn format_failure(&self, result: &VerificationResult) -> String;
}
