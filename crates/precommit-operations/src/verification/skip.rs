use precommit_core::CommitMessage;

/// A commit-message keyword that disables one check.
#[derive(Debug, Clone)]
pub struct SkipOverride {
    keyword: String,
}

impl SkipOverride {
    #[must_use]
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
        }
    }

    #[must_use]
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// True when the keyword appears as a whole whitespace-delimited token.
    #[must_use]
    pub fn applies(&self, message: &CommitMessage) -> bool {
        !self.keyword.is_empty() && message.contains_token(&self.keyword)
    }

    #[must_use]
    pub fn hint(&self) -> String {
        format!(
            "If you want to commit this anyway, include \"{}\" in the commit message.",
            self.keyword
        )
    }
}
