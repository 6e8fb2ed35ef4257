/// The log message attached to a pending commit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitMessage(String);

impl CommitMessage {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }

    /// True when `token` appears as a whole whitespace-delimited word.
    #[must_use]
    pub fn contains_token(&self, token: &str) -> bool {
        self.tokens().any(|t| t == token)
    }

    #[must_use]
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}
