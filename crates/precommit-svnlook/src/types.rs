use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    Added,
    Modified,
    Deleted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangedPath {
    pub path: String,
    pub kind: ChangeKind,
    /// Added with history, i.e. `svn copy` rather than a fresh write.
    pub was_copied: bool,
}

impl ChangedPath {
    #[must_use]
    pub fn new(path: impl Into<String>, kind: ChangeKind) -> Self {
        Self {
            path: path.into(),
            kind,
            was_copied: false,
        }
    }

    #[must_use]
    pub fn copied(mut self) -> Self {
        self.was_copied = true;
        self
    }
}

/// What `svnlook` inspects: a live transaction or a committed revision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookTarget {
    Transaction(String),
    Revision(u64),
}

impl LookTarget {
    #[must_use]
    pub fn flag(&self) -> &'static str {
        match self {
            Self::Transaction(_) => "--transaction",
            Self::Revision(_) => "--revision",
        }
    }

    #[must_use]
    pub fn value(&self) -> String {
        match self {
            Self::Transaction(txn) => txn.clone(),
            Self::Revision(rev) => rev.to_string(),
        }
    }
}

impl fmt::Display for LookTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transaction(txn) => write!(f, "transaction {txn}"),
            Self::Revision(rev) => write!(f, "revision r{rev}"),
        }
    }
}
