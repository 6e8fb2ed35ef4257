mod svnlook;

pub use svnlook::{SvnLookCommitView, SvnLookRepositoryView, open_views};
