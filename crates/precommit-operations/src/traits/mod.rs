mod commit_view;
mod repository_view;

pub use commit_view::CommitView;
pub use repository_view::RepositoryView;
