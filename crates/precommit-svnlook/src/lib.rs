mod error;
mod look;
mod types;

pub use error::SvnLookError;
pub use look::SvnLook;
pub use types::{ChangeKind, ChangedPath, LookTarget};

pub type Result<T> = std::result::Result<T, SvnLookError>;
