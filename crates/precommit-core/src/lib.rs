pub mod config;
pub mod error;
mod path;
pub mod types;

pub use config::{CommitMessageConfig, HookConfig, OrderedFilenameConfig, TagConfig};
pub use error::*;
pub use path::{directory_of, filename_of, module_of};
pub use types::*;
