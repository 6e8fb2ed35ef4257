mod pre_commit;

pub use pre_commit::{HookKind, PreCommitOperation};
