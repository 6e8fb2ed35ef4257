mod commit_message;
mod ordered_filenames;
mod tags;

pub use commit_message::CommitMessageRule;
pub use ordered_filenames::OrderedFilenameRule;
pub use tags::TagImmutabilityRule;

use super::{VerificationContext, VerificationResult};
use crate::Result;

pub trait VerificationRule {
    /// # Errors
    ///
    /// Returns an error if the rule check cannot be completed.
    fn check(&self, context: &VerificationContext, result: &mut VerificationResult) -> Result<()>;
}
