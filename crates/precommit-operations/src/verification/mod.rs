mod baseline;
mod context;
mod engine;
mod pattern;
mod result;
pub mod rules;
mod skip;

pub use context::VerificationContext;
pub use engine::VerificationEngine;
pub use pattern::MigrationPattern;
pub use result::{VerificationResult, Violation};
pub use skip::SkipOverride;
