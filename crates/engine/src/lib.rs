//! Targeting rule evaluation engine. Given a delivery request and the
//! campaigns and rules fetched from the store, decides which active
//! campaigns are eligible to be shown.

pub mod evaluator;
pub mod index;
pub mod matcher;

pub use evaluator::Evaluator;
pub use index::RuleIndex;
