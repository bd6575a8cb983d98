//! Campaign and targeting-rule storage. The evaluation engine talks to
//! storage only through the [`CampaignStore`] capability, so it can be
//! exercised against [`MemoryStore`] without a database.

pub mod memory;
pub mod postgres;
pub mod seed;

pub use memory::MemoryStore;
pub use postgres::PostgresStore;

use async_trait::async_trait;
use targeting_core::types::{Campaign, TargetingRule};
use targeting_core::TargetingResult;

/// Read-only storage capability consumed by the targeting evaluator.
///
/// Implementations return all campaigns regardless of status; filtering
/// to active campaigns is the evaluator's job. Neither operation carries
/// an ordering guarantee.
#[async_trait]
pub trait CampaignStore: Send + Sync {
    async fn campaigns(&self) -> TargetingResult<Vec<Campaign>>;
    async fn targeting_rules(&self) -> TargetingResult<Vec<TargetingRule>>;
}
