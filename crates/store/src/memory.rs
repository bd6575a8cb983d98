//! In-memory store used by tests and by the server's `--in-memory` mode.

use crate::{seed, CampaignStore};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use targeting_core::types::{Campaign, TargetingRule};
use targeting_core::TargetingResult;

/// A [`CampaignStore`] backed by plain vectors. Counts fetches so tests
/// can assert that validation failures never reach the store.
#[derive(Default)]
pub struct MemoryStore {
    campaigns: Vec<Campaign>,
    rules: Vec<TargetingRule>,
    campaign_fetches: AtomicUsize,
    rule_fetches: AtomicUsize,
}

impl MemoryStore {
    pub fn new(campaigns: Vec<Campaign>, rules: Vec<TargetingRule>) -> Self {
        Self {
            campaigns,
            rules,
            campaign_fetches: AtomicUsize::new(0),
            rule_fetches: AtomicUsize::new(0),
        }
    }

    /// A store pre-loaded with the demo campaigns and rules.
    pub fn with_demo_data() -> Self {
        Self::new(seed::demo_campaigns(), seed::demo_rules())
    }

    /// Total number of fetch operations served, across both collections.
    pub fn fetch_count(&self) -> usize {
        self.campaign_fetches.load(Ordering::SeqCst) + self.rule_fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CampaignStore for MemoryStore {
    async fn campaigns(&self) -> TargetingResult<Vec<Campaign>> {
        self.campaign_fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.campaigns.clone())
    }

    async fn targeting_rules(&self) -> TargetingResult<Vec<TargetingRule>> {
        self.rule_fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.rules.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_count_tracks_both_collections() {
        let store = MemoryStore::with_demo_data();
        assert_eq!(store.fetch_count(), 0);

        let campaigns = store.campaigns().await.unwrap();
        let rules = store.targeting_rules().await.unwrap();

        assert_eq!(campaigns.len(), 3);
        assert_eq!(rules.len(), 5);
        assert_eq!(store.fetch_count(), 2);
    }
}
