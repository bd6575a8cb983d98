//! Entry point: orchestrates the store fetches, index construction, and
//! per-campaign matching for one delivery request.

use crate::index::RuleIndex;
use crate::matcher;
use std::sync::Arc;
use targeting_core::types::{CampaignStatus, DeliveryRequest, MatchedCampaign};
use targeting_core::TargetingResult;
use targeting_store::CampaignStore;
use tracing::debug;

/// Decides which active campaigns are eligible for a request. Stateless
/// between calls: every evaluation fetches fresh snapshots and builds
/// its own rule index, so concurrent evaluations share nothing mutable.
pub struct Evaluator {
    store: Arc<dyn CampaignStore>,
}

impl Evaluator {
    pub fn new(store: Arc<dyn CampaignStore>) -> Self {
        Self { store }
    }

    /// The eligible set for one request, projected to delivery fields.
    ///
    /// Validation happens before any store access. A store failure aborts
    /// the whole evaluation; there are no retries and no partial results.
    /// An empty result is a valid outcome, not an error.
    pub async fn matching_campaigns(
        &self,
        request: &DeliveryRequest,
    ) -> TargetingResult<Vec<MatchedCampaign>> {
        request.validate()?;

        let campaigns = self.store.campaigns().await?;
        let rules = self.store.targeting_rules().await?;
        let index = RuleIndex::build(rules);

        let mut matched = Vec::new();
        for campaign in &campaigns {
            if campaign.status != CampaignStatus::Active {
                continue;
            }
            if matcher::campaign_matches(index.rules_for(&campaign.id), request) {
                matched.push(campaign.to_matched());
            }
        }

        debug!(
            candidates = campaigns.len(),
            matched = matched.len(),
            "Evaluated delivery request"
        );

        Ok(matched)
    }
}
