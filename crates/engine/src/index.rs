//! Two-level rule lookup: campaign id -> dimension -> rule. Rebuilt from
//! scratch on every evaluation, so there is no cache to invalidate when
//! rules change between requests.

use std::collections::HashMap;
use targeting_core::types::{Dimension, TargetingRule};

/// The rules of one campaign, keyed by dimension.
pub type DimensionRules = HashMap<Dimension, TargetingRule>;

/// Flat rule collection grouped for per-campaign lookup. A campaign that
/// never appears in the input has no rules and matches every request.
#[derive(Debug, Default)]
pub struct RuleIndex {
    by_campaign: HashMap<String, DimensionRules>,
}

impl RuleIndex {
    /// Group a flat rule collection by campaign and dimension.
    ///
    /// The store's schema makes (campaign_id, dimension) unique. Should a
    /// duplicate slip through anyway, the last rule observed wins, which
    /// keeps the outcome deterministic for a given input order.
    pub fn build(rules: Vec<TargetingRule>) -> Self {
        let mut by_campaign: HashMap<String, DimensionRules> = HashMap::new();
        for rule in rules {
            by_campaign
                .entry(rule.campaign_id.clone())
                .or_default()
                .insert(rule.dimension, rule);
        }
        Self { by_campaign }
    }

    pub fn rules_for(&self, campaign_id: &str) -> Option<&DimensionRules> {
        self.by_campaign.get(campaign_id)
    }
}
