//! Per-campaign match decision. Every dimension with a rule must pass;
//! a dimension without a rule imposes no constraint.

use crate::index::DimensionRules;
use targeting_core::types::{DeliveryRequest, Dimension, RuleKind, TargetingRule};

/// Decide whether one campaign's rules admit the request.
///
/// `rules` is the campaign's slice of the rule index; `None` means the
/// campaign has no rules at all and matches unconditionally. Dimensions
/// combine by logical AND with no precedence between them.
pub fn campaign_matches(rules: Option<&DimensionRules>, request: &DeliveryRequest) -> bool {
    let Some(rules) = rules else {
        return true;
    };

    Dimension::ALL.iter().all(|&dimension| match rules.get(&dimension) {
        Some(rule) => rule_passes(rule, request.value_for(dimension)),
        None => true,
    })
}

/// Evaluate one rule against one request value. Comparison is exact
/// string equality after lower-casing both sides; no wildcards, no
/// prefix matching.
fn rule_passes(rule: &TargetingRule, value: &str) -> bool {
    let normalized = value.to_lowercase();
    let present = rule
        .values
        .iter()
        .any(|candidate| candidate.to_lowercase() == normalized);

    match rule.kind {
        RuleKind::Include => present,
        RuleKind::Exclude => !present,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn rule(kind: RuleKind, values: &[&str]) -> TargetingRule {
        TargetingRule {
            campaign_id: "c".to_string(),
            dimension: Dimension::Country,
            kind,
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    fn rules(entries: Vec<(Dimension, RuleKind, Vec<&str>)>) -> DimensionRules {
        entries
            .into_iter()
            .map(|(dimension, kind, values)| {
                (
                    dimension,
                    TargetingRule {
                        campaign_id: "c".to_string(),
                        dimension,
                        kind,
                        values: values.iter().map(|v| v.to_string()).collect(),
                    },
                )
            })
            .collect()
    }

    #[test]
    fn test_include_passes_on_membership() {
        let rule = rule(RuleKind::Include, &["US", "Canada"]);
        assert!(rule_passes(&rule, "US"));
        assert!(rule_passes(&rule, "us"));
        assert!(rule_passes(&rule, "CANADA"));
        assert!(!rule_passes(&rule, "FR"));
    }

    #[test]
    fn test_exclude_passes_on_absence() {
        let rule = rule(RuleKind::Exclude, &["US"]);
        assert!(!rule_passes(&rule, "US"));
        assert!(!rule_passes(&rule, "us"));
        assert!(rule_passes(&rule, "CA"));
    }

    #[test]
    fn test_case_insensitive_on_both_sides() {
        let rule = rule(RuleKind::Include, &["aNdRoId"]);
        assert!(rule_passes(&rule, "ANDROID"));
        assert!(rule_passes(&rule, "android"));
    }

    #[test]
    fn test_exact_membership_no_prefix_match() {
        // "CA" is not "Canada": values are opaque tokens, not ISO codes.
        let rule = rule(RuleKind::Include, &["Canada"]);
        assert!(!rule_passes(&rule, "CA"));
        assert!(rule_passes(&rule, "canada"));
    }

    #[test]
    fn test_duplicate_values_are_inert() {
        let rule = rule(RuleKind::Include, &["US", "us", "US"]);
        assert!(rule_passes(&rule, "Us"));
        assert!(!rule_passes(&rule, "CA"));
    }

    #[test]
    fn test_no_rules_matches_everything() {
        let request = DeliveryRequest::new("com.example.app", "Android", "US");
        assert!(campaign_matches(None, &request));
        assert!(campaign_matches(Some(&HashMap::new()), &request));
    }

    #[test]
    fn test_unruled_dimensions_are_unconstrained() {
        let rules = rules(vec![(Dimension::Country, RuleKind::Include, vec!["US"])]);
        let request = DeliveryRequest::new("com.anything", "BlackBerryOS", "US");
        assert!(campaign_matches(Some(&rules), &request));
    }

    #[test]
    fn test_dimensions_combine_with_and() {
        let rules = rules(vec![
            (Dimension::Os, RuleKind::Include, vec!["Android", "iOS"]),
            (Dimension::Country, RuleKind::Exclude, vec!["US"]),
        ]);

        // Both pass.
        assert!(campaign_matches(
            Some(&rules),
            &DeliveryRequest::new("com.app", "iOS", "DE"),
        ));
        // OS passes, country fails.
        assert!(!campaign_matches(
            Some(&rules),
            &DeliveryRequest::new("com.app", "Android", "US"),
        ));
        // Country passes, OS fails.
        assert!(!campaign_matches(
            Some(&rules),
            &DeliveryRequest::new("com.app", "Windows", "DE"),
        ));
    }
}
