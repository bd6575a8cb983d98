//! Demo fixture data: three campaigns and their targeting rules, used by
//! the in-memory store and by `--seed` on the server binary.

use targeting_core::types::{Campaign, CampaignStatus, Dimension, RuleKind, TargetingRule};

pub fn demo_campaigns() -> Vec<Campaign> {
    vec![
        Campaign {
            id: "spotify".to_string(),
            name: "Spotify - Music for everyone".to_string(),
            image_url: "https://somelink".to_string(),
            cta: "Download".to_string(),
            status: CampaignStatus::Active,
        },
        Campaign {
            id: "duolingo".to_string(),
            name: "Duolingo: Best way to learn".to_string(),
            image_url: "https://somelink2".to_string(),
            cta: "Install".to_string(),
            status: CampaignStatus::Active,
        },
        Campaign {
            id: "subwaysurfer".to_string(),
            name: "Subway Surfer".to_string(),
            image_url: "https://somelink3".to_string(),
            cta: "Play".to_string(),
            status: CampaignStatus::Active,
        },
    ]
}

pub fn demo_rules() -> Vec<TargetingRule> {
    vec![
        TargetingRule {
            campaign_id: "spotify".to_string(),
            dimension: Dimension::Country,
            kind: RuleKind::Include,
            values: vec!["US".to_string(), "Canada".to_string()],
        },
        TargetingRule {
            campaign_id: "duolingo".to_string(),
            dimension: Dimension::Os,
            kind: RuleKind::Include,
            values: vec!["Android".to_string(), "iOS".to_string()],
        },
        TargetingRule {
            campaign_id: "duolingo".to_string(),
            dimension: Dimension::Country,
            kind: RuleKind::Exclude,
            values: vec!["US".to_string()],
        },
        TargetingRule {
            campaign_id: "subwaysurfer".to_string(),
            dimension: Dimension::Os,
            kind: RuleKind::Include,
            values: vec!["Android".to_string()],
        },
        TargetingRule {
            campaign_id: "subwaysurfer".to_string(),
            dimension: Dimension::App,
            kind: RuleKind::Include,
            values: vec!["com.gametion.ludokinggame".to_string()],
        },
    ]
}
