use crate::error::TargetingError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle status of a campaign. Only active campaigns are considered
/// for delivery; inactive ones are filtered out before rule evaluation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CampaignStatus {
    Active,
    Inactive,
}

impl CampaignStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignStatus::Active => "ACTIVE",
            CampaignStatus::Inactive => "INACTIVE",
        }
    }
}

impl FromStr for CampaignStatus {
    type Err = TargetingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTIVE" => Ok(CampaignStatus::Active),
            "INACTIVE" => Ok(CampaignStatus::Inactive),
            other => Err(TargetingError::Decode(format!(
                "unknown campaign status: {other}"
            ))),
        }
    }
}

/// An ad campaign as stored. The engine only reads `id` and `status`;
/// the creative fields pass through untouched to the delivery response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub cta: String,
    pub status: CampaignStatus,
}

impl Campaign {
    /// Project to the delivery-facing shape. Internal fields (name,
    /// status) are not exposed to consumers.
    pub fn to_matched(&self) -> MatchedCampaign {
        MatchedCampaign {
            cid: self.id.clone(),
            img: self.image_url.clone(),
            cta: self.cta.clone(),
        }
    }
}

/// The targeting axes. A closed set: adding a dimension is a
/// compile-time-visible change across the matcher.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Dimension {
    App,
    Os,
    Country,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [Dimension::App, Dimension::Os, Dimension::Country];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::App => "APP",
            Dimension::Os => "OS",
            Dimension::Country => "COUNTRY",
        }
    }
}

impl FromStr for Dimension {
    type Err = TargetingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "APP" => Ok(Dimension::App),
            "OS" => Ok(Dimension::Os),
            "COUNTRY" => Ok(Dimension::Country),
            other => Err(TargetingError::Decode(format!("unknown dimension: {other}"))),
        }
    }
}

/// Include: the request value must be in the rule's value set.
/// Exclude: the request value must not be.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleKind {
    Include,
    Exclude,
}

impl RuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::Include => "INCLUDE",
            RuleKind::Exclude => "EXCLUDE",
        }
    }
}

impl FromStr for RuleKind {
    type Err = TargetingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INCLUDE" => Ok(RuleKind::Include),
            "EXCLUDE" => Ok(RuleKind::Exclude),
            other => Err(TargetingError::Decode(format!("unknown rule kind: {other}"))),
        }
    }
}

/// One targeting constraint for one (campaign, dimension) pair. Values
/// are compared case-insensitively; duplicates within a rule are inert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetingRule {
    pub campaign_id: String,
    pub dimension: Dimension,
    pub kind: RuleKind,
    pub values: Vec<String>,
}

/// An incoming ad-delivery request. All three fields are required;
/// an empty field is a validation failure, not a "no match".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryRequest {
    pub app: String,
    pub os: String,
    pub country: String,
}

impl DeliveryRequest {
    pub fn new(
        app: impl Into<String>,
        os: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            app: app.into(),
            os: os.into(),
            country: country.into(),
        }
    }

    /// The request's value along one targeting dimension.
    pub fn value_for(&self, dimension: Dimension) -> &str {
        match dimension {
            Dimension::App => &self.app,
            Dimension::Os => &self.os,
            Dimension::Country => &self.country,
        }
    }

    pub fn validate(&self) -> Result<(), TargetingError> {
        if self.app.is_empty() {
            return Err(TargetingError::InvalidRequest("app"));
        }
        if self.os.is_empty() {
            return Err(TargetingError::InvalidRequest("os"));
        }
        if self.country.is_empty() {
            return Err(TargetingError::InvalidRequest("country"));
        }
        Ok(())
    }
}

/// A matched campaign projected to the fields a consumer needs to
/// render the creative.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchedCampaign {
    pub cid: String,
    pub img: String,
    pub cta: String,
}
