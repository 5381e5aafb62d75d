use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{CandidateGuide, GuideCapabilities, TravelerPreferences};

/// Request to rank a pool of guides for one traveler
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendRequest {
    pub traveler: TravelerPreferences,
    #[serde(default)]
    pub candidates: Vec<CandidateGuide>,
    /// Upper bound is `matching.max_limit`, checked when the request is loaded
    #[validate(range(min = 1))]
    #[serde(default = "default_limit")]
    pub limit: u16,
}

fn default_limit() -> u16 {
    10
}

/// Request to score a single guide, breakdown included
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub traveler: TravelerPreferences,
    pub guide: GuideCapabilities,
}
