use serde::{Deserialize, Serialize};
use crate::models::domain::{Grade, MatchResult, ScoreBreakdown};

/// One ranked guide in a recommendation list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredGuide {
    #[serde(rename = "guideId")]
    pub guide_id: String,
    pub name: String,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
    pub grade: Grade,
    #[serde(rename = "gradeLabel")]
    pub grade_label: String,
    pub breakdown: ScoreBreakdown,
}

/// Response for a recommendation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendResponse {
    #[serde(rename = "requestId")]
    pub request_id: String,
    #[serde(rename = "generatedAt")]
    pub generated_at: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
    #[serde(rename = "scoredCandidates")]
    pub scored_candidates: usize,
    pub recommendations: Vec<ScoredGuide>,
}

/// Response for a single-guide score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResponse {
    #[serde(rename = "matchScore")]
    pub match_score: u8,
    pub grade: Grade,
    #[serde(rename = "gradeLabel")]
    pub grade_label: String,
    pub breakdown: ScoreBreakdown,
}

impl From<MatchResult> for ScoreResponse {
    fn from(result: MatchResult) -> Self {
        Self {
            match_score: result.score,
            grade: result.grade,
            grade_label: result.grade.label().to_string(),
            breakdown: result.breakdown,
        }
    }
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
