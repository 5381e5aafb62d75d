// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{TravelerPreferences, GuideCapabilities, CandidateGuide, ScoreBreakdown, Grade, MatchResult, MatchingLimits};
pub use requests::{RecommendRequest, ScoreRequest};
pub use responses::{RecommendResponse, ScoredGuide, ScoreResponse, ErrorResponse};
