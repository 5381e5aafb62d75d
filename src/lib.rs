//! Guide Match - match scoring for travelers and tour guides
//!
//! This library scores how well a guide fits a traveler's language and
//! interest preferences, grades the score and ranks candidate guides.

pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Matcher, Recommendation, compute_score, grade_of, rank_guides};
pub use models::{TravelerPreferences, GuideCapabilities, CandidateGuide, MatchResult, Grade, ScoreBreakdown, RecommendRequest, RecommendResponse};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let traveler = TravelerPreferences::new(["EN"], ["FOOD"]);
        let guide = GuideCapabilities::new(["EN"], ["FOOD"], 5.0, 10);
        assert_eq!(compute_score(&traveler, &guide).score, 100);
        assert_eq!(grade_of(100), Grade::S);
    }
}
