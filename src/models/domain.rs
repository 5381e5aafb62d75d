use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use validator::Validate;

/// What a traveler is looking for in a guide
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TravelerPreferences {
    #[serde(rename = "preferredLanguages", default)]
    pub preferred_languages: BTreeSet<String>,
    #[serde(default)]
    pub interests: BTreeSet<String>,
}

impl TravelerPreferences {
    pub fn new<L, I>(languages: L, interests: I) -> Self
    where
        L: IntoIterator,
        L::Item: Into<String>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            preferred_languages: languages.into_iter().map(Into::into).collect(),
            interests: interests.into_iter().map(Into::into).collect(),
        }
    }
}

/// What a guide offers: spoken languages, covered categories and track record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct GuideCapabilities {
    #[serde(default)]
    pub languages: BTreeSet<String>,
    #[serde(default)]
    pub categories: BTreeSet<String>,
    #[validate(range(min = 0.0, max = 5.0))]
    #[serde(rename = "averageRating", default)]
    pub average_rating: f64,
    #[serde(rename = "totalTours", default)]
    pub total_tours: u32,
}

impl GuideCapabilities {
    pub fn new<L, C>(languages: L, categories: C, average_rating: f64, total_tours: u32) -> Self
    where
        L: IntoIterator,
        L::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            languages: languages.into_iter().map(Into::into).collect(),
            categories: categories.into_iter().map(Into::into).collect(),
            average_rating,
            total_tours,
        }
    }
}

/// A guide as handed over by the caller. Accounts that never filled in a
/// guide profile carry no capabilities and are never scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateGuide {
    #[serde(rename = "guideId")]
    pub guide_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub capabilities: Option<GuideCapabilities>,
}

/// Per-component contributions before rounding
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub language: f64,
    pub interests: f64,
    pub rating: f64,
    pub experience: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.language + self.interests + self.rating + self.experience
    }
}

/// Coarse match classification. Variants are declared low to high so that
/// `Grade::S > Grade::D`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    D,
    C,
    B,
    A,
    S,
}

impl Grade {
    pub fn label(self) -> &'static str {
        match self {
            Grade::S => "perfect match",
            Grade::A => "very good",
            Grade::B => "good",
            Grade::C => "fair",
            Grade::D => "low",
        }
    }

    pub fn letter(self) -> char {
        match self {
            Grade::S => 'S',
            Grade::A => 'A',
            Grade::B => 'B',
            Grade::C => 'C',
            Grade::D => 'D',
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.letter(), self.label())
    }
}

/// Outcome of scoring one traveler against one guide
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: u8,
    pub breakdown: ScoreBreakdown,
    pub grade: Grade,
}

/// Limits applied by the matcher when building a recommendation list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchingLimits {
    pub default_limit: usize,
    pub max_limit: usize,
    pub candidate_pool_size: usize,
}

impl Default for MatchingLimits {
    fn default() -> Self {
        Self {
            default_limit: 10,
            max_limit: 50,
            candidate_pool_size: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_ordering() {
        assert!(Grade::S > Grade::A);
        assert!(Grade::A > Grade::B);
        assert!(Grade::C > Grade::D);
    }

    #[test]
    fn test_grade_serializes_as_letter() {
        assert_eq!(serde_json::to_string(&Grade::A).unwrap(), "\"A\"");
        assert_eq!(Grade::S.to_string(), "S (perfect match)");
    }

    #[test]
    fn test_preferences_deduplicate() {
        let prefs = TravelerPreferences::new(["EN", "EN", "KO"], ["FOOD"]);
        assert_eq!(prefs.preferred_languages.len(), 2);
    }

    #[test]
    fn test_guide_capabilities_from_json() {
        let json = r#"{"languages":["EN"],"categories":["FOOD","CAFE"],"averageRating":4.2,"totalTours":7}"#;
        let guide: GuideCapabilities = serde_json::from_str(json).unwrap();
        assert_eq!(guide.total_tours, 7);
        assert!(guide.categories.contains("CAFE"));
        assert!(guide.validate().is_ok());
    }

    #[test]
    fn test_rating_out_of_range_fails_validation() {
        let guide = GuideCapabilities::new(["EN"], ["FOOD"], 7.5, 3);
        assert!(guide.validate().is_err());
    }
}
