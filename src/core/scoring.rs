use crate::models::{GuideCapabilities, MatchResult, ScoreBreakdown, TravelerPreferences};
use crate::core::grade::grade_of;

pub const LANGUAGE_WEIGHT: f64 = 40.0;
pub const INTEREST_WEIGHT: f64 = 30.0;
pub const RATING_WEIGHT: f64 = 20.0;
pub const EXPERIENCE_WEIGHT: f64 = 10.0;

/// Highest rating a guide can hold
pub const MAX_RATING: f64 = 5.0;

/// Completed tours after which experience earns full credit
pub const EXPERIENCE_SATURATION_TOURS: u32 = 10;

/// Calculate a match score (0-100) between a traveler and a guide
///
/// Scoring formula:
/// score = round(
///     language_overlap * 40 +     # share of preferred languages the guide speaks
///     interest_overlap * 30 +     # share of interests the guide covers
///     rating / 5 * 20 +           # average review rating
///     min(tours / 10, 1) * 10     # experience, saturating at 10 tours
/// )
///
/// Rounds half up and never leaves `0..=100`.
pub fn compute_score(traveler: &TravelerPreferences, guide: &GuideCapabilities) -> MatchResult {
    let breakdown = score_breakdown(traveler, guide);
    let score = round_score(breakdown.total());

    MatchResult {
        score,
        breakdown,
        grade: grade_of(i32::from(score)),
    }
}

/// Unrounded contribution of each component
pub fn score_breakdown(traveler: &TravelerPreferences, guide: &GuideCapabilities) -> ScoreBreakdown {
    ScoreBreakdown {
        language: language_score(traveler, guide),
        interests: interest_score(traveler, guide),
        rating: rating_score(guide.average_rating),
        experience: experience_score(guide.total_tours),
    }
}

/// Language component (0-40)
///
/// Proportional to how many of the traveler's languages the guide speaks.
#[inline]
pub fn language_score(traveler: &TravelerPreferences, guide: &GuideCapabilities) -> f64 {
    let wanted = traveler.preferred_languages.len();
    if wanted == 0 {
        return 0.0;
    }

    let matched = traveler
        .preferred_languages
        .iter()
        .filter(|lang| guide.languages.contains(*lang))
        .count();

    (matched as f64 / wanted as f64 * LANGUAGE_WEIGHT).min(LANGUAGE_WEIGHT)
}

/// Interest component (0-30)
#[inline]
pub fn interest_score(traveler: &TravelerPreferences, guide: &GuideCapabilities) -> f64 {
    let wanted = traveler.interests.len();
    if wanted == 0 {
        return 0.0;
    }

    let overlap = traveler
        .interests
        .iter()
        .filter(|interest| guide.categories.contains(*interest))
        .count();

    overlap as f64 / wanted as f64 * INTEREST_WEIGHT
}

/// Rating component (0-20)
///
/// Ratings outside `0..=5` are clamped and NaN counts as zero. Both cases
/// point at bad upstream data and are logged.
#[inline]
pub fn rating_score(average_rating: f64) -> f64 {
    let rating = if average_rating.is_nan() {
        tracing::warn!("Guide rating is NaN, scoring it as 0");
        0.0
    } else if !(0.0..=MAX_RATING).contains(&average_rating) {
        let clamped = average_rating.clamp(0.0, MAX_RATING);
        tracing::warn!("Guide rating {} outside 0..={}, clamped to {}", average_rating, MAX_RATING, clamped);
        clamped
    } else {
        average_rating
    };

    rating / MAX_RATING * RATING_WEIGHT
}

/// Experience component (0-10), full credit from 10 completed tours on
#[inline]
pub fn experience_score(total_tours: u32) -> f64 {
    let ratio = (f64::from(total_tours) / f64::from(EXPERIENCE_SATURATION_TOURS)).min(1.0);
    ratio * EXPERIENCE_WEIGHT
}

/// Round half up and clamp into the score range. The component sum is
/// never negative, so rounding half away from zero is rounding half up.
#[inline]
fn round_score(total: f64) -> u8 {
    if !total.is_finite() {
        return 0;
    }
    total.round().clamp(0.0, 100.0) as u8
}
