use crate::models::{CandidateGuide, GuideCapabilities, MatchResult, MatchingLimits, ScoredGuide, TravelerPreferences};
use crate::core::{ranking::rank_guides, scoring::compute_score};

/// Result of a recommendation run
#[derive(Debug)]
pub struct Recommendation {
    pub guides: Vec<ScoredGuide>,
    pub total_candidates: usize,
    pub scored_candidates: usize,
}

/// Recommendation orchestrator
///
/// # Pipeline Stages
/// 1. Drop guides without a capability profile
/// 2. Cap the candidate pool
/// 3. Score every remaining guide
/// 4. Rank and truncate
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    limits: MatchingLimits,
}

impl Matcher {
    pub fn new(limits: MatchingLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &MatchingLimits {
        &self.limits
    }

    /// Score a single guide for a traveler
    pub fn score(&self, traveler: &TravelerPreferences, guide: &GuideCapabilities) -> MatchResult {
        compute_score(traveler, guide)
    }

    /// Rank candidate guides for a traveler
    ///
    /// # Arguments
    /// * `traveler` - The traveler's preferences
    /// * `candidates` - Guides supplied by the caller, in display order
    /// * `limit` - Maximum number of guides to return, `None` for the default
    pub fn recommend(
        &self,
        traveler: &TravelerPreferences,
        candidates: Vec<CandidateGuide>,
        limit: Option<usize>,
    ) -> Recommendation {
        let total_candidates = candidates.len();
        let limit = self.effective_limit(limit);

        let scored: Vec<(ScoredGuide, u8)> = candidates
            .into_iter()
            // Stage 1: Skip guides without a profile
            .filter_map(|candidate| match candidate.capabilities {
                Some(capabilities) => Some((candidate.guide_id, candidate.name, capabilities)),
                None => {
                    tracing::trace!("Skipping guide {} without capabilities", candidate.guide_id);
                    None
                }
            })
            // Stage 2: Pool cap
            .take(self.limits.candidate_pool_size)
            // Stage 3: Score
            .map(|(guide_id, name, capabilities)| {
                let result = compute_score(traveler, &capabilities);
                let scored = ScoredGuide {
                    guide_id,
                    name,
                    match_score: result.score,
                    grade: result.grade,
                    grade_label: result.grade.label().to_string(),
                    breakdown: result.breakdown,
                };
                (scored, result.score)
            })
            .collect();

        let scored_candidates = scored.len();
        if scored_candidates == self.limits.candidate_pool_size && total_candidates > scored_candidates {
            tracing::debug!(
                "Candidate pool of {} capped at {}",
                total_candidates,
                self.limits.candidate_pool_size
            );
        }

        // Stage 4: Rank and truncate
        let guides: Vec<ScoredGuide> = rank_guides(scored)
            .into_iter()
            .take(limit)
            .map(|(guide, _)| guide)
            .collect();

        Recommendation {
            guides,
            total_candidates,
            scored_candidates,
        }
    }

    /// Clamp a requested limit into `1..=max_limit`
    fn effective_limit(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.limits.default_limit)
            .clamp(1, self.limits.max_limit.max(1))
    }
}
