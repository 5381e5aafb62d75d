use crate::models::{MatchingLimits, RecommendRequest};
use std::future::Future;
use std::path::{Path, PathBuf};
use thiserror::Error;
use validator::Validate;

/// Errors that can occur while loading profiles
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Requested limit {limit} exceeds the maximum of {max}")]
    LimitExceeded { limit: u16, max: usize },
}

/// Supplies a traveler and the candidate guides to rank for them
pub trait ProfileSource {
    fn load_request(&self) -> impl Future<Output = Result<RecommendRequest, ProfileError>> + Send;
}

/// Reads a JSON snapshot of a recommendation request from disk
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
    max_limit: usize,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_limit: MatchingLimits::default().max_limit,
        }
    }

    /// Accept request limits up to `max_limit`
    pub fn with_max_limit(mut self, max_limit: usize) -> Self {
        self.max_limit = max_limit;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProfileSource for JsonFileSource {
    async fn load_request(&self) -> Result<RecommendRequest, ProfileError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| ProfileError::Io {
                path: self.path.clone(),
                source,
            })?;

        tracing::debug!("Read {} bytes from {}", raw.len(), self.path.display());
        parse_request(&raw, self.max_limit)
    }
}

/// Serves a request that is already in memory
#[derive(Debug, Clone)]
pub struct InMemorySource {
    request: RecommendRequest,
    max_limit: usize,
}

impl InMemorySource {
    pub fn new(request: RecommendRequest) -> Self {
        Self {
            request,
            max_limit: MatchingLimits::default().max_limit,
        }
    }

    pub fn with_max_limit(mut self, max_limit: usize) -> Self {
        self.max_limit = max_limit;
        self
    }
}

impl ProfileSource for InMemorySource {
    async fn load_request(&self) -> Result<RecommendRequest, ProfileError> {
        check_request(&self.request, self.max_limit)?;
        Ok(self.request.clone())
    }
}

/// Parse and validate a JSON recommendation request
pub fn parse_request(raw: &str, max_limit: usize) -> Result<RecommendRequest, ProfileError> {
    let request: RecommendRequest = serde_json::from_str(raw)?;
    check_request(&request, max_limit)?;
    Ok(request)
}

/// Reject malformed requests and flag guides with suspicious data.
///
/// Guides whose capabilities fail validation are kept; the scorer clamps
/// their values.
fn check_request(request: &RecommendRequest, max_limit: usize) -> Result<(), ProfileError> {
    request.validate()?;

    if usize::from(request.limit) > max_limit {
        return Err(ProfileError::LimitExceeded {
            limit: request.limit,
            max: max_limit,
        });
    }

    if request.traveler.preferred_languages.is_empty() {
        tracing::warn!("Traveler has no preferred languages, language score will be 0");
    }

    for candidate in &request.candidates {
        if let Some(capabilities) = &candidate.capabilities {
            if let Err(errors) = capabilities.validate() {
                tracing::warn!(
                    "Guide {} has invalid capabilities: {}",
                    candidate.guide_id,
                    errors
                );
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CandidateGuide, GuideCapabilities, TravelerPreferences};

    const SNAPSHOT: &str = r#"{
        "traveler": { "preferredLanguages": ["EN"], "interests": ["FOOD", "CAFE"] },
        "candidates": [
            {
                "guideId": "g1",
                "name": "Minji",
                "capabilities": {
                    "languages": ["EN", "KO"],
                    "categories": ["FOOD"],
                    "averageRating": 4.5,
                    "totalTours": 20
                }
            },
            { "guideId": "g2", "name": "Unfinished" }
        ],
        "limit": 5
    }"#;

    #[test]
    fn test_parse_request() {
        let request = parse_request(SNAPSHOT, 50).unwrap();
        assert_eq!(request.limit, 5);
        assert_eq!(request.candidates.len(), 2);
        assert!(request.candidates[1].capabilities.is_none());
    }

    #[test]
    fn test_parse_rejects_bad_limit() {
        let raw = r#"{"traveler":{},"limit":0}"#;
        assert!(matches!(parse_request(raw, 50), Err(ProfileError::Validation(_))));

        let raw = r#"{"traveler":{},"limit":99}"#;
        assert!(matches!(
            parse_request(raw, 50),
            Err(ProfileError::LimitExceeded { limit: 99, max: 50 })
        ));
    }

    #[test]
    fn test_limit_follows_configured_maximum() {
        let raw = r#"{"traveler":{},"limit":60}"#;
        assert!(parse_request(raw, 50).is_err());
        assert_eq!(parse_request(raw, 80).unwrap().limit, 60);
    }

    #[test]
    fn test_parse_rejects_bad_json() {
        assert!(matches!(parse_request("{not json", 50), Err(ProfileError::Json(_))));
    }

    #[test]
    fn test_invalid_guide_is_kept() {
        let raw = r#"{
            "traveler": {"preferredLanguages": ["EN"]},
            "candidates": [{"guideId": "g", "capabilities": {"averageRating": 9.0}}]
        }"#;
        let request = parse_request(raw, 50).unwrap();
        assert_eq!(request.candidates.len(), 1);
    }

    #[tokio::test]
    async fn test_json_file_source() {
        let path = std::env::temp_dir().join(format!("guide-match-{}.json", uuid::Uuid::new_v4()));
        tokio::fs::write(&path, SNAPSHOT).await.unwrap();

        let source = JsonFileSource::new(&path);
        let request = source.load_request().await.unwrap();
        assert_eq!(request.candidates[0].guide_id, "g1");

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_file() {
        let source = JsonFileSource::new("/nonexistent/guide-match.json");
        let err = source.load_request().await.unwrap_err();
        assert!(matches!(err, ProfileError::Io { .. }));
    }

    #[tokio::test]
    async fn test_in_memory_source() {
        let request = RecommendRequest {
            traveler: TravelerPreferences::new(["EN"], ["FOOD"]),
            candidates: vec![CandidateGuide {
                guide_id: "g1".to_string(),
                name: "Guide".to_string(),
                capabilities: Some(GuideCapabilities::new(["EN"], ["FOOD"], 4.0, 4)),
            }],
            limit: 10,
        };

        let loaded = InMemorySource::new(request).load_request().await.unwrap();
        assert_eq!(loaded.candidates.len(), 1);
    }
}
