use serde::{Deserialize, Serialize};
use crate::core::circular::CircularSummary;
use crate::models::domain::{ProbabilityLevel, University};
use crate::services::CacheStats;

/// One ranked recommendation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationEntry {
    pub university: University,
    pub match_score: u8,
    pub probability: u8,
    pub probability_level: ProbabilityLevel,
}

/// Response for the recommendations endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationsResponse {
    pub matches: Vec<RecommendationEntry>,
    pub total_candidates: usize,
}

/// Response for the probability endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbabilityResponse {
    pub university_id: String,
    pub probability: u8,
    pub probability_level: ProbabilityLevel,
}

/// Response for the circular summary endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CircularSummaryResponse {
    pub summary: CircularSummary,
    pub formatted: String,
}

/// Catalog listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UniversitiesResponse {
    pub universities: Vec<University>,
    pub count: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub store: String,
    pub cache: CacheStats,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
