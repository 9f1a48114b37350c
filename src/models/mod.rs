// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Student, University, Application, ApplicationStatus, CompetitionLevel, StudentTier, MatchResult, ProbabilityLevel, ScoringWeights};
pub use requests::{RecommendationsRequest, ProbabilityRequest, CircularSummaryRequest};
pub use responses::{RecommendationsResponse, RecommendationEntry, ProbabilityResponse, CircularSummaryResponse, UniversitiesResponse, HealthResponse, ErrorResponse};
