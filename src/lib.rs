//! Admit Algo - University recommendation and admission-probability service
//!
//! This library provides the scoring engine behind the admission dashboard:
//! a match scorer, an admission-probability estimator, a stable
//! recommendation ranker and an admission circular summarizer, plus the
//! HTTP service that exposes them.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;
pub mod telemetry;

// Re-export commonly used types
pub use core::{Matcher, Recommendations, UnitCompatibility, calculate_match_score, calculate_success_probability};
pub use models::{Student, University, Application, CompetitionLevel, MatchResult, ScoringWeights};
