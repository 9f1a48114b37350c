use crate::models::{Application, MatchResult, ScoringWeights, Student, University};
use crate::core::{
    eligibility::{AcceptAllUnits, UnitCompatibility},
    probability::calculate_success_probability,
    scoring::calculate_match_score,
};
use std::fmt;
use std::sync::Arc;

/// Result of ranking a catalog for one student
#[derive(Debug, Clone)]
pub struct Recommendations {
    pub matches: Vec<MatchResult>,
    pub total_candidates: usize,
}

/// Recommendation ranker
///
/// Holds the scoring weights and the unit rule; every method is a pure
/// function of its arguments, so a `Matcher` can be shared freely across
/// workers.
#[derive(Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    units: Arc<dyn UnitCompatibility>,
}

impl Matcher {
    pub fn new(weights: ScoringWeights, units: Arc<dyn UnitCompatibility>) -> Self {
        Self { weights, units }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
            units: Arc::new(AcceptAllUnits),
        }
    }

    /// Replace the unit compatibility rule
    pub fn with_unit_rule(mut self, units: Arc<dyn UnitCompatibility>) -> Self {
        self.units = units;
        self
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Match score (0-100) of one university for the student
    pub fn score(&self, student: &Student, university: &University) -> u8 {
        calculate_match_score(student, university, &self.weights, self.units.as_ref())
    }

    /// Admission probability (0-100) of one university for the student
    pub fn probability(
        &self,
        student: &Student,
        university: &University,
        application: Option<&Application>,
    ) -> u8 {
        calculate_success_probability(student, university, application)
    }

    /// Rank universities for a student
    ///
    /// Scores every university, sorts by descending score and keeps the
    /// first `limit`. The sort is stable: equal scores keep their catalog
    /// order.
    pub fn rank(&self, student: &Student, universities: &[University], limit: usize) -> Recommendations {
        let total_candidates = universities.len();

        let mut matches: Vec<MatchResult> = universities
            .iter()
            .map(|university| MatchResult {
                match_score: self.score(student, university),
                university: university.clone(),
            })
            .collect();

        matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        matches.truncate(limit);

        tracing::trace!(
            "Ranked {} universities for student {}, kept {}",
            total_candidates,
            student.id,
            matches.len()
        );

        Recommendations {
            matches,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matcher")
            .field("weights", &self.weights)
            .finish_non_exhaustive()
    }
}
