use serde::{Deserialize, Serialize};
use std::fmt;

/// How selective a university is
///
/// Stored and sent over the wire as the display strings `"Low"`, `"Medium"`,
/// `"High"` and `"Very High"`. Anything else parses as `Unspecified`, which
/// takes the fallback row of every scoring table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CompetitionLevel {
    Low,
    Medium,
    High,
    VeryHigh,
    #[default]
    Unspecified,
}

impl CompetitionLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompetitionLevel::Low => "Low",
            CompetitionLevel::Medium => "Medium",
            CompetitionLevel::High => "High",
            CompetitionLevel::VeryHigh => "Very High",
            CompetitionLevel::Unspecified => "Unspecified",
        }
    }
}

impl From<&str> for CompetitionLevel {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "low" => CompetitionLevel::Low,
            "medium" => CompetitionLevel::Medium,
            "high" => CompetitionLevel::High,
            "very high" | "very_high" | "veryhigh" => CompetitionLevel::VeryHigh,
            _ => CompetitionLevel::Unspecified,
        }
    }
}

impl From<String> for CompetitionLevel {
    fn from(value: String) -> Self {
        CompetitionLevel::from(value.as_str())
    }
}

impl From<CompetitionLevel> for String {
    fn from(value: CompetitionLevel) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for CompetitionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Competitiveness tier derived from a student's marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StudentTier {
    Low,
    Medium,
    High,
}

/// Student profile, reduced to the fields the scorers read
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "hscMarks", alias = "hsc_marks", default)]
    pub hsc_marks: Option<f64>,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub city: Option<String>,
}

impl Student {
    /// Mark average used for scoring, 70 when the profile has none
    pub fn marks(&self) -> f64 {
        crate::core::thresholds::effective_marks(self.hsc_marks)
    }
}

/// University catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct University {
    pub id: String,
    pub name: String,
    pub city: String,
    #[serde(rename = "acceptanceRate", alias = "acceptance_rate")]
    pub acceptance_rate: f64,
    #[serde(rename = "competitionLevel", alias = "competition_level", default)]
    pub competition_level: CompetitionLevel,
    #[serde(rename = "applicationFee", alias = "application_fee", default)]
    pub application_fee: Option<u32>,
    /// Units this university admits. Empty means every unit.
    #[serde(rename = "acceptedUnits", alias = "accepted_units", default)]
    pub accepted_units: Vec<String>,
    #[serde(rename = "circularText", alias = "circular_text", default, skip_serializing_if = "Option::is_none")]
    pub circular_text: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "application_status", rename_all = "snake_case")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Submitted,
    UnderReview,
    Accepted,
    Rejected,
}

/// A student's application to one university
///
/// `marks_obtained` and `marks_required` override the profile average and the
/// competition-level threshold when estimating admission probability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "studentId", alias = "student_id", default)]
    pub student_id: String,
    #[serde(rename = "universityId", alias = "university_id", default)]
    pub university_id: String,
    #[serde(default)]
    pub status: ApplicationStatus,
    #[serde(rename = "marksObtained", alias = "marks_obtained", default)]
    pub marks_obtained: Option<f64>,
    #[serde(rename = "marksRequired", alias = "marks_required", default)]
    pub marks_required: Option<f64>,
}

/// A university paired with its match score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub university: University,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
}

/// Coarse bucket of an admission probability, for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProbabilityLevel {
    Low,
    Medium,
    High,
}

/// Point budget of each match-score criterion
///
/// The defaults add up to 100. Each criterion awards a fixed fraction of its
/// weight depending on how well the student fits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub marks: f64,
    pub unit: f64,
    pub acceptance: f64,
    pub competition: f64,
    pub location: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            marks: 40.0,
            unit: 20.0,
            acceptance: 20.0,
            competition: 10.0,
            location: 10.0,
        }
    }
}
