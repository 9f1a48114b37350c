use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::models::domain::{Application, Student};

/// Request for ranked university recommendations
///
/// The student is either looked up by `studentId` or supplied inline.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_recommendations_source"))]
pub struct RecommendationsRequest {
    #[validate(length(min = 1))]
    #[serde(rename = "studentId", alias = "student_id", default)]
    pub student_id: Option<String>,
    #[serde(default)]
    pub student: Option<Student>,
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Request for an admission probability estimate
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_probability_source"))]
pub struct ProbabilityRequest {
    #[validate(length(min = 1))]
    #[serde(rename = "studentId", alias = "student_id", default)]
    pub student_id: Option<String>,
    #[serde(default)]
    pub student: Option<Student>,
    #[validate(length(min = 1))]
    #[serde(rename = "universityId", alias = "university_id")]
    pub university_id: String,
    #[serde(default)]
    pub application: Option<Application>,
}

/// Request to summarize an admission circular
///
/// Either raw `text` or a `universityId` whose stored circular is used.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_circular_source"))]
pub struct CircularSummaryRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[validate(length(min = 1))]
    #[serde(rename = "universityId", alias = "university_id", default)]
    pub university_id: Option<String>,
}

fn require_student(student_id: &Option<String>, student: &Option<Student>) -> Result<(), ValidationError> {
    if student_id.is_none() && student.is_none() {
        let mut err = ValidationError::new("missing_student");
        err.message = Some("either studentId or student is required".into());
        return Err(err);
    }
    Ok(())
}

fn validate_recommendations_source(req: &RecommendationsRequest) -> Result<(), ValidationError> {
    require_student(&req.student_id, &req.student)
}

fn validate_probability_source(req: &ProbabilityRequest) -> Result<(), ValidationError> {
    require_student(&req.student_id, &req.student)
}

fn validate_circular_source(req: &CircularSummaryRequest) -> Result<(), ValidationError> {
    let has_text = req.text.as_deref().is_some_and(|t| !t.trim().is_empty());
    if !has_text && req.university_id.is_none() {
        let mut err = ValidationError::new("missing_circular");
        err.message = Some("either text or universityId is required".into());
        return Err(err);
    }
    Ok(())
}
