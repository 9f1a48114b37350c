use crate::models::{CompetitionLevel, StudentTier};

/// Mark average assumed when a profile has none
pub const DEFAULT_MARKS: f64 = 70.0;

/// Resolve an optional mark to the value used for scoring
///
/// Absent, zero and non-finite marks all count as "not provided".
#[inline]
pub fn effective_marks(marks: Option<f64>) -> f64 {
    provided(marks).unwrap_or(DEFAULT_MARKS)
}

/// Keep a mark only if it carries information
#[inline]
pub fn provided(marks: Option<f64>) -> Option<f64> {
    marks.filter(|m| m.is_finite() && *m != 0.0)
}

/// Minimum marks a university is assumed to expect
#[inline]
pub fn required_marks(level: CompetitionLevel) -> f64 {
    match level {
        CompetitionLevel::VeryHigh => 75.0,
        CompetitionLevel::High => 70.0,
        CompetitionLevel::Medium => 65.0,
        CompetitionLevel::Low => 60.0,
        CompetitionLevel::Unspecified => 65.0,
    }
}

/// Typical marks of admitted students
#[inline]
pub fn average_accepted_marks(level: CompetitionLevel) -> f64 {
    match level {
        CompetitionLevel::VeryHigh => 80.0,
        CompetitionLevel::High => 75.0,
        CompetitionLevel::Medium => 70.0,
        CompetitionLevel::Low => 65.0,
        CompetitionLevel::Unspecified => 70.0,
    }
}

/// Factor applied to the probability subtotal
#[inline]
pub fn competition_multiplier(level: CompetitionLevel) -> f64 {
    match level {
        CompetitionLevel::VeryHigh => 0.5,
        CompetitionLevel::High => 0.7,
        CompetitionLevel::Medium => 0.9,
        CompetitionLevel::Low | CompetitionLevel::Unspecified => 1.0,
    }
}

/// Competitiveness tier for a mark average
#[inline]
pub fn student_tier(marks: f64) -> StudentTier {
    if marks >= 75.0 {
        StudentTier::High
    } else if marks >= 65.0 {
        StudentTier::Medium
    } else {
        StudentTier::Low
    }
}

/// Round to the nearest integer and clamp into 0..=100
#[inline]
pub fn clamp_score(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}
