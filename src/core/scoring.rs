use crate::core::eligibility::UnitCompatibility;
use crate::core::thresholds::{clamp_score, required_marks, student_tier};
use crate::models::{CompetitionLevel, ScoringWeights, Student, StudentTier, University};

/// Calculate a match score (0-100) between a student and a university
///
/// Scoring formula, with each factor in 0..=1:
/// score = (
///     marks_fit * marks_weight +             # Marks against the level's threshold
///     unit_fit * unit_weight +               # University admits the student's unit
///     acceptance * acceptance_weight +       # Higher acceptance rate = better fit
///     alignment * competition_weight +       # Student tier vs competition level
///     location * location_weight             # Same city
/// )
///
/// With the default weights (40/20/20/10/10) the sum cannot exceed 100; the
/// result is still clamped for custom weights.
pub fn calculate_match_score(
    student: &Student,
    university: &University,
    weights: &ScoringWeights,
    units: &dyn UnitCompatibility,
) -> u8 {
    let marks = student.marks();
    let level = university.competition_level;

    let marks_score = calculate_marks_fit(marks, required_marks(level));

    let unit_score = if units.is_compatible(&student.unit, university) {
        1.0
    } else {
        0.25
    };

    let acceptance_score = calculate_acceptance_score(university.acceptance_rate);

    let alignment_score = calculate_alignment_score(student_tier(marks), level);

    let location_score = calculate_location_score(student.city.as_deref(), &university.city);

    let total_score = marks_score * weights.marks
        + unit_score * weights.unit
        + acceptance_score * weights.acceptance
        + alignment_score * weights.competition
        + location_score * weights.location;

    clamp_score(total_score)
}

/// Marks fit (0.25-1)
/// Full credit at or above the threshold, stepping down at 90% and 80% of it
#[inline]
fn calculate_marks_fit(marks: f64, required: f64) -> f64 {
    if marks >= required {
        1.0
    } else if marks >= required * 0.9 {
        0.75
    } else if marks >= required * 0.8 {
        0.5
    } else {
        0.25
    }
}

/// Acceptance-rate favorability (0.25-1)
#[inline]
fn calculate_acceptance_score(acceptance_rate: f64) -> f64 {
    if acceptance_rate >= 30.0 {
        1.0
    } else if acceptance_rate >= 15.0 {
        0.75
    } else if acceptance_rate >= 8.0 {
        0.5
    } else {
        0.25
    }
}

/// Competition-level alignment (0.5-1)
///
/// A student one tier below the university's level scores best, an exact
/// Medium/High match scores slightly less, everything else gets half credit.
#[inline]
fn calculate_alignment_score(tier: StudentTier, level: CompetitionLevel) -> f64 {
    match (tier, level) {
        (StudentTier::High, CompetitionLevel::VeryHigh)
        | (StudentTier::Medium, CompetitionLevel::High)
        | (StudentTier::Low, CompetitionLevel::Medium) => 1.0,
        (StudentTier::Medium, CompetitionLevel::Medium)
        | (StudentTier::High, CompetitionLevel::High) => 0.8,
        _ => 0.5,
    }
}

/// Location bonus (0.5-1), case-insensitive exact city match
#[inline]
fn calculate_location_score(student_city: Option<&str>, university_city: &str) -> f64 {
    match student_city {
        Some(city) if !city.is_empty() && city.to_lowercase() == university_city.to_lowercase() => 1.0,
        _ => 0.5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::eligibility::{AcceptAllUnits, AcceptedUnits};

    fn create_test_student(marks: Option<f64>, city: Option<&str>) -> Student {
        Student {
            id: "student".to_string(),
            name: None,
            hsc_marks: marks,
            unit: "Science".to_string(),
            city: city.map(str::to_string),
        }
    }

    fn create_test_university(rate: f64, level: CompetitionLevel, city: &str) -> University {
        University {
            id: "uni".to_string(),
            name: "Test University".to_string(),
            city: city.to_string(),
            acceptance_rate: rate,
            competition_level: level,
            application_fee: Some(500),
            accepted_units: vec![],
            circular_text: None,
        }
    }

    #[test]
    fn test_high_marks_low_competition() {
        // 40 marks + 20 unit + 20 acceptance + 5 alignment + 5 location
        let student = create_test_student(Some(80.0), Some("Khulna"));
        let university = create_test_university(30.0, CompetitionLevel::Low, "Sylhet");

        let score = calculate_match_score(&student, &university, &ScoringWeights::default(), &AcceptAllUnits);
        assert_eq!(score, 90);
    }

    #[test]
    fn test_perfect_alignment_same_city() {
        // 40 + 20 + 20 + 10 + 10
        let student = create_test_student(Some(70.0), Some("dhaka"));
        let university = create_test_university(35.0, CompetitionLevel::High, "Dhaka");

        let score = calculate_match_score(&student, &university, &ScoringWeights::default(), &AcceptAllUnits);
        assert_eq!(score, 100);
    }

    #[test]
    fn test_missing_marks_defaults_to_seventy() {
        let without = create_test_student(None, None);
        let with = create_test_student(Some(70.0), None);
        let university = create_test_university(8.0, CompetitionLevel::VeryHigh, "Dhaka");
        let weights = ScoringWeights::default();

        assert_eq!(
            calculate_match_score(&without, &university, &weights, &AcceptAllUnits),
            calculate_match_score(&with, &university, &weights, &AcceptAllUnits),
        );
    }

    #[test]
    fn test_incompatible_unit_gets_partial_credit() {
        let student = create_test_student(Some(80.0), None);
        let mut university = create_test_university(30.0, CompetitionLevel::Low, "Sylhet");
        university.accepted_units = vec!["Arts".to_string()];
        let weights = ScoringWeights::default();

        let compatible = calculate_match_score(&student, &university, &weights, &AcceptAllUnits);
        let incompatible = calculate_match_score(&student, &university, &weights, &AcceptedUnits);
        assert_eq!(compatible - incompatible, 15);
    }

    #[test]
    fn test_custom_weights_are_clamped() {
        let student = create_test_student(Some(70.0), Some("Dhaka"));
        let university = create_test_university(35.0, CompetitionLevel::High, "Dhaka");
        let weights = ScoringWeights {
            marks: 80.0,
            ..ScoringWeights::default()
        };

        assert_eq!(calculate_match_score(&student, &university, &weights, &AcceptAllUnits), 100);
    }

    #[test]
    fn test_marks_fit_steps() {
        assert_eq!(calculate_marks_fit(75.0, 75.0), 1.0);
        assert_eq!(calculate_marks_fit(68.0, 75.0), 0.75);
        assert_eq!(calculate_marks_fit(61.0, 75.0), 0.5);
        assert_eq!(calculate_marks_fit(59.0, 75.0), 0.25);
    }

    #[test]
    fn test_acceptance_steps() {
        assert_eq!(calculate_acceptance_score(30.0), 1.0);
        assert_eq!(calculate_acceptance_score(15.0), 0.75);
        assert_eq!(calculate_acceptance_score(8.0), 0.5);
        assert_eq!(calculate_acceptance_score(7.9), 0.25);
    }

    #[test]
    fn test_alignment_table() {
        assert_eq!(calculate_alignment_score(StudentTier::High, CompetitionLevel::VeryHigh), 1.0);
        assert_eq!(calculate_alignment_score(StudentTier::Low, CompetitionLevel::Medium), 1.0);
        assert_eq!(calculate_alignment_score(StudentTier::High, CompetitionLevel::High), 0.8);
        assert_eq!(calculate_alignment_score(StudentTier::Low, CompetitionLevel::Low), 0.5);
        assert_eq!(calculate_alignment_score(StudentTier::High, CompetitionLevel::Low), 0.5);
    }

    #[test]
    fn test_location_requires_city() {
        assert_eq!(calculate_location_score(Some(""), ""), 0.5);
        assert_eq!(calculate_location_score(None, "Dhaka"), 0.5);
        assert_eq!(calculate_location_score(Some("DHAKA"), "Dhaka"), 1.0);
    }
}
