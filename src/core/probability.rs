use crate::core::thresholds::{
    average_accepted_marks, clamp_score, competition_multiplier, provided, required_marks,
};
use crate::models::{Application, ProbabilityLevel, Student, University};

/// Estimate the admission-success probability (0-100)
///
/// # Pipeline
/// 1. Marks component (10-50) from the gap between student and required marks
/// 2. Acceptance component: `acceptance_rate / 100 * 30`
/// 3. Competition multiplier applied to the sum of 1 and 2
/// 4. Historical adjustment (+5 / +2 / -2) against average accepted marks
///
/// An application's `marks_obtained`/`marks_required` take precedence over
/// the profile average and the competition-level threshold.
pub fn calculate_success_probability(
    student: &Student,
    university: &University,
    application: Option<&Application>,
) -> u8 {
    let level = university.competition_level;

    let student_marks = application
        .and_then(|app| provided(app.marks_obtained))
        .unwrap_or_else(|| student.marks());
    let required = application
        .and_then(|app| provided(app.marks_required))
        .unwrap_or_else(|| required_marks(level));

    let mut probability = calculate_marks_component(student_marks, required);

    probability += (university.acceptance_rate / 100.0) * 30.0;

    // Order matters: the multiplier scales the combined subtotal
    probability *= competition_multiplier(level);

    probability += calculate_historical_adjustment(student_marks, average_accepted_marks(level));

    clamp_score(probability)
}

/// Bucket a probability for display
pub fn probability_level(probability: u8) -> ProbabilityLevel {
    if probability >= 70 {
        ProbabilityLevel::High
    } else if probability >= 40 {
        ProbabilityLevel::Medium
    } else {
        ProbabilityLevel::Low
    }
}

#[inline]
fn calculate_marks_component(student_marks: f64, required: f64) -> f64 {
    if student_marks >= required {
        return 50.0;
    }

    let delta = student_marks - required;
    if delta >= -5.0 {
        40.0
    } else if delta >= -10.0 {
        30.0
    } else if delta >= -15.0 {
        20.0
    } else {
        10.0
    }
}

#[inline]
fn calculate_historical_adjustment(student_marks: f64, average_accepted: f64) -> f64 {
    if student_marks >= average_accepted {
        5.0
    } else if student_marks >= average_accepted * 0.95 {
        2.0
    } else {
        -2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ApplicationStatus, CompetitionLevel};

    fn student(marks: Option<f64>) -> Student {
        Student {
            id: "s1".to_string(),
            name: None,
            hsc_marks: marks,
            unit: "Science".to_string(),
            city: None,
        }
    }

    fn university(rate: f64, level: CompetitionLevel) -> University {
        University {
            id: "u1".to_string(),
            name: "Test University".to_string(),
            city: "Dhaka".to_string(),
            acceptance_rate: rate,
            competition_level: level,
            application_fee: None,
            accepted_units: vec![],
            circular_text: None,
        }
    }

    fn application(obtained: Option<f64>, required: Option<f64>) -> Application {
        Application {
            id: "a1".to_string(),
            student_id: "s1".to_string(),
            university_id: "u1".to_string(),
            status: ApplicationStatus::Submitted,
            marks_obtained: obtained,
            marks_required: required,
        }
    }

    #[test]
    fn test_far_below_elite_threshold() {
        // 20 + 2.4 = 22.4, * 0.5 = 11.2, - 2 = 9.2
        let p = calculate_success_probability(
            &student(Some(60.0)),
            &university(8.0, CompetitionLevel::VeryHigh),
            None,
        );
        assert_eq!(p, 9);
    }

    #[test]
    fn test_strong_student_low_competition() {
        // 50 + 9 = 59, * 1.0, + 5 = 64
        let p = calculate_success_probability(
            &student(Some(80.0)),
            &university(30.0, CompetitionLevel::Low),
            None,
        );
        assert_eq!(p, 64);
    }

    #[test]
    fn test_application_overrides_marks() {
        // Obtained 72 vs required 65: 50 + 2.4 = 52.4, * 0.5 = 26.2, 72 < 76 -> -2
        let app = application(Some(72.0), Some(65.0));
        let p = calculate_success_probability(
            &student(Some(50.0)),
            &university(8.0, CompetitionLevel::VeryHigh),
            Some(&app),
        );
        assert_eq!(p, 24);
    }

    #[test]
    fn test_zero_overrides_fall_back() {
        let app = application(Some(0.0), None);
        let with_app = calculate_success_probability(
            &student(Some(68.0)),
            &university(20.0, CompetitionLevel::Medium),
            Some(&app),
        );
        let without = calculate_success_probability(
            &student(Some(68.0)),
            &university(20.0, CompetitionLevel::Medium),
            None,
        );
        assert_eq!(with_app, without);
    }

    #[test]
    fn test_unspecified_level_uses_defaults() {
        // 50 + 6 = 56, * 1.0, 70 >= 70 -> +5
        let p = calculate_success_probability(
            &student(None),
            &university(20.0, CompetitionLevel::Unspecified),
            None,
        );
        assert_eq!(p, 61);
    }

    #[test]
    fn test_marks_component_steps() {
        assert_eq!(calculate_marks_component(75.0, 75.0), 50.0);
        assert_eq!(calculate_marks_component(70.0, 75.0), 40.0);
        assert_eq!(calculate_marks_component(65.0, 75.0), 30.0);
        assert_eq!(calculate_marks_component(60.0, 75.0), 20.0);
        assert_eq!(calculate_marks_component(59.0, 75.0), 10.0);
    }

    #[test]
    fn test_historical_adjustment() {
        assert_eq!(calculate_historical_adjustment(80.0, 80.0), 5.0);
        assert_eq!(calculate_historical_adjustment(77.0, 80.0), 2.0);
        assert_eq!(calculate_historical_adjustment(75.9, 80.0), -2.0);
    }

    #[test]
    fn test_probability_level() {
        assert_eq!(probability_level(70), ProbabilityLevel::High);
        assert_eq!(probability_level(69), ProbabilityLevel::Medium);
        assert_eq!(probability_level(40), ProbabilityLevel::Medium);
        assert_eq!(probability_level(39), ProbabilityLevel::Low);
    }
}
