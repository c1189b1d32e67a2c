use crate::SurveyRecord;

/// Upper bound for an accepted response time, in milliseconds.
pub const RESPONSE_TIME_MAX_MS: f64 = 10_000.0;

/// A named acceptance rule failure.
///
/// The `Display` text is the user-facing message shown in status lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    #[error("Consent not given")]
    ConsentMissing,

    #[error("Response time must be between 0-10000ms")]
    ResponseTimeOutOfRange,

    #[error("Please rate system usability")]
    UsabilityRatingMissing,

    #[error("Please select academic level")]
    AcademicLevelMissing,
}

/// Check a record against the acceptance rules.
///
/// Pure function, no side effects. All rules are evaluated independently
/// and every failure is collected; the returned order is the fixed rule
/// order, so user-facing messages are reproducible. An empty vector means
/// the record may enter the submission store.
pub fn validate(record: &SurveyRecord) -> Vec<Violation> {
    let mut violations = Vec::new();

    if !record.consent_given {
        violations.push(Violation::ConsentMissing);
    }

    match record.performance.response_time_ms {
        Some(ms) if (0.0..=RESPONSE_TIME_MAX_MS).contains(&ms) => {}
        _ => violations.push(Violation::ResponseTimeOutOfRange),
    }

    if record.satisfaction.usability_rating == 0 {
        violations.push(Violation::UsabilityRatingMissing);
    }

    if record.demographic.academic_level.is_empty() {
        violations.push(Violation::AcademicLevelMissing);
    }

    violations
}
