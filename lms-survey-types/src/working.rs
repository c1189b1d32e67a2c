use crate::{Demographic, FieldUpdate, Performance, RatingCategory, Satisfaction, SurveyRecord};

/// The single in-progress survey submission.
///
/// Owns the mutable record between consent and acceptance. No validation
/// happens at update time; `validate` is applied to a snapshot when the
/// respondent submits.
#[derive(Debug, Clone, Default)]
pub struct WorkingRecord {
    record: SurveyRecord,
}

impl WorkingRecord {
    /// Create an empty working record (no consent, no session).
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark consent as given and attach the session identity.
    pub fn grant_consent(&mut self, session_id: impl Into<String>, timestamp: impl Into<String>) {
        self.record.consent_given = true;
        self.record.session_id = session_id.into();
        self.record.timestamp = timestamp.into();
    }

    /// Apply a single field mutation.
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::ResponseTimeMs(value) => self.record.performance.response_time_ms = value,
            FieldUpdate::PageLoadTimeMs(value) => self.record.performance.page_load_time_ms = value,
            FieldUpdate::ErrorRatePercent(value) => {
                self.record.performance.error_rate_percent = value;
            }
            FieldUpdate::AcademicLevel(value) => self.record.demographic.academic_level = value,
            FieldUpdate::DeviceType(value) => self.record.demographic.device_type = value,
        }
    }

    /// Record a rating selection. Ratings persist across field edits until
    /// the next reset.
    pub fn set_rating(&mut self, category: RatingCategory, value: u8) {
        match category {
            RatingCategory::Usability => self.record.satisfaction.usability_rating = value,
            RatingCategory::Satisfaction => self.record.satisfaction.satisfaction_rating = value,
        }
    }

    /// Borrow the current record for validation or inspection.
    pub fn record(&self) -> &SurveyRecord {
        &self.record
    }

    /// An owned deep copy for preview and export purposes.
    ///
    /// Callers can never mutate the working record through the returned
    /// value.
    pub fn snapshot(&self) -> SurveyRecord {
        self.record.clone()
    }

    /// A stamped copy ready for acceptance into the submission store.
    pub fn accept(&self, submitted_at: impl Into<String>) -> SurveyRecord {
        let mut accepted = self.record.clone();
        accepted.submitted_at = Some(submitted_at.into());
        accepted
    }

    /// Clear the performance/satisfaction/demographic sections and refresh
    /// the creation timestamp. Session id and consent survive the reset.
    pub fn reset(&mut self, timestamp: impl Into<String>) {
        self.record.performance = Performance::default();
        self.record.satisfaction = Satisfaction::default();
        self.record.demographic = Demographic::default();
        self.record.timestamp = timestamp.into();
    }
}
