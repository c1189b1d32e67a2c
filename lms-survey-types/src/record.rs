use serde::{Deserialize, Serialize};

/// Self-reported performance measurements.
///
/// All three fields are optional; `None` means the respondent left the
/// input blank. Only `response_time_ms` is required for acceptance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Performance {
    /// Observed system response time in milliseconds.
    pub response_time_ms: Option<f64>,
    /// Observed page load time in milliseconds.
    pub page_load_time_ms: Option<f64>,
    /// Observed error rate as a percentage.
    pub error_rate_percent: Option<f64>,
}

/// Satisfaction ratings on a 1-5 scale. `0` means "not selected".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Satisfaction {
    pub usability_rating: u8,
    pub satisfaction_rating: u8,
}

/// Respondent demographics. An empty string means "not selected".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Demographic {
    pub academic_level: String,
    pub device_type: String,
}

/// One respondent's survey submission.
///
/// This is both the shape of the in-progress working record and the shape
/// of an accepted entry in the submission store. The only difference is
/// `submitted_at`, which is stamped at the moment a record is accepted and
/// absent on in-progress/preview records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SurveyRecord {
    /// Opaque random token assigned when consent is granted.
    ///
    /// Not guaranteed globally unique; a collision between two respondents
    /// is tolerated.
    pub session_id: String,

    /// ISO-8601 creation time of the working record, refreshed on reset.
    pub timestamp: String,

    /// Must be `true` before a record may be accepted into the store.
    pub consent_given: bool,

    pub performance: Performance,
    pub satisfaction: Satisfaction,
    pub demographic: Demographic,

    /// ISO-8601 acceptance time, set only when the record enters the store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<String>,
}
