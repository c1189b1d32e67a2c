use chrono::{SecondsFormat, Utc};
use rand::{Rng, distr::Alphanumeric};

const SESSION_TOKEN_LENGTH: usize = 9;

/// Identity assigned to a respondent when consent is granted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Opaque token of the form `session_` plus nine lowercase
    /// alphanumerics. Not guaranteed globally unique; collisions between
    /// respondents are tolerated.
    pub id: String,
    /// ISO-8601 start time.
    pub started_at: String,
}

impl Session {
    /// Generate a fresh session starting now.
    pub fn generate() -> Self {
        let token: String = rand::rng()
            .sample_iter(Alphanumeric)
            .take(SESSION_TOKEN_LENGTH)
            .map(|byte| char::from(byte).to_ascii_lowercase())
            .collect();

        Self {
            id: format!("session_{token}"),
            started_at: now_iso(),
        }
    }
}

/// Current UTC time in the ISO-8601 millisecond format used throughout
/// the record model, e.g. `2026-08-26T10:00:00.000Z`.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
