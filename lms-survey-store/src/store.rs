use lms_survey_types::SurveyRecord;

use crate::BlobStore;

/// Error type for store write operations.
///
/// Reads have no error type: an unreadable or malformed blob loads as an
/// empty collection.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to encode submissions: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to persist submissions: {0}")]
    Write(#[source] anyhow::Error),
}

/// Append-only ordered collection of accepted survey records.
///
/// Records are validated by the caller before they reach `append`; the
/// store itself never re-validates, mutates, or removes entries.
///
/// `append` is a read-modify-write of the whole blob and is not atomic
/// across writers: two interleaved appends can lose one of the writes.
/// Single-user, single-writer use assumed.
#[derive(Debug)]
pub struct SubmissionStore<B> {
    blob: B,
}

impl<B: BlobStore> SubmissionStore<B> {
    pub fn new(blob: B) -> Self {
        Self { blob }
    }

    /// Load all stored records, oldest first.
    ///
    /// Fails open: an unreadable backend or a blob that does not parse as
    /// a record array yields an empty vector, logged at warn, never an
    /// error to the caller.
    pub fn load(&self) -> Vec<SurveyRecord> {
        let raw = match self.blob.read() {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                let err: anyhow::Error = err.into();
                tracing::warn!(error = %err, "submissions blob unreadable, treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(%err, "submissions blob malformed, treating as empty");
                Vec::new()
            }
        }
    }

    /// Append one accepted record and return the new total count.
    pub fn append(&self, record: &SurveyRecord) -> Result<usize, StoreError> {
        let mut records = self.load();
        records.push(record.clone());
        let encoded = serde_json::to_string(&records)?;
        self.blob
            .write(&encoded)
            .map_err(|err| StoreError::Write(err.into()))?;
        Ok(records.len())
    }

    /// Number of stored records.
    pub fn count(&self) -> usize {
        self.load().len()
    }
}
