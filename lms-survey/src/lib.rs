//! # lms-survey
//!
//! The data core of a usability/performance research survey tool: a
//! working record mutated field-by-field, a pure validator, an append-only
//! submission store over a swappable blob backend, and a CSV exporter.
//! The UI layer (browser form, TUI, anything) feeds inbound events into
//! the [`SurveyController`] and renders the preview/status/count events it
//! emits.
//!
//! ## Usage
//!
//! ```rust
//! use lms_survey::{
//!     FieldUpdate, MemoryBlob, RatingCategory, SubmissionStore, SurveyController, UiEvent,
//! };
//!
//! let store = SubmissionStore::new(MemoryBlob::new());
//! let mut controller = SurveyController::new(store, |_event: UiEvent| {});
//!
//! controller.consent_toggled(true);
//! controller.field_changed(FieldUpdate::ResponseTimeMs(Some(250.0)));
//! controller.field_changed(FieldUpdate::AcademicLevel("Graduate".to_string()));
//! controller.rating_selected(RatingCategory::Usability, 4);
//!
//! assert_eq!(controller.submit().unwrap(), 1);
//! let export = controller.export().unwrap();
//! assert!(export.content.starts_with("Session ID,"));
//! ```
//!
//! ## Crates
//!
//! The core is split the same way the data flows:
//! - `lms-survey-types` - record model, field updates, validation
//! - `lms-survey-store` - blob-backed submission store
//! - `lms-survey-export-csv` - flat-table export

// Re-export the record model and validation vocabulary
pub use lms_survey_types::{
    Demographic, FieldUpdate, Performance, RESPONSE_TIME_MAX_MS, RatingCategory, Satisfaction,
    SurveyRecord, Violation, WorkingRecord, validate,
};

// Re-export the store and its backends
pub use lms_survey_store::{
    BlobStore, FileBlob, MemoryBlob, SUBMISSIONS_KEY, StoreError, SubmissionStore,
};

// Re-export the exporter surface
pub use lms_survey_export_csv::{CSV_MIME_TYPE, COLUMNS, CsvExport, ExportError};
pub use lms_survey_export_csv::{export as export_csv, export_dated as export_csv_dated};

mod session;
pub use session::{Session, now_iso};

mod event;
pub use event::{EventSink, Severity, UiEvent};

mod controller;
pub use controller::{SubmitError, SurveyController};

mod stats;
pub use stats::SurveyStats;
