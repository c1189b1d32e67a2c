use lms_survey_export_csv::{CsvExport, ExportError};
use lms_survey_store::{BlobStore, StoreError, SubmissionStore};
use lms_survey_types::{FieldUpdate, RatingCategory, SurveyRecord, Violation, WorkingRecord, validate};

use crate::event::{EventSink, Severity, UiEvent};
use crate::session::{Session, now_iso};

/// Error type for submission attempts.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The working record violates one or more acceptance rules, in rule
    /// order. The respondent corrects the input and resubmits.
    #[error("Errors: {}", join_violations(.0))]
    Validation(Vec<Violation>),

    /// The backing store could not be written.
    #[error(transparent)]
    Store(#[from] StoreError),
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// The survey core: owns the working record and the submission store,
/// consumes inbound UI events, and emits preview/status/count events
/// through the sink.
///
/// Every operation is synchronous and leaves the controller in a
/// consistent, continuable state; no failure here is fatal.
#[derive(Debug)]
pub struct SurveyController<B, S> {
    working: WorkingRecord,
    store: SubmissionStore<B>,
    sink: S,
}

impl<B: BlobStore, S: EventSink> SurveyController<B, S> {
    /// Wire a controller to a store and an event sink.
    ///
    /// If the store already holds submissions from an earlier session, the
    /// respondent is greeted with the count.
    pub fn new(store: SubmissionStore<B>, sink: S) -> Self {
        let mut controller = Self {
            working: WorkingRecord::new(),
            store,
            sink,
        };

        let existing = controller.store.count();
        if existing > 0 {
            controller.status(
                format!("Welcome back! You have {existing} previous submissions."),
                Severity::Success,
            );
            controller.sink.emit(UiEvent::SubmissionCountChanged(existing));
        }
        controller.emit_preview();
        controller
    }

    /// Inbound: the consent checkbox was toggled.
    ///
    /// Granting consent starts a session. Unchecking never revokes a
    /// granted consent; it only produces a warning.
    pub fn consent_toggled(&mut self, checked: bool) {
        if !checked {
            self.status("Please check the consent box first.", Severity::Warning);
            return;
        }

        let session = Session::generate();
        self.working.grant_consent(session.id, session.started_at);
        self.status("Consent granted. You may now enter data.", Severity::Success);
        self.emit_preview();
    }

    /// Inbound: a form field changed.
    pub fn field_changed(&mut self, update: FieldUpdate) {
        self.working.apply(update);
        self.emit_preview();
    }

    /// Inbound: a rating button was selected.
    pub fn rating_selected(&mut self, category: RatingCategory, value: u8) {
        self.working.set_rating(category, value);
        self.emit_preview();
    }

    /// Inbound: the respondent submitted the form.
    ///
    /// On acceptance the record is stamped, appended to the store, and the
    /// form resets for the next entry (session and consent survive). On
    /// violation the store is untouched and the working record keeps its
    /// values for correction. Returns the new submission count.
    pub fn submit(&mut self) -> Result<usize, SubmitError> {
        let violations = validate(self.working.record());
        if !violations.is_empty() {
            self.status(
                format!("Errors: {}", join_violations(&violations)),
                Severity::Error,
            );
            return Err(SubmitError::Validation(violations));
        }

        let accepted = self.working.accept(now_iso());
        let count = match self.store.append(&accepted) {
            Ok(count) => count,
            Err(err) => {
                self.status(err.to_string(), Severity::Error);
                return Err(err.into());
            }
        };
        tracing::info!(session = %accepted.session_id, count, "submission accepted");

        self.sink.emit(UiEvent::SubmissionCountChanged(count));
        self.status(
            format!("Data submitted successfully! Total submissions: {count}"),
            Severity::Success,
        );
        self.reset_working();
        Ok(count)
    }

    /// Inbound: the respondent requested a CSV export.
    ///
    /// Returns the artifact for the UI layer to deliver as a download; the
    /// core performs no I/O beyond reading the store.
    pub fn export(&mut self) -> Result<CsvExport, ExportError> {
        let records = self.store.load();
        match lms_survey_export_csv::export(&records) {
            Ok(artifact) => {
                tracing::info!(records = records.len(), filename = %artifact.filename, "submissions exported");
                self.status(
                    format!("Exported {} records to CSV", records.len()),
                    Severity::Success,
                );
                Ok(artifact)
            }
            Err(err @ ExportError::NothingToExport) => {
                self.status(
                    "No data to export. Please submit some data first.",
                    Severity::Warning,
                );
                Err(err)
            }
        }
    }

    /// Inbound: the respondent reset the form.
    pub fn reset(&mut self) {
        self.reset_working();
        self.status("Form reset. You can enter new data.", Severity::Success);
    }

    /// Snapshot of the current working record.
    pub fn working_record(&self) -> SurveyRecord {
        self.working.snapshot()
    }

    /// Pretty-printed JSON snapshot of the working record, as shown in the
    /// preview pane.
    pub fn preview(&self) -> String {
        serde_json::to_string_pretty(self.working.record()).unwrap_or_default()
    }

    /// Number of stored submissions.
    pub fn submission_count(&self) -> usize {
        self.store.count()
    }

    fn reset_working(&mut self) {
        self.working.reset(now_iso());
        self.emit_preview();
    }

    fn emit_preview(&mut self) {
        let snapshot = self.preview();
        self.sink.emit(UiEvent::PreviewUpdated(snapshot));
    }

    fn status(&mut self, message: impl Into<String>, severity: Severity) {
        self.sink.emit(UiEvent::Status {
            message: message.into(),
            severity,
        });
    }
}
