//! End-to-end tests for the survey core: consent, data entry, submission,
//! persistence, and export, driven the way a UI layer would drive it.

use std::cell::RefCell;
use std::rc::Rc;

use lms_survey::{
    COLUMNS, ExportError, FieldUpdate, MemoryBlob, RatingCategory, Severity, SubmissionStore,
    SubmitError, SurveyController, SurveyStats, UiEvent, Violation,
};

type Events = Rc<RefCell<Vec<UiEvent>>>;

fn controller_with_events(blob: MemoryBlob) -> (SurveyController<MemoryBlob, impl FnMut(UiEvent)>, Events) {
    let events: Events = Rc::new(RefCell::new(Vec::new()));
    let sink_events = Rc::clone(&events);
    let controller = SurveyController::new(SubmissionStore::new(blob), move |event: UiEvent| {
        sink_events.borrow_mut().push(event);
    });
    (controller, events)
}

fn statuses(events: &Events) -> Vec<(String, Severity)> {
    events
        .borrow()
        .iter()
        .filter_map(|event| match event {
            UiEvent::Status { message, severity } => Some((message.clone(), *severity)),
            _ => None,
        })
        .collect()
}

fn enter_valid_data(controller: &mut SurveyController<MemoryBlob, impl FnMut(UiEvent)>) {
    controller.field_changed(FieldUpdate::ResponseTimeMs(Some(250.0)));
    controller.field_changed(FieldUpdate::PageLoadTimeMs(Some(1200.0)));
    controller.field_changed(FieldUpdate::AcademicLevel("Graduate".to_string()));
    controller.field_changed(FieldUpdate::DeviceType("Laptop".to_string()));
    controller.rating_selected(RatingCategory::Usability, 4);
    controller.rating_selected(RatingCategory::Satisfaction, 5);
}

#[test]
fn consent_data_entry_submit_export_round_trip() {
    let blob = MemoryBlob::new();
    let (mut controller, events) = controller_with_events(blob);

    controller.consent_toggled(true);
    enter_valid_data(&mut controller);

    assert_eq!(controller.submit().unwrap(), 1);
    assert_eq!(controller.submission_count(), 1);

    let export = controller.export().unwrap();
    let lines: Vec<&str> = export.content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], COLUMNS.join(","));
    assert!(lines[1].contains(",250,1200,,4,5,Graduate,Laptop"));
    assert!(export.filename.starts_with("lms_research_data_"));
    assert!(export.filename.ends_with(".csv"));

    let statuses = statuses(&events);
    assert!(statuses.contains(&(
        "Data submitted successfully! Total submissions: 1".to_string(),
        Severity::Success,
    )));
    assert!(statuses.contains(&("Exported 1 records to CSV".to_string(), Severity::Success)));
}

#[test]
fn submission_resets_the_form_but_keeps_the_session() {
    let (mut controller, _events) = controller_with_events(MemoryBlob::new());

    controller.consent_toggled(true);
    let session_id = controller.working_record().session_id;
    enter_valid_data(&mut controller);
    controller.submit().unwrap();

    let working = controller.working_record();
    assert_eq!(working.session_id, session_id);
    assert!(working.consent_given);
    assert!(working.submitted_at.is_none());
    assert_eq!(working.performance.response_time_ms, None);
    assert_eq!(working.satisfaction.satisfaction_rating, 0);
    assert_eq!(working.demographic.device_type, "");
}

#[test]
fn submit_without_consent_leaves_the_store_untouched() {
    let (mut controller, events) = controller_with_events(MemoryBlob::new());

    controller.field_changed(FieldUpdate::ResponseTimeMs(Some(250.0)));
    let err = controller.submit().unwrap_err();

    match err {
        SubmitError::Validation(violations) => {
            assert!(violations.contains(&Violation::ConsentMissing));
        }
        other => panic!("expected validation failure, got {other:?}"),
    }
    assert_eq!(controller.submission_count(), 0);

    let statuses = statuses(&events);
    let (message, severity) = statuses.last().unwrap();
    assert!(message.starts_with("Errors: Consent not given"));
    assert_eq!(*severity, Severity::Error);
}

#[test]
fn stored_submission_equals_the_accepted_snapshot() {
    let blob = MemoryBlob::new();
    let (mut controller, _events) = controller_with_events(blob.clone());

    controller.consent_toggled(true);
    enter_valid_data(&mut controller);
    let before_submit = controller.working_record();
    controller.submit().unwrap();

    let stored = SubmissionStore::new(blob).load();
    assert_eq!(stored.len(), 1);
    assert!(stored[0].submitted_at.is_some());

    let mut expected = before_submit;
    expected.submitted_at = stored[0].submitted_at.clone();
    assert_eq!(stored[0], expected);
}

#[test]
fn export_on_an_empty_store_produces_no_artifact() {
    let (mut controller, events) = controller_with_events(MemoryBlob::new());

    assert_eq!(controller.export(), Err(ExportError::NothingToExport));
    assert!(statuses(&events).contains(&(
        "No data to export. Please submit some data first.".to_string(),
        Severity::Warning,
    )));
}

#[test]
fn startup_greets_a_returning_respondent() {
    let blob = MemoryBlob::new();
    {
        let (mut controller, _events) = controller_with_events(blob.clone());
        controller.consent_toggled(true);
        enter_valid_data(&mut controller);
        controller.submit().unwrap();
    }

    let (_controller, events) = controller_with_events(blob);
    let recorded = events.borrow();
    assert!(recorded.contains(&UiEvent::SubmissionCountChanged(1)));
    assert!(recorded.iter().any(|event| matches!(
        event,
        UiEvent::Status { message, severity: Severity::Success }
            if message == "Welcome back! You have 1 previous submissions."
    )));
}

#[test]
fn malformed_backing_blob_degrades_to_an_empty_store() {
    let blob = MemoryBlob::with_contents("{definitely not an array");
    let (mut controller, _events) = controller_with_events(blob);

    assert_eq!(controller.submission_count(), 0);

    controller.consent_toggled(true);
    enter_valid_data(&mut controller);
    assert_eq!(controller.submit().unwrap(), 1);
}

#[test]
fn every_mutation_refreshes_the_preview() {
    let (mut controller, events) = controller_with_events(MemoryBlob::new());

    controller.consent_toggled(true);
    controller.field_changed(FieldUpdate::ResponseTimeMs(Some(250.0)));

    let previews: Vec<String> = events
        .borrow()
        .iter()
        .filter_map(|event| match event {
            UiEvent::PreviewUpdated(json) => Some(json.clone()),
            _ => None,
        })
        .collect();

    // One at startup, one after consent, one after the field change.
    assert_eq!(previews.len(), 3);
    let last: serde_json::Value = serde_json::from_str(previews.last().unwrap()).unwrap();
    assert_eq!(last["performance"]["responseTimeMs"], 250.0);
}

#[test]
fn stats_summarize_the_stored_records() {
    let blob = MemoryBlob::new();
    let (mut controller, _events) = controller_with_events(blob.clone());

    controller.consent_toggled(true);
    enter_valid_data(&mut controller);
    controller.submit().unwrap();

    controller.field_changed(FieldUpdate::ResponseTimeMs(Some(350.0)));
    controller.field_changed(FieldUpdate::AcademicLevel("Undergraduate".to_string()));
    controller.rating_selected(RatingCategory::Usability, 2);
    controller.submit().unwrap();

    let stats = SurveyStats::compute(&SubmissionStore::new(blob).load()).unwrap();
    assert_eq!(stats.total_submissions, 2);
    assert_eq!(stats.avg_response_time_ms, 300.0);
    assert_eq!(stats.avg_usability_rating, 3.0);
    assert_eq!(stats.academic_levels.get("Graduate"), Some(&1));
    assert_eq!(stats.academic_levels.get("Undergraduate"), Some(&1));
}
