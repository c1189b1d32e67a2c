//! Drives the survey core against a file-backed store, the way a UI layer
//! would: consent, a few field edits, submit, then export.
//!
//! Run with: cargo run --example file_backed

use lms_survey::{
    FieldUpdate, FileBlob, RatingCategory, SubmissionStore, SurveyController, UiEvent,
};

fn main() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let store = SubmissionStore::new(FileBlob::new(dir.path()));

    let mut controller = SurveyController::new(store, |event: UiEvent| match event {
        UiEvent::Status { message, severity } => println!("[{severity:?}] {message}"),
        UiEvent::SubmissionCountChanged(count) => println!("-- {count} submissions stored"),
        UiEvent::PreviewUpdated(_) => {}
    });

    controller.consent_toggled(true);
    controller.field_changed(FieldUpdate::ResponseTimeMs(Some(250.0)));
    controller.field_changed(FieldUpdate::PageLoadTimeMs(Some(1200.0)));
    controller.field_changed(FieldUpdate::AcademicLevel("Graduate".to_string()));
    controller.field_changed(FieldUpdate::DeviceType("Laptop".to_string()));
    controller.rating_selected(RatingCategory::Usability, 4);
    controller.rating_selected(RatingCategory::Satisfaction, 5);

    println!("\nPreview:\n{}\n", controller.preview());

    controller.submit()?;
    let export = controller.export()?;

    println!("\n{}:\n{}", export.filename, export.content);
    Ok(())
}
