/// A single field mutation raised by the UI layer.
///
/// The new value travels inside the event. Handlers never reach into
/// ambient UI state to find out what changed; the triggering value is
/// always an explicit parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    ResponseTimeMs(Option<f64>),
    PageLoadTimeMs(Option<f64>),
    ErrorRatePercent(Option<f64>),
    AcademicLevel(String),
    DeviceType(String),
}

/// Which of the two rating scales a rating button belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingCategory {
    Usability,
    Satisfaction,
}
