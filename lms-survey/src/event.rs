/// Severity of a status banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Error,
}

/// Outbound event from the survey core to the UI layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The working record changed; carries its pretty-printed JSON
    /// snapshot for a live preview pane.
    PreviewUpdated(String),

    /// A user-facing status banner.
    Status { message: String, severity: Severity },

    /// The submission store grew (or was found non-empty at startup).
    SubmissionCountChanged(usize),
}

/// Receiver for outbound UI events.
///
/// Any `FnMut(UiEvent)` closure is a sink, so tests can collect events
/// into a vector and applications can forward them to their UI toolkit.
pub trait EventSink {
    fn emit(&mut self, event: UiEvent);
}

impl<F: FnMut(UiEvent)> EventSink for F {
    fn emit(&mut self, event: UiEvent) {
        self(event);
    }
}
