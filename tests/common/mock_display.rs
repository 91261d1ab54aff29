//! Recording display collaborator for event-ordering assertions

use std::sync::Mutex;
use vocadrill::display::{CardDisplay, Status};
use vocadrill::session::CardView;

#[derive(Debug, Clone, PartialEq)]
pub enum DisplayEvent {
    Card(CardView),
    Flipped(bool),
    Success(bool),
    Status(Status),
    ModelLoading(bool),
}

#[derive(Debug, Default)]
pub struct RecordingDisplay {
    events: Mutex<Vec<DisplayEvent>>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DisplayEvent> {
        self.events.lock().expect("events lock").clone()
    }

    /// Index of the first occurrence of an event, if any
    pub fn position_of(&self, event: &DisplayEvent) -> Option<usize> {
        self.events().iter().position(|e| e == event)
    }

    fn record(&self, event: DisplayEvent) {
        self.events.lock().expect("events lock").push(event);
    }
}

impl CardDisplay for RecordingDisplay {
    fn show_card(&self, card: &CardView) {
        self.record(DisplayEvent::Card(card.clone()));
    }

    fn set_flipped(&self, flipped: bool) {
        self.record(DisplayEvent::Flipped(flipped));
    }

    fn show_success(&self, visible: bool) {
        self.record(DisplayEvent::Success(visible));
    }

    fn set_status(&self, status: &Status) {
        self.record(DisplayEvent::Status(status.clone()));
    }

    fn set_model_loading(&self, visible: bool) {
        self.record(DisplayEvent::ModelLoading(visible));
    }
}
