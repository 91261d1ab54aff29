//! Display collaborator
//!
//! The engine pushes card updates, flip commands, overlays and status
//! changes here. The console implementation is the view layer for the
//! terminal binary; tests substitute a recording implementation.

use crate::session::CardView;

/// Recognition status shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Ready,
    Listening,
    Transcribing,
    Heard(String),
}

/// Trait for card displays
pub trait CardDisplay: Send + Sync {
    /// Show a freshly updated card, front face up
    fn show_card(&self, card: &CardView);

    /// Flip the current card over (true) or back (false)
    fn set_flipped(&self, flipped: bool);

    /// Show or hide the success overlay
    fn show_success(&self, visible: bool);

    /// Update the recognition status line
    fn set_status(&self, status: &Status);

    /// Show or hide the model loading overlay
    fn set_model_loading(&self, visible: bool);
}

/// Terminal display
#[derive(Debug, Default)]
pub struct ConsoleDisplay {
    // Remembers the current card so a flip can reveal the back face
    current: std::sync::Mutex<Option<CardView>>,
}

impl ConsoleDisplay {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CardDisplay for ConsoleDisplay {
    fn show_card(&self, card: &CardView) {
        println!();
        println!(
            "🎴 [{}/{}] {} ({})",
            card.position, card.total, card.front, card.category
        );
        if let Ok(mut current) = self.current.lock() {
            *current = Some(card.clone());
        }
    }

    fn set_flipped(&self, flipped: bool) {
        if !flipped {
            return;
        }
        if let Ok(current) = self.current.lock() {
            if let Some(card) = current.as_ref() {
                println!("   ↪ {}", card.back);
            }
        }
    }

    fn show_success(&self, visible: bool) {
        if visible {
            println!("   🎉 Correct!");
        }
    }

    fn set_status(&self, status: &Status) {
        match status {
            Status::Ready => println!("   [mic off]"),
            Status::Listening => println!("   [listening...]"),
            Status::Transcribing => println!("   [transcribing...]"),
            Status::Heard(text) => println!("   [heard: '{}']", text),
        }
    }

    fn set_model_loading(&self, visible: bool) {
        if visible {
            println!("   [loading speech model, this can take a moment...]");
        }
    }
}
