//! VocaDrill Error Types
//!
//! Centralized error handling for the drill engine and its collaborators.

use thiserror::Error;

/// Central error type for VocaDrill
#[derive(Error, Debug)]
pub enum DrillError {
    #[error("Speech model error: {0}")]
    Model(String),

    #[error("Microphone error: {0}")]
    Microphone(String),

    #[error("Transcription error: {0}")]
    Transcription(String),

    #[error("Speech synthesis error: {0}")]
    Synthesis(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Vocabulary error: {0}")]
    Vocabulary(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DrillError {
    /// Whether this error must abort the action that produced it.
    ///
    /// Model-load and microphone failures block a listening run and are
    /// surfaced to the user. Transcription and synthesis failures are
    /// per-attempt and the session keeps functioning.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            DrillError::Model(_)
                | DrillError::Microphone(_)
                | DrillError::Config(_)
                | DrillError::Vocabulary(_)
        )
    }
}

/// Result type alias for VocaDrill operations
pub type DrillResult<T> = Result<T, DrillError>;
