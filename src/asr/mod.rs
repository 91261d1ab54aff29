//! ASR (Automatic Speech Recognition) Module
//!
//! Wraps the speech-to-text capability behind a stable call contract.
//! The underlying model is loaded lazily, once, and never unloaded.

pub mod vosk;

use crate::error::DrillResult;
use async_trait::async_trait;

// Re-export main types
pub use vosk::VoskTranscriber;

/// Trait for transcription backends
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Load the underlying model if it is not loaded yet.
    ///
    /// Returns immediately when the model is ready. Concurrent callers never
    /// trigger a second load; they wait for the in-flight one. A failed load
    /// leaves the model unset so a later call can retry.
    async fn ensure_ready(&self) -> DrillResult<()>;

    /// Convert one finished recording window (mono 16 kHz PCM) into text.
    ///
    /// Returns trimmed text, possibly empty when nothing was recognized.
    /// Errors are per-window and do not poison the backend.
    async fn transcribe(&self, samples: &[i16]) -> DrillResult<String>;

    /// True once a model load has completed
    fn is_ready(&self) -> bool;

    /// True while a model load is in flight
    fn is_loading(&self) -> bool {
        false
    }
}
