//! TTS (Text-to-Speech) Module
//!
//! Speech synthesis is best-effort feedback: failures are logged by the
//! caller and never interrupt a session.

use crate::error::DrillResult;
use async_trait::async_trait;

pub mod system;

pub use system::SystemSynth;

/// Trait for speech synthesis engines
#[async_trait]
pub trait SpeechSynth: Send + Sync + std::fmt::Debug {
    /// Speak the given text in the given language at the given rate
    /// (1.0 is normal speed).
    async fn speak(&self, text: &str, language: &str, rate: f32) -> DrillResult<()>;

    /// Get the engine name
    fn name(&self) -> &str;
}
