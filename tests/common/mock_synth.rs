//! Mock speech synthesis engine recording every spoken phrase

use async_trait::async_trait;
use std::sync::Mutex;
use vocadrill::error::{DrillError, DrillResult};
use vocadrill::tts::SpeechSynth;

#[derive(Debug)]
pub struct MockSynth {
    spoken: Mutex<Vec<(String, String)>>,
    fail: bool,
}

impl MockSynth {
    pub fn new() -> Self {
        Self {
            spoken: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    /// Mock whose speak calls always fail, for non-fatality tests
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    /// All (text, language) pairs spoken so far
    pub fn spoken(&self) -> Vec<(String, String)> {
        self.spoken.lock().expect("spoken lock").clone()
    }
}

impl Default for MockSynth {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpeechSynth for MockSynth {
    async fn speak(&self, text: &str, language: &str, _rate: f32) -> DrillResult<()> {
        self.spoken
            .lock()
            .expect("spoken lock")
            .push((text.to_string(), language.to_string()));

        if self.fail {
            return Err(DrillError::Synthesis("mock synthesis failure".to_string()));
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "mock"
    }
}
