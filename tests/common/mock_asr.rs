//! Mock transcriber for engine tests
//!
//! Returns predetermined responses and records how many windows reached it.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use vocadrill::asr::Transcriber;
use vocadrill::error::{DrillError, DrillResult};

pub struct MockTranscriber {
    /// Queue of responses to return, oldest first
    responses: Mutex<VecDeque<DrillResult<String>>>,
    calls: AtomicUsize,
    ready: AtomicBool,
    fail_load: bool,
}

impl MockTranscriber {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            calls: AtomicUsize::new(0),
            ready: AtomicBool::new(false),
            fail_load: false,
        }
    }

    /// Mock whose model load always fails
    pub fn failing_load() -> Self {
        Self {
            fail_load: true,
            ..Self::new()
        }
    }

    /// Queue the next transcription result
    pub fn push(&self, result: DrillResult<String>) {
        self.responses
            .lock()
            .expect("responses lock")
            .push_back(result);
    }

    pub fn push_text(&self, text: &str) {
        self.push(Ok(text.to_string()));
    }

    /// Number of windows that were actually transcribed
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockTranscriber {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transcriber for MockTranscriber {
    async fn ensure_ready(&self) -> DrillResult<()> {
        if self.fail_load {
            return Err(DrillError::Model("mock load failure".to_string()));
        }
        self.ready.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn transcribe(&self, _samples: &[i16]) -> DrillResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses
            .lock()
            .expect("responses lock")
            .pop_front()
            .unwrap_or(Ok(String::new()))
    }

    fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }
}
