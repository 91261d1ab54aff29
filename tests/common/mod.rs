pub mod mock_asr;
pub mod mock_display;
pub mod mock_synth;

use std::sync::Arc;
use vocadrill::audio::RecordingWindow;
use vocadrill::config::Config;
use vocadrill::engine::DrillEngine;
use vocadrill::session::Session;
use vocadrill::vocab::{self, WordPair};

use self::mock_asr::MockTranscriber;
use self::mock_display::RecordingDisplay;
use self::mock_synth::MockSynth;

/// One recording window of silence (3 s at 16 kHz)
pub fn silent_window() -> RecordingWindow {
    RecordingWindow {
        samples: vec![0i16; 48000],
    }
}

pub fn word_pair(source: &str, target: &str) -> WordPair {
    WordPair {
        source: source.to_string(),
        target: target.to_string(),
        category: "test".to_string(),
    }
}

/// Engine wired to mocks, practicing the built-in vocabulary
pub fn build_engine(
    transcriber: Arc<MockTranscriber>,
) -> (DrillEngine, Arc<MockSynth>, Arc<RecordingDisplay>) {
    let session = Session::start(&vocab::builtin(), 10);
    build_engine_with_session(transcriber, session)
}

pub fn build_engine_with_session(
    transcriber: Arc<MockTranscriber>,
    session: Session,
) -> (DrillEngine, Arc<MockSynth>, Arc<RecordingDisplay>) {
    let synth = Arc::new(MockSynth::new());
    let display = Arc::new(RecordingDisplay::new());
    let engine = DrillEngine::new(
        session,
        transcriber,
        synth.clone(),
        display.clone(),
        &Config::default(),
    );
    (engine, synth, display)
}
