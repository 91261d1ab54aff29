//! Recognition Orchestrator
//!
//! The state machine tying capture, transcription, matching and the session
//! together. All transitions happen on one task: a finished recording window
//! is either discarded (stopped, or a card transition is in progress),
//! or transcribed and checked against the current expected answer. A match
//! runs the ordered success sequence to completion before the next window
//! can be looked at.

use crate::asr::Transcriber;
use crate::audio::RecordingWindow;
use crate::config::Config;
use crate::display::{CardDisplay, Status};
use crate::error::DrillResult;
use crate::matcher;
use crate::session::{Direction, Session};
use crate::tts::SpeechSynth;
use crate::vocab::WordPair;
use std::sync::Arc;
use tokio::time::{sleep, Duration, Instant};
use tracing::{debug, info, warn};

/// How long the success overlay stays up
const SUCCESS_FEEDBACK: Duration = Duration::from_millis(800);
/// Visual duration of a card flip
const FLIP_ANIMATION: Duration = Duration::from_millis(400);
/// Guard after every card content update
const CARD_UPDATE_GUARD: Duration = Duration::from_millis(300);
/// Guard after flipping forward, long enough to cover the spoken answer
const FLIP_REVEAL_GUARD: Duration = Duration::from_millis(1500);
/// Guard after flipping back
const FLIP_BACK_GUARD: Duration = Duration::from_millis(600);

/// Orchestrator states. `Listening` and `Transcribing` interleave per
/// capture window; `Matched` covers the ordered success sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecognitionState {
    Idle,
    Listening,
    Transcribing,
    Matched,
}

/// Drives one practice session against the microphone
pub struct DrillEngine {
    session: Session,
    transcriber: Arc<dyn Transcriber>,
    synth: Arc<dyn SpeechSynth>,
    display: Arc<dyn CardDisplay>,
    speech_language: String,
    speech_rate: f32,
    state: RecognitionState,
    listening: bool,
    /// Suppression guard: windows finalized before this deadline are
    /// discarded without transcribing. Set before every UI transition whose
    /// visual duration could overlap a pending window, never cleared early.
    suppress_until: Option<Instant>,
}

impl DrillEngine {
    pub fn new(
        session: Session,
        transcriber: Arc<dyn Transcriber>,
        synth: Arc<dyn SpeechSynth>,
        display: Arc<dyn CardDisplay>,
        config: &Config,
    ) -> Self {
        let mut engine = Self {
            session,
            transcriber,
            synth,
            display,
            speech_language: config.speech_language.clone(),
            speech_rate: config.speech_rate,
            state: RecognitionState::Idle,
            listening: false,
            suppress_until: None,
        };
        engine.update_card();
        engine
    }

    pub fn state(&self) -> RecognitionState {
        self.state
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Begin a listening run, loading the speech model on first use.
    ///
    /// A model load failure aborts the run and is surfaced to the caller;
    /// the model stays unset so a later attempt can retry.
    pub async fn start_listening(&mut self) -> DrillResult<()> {
        if self.listening {
            return Ok(());
        }

        if !self.transcriber.is_ready() {
            self.display.set_model_loading(true);
            let loaded = self.transcriber.ensure_ready().await;
            self.display.set_model_loading(false);
            loaded?;
        }

        self.listening = true;
        self.state = RecognitionState::Listening;
        self.display.set_status(&Status::Listening);
        info!("🎙️ Listening for '{}'", self.session.expected_answer());
        Ok(())
    }

    /// Stop listening and return to Idle. Idempotent: a window already
    /// dispatched for transcription is discarded when it completes.
    pub fn stop_listening(&mut self) {
        self.listening = false;
        self.state = RecognitionState::Idle;
        self.suppress_until = None;
        self.display.set_status(&Status::Ready);
    }

    /// Process one finalized recording window.
    ///
    /// Recoverable failures (a bad transcription attempt) are logged and
    /// swallowed; the loop continues with the next window.
    pub async fn handle_window(&mut self, window: RecordingWindow) {
        if !self.listening {
            debug!("Discarding window received after stop");
            return;
        }

        if self.suppressed() {
            debug!("🔇 Discarding window captured during a card transition");
            return;
        }

        self.state = RecognitionState::Transcribing;
        self.display.set_status(&Status::Transcribing);

        let text = match self.transcriber.transcribe(&window.samples).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Transcription failed for this window: {}", e);
                self.resume_listening();
                return;
            }
        };

        if text.is_empty() {
            self.resume_listening();
            return;
        }

        info!("📝 Heard: '{}'", text);
        self.display.set_status(&Status::Heard(text.clone()));

        if matcher::matches(&text, self.session.expected_answer()) {
            info!("✅ Matched '{}'", self.session.expected_answer());
            self.handle_match().await;
        } else {
            debug!("No match, expected '{}'", self.session.expected_answer());
        }

        self.resume_listening();
    }

    /// Flip the card by hand. Flipping forward reveals and speaks the
    /// answer, so recognition is suppressed long enough to not match the
    /// synthesized voice.
    pub async fn flip_card(&mut self) {
        let flipped = self.session.toggle_flip();
        self.display.set_flipped(flipped);

        if flipped {
            self.suppress_for(FLIP_REVEAL_GUARD);
            self.speak_target().await;
        } else {
            self.suppress_for(FLIP_BACK_GUARD);
        }
    }

    /// Move to the adjacent card. A flipped card is turned back first and
    /// the flip animation completes before the position changes.
    pub async fn navigate(&mut self, direction: Direction) {
        if self.session.flipped() {
            self.display.set_flipped(false);
            self.suppress_for(FLIP_ANIMATION + CARD_UPDATE_GUARD);
            sleep(FLIP_ANIMATION).await;
        }

        self.session.advance(direction);
        self.update_card();
    }

    /// Replace the session wholesale with a fresh shuffled draw
    pub fn new_session(&mut self, vocabulary: &[WordPair], size: usize) {
        self.session = Session::start(vocabulary, size);
        self.update_card();
    }

    /// Ordered success sequence: feedback, spoken answer, flip to reveal,
    /// then advance. Non-overlapping: runs to completion before the next
    /// window is processed, with the guard covering the whole duration.
    async fn handle_match(&mut self) {
        self.state = RecognitionState::Matched;
        self.suppress_for(SUCCESS_FEEDBACK + FLIP_ANIMATION + CARD_UPDATE_GUARD);

        self.display.show_success(true);
        self.speak_target().await;
        sleep(SUCCESS_FEEDBACK).await;
        self.display.show_success(false);

        if !self.session.flipped() {
            self.session.toggle_flip();
            self.display.set_flipped(true);
        }
        sleep(FLIP_ANIMATION).await;

        self.session.advance(Direction::Next);
        self.update_card();
    }

    /// Speak the expected answer. Best-effort: failures are logged only.
    async fn speak_target(&self) {
        let word = self.session.expected_answer();
        if let Err(e) = self
            .synth
            .speak(word, &self.speech_language, self.speech_rate)
            .await
        {
            warn!("🔈 Speech synthesis failed: {}", e);
        }
    }

    fn update_card(&mut self) {
        self.display.show_card(&self.session.card());
        self.suppress_for(CARD_UPDATE_GUARD);
    }

    fn resume_listening(&mut self) {
        if self.listening {
            self.state = RecognitionState::Listening;
            self.display.set_status(&Status::Listening);
        }
    }

    /// Extend the suppression deadline; never shortens an existing one
    fn suppress_for(&mut self, duration: Duration) {
        let deadline = Instant::now() + duration;
        self.suppress_until = Some(match self.suppress_until {
            Some(current) if current > deadline => current,
            _ => deadline,
        });
    }

    fn suppressed(&self) -> bool {
        self.suppress_until
            .map_or(false, |deadline| Instant::now() < deadline)
    }
}
