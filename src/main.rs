//! VocaDrill - Voice-verified vocabulary flashcards
//!
//! Shows word pairs as flip cards and checks spoken pronunciation against
//! the expected answer using on-device speech recognition.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;
use vocadrill::asr::VoskTranscriber;
use vocadrill::audio::{self, CaptureLoop};
use vocadrill::config::Config;
use vocadrill::display::ConsoleDisplay;
use vocadrill::engine::DrillEngine;
use vocadrill::session::{Direction, Session};
use vocadrill::tts::SystemSynth;
use vocadrill::vocab;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Audio input device index
    #[arg(short, long)]
    device: Option<usize>,

    /// Path to the speech recognition model directory
    #[arg(short, long)]
    model: Option<PathBuf>,

    /// Path to a custom vocabulary JSON file
    #[arg(long)]
    vocabulary: Option<PathBuf>,

    /// Number of cards per session
    #[arg(short, long)]
    size: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("🎴 VocaDrill v{} starting...", env!("CARGO_PKG_VERSION"));

    let mut config = Config::load()?;
    if let Some(model) = args.model {
        config.model_path = model.to_string_lossy().to_string();
    }
    if let Some(device) = args.device {
        config.audio_device = Some(device);
    }
    if let Some(size) = args.size {
        config.session_size = size;
    }

    let vocabulary = match &args.vocabulary {
        Some(path) => vocab::load_from_file(path)?,
        None if !config.vocabulary_path.is_empty() => {
            vocab::load_from_file(&PathBuf::from(&config.vocabulary_path))?
        }
        None => vocab::builtin(),
    };
    info!("📚 Vocabulary loaded: {} word pairs", vocabulary.len());

    let transcriber = Arc::new(VoskTranscriber::new(&config));
    let synth = Arc::new(SystemSynth::new());
    let display = Arc::new(ConsoleDisplay::new());

    let session = Session::start(&vocabulary, config.session_size);
    let mut engine = DrillEngine::new(session, transcriber, synth, display, &config);

    // The capture loop writes finished windows into this channel; its
    // lifetime is bound to the listening state below.
    let (window_tx, mut window_rx) = tokio::sync::mpsc::unbounded_channel();
    let mut capture: Option<CaptureLoop> = None;

    println!();
    println!("Commands: [Enter] flip, n(ext), p(revious), l(isten), s(huffle new session), q(uit)");

    let mut stdin = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = stdin.next_line() => {
                let line = match line {
                    Ok(Some(line)) => line,
                    Ok(None) => break,
                    Err(e) => {
                        error!("Failed to read input: {}", e);
                        break;
                    }
                };

                match line.trim().to_lowercase().as_str() {
                    "" | "f" | "flip" => engine.flip_card().await,
                    "n" | "next" => engine.navigate(Direction::Next).await,
                    "p" | "prev" | "previous" => engine.navigate(Direction::Previous).await,
                    "s" | "new" | "shuffle" => engine.new_session(&vocabulary, config.session_size),
                    "l" | "listen" | "mic" => {
                        if engine.is_listening() {
                            engine.stop_listening();
                            if let Some(capture) = capture.take() {
                                capture.stop();
                            }
                        } else {
                            toggle_listening_on(&mut engine, &config, &window_tx, &mut capture).await;
                        }
                    }
                    "q" | "quit" | "exit" => break,
                    other => println!("Unknown command: '{}'", other),
                }
            }
            Some(window) = window_rx.recv() => {
                engine.handle_window(window).await;
            }
        }
    }

    engine.stop_listening();
    if let Some(capture) = capture.take() {
        capture.stop();
    }
    info!("👋 Goodbye");
    Ok(())
}

/// Start a listening run: model first, microphone second. Either failure is
/// fatal to the run, reported, and leaves the engine back in Idle.
async fn toggle_listening_on(
    engine: &mut DrillEngine,
    config: &Config,
    window_tx: &tokio::sync::mpsc::UnboundedSender<audio::RecordingWindow>,
    capture: &mut Option<CaptureLoop>,
) {
    if let Err(e) = engine.start_listening().await {
        error!("❌ Could not start listening: {}", e);
        return;
    }

    match audio::start_capture(config.audio_device, config.window_samples(), window_tx.clone()) {
        Ok(loop_handle) => {
            *capture = Some(loop_handle);
        }
        Err(e) => {
            error!("❌ Could not access microphone: {}. Grant permission and try again.", e);
            engine.stop_listening();
        }
    }
}
