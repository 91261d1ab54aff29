//! Vosk transcription backend
//!
//! One recognizer is created per recording window so every window is an
//! independent recognition attempt. The model itself is loaded once and
//! shared across windows.

use crate::config::Config;
use crate::error::{DrillError, DrillResult};
use anyhow::Context;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};
use vosk::{Model, Recognizer};

const SAMPLE_RATE: f32 = 16000.0;

/// Vosk-based transcriber with lazy model loading
pub struct VoskTranscriber {
    model_path: PathBuf,
    language: String,
    /// Loaded model. The mutex serializes loads, guaranteeing a single
    /// in-flight load; callers that arrive during a load wait on the lock
    /// and find the model already set.
    model: Mutex<Option<Arc<Model>>>,
    ready: AtomicBool,
    loading: AtomicBool,
}

impl VoskTranscriber {
    pub fn new(config: &Config) -> Self {
        Self {
            model_path: PathBuf::from(&config.model_path),
            language: config.language.clone(),
            model: Mutex::new(None),
            ready: AtomicBool::new(false),
            loading: AtomicBool::new(false),
        }
    }
}

#[async_trait::async_trait]
impl super::Transcriber for VoskTranscriber {
    async fn ensure_ready(&self) -> DrillResult<()> {
        let mut slot = self.model.lock().await;
        if slot.is_some() {
            return Ok(());
        }

        if !self.model_path.exists() {
            return Err(DrillError::Model(format!(
                "Speech model not found at {}",
                self.model_path.display()
            )));
        }

        info!(
            "Loading {} speech model from: {}",
            self.language,
            self.model_path.display()
        );
        self.loading.store(true, Ordering::SeqCst);

        let path = self.model_path.to_string_lossy().to_string();
        let loaded = tokio::task::spawn_blocking(move || Model::new(&path)).await;

        self.loading.store(false, Ordering::SeqCst);

        match loaded {
            Ok(Some(model)) => {
                *slot = Some(Arc::new(model));
                self.ready.store(true, Ordering::SeqCst);
                info!("✅ Speech model loaded");
                Ok(())
            }
            Ok(None) => Err(DrillError::Model(format!(
                "Failed to load speech model from {}",
                self.model_path.display()
            ))),
            Err(e) => Err(DrillError::Model(format!("Model load task failed: {}", e))),
        }
    }

    async fn transcribe(&self, samples: &[i16]) -> DrillResult<String> {
        let model = self
            .model
            .lock()
            .await
            .clone()
            .ok_or_else(|| DrillError::Model("Speech model not loaded".to_string()))?;

        let samples = samples.to_vec();
        let text = tokio::task::spawn_blocking(move || -> anyhow::Result<String> {
            let mut recognizer = Recognizer::new(&model, SAMPLE_RATE)
                .context("Failed to create Vosk recognizer")?;

            recognizer.accept_waveform(&samples);
            let result = recognizer.final_result();

            Ok(result
                .single()
                .map(|r| r.text.trim().to_string())
                .unwrap_or_default())
        })
        .await
        .map_err(|e| DrillError::Transcription(format!("Transcription task failed: {}", e)))?
        .map_err(|e| DrillError::Transcription(e.to_string()))?;

        debug!("Window transcribed as: '{}'", text);
        Ok(text)
    }

    fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }

    fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }
}
