use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Session
    pub session_size: usize,
    pub vocabulary_path: String,

    // Speech recognition
    pub model_path: String,
    pub language: String,
    pub window_secs: f32,
    pub audio_device: Option<usize>,

    // Speech synthesis
    pub speech_language: String,
    pub speech_rate: f32,

    // Meta
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            session_size: 10,
            vocabulary_path: String::new(),
            model_path: dirs::data_dir()
                .unwrap_or_default()
                .join("vocadrill/models/vosk-model-small-fr")
                .to_string_lossy()
                .to_string(),
            language: "fr".to_string(),
            window_secs: 3.0,
            audio_device: None,
            speech_language: "fr-FR".to_string(),
            speech_rate: 0.9,
            log_level: "INFO".to_string(),
        }
    }
}

impl Config {
    /// Load config from file or create default
    pub fn load() -> Result<Self> {
        let config_path = config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            match serde_json::from_str(&content) {
                Ok(config) => Ok(config),
                Err(e) => {
                    // Graceful degradation: log warning and use defaults
                    tracing::warn!("⚠️ Config file corrupted or invalid, using defaults: {}", e);
                    // Backup corrupt file for debugging
                    let backup_path = config_path.with_extension("json.corrupt");
                    let _ = std::fs::rename(&config_path, &backup_path);
                    Ok(Self::default())
                }
            }
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let config_path = config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    /// Number of samples in one recording window at the capture rate.
    pub fn window_samples(&self) -> usize {
        (crate::audio::SAMPLE_RATE as f32 * self.window_secs) as usize
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("vocadrill")
        .join("config.json")
}
