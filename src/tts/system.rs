//! System speech synthesis engine

use super::SpeechSynth;
use crate::error::{DrillError, DrillResult};
use async_trait::async_trait;
use std::process::Command;
use tracing::debug;

/// Baseline words-per-minute used to scale the espeak-ng rate
const ESPEAK_BASE_WPM: f32 = 175.0;

#[derive(Debug, Default)]
pub struct SystemSynth;

impl SystemSynth {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SpeechSynth for SystemSynth {
    async fn speak(&self, text: &str, language: &str, rate: f32) -> DrillResult<()> {
        debug!("System speaking ({}): {}", language, text);

        // Voice selection by language tag is best-effort: both tools accept
        // the primary subtag ("fr" from "fr-FR")
        let lang = language.split('-').next().unwrap_or(language);

        // spd-say rate runs -100..100 around normal speed
        let spd_rate = ((rate - 1.0) * 100.0).clamp(-100.0, 100.0) as i32;
        if Command::new("spd-say")
            .arg("-l")
            .arg(lang)
            .arg("-r")
            .arg(spd_rate.to_string())
            .arg(text)
            .spawn()
            .is_ok()
        {
            return Ok(());
        }

        let wpm = (ESPEAK_BASE_WPM * rate) as u32;
        if Command::new("espeak-ng")
            .arg("-v")
            .arg(lang)
            .arg("-s")
            .arg(wpm.to_string())
            .arg(text)
            .spawn()
            .is_ok()
        {
            return Ok(());
        }

        Err(DrillError::Synthesis(
            "No system TTS command found (tried spd-say, espeak-ng)".to_string(),
        ))
    }

    fn name(&self) -> &str {
        "system"
    }
}
