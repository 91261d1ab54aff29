//! Audio capture module using cpal
//!
//! A dedicated thread owns the cpal input stream (cpal streams are not Send)
//! and slices the incoming samples into fixed-length recording windows.
//! Windows are strictly sequential: the next one starts only after the
//! previous one has been emitted, and none is emitted after `stop()`.

use crate::error::{DrillError, DrillResult};
use anyhow::{Context, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info, warn};

pub const SAMPLE_RATE: u32 = 16000;
const CHUNK_SIZE: usize = 1024;

/// One fixed-duration capture interval, consumed as a single transcription unit
#[derive(Debug, Clone)]
pub struct RecordingWindow {
    pub samples: Vec<i16>,
}

/// Handle to a running capture loop
pub struct CaptureLoop {
    active: Arc<AtomicBool>,
}

impl CaptureLoop {
    /// End the current window and release the microphone. Idempotent.
    pub fn stop(&self) {
        if self.active.swap(false, Ordering::SeqCst) {
            info!("🛑 Audio capture stopped");
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }
}

impl Drop for CaptureLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Open the microphone and start emitting fixed-length recording windows.
///
/// Fails fatally when no input device is available or the stream cannot be
/// opened; the error is reported synchronously from the capture thread.
pub fn start_capture(
    device_index: Option<usize>,
    window_samples: usize,
    tx: UnboundedSender<RecordingWindow>,
) -> DrillResult<CaptureLoop> {
    let active = Arc::new(AtomicBool::new(true));
    let thread_active = active.clone();

    let (startup_tx, startup_rx) = mpsc::channel::<Result<(), String>>();

    thread::spawn(move || {
        let (stream, chunk_rx) = match open_stream(device_index) {
            Ok(pair) => pair,
            Err(e) => {
                let _ = startup_tx.send(Err(e.to_string()));
                return;
            }
        };
        let _ = startup_tx.send(Ok(()));

        collect_windows(&thread_active, window_samples, &chunk_rx, &tx);

        // Dropping the stream releases the device
        drop(stream);
        debug!("Capture thread exited");
    });

    match startup_rx.recv_timeout(Duration::from_secs(5)) {
        Ok(Ok(())) => Ok(CaptureLoop { active }),
        Ok(Err(e)) => Err(DrillError::Microphone(e)),
        Err(_) => Err(DrillError::Microphone(
            "Timed out waiting for the microphone to open".to_string(),
        )),
    }
}

/// Select the input device and build a mono 16 kHz stream
fn open_stream(
    device_index: Option<usize>,
) -> Result<(cpal::Stream, mpsc::Receiver<Vec<i16>>)> {
    let host = cpal::default_host();

    // List available devices
    info!("Available audio input devices:");
    for (i, device) in host.input_devices()?.enumerate() {
        let name = device.name().unwrap_or_else(|_| "Unknown".to_string());
        let marker = if device_index == Some(i) { "*" } else { " " };
        info!("  {} [{}] {}", marker, i, name);
    }

    // Select device
    let device = if let Some(idx) = device_index {
        host.input_devices()?
            .nth(idx)
            .context("Device index out of range")?
    } else {
        host.default_input_device()
            .context("No default input device")?
    };

    let device_name = device.name().unwrap_or_else(|_| "Unknown".to_string());
    info!("Using audio device: {}", device_name);

    // Configure stream
    let config = cpal::StreamConfig {
        channels: 1,
        sample_rate: cpal::SampleRate(SAMPLE_RATE),
        buffer_size: cpal::BufferSize::Fixed(CHUNK_SIZE as u32),
    };

    let (chunk_tx, chunk_rx) = mpsc::channel::<Vec<i16>>();

    let stream = device.build_input_stream(
        &config,
        move |data: &[i16], _: &cpal::InputCallbackInfo| {
            if chunk_tx.send(data.to_vec()).is_err() {
                warn!("Audio receiver dropped");
            }
        },
        |err| {
            warn!("Audio stream error: {}", err);
        },
        None,
    )?;

    stream.play()?;

    Ok((stream, chunk_rx))
}

/// Accumulate chunks into windows until deactivated.
///
/// The active flag is checked before each window is emitted, so a window
/// finalized after `stop()` is silently dropped and no new one is chained.
fn collect_windows(
    active: &AtomicBool,
    window_samples: usize,
    chunk_rx: &mpsc::Receiver<Vec<i16>>,
    tx: &UnboundedSender<RecordingWindow>,
) {
    let mut buffer: Vec<i16> = Vec::with_capacity(window_samples);

    while active.load(Ordering::SeqCst) {
        match chunk_rx.recv_timeout(Duration::from_millis(200)) {
            Ok(chunk) => {
                buffer.extend_from_slice(&chunk);

                while let Some(samples) = take_window(&mut buffer, window_samples) {
                    if !active.load(Ordering::SeqCst) {
                        return;
                    }
                    if tx.send(RecordingWindow { samples }).is_err() {
                        debug!("Window receiver dropped");
                        return;
                    }
                }
            }
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => return,
        }
    }
}

/// Split one full window off the front of the buffer, if available
fn take_window(buffer: &mut Vec<i16>, window_samples: usize) -> Option<Vec<i16>> {
    if buffer.len() < window_samples {
        return None;
    }
    let remainder = buffer.split_off(window_samples);
    Some(std::mem::replace(buffer, remainder))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_window() {
        let mut buffer: Vec<i16> = (0..10).collect();

        let window = take_window(&mut buffer, 4).expect("window available");
        assert_eq!(window, vec![0, 1, 2, 3]);
        assert_eq!(buffer, vec![4, 5, 6, 7, 8, 9]);

        let window = take_window(&mut buffer, 4).expect("window available");
        assert_eq!(window, vec![4, 5, 6, 7]);

        // Not enough samples for a third window
        assert!(take_window(&mut buffer, 4).is_none());
        assert_eq!(buffer, vec![8, 9]);
    }

    #[test]
    fn test_no_window_after_stop() {
        let active = AtomicBool::new(true);
        let (chunk_tx, chunk_rx) = mpsc::channel::<Vec<i16>>();
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();

        chunk_tx.send(vec![0i16; 8]).unwrap();
        active.store(false, Ordering::SeqCst);

        collect_windows(&active, 4, &chunk_rx, &tx);
        assert!(rx.try_recv().is_err());
    }
}
