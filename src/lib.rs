//! VocaDrill Library
//!
//! Core modules for the VocaDrill pronunciation practice tool.

pub mod asr;
pub mod audio;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod matcher;
pub mod session;
pub mod tts;
pub mod vocab;
