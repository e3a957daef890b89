//! Error types for ostinato-core.
//!
//! Errors only surface from construction and validation. Runtime setters on
//! the real-time path silently retain prior state instead (their callers
//! cannot reliably observe a return code), and the per-sample path never
//! returns `Result`.

use thiserror::Error;

/// Error type for ostinato-core operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid tempo: {0}. Must be > 0 BPM")]
    InvalidTempo(f32),

    #[error("Invalid sample rate: {0} Hz")]
    InvalidSampleRate(f32),

    #[error("Invalid time signature: {numerator}/{denominator}")]
    InvalidTimeSignature { numerator: u32, denominator: u32 },

    #[error("Sample store capacity must be at least {min} samples, got {got}")]
    CapacityTooSmall { min: usize, got: usize },

    #[error("Undo levels {got} exceed the fixed maximum {max}")]
    TooManyUndoLevels { got: usize, max: usize },
}

/// Result type alias.
pub type Result<T> = core::result::Result<T, Error>;
