//! Looper configuration.

use crate::clock::TimeSignature;
use crate::engine::{DEFAULT_QUANTIZE_BEATS, MAX_UNDO_LEVELS};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Configuration for a complete looper instance.
///
/// Hosts load and persist this however they like; the looper only reads it
/// once at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    pub sample_rate: f32,
    /// Sample store capacity in samples (mono).
    pub capacity: usize,
    /// Undo snapshot count, clamped to [`MAX_UNDO_LEVELS`] at construction.
    pub undo_levels: usize,
    pub bpm: f32,
    pub time_signature: TimeSignature,
    pub quantize: bool,
    pub quantize_beats: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sample_rate: 48_000.0,
            capacity: 48_000 * 60, // one minute of mono audio
            undo_levels: MAX_UNDO_LEVELS,
            bpm: 120.0,
            time_signature: TimeSignature::default(),
            quantize: false,
            quantize_beats: DEFAULT_QUANTIZE_BEATS,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        if self.sample_rate < 8_000.0 || self.sample_rate > 384_000.0 {
            return Err(Error::InvalidSampleRate(self.sample_rate));
        }
        if self.bpm <= 0.0 {
            return Err(Error::InvalidTempo(self.bpm));
        }
        if self.time_signature.numerator == 0 || self.time_signature.denominator == 0 {
            return Err(Error::InvalidTimeSignature {
                numerator: self.time_signature.numerator,
                denominator: self.time_signature.denominator,
            });
        }
        if self.capacity == 0 {
            return Err(Error::CapacityTooSmall {
                min: 1,
                got: self.capacity,
            });
        }
        if self.undo_levels > MAX_UNDO_LEVELS {
            return Err(Error::TooManyUndoLevels {
                got: self.undo_levels,
                max: MAX_UNDO_LEVELS,
            });
        }
        if self.quantize_beats == 0 {
            return Err(Error::InvalidConfig(
                "quantize_beats must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
