//! Sample-accurate tempo clock and beat arithmetic.
//!
//! [`TempoClock::tick`] is called once per sample alongside the engine's
//! `process`; everything else is control-rate configuration or pure rounding
//! helpers used for loop quantization.

use serde::{Deserialize, Serialize};

/// Samples after a beat boundary during which [`TempoClock::should_trigger_on_beat`]
/// still reports true (~0.2 ms at 48 kHz). A loose window, not an exact-sample
/// event, so imperfectly timed control polling can still catch the beat.
pub const BEAT_TRIGGER_WINDOW: usize = 10;

/// Musical time signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSignature {
    pub numerator: u32,
    pub denominator: u32,
}

impl Default for TimeSignature {
    fn default() -> Self {
        Self {
            numerator: 4,
            denominator: 4,
        }
    }
}

/// Tracks sample/beat/bar position against a configured tempo.
///
/// Setters silently ignore non-positive inputs and keep the prior
/// configuration; they may be driven from contexts that cannot observe a
/// return code.
#[derive(Debug, Clone)]
pub struct TempoClock {
    bpm: f32,
    time_signature: TimeSignature,
    sample_rate: f32,
    samples_per_beat: usize,
    samples_per_bar: usize,
    sample_counter: usize,
    beat_counter: u32,
}

impl TempoClock {
    pub fn new(sample_rate: f32) -> Self {
        let mut clock = Self {
            bpm: 120.0,
            time_signature: TimeSignature::default(),
            sample_rate: if sample_rate > 0.0 { sample_rate } else { 48_000.0 },
            samples_per_beat: 0,
            samples_per_bar: 0,
            sample_counter: 0,
            beat_counter: 0,
        };
        clock.recalculate();
        clock
    }

    pub fn set_bpm(&mut self, bpm: f32) {
        if bpm <= 0.0 {
            return;
        }
        self.bpm = bpm;
        self.recalculate();
    }

    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        if sample_rate <= 0.0 {
            return;
        }
        self.sample_rate = sample_rate;
        self.recalculate();
    }

    pub fn set_time_signature(&mut self, numerator: u32, denominator: u32) {
        if numerator == 0 || denominator == 0 {
            return;
        }
        self.time_signature = TimeSignature {
            numerator,
            denominator,
        };
        self.recalculate();
    }

    fn recalculate(&mut self) {
        self.samples_per_beat = (self.sample_rate * 60.0 / self.bpm).round() as usize;
        self.samples_per_bar = self.samples_per_beat * self.time_signature.numerator as usize;
    }

    /// Advance one sample. Call once per processed audio sample.
    #[inline]
    pub fn tick(&mut self) {
        self.sample_counter += 1;
        if self.samples_per_beat > 0 && self.sample_counter >= self.samples_per_beat {
            self.sample_counter = 0;
            self.beat_counter += 1;
            if self.beat_counter >= self.time_signature.numerator {
                self.beat_counter = 0;
            }
        }
    }

    /// True while within [`BEAT_TRIGGER_WINDOW`] samples of a beat boundary.
    #[inline]
    pub fn should_trigger_on_beat(&self) -> bool {
        self.sample_counter < BEAT_TRIGGER_WINDOW
    }

    /// True on the first beat of the bar, within the trigger window.
    #[inline]
    pub fn is_downbeat(&self) -> bool {
        self.beat_counter == 0 && self.should_trigger_on_beat()
    }

    /// Round a raw length to the nearest whole number of beats (half-up).
    pub fn beat_aligned_length(&self, samples: usize) -> usize {
        if self.samples_per_beat == 0 {
            return samples;
        }
        let beats = (samples + self.samples_per_beat / 2) / self.samples_per_beat;
        beats * self.samples_per_beat
    }

    /// Snap a sample position to the nearest beat boundary (half-up).
    pub fn snap_to_nearest_beat(&self, position: usize) -> usize {
        if self.samples_per_beat == 0 {
            return position;
        }
        let beat = (position + self.samples_per_beat / 2) / self.samples_per_beat;
        beat * self.samples_per_beat
    }

    /// Length in samples of exactly `beats` beats.
    pub fn exact_beat_length(&self, beats: usize) -> usize {
        beats * self.samples_per_beat
    }

    pub fn bpm(&self) -> f32 {
        self.bpm
    }

    pub fn time_signature(&self) -> TimeSignature {
        self.time_signature
    }

    pub fn samples_per_beat(&self) -> usize {
        self.samples_per_beat
    }

    pub fn samples_per_bar(&self) -> usize {
        self.samples_per_bar
    }

    pub fn current_beat(&self) -> u32 {
        self.beat_counter
    }

    /// Zero both counters. Used when starting a new recording so the beat
    /// phase realigns with the loop start.
    pub fn reset(&mut self) {
        self.sample_counter = 0;
        self.beat_counter = 0;
    }
}

impl Default for TempoClock {
    fn default() -> Self {
        Self::new(48_000.0)
    }
}
