//! Per-sample pitch-ratio multiplier.

/// Semitone offset applied to a signal as a precomputed `2^(n/12)` ratio.
///
/// The ratio is recomputed only when the offset changes, so the per-sample
/// path is a single multiply.
#[derive(Debug, Clone, Copy)]
pub struct PitchRatio {
    semitones: f32,
    ratio: f32,
}

impl PitchRatio {
    pub fn new(semitones: f32) -> Self {
        Self {
            semitones,
            ratio: Self::ratio_for(semitones),
        }
    }

    fn ratio_for(semitones: f32) -> f32 {
        (2.0f32).powf(semitones / 12.0)
    }

    pub fn set_semitones(&mut self, semitones: f32) {
        if (semitones - self.semitones).abs() < f32::EPSILON {
            return;
        }
        self.semitones = semitones;
        self.ratio = Self::ratio_for(semitones);
    }

    #[inline]
    pub fn semitones(&self) -> f32 {
        self.semitones
    }

    #[inline]
    pub fn ratio(&self) -> f32 {
        self.ratio
    }

    /// Apply the ratio to one sample.
    #[inline]
    pub fn process(&self, sample: f32) -> f32 {
        sample * self.ratio
    }
}

impl Default for PitchRatio {
    fn default() -> Self {
        Self::new(0.0)
    }
}
