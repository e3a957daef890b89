//! Overdub loop engine.
//!
//! Owns the sample store and both heads, and orchestrates recording, looped
//! playback with fractional speed/reverse, in-place overdub mixing with soft
//! clipping, loop-boundary crossfade, beat quantization, and undo/redo.
//!
//! `process` is the single real-time entry point: one call per audio sample,
//! no allocation, no locking, bounded cost. Undo/redo are O(loop length) and
//! must be scheduled where the host's timing budget allows.

use super::cursor::{PlaybackCursor, RecordCursor};
use super::undo::UndoHistory;
use crate::lockfree::{AtomicFlag, AtomicFloat, SharedLoopRegion};
use ostinato_dsp::{lerp, soft_clip_sample, DefaultOps, ElementwiseOps};
use std::sync::Arc;

/// Length of the loop-boundary crossfade (~2.7 ms at 48 kHz). Loops shorter
/// than twice this are left un-faded.
pub const CROSSFADE_SAMPLES: usize = 128;

/// Drive of the overdub soft-clip curve `tanh(x * drive) / drive`.
pub const SOFT_CLIP_DRIVE: f32 = 0.7;

/// Beat count quantization falls back to when configured with zero.
pub const DEFAULT_QUANTIZE_BEATS: usize = 4;

/// Atomic mirror of engine state for UI/control threads.
///
/// Clones share the same underlying cells. The region is published as a
/// packed pair so readers never observe a torn `{start, length}` combination.
#[derive(Clone, Default)]
pub struct SharedLooperState {
    region: Arc<SharedLoopRegion>,
    playhead: Arc<AtomicFloat>,
    empty: Arc<AtomicFlag>,
}

impl SharedLooperState {
    /// `(start, length)` of the current loop region.
    pub fn region(&self) -> (usize, usize) {
        self.region.get()
    }

    /// Playhead position normalized to the full store, `[0, 1)`.
    pub fn playhead(&self) -> f32 {
        self.playhead.get_relaxed()
    }

    pub fn is_empty(&self) -> bool {
        self.empty.get()
    }
}

/// The loop engine.
pub struct LoopEngine {
    store: Vec<f32>,
    loop_start: usize,
    loop_length: usize,
    play: PlaybackCursor,
    rec: RecordCursor,
    is_empty: bool,
    overdubbing: bool,

    quantize: bool,
    quantize_beats: usize,
    samples_per_beat: usize,

    inv_capacity: f32,
    inv_crossfade: f32,

    undo: UndoHistory,
    shared: SharedLooperState,
}

impl LoopEngine {
    /// Allocate and zero the sample store and undo buffers.
    ///
    /// This is the only allocating call; everything after construction runs
    /// allocation-free. `undo_levels` is clamped to
    /// [`super::MAX_UNDO_LEVELS`]; zero disables history.
    pub fn new(capacity: usize, undo_levels: usize) -> Self {
        assert!(capacity > 0, "sample store capacity must be non-zero");

        let shared = SharedLooperState::default();
        shared.empty.set(true);

        Self {
            store: vec![0.0; capacity],
            loop_start: 0,
            loop_length: 0,
            play: PlaybackCursor::new(),
            rec: RecordCursor::default(),
            is_empty: true,
            overdubbing: false,
            quantize: false,
            quantize_beats: DEFAULT_QUANTIZE_BEATS,
            samples_per_beat: 0,
            inv_capacity: 1.0 / capacity as f32,
            inv_crossfade: 1.0 / CROSSFADE_SAMPLES as f32,
            undo: UndoHistory::new(undo_levels, capacity),
            shared,
        }
    }

    pub fn capacity(&self) -> usize {
        self.store.len()
    }

    /// Read access to the raw store (diagnostics, waveform rendering).
    pub fn samples(&self) -> &[f32] {
        &self.store
    }

    /// Clone of the atomic state mirror for other threads.
    pub fn shared(&self) -> SharedLooperState {
        self.shared.clone()
    }

    // --- Recording / overdub lifecycle ---

    /// Begin recording at the start of the store. Marks the loop non-empty
    /// and disables overdub.
    pub fn start_recording(&mut self) {
        self.rec.start();
        self.play.reset();
        self.loop_start = 0;
        self.is_empty = false;
        self.overdubbing = false;
        self.shared.empty.set(false);
        tracing::debug!("recording started");
    }

    /// Stop recording, fix the loop length from the record head, and apply
    /// the boundary crossfade.
    pub fn stop_recording(&mut self) {
        let was_active = self.rec.active;
        self.rec.stop();
        if was_active && self.rec.head > 0 {
            self.loop_length = self.rec.head;
        }
        self.shared.region.set(self.loop_start, self.loop_length);
        tracing::debug!(length = self.loop_length, "recording stopped");
        self.apply_crossfade();
    }

    /// Snapshot the loop region, then enable overdub mixing.
    pub fn start_overdub(&mut self) {
        self.undo
            .save_state(&self.store, self.loop_start, self.loop_length);
        self.overdubbing = true;
    }

    pub fn stop_overdub(&mut self) {
        self.overdubbing = false;
    }

    /// Rewind the playback cursor to the loop start.
    pub fn restart(&mut self) {
        self.play.reset();
    }

    /// Zero the store and return to the empty state.
    pub fn clear(&mut self) {
        DefaultOps::clear(&mut self.store);
        self.loop_start = 0;
        self.loop_length = 0;
        self.play.reset();
        self.rec = RecordCursor::default();
        self.is_empty = true;
        self.overdubbing = false;
        self.shared.region.set(0, 0);
        self.shared.empty.set(true);
        tracing::debug!("loop cleared");
    }

    // --- Region / playback configuration ---

    /// Set the loop region from exact sample positions, `end_inclusive`
    /// included. Length is clamped into `[1, capacity]`; the playback cursor
    /// resets if it falls outside the new length.
    pub fn set_loop_region(&mut self, start: usize, end_inclusive: usize) {
        let capacity = self.store.len();
        let start = start.min(capacity - 1);
        let length = end_inclusive
            .saturating_sub(start)
            .saturating_add(1)
            .min(capacity);

        self.loop_start = start;
        self.loop_length = length;
        if self.play.position() >= length as f32 {
            self.play.reset();
        }
        self.shared.region.set(start, length);
    }

    pub fn set_reverse(&mut self, reverse: bool) {
        self.play.set_reverse(reverse);
    }

    /// Non-positive speeds are silently ignored.
    pub fn set_playback_speed(&mut self, speed: f32) {
        self.play.set_speed(speed);
    }

    // --- Tempo / quantization ---

    /// Both arguments must be strictly positive or the call is ignored.
    pub fn set_tempo(&mut self, bpm: f32, sample_rate: f32) {
        if bpm <= 0.0 || sample_rate <= 0.0 {
            return;
        }
        self.samples_per_beat = (sample_rate * 60.0 / bpm).round() as usize;
    }

    /// `beats == 0` falls back to [`DEFAULT_QUANTIZE_BEATS`].
    pub fn set_quantize(&mut self, enable: bool, beats: usize) {
        self.quantize = enable;
        self.quantize_beats = if beats > 0 {
            beats
        } else {
            DEFAULT_QUANTIZE_BEATS
        };
    }

    /// Floor a recorded length to a whole multiple of the quantize beat
    /// count. May legitimately return a value shorter than one beat (even 0);
    /// callers clamp to at least 1 when applying it as a region length.
    pub fn quantize_length(&self, recorded_length: usize) -> usize {
        if !self.quantize || self.quantize_beats == 0 {
            return recorded_length;
        }
        (recorded_length / self.quantize_beats) * self.quantize_beats
    }

    /// Quantize a recorded `[start, end)` span to the beat grid.
    ///
    /// The start snaps to the nearest beat (half-up); the length converts to
    /// beats with the same rounding, clamps up to at least the configured
    /// quantize unit, and otherwise rounds to the nearest multiple of it.
    /// Returns `(start, end)` with an exclusive end. Identity when
    /// quantization is disabled or the tempo is unset.
    pub fn quantize_loop_region(&self, start: usize, end: usize) -> (usize, usize) {
        if !self.quantize || self.samples_per_beat == 0 {
            return (start, end);
        }
        let spb = self.samples_per_beat;

        let start_beat = (start + spb / 2) / spb;
        let out_start = start_beat * spb;

        let recorded_length = end.saturating_sub(start);
        let mut length_in_beats = (recorded_length + spb / 2) / spb;

        if length_in_beats < self.quantize_beats {
            length_in_beats = self.quantize_beats;
        } else {
            length_in_beats = ((length_in_beats + self.quantize_beats / 2) / self.quantize_beats)
                * self.quantize_beats;
        }

        (out_start, out_start + length_in_beats * spb)
    }

    // --- Undo / redo ---

    /// Restore the loop region to its last snapshot. O(loop length).
    pub fn undo(&mut self) -> bool {
        self.undo
            .undo(&mut self.store, self.loop_start, self.loop_length)
    }

    /// Re-apply a previously undone snapshot. O(loop length).
    pub fn redo(&mut self) -> bool {
        self.undo
            .redo(&mut self.store, self.loop_start, self.loop_length)
    }

    pub fn can_undo(&self) -> bool {
        self.undo.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.undo.can_redo()
    }

    // --- State queries ---

    pub fn is_recording(&self) -> bool {
        self.rec.active
    }

    pub fn is_overdubbing(&self) -> bool {
        self.overdubbing
    }

    pub fn is_empty(&self) -> bool {
        self.is_empty
    }

    /// `(start, length)` of the current loop region.
    pub fn loop_region(&self) -> (usize, usize) {
        (self.loop_start, self.loop_length)
    }

    /// Fractional playhead position within the loop, `[0, length)`.
    pub fn playback_position(&self) -> f32 {
        self.play.position()
    }

    /// Playhead position within the loop in whole samples.
    pub fn playhead_in_loop(&self) -> usize {
        self.play.position() as usize
    }

    /// Playhead position normalized to the full store, `[0, 1)`.
    pub fn playhead_normalized(&self) -> f32 {
        (self.loop_start as f32 + self.play.position()) * self.inv_capacity
    }

    // --- Real-time path ---

    /// Process one audio sample. The only per-sample entry point.
    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        if self.rec.active {
            self.store[self.rec.head] = input;
            self.rec.advance(self.store.len());
            if !self.rec.active {
                // Hit the end of the store: the recording truncates silently
                // at the full capacity.
                self.loop_length = self.store.len();
                self.shared.region.set(self.loop_start, self.loop_length);
            }
            return input;
        }

        if self.is_empty || self.loop_length == 0 {
            return 0.0;
        }

        let mut out = self.read_interpolated(self.play.position());

        if self.overdubbing {
            // Overdub writes at the truncated head index, not the fractional
            // cursor, so layers align to whole-sample boundaries.
            let index =
                (self.loop_start + self.play.position() as usize) % self.store.len();
            let mixed = soft_clip_sample(self.store[index] + input, SOFT_CLIP_DRIVE);
            self.store[index] = mixed;
            out = mixed;
        }

        self.play.advance(self.loop_length);
        self.shared.playhead.set_relaxed(self.playhead_normalized());
        out
    }

    /// Block convenience driver: one `process` call per sample.
    pub fn process_block(&mut self, input: &[f32], output: &mut [f32]) {
        for (out, sample) in output.iter_mut().zip(input.iter()) {
            *out = self.process(*sample);
        }
    }

    /// Interpolated read at a fractional loop position. Addresses wrap twice:
    /// within the loop region, then within the physical store.
    #[inline]
    fn read_interpolated(&self, position: f32) -> f32 {
        let capacity = self.store.len();
        let idx0 = position as usize;
        let idx1 = (idx0 + 1) % self.loop_length;
        let frac = position - idx0 as f32;

        let a = self.store[(self.loop_start + idx0) % capacity];
        let b = self.store[(self.loop_start + idx1) % capacity];
        lerp(a, b, frac)
    }

    /// Blend the loop's first [`CROSSFADE_SAMPLES`] with its last, removing
    /// the discontinuity at the wrap point. Skipped entirely for loops
    /// shorter than twice the crossfade length.
    fn apply_crossfade(&mut self) {
        if self.loop_length < CROSSFADE_SAMPLES * 2 {
            return;
        }
        let capacity = self.store.len();
        for i in 0..CROSSFADE_SAMPLES {
            let fade = i as f32 * self.inv_crossfade;
            let start_idx = (self.loop_start + i) % capacity;
            let end_idx =
                (self.loop_start + self.loop_length - CROSSFADE_SAMPLES + i) % capacity;
            self.store[start_idx] = lerp(self.store[end_idx], self.store[start_idx], fade);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::MAX_UNDO_LEVELS;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn engine(capacity: usize) -> LoopEngine {
        LoopEngine::new(capacity, MAX_UNDO_LEVELS)
    }

    /// Record `input` samples and stop, leaving the engine playing the loop.
    fn record(engine: &mut LoopEngine, input: &[f32]) {
        engine.start_recording();
        for sample in input {
            engine.process(*sample);
        }
        engine.stop_recording();
    }

    #[test]
    fn test_new_engine_is_silent() {
        let mut engine = engine(64);
        assert!(engine.is_empty());
        for _ in 0..100 {
            assert_eq!(engine.process(0.5), 0.0);
        }
    }

    #[test]
    fn test_recording_passes_input_through() {
        let mut engine = engine(64);
        engine.start_recording();
        assert_eq!(engine.process(0.3), 0.3);
        assert_eq!(engine.process(-0.8), -0.8);
    }

    #[test]
    fn test_record_and_stop_fixes_loop_length() {
        // Scenario: record 24000 samples of 1.0 into a 48000-sample store.
        let mut engine = engine(48_000);
        record(&mut engine, &vec![1.0; 24_000]);

        assert_eq!(engine.loop_region(), (0, 24_000));
        // With identical head and tail the crossfade is a no-op, so every
        // recorded sample is still 1.0.
        for sample in &engine.samples()[..24_000] {
            assert_relative_eq!(*sample, 1.0, epsilon = 1e-6);
        }
        assert!(engine.samples()[24_000..].iter().all(|s| *s == 0.0));
    }

    #[test]
    fn test_recording_truncates_at_capacity() {
        let mut engine = engine(1_000);
        engine.start_recording();
        for i in 0..1_500 {
            engine.process((i % 10) as f32 * 0.1);
            if i == 999 {
                assert!(!engine.is_recording());
            }
        }
        // Auto-deactivated at the hard boundary; the loop spans the store.
        assert_eq!(engine.loop_region(), (0, 1_000));
        engine.stop_recording();
        assert_eq!(engine.loop_region(), (0, 1_000));
    }

    #[test]
    fn test_playback_cycles_recorded_samples() {
        let mut engine = engine(16);
        record(&mut engine, &[0.0, 0.1, 0.2, 0.3]);

        for _ in 0..3 {
            for expected in [0.0, 0.1, 0.2, 0.3] {
                let out = engine.process(0.0);
                assert_relative_eq!(out, expected, epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn test_half_speed_interpolates_between_samples() {
        let mut engine = engine(16);
        record(&mut engine, &[0.0, 1.0, 0.0, 1.0]);

        engine.set_playback_speed(0.5);
        assert_relative_eq!(engine.process(0.0), 0.0, epsilon = 1e-6);
        assert_relative_eq!(engine.process(0.0), 0.5, epsilon = 1e-6);
        assert_relative_eq!(engine.process(0.0), 1.0, epsilon = 1e-6);
        assert_relative_eq!(engine.process(0.0), 0.5, epsilon = 1e-6);
    }

    #[test]
    fn test_reverse_wraps_via_length_addition() {
        // Scenario: length 100, position 0, reverse at speed 1.0.
        let mut engine = engine(128);
        record(&mut engine, &vec![0.25; 100]);

        engine.set_playback_speed(1.0);
        engine.set_reverse(true);
        engine.process(0.0);
        assert_relative_eq!(engine.playback_position(), 99.0, epsilon = 1e-4);
    }

    #[test]
    fn test_overdub_mixes_through_soft_clip() {
        let mut engine = engine(16);
        record(&mut engine, &[0.5, 0.5, 0.5, 0.5]);

        engine.start_overdub();
        let out = engine.process(0.25);
        let expected = (0.75f32 * SOFT_CLIP_DRIVE).tanh() / SOFT_CLIP_DRIVE;
        assert_relative_eq!(out, expected, epsilon = 1e-5);
        assert_relative_eq!(engine.samples()[0], expected, epsilon = 1e-5);

        engine.stop_overdub();
        assert!(!engine.is_overdubbing());
    }

    #[test]
    fn test_undo_rolls_back_overdub() {
        let mut engine = engine(16);
        record(&mut engine, &[0.5, 0.5, 0.5, 0.5]);

        engine.start_overdub();
        for _ in 0..4 {
            engine.process(0.4);
        }
        engine.stop_overdub();
        assert!(engine.samples()[0] > 0.5);

        assert!(engine.undo());
        for sample in &engine.samples()[..4] {
            assert_relative_eq!(*sample, 0.5, epsilon = 1e-6);
        }

        assert!(engine.redo());
        assert!(engine.samples()[0] > 0.5);
    }

    #[test]
    fn test_undo_without_history_fails() {
        let mut engine = LoopEngine::new(16, 0);
        record(&mut engine, &[0.5; 4]);
        engine.start_overdub();
        assert!(!engine.can_undo());
        assert!(!engine.undo());
    }

    #[test]
    fn test_set_loop_region_clamps_and_resets_cursor() {
        let mut engine = engine(64);
        record(&mut engine, &vec![0.1; 60]);

        // Play into the region
        for _ in 0..30 {
            engine.process(0.0);
        }
        assert_eq!(engine.playhead_in_loop(), 30);

        // Shrinking below the cursor resets it
        engine.set_loop_region(0, 9);
        assert_eq!(engine.loop_region(), (0, 10));
        assert_eq!(engine.playhead_in_loop(), 0);

        // Inverted bounds degrade to the minimum length of one
        engine.set_loop_region(50, 10);
        assert_eq!(engine.loop_region(), (50, 1));
    }

    #[test]
    fn test_restart_rewinds_playback() {
        let mut engine = engine(32);
        record(&mut engine, &vec![0.1; 20]);
        for _ in 0..7 {
            engine.process(0.0);
        }
        engine.restart();
        assert_eq!(engine.playhead_in_loop(), 0);
    }

    #[test]
    fn test_clear_returns_to_empty() {
        let mut engine = engine(32);
        record(&mut engine, &vec![0.9; 20]);
        engine.clear();

        assert!(engine.is_empty());
        assert!(engine.samples().iter().all(|s| *s == 0.0));
        assert_eq!(engine.process(0.7), 0.0);
    }

    #[test]
    fn test_crossfade_skipped_below_minimum_length() {
        let mut engine = engine(512);
        let ramp: Vec<f32> = (0..255).map(|i| i as f32 / 255.0).collect();
        record(&mut engine, &ramp);

        // 255 < 2 * CROSSFADE_SAMPLES: contents untouched.
        for (sample, expected) in engine.samples()[..255].iter().zip(ramp.iter()) {
            assert_eq!(*sample, *expected);
        }
    }

    #[test]
    fn test_crossfade_blends_exactly_at_minimum_length() {
        let mut engine = engine(512);
        let mut input = vec![1.0f32; 128];
        input.extend(std::iter::repeat(0.0).take(128));
        record(&mut engine, &input);

        // First 128 samples ramp from the tail's 0.0 up to the head's 1.0.
        let store = engine.samples();
        for i in 0..CROSSFADE_SAMPLES {
            let fade = i as f32 / CROSSFADE_SAMPLES as f32;
            assert_relative_eq!(store[i], fade, epsilon = 1e-5);
        }
        // Tail region is read, never written.
        assert!(store[128..256].iter().all(|s| *s == 0.0));
    }

    #[test]
    fn test_quantize_length_floors_to_beat_multiple() {
        let mut engine = engine(16);
        assert_eq!(engine.quantize_length(22), 22); // disabled: identity

        engine.set_quantize(true, 4);
        assert_eq!(engine.quantize_length(22), 20);
        assert_eq!(engine.quantize_length(8), 8);
        // Degenerate: shorter than one unit floors to zero; callers clamp.
        assert_eq!(engine.quantize_length(3), 0);
    }

    #[test]
    fn test_quantize_zero_beats_falls_back_to_default() {
        let mut engine = engine(16);
        engine.set_quantize(true, 0);
        assert_eq!(engine.quantize_length(13), 12);
    }

    #[test]
    fn test_quantize_region_scenario() {
        // 120 BPM at 48 kHz: 24000 samples per beat; minimum 4 beats.
        let mut engine = engine(16);
        engine.set_tempo(120.0, 48_000.0);
        engine.set_quantize(true, 4);

        let (start, end) = engine.quantize_loop_region(1_000, 23_000);
        assert_eq!(start, 0);
        assert_eq!(end, 96_000);
    }

    #[test]
    fn test_quantize_region_identity_when_unconfigured() {
        let mut engine = engine(16);
        // Quantize on but tempo never set
        engine.set_quantize(true, 4);
        assert_eq!(engine.quantize_loop_region(123, 4_567), (123, 4_567));

        // Tempo set but quantize off
        engine.set_quantize(false, 4);
        engine.set_tempo(120.0, 48_000.0);
        assert_eq!(engine.quantize_loop_region(123, 4_567), (123, 4_567));
    }

    #[test]
    fn test_quantize_region_rounds_long_recordings() {
        let mut engine = engine(16);
        engine.set_tempo(120.0, 48_000.0); // 24000 samples/beat
        engine.set_quantize(true, 4);

        // ~5 beats starting near beat 1 rounds down to the nearest 4-beat
        // multiple: 4 beats of 24000 samples.
        let (start, end) = engine.quantize_loop_region(13_000, 133_100);
        assert_eq!(start, 24_000);
        assert_eq!(end, 120_000);
        assert_eq!((end - start) % 24_000, 0);
    }

    #[test]
    fn test_invalid_tempo_and_speed_ignored() {
        let mut engine = engine(16);
        engine.set_tempo(120.0, 48_000.0);
        engine.set_tempo(0.0, 48_000.0);
        engine.set_tempo(120.0, -1.0);
        engine.set_quantize(true, 4);

        // Still quantizes with the valid tempo from the first call.
        let (start, end) = engine.quantize_loop_region(0, 96_000);
        assert_eq!((start, end), (0, 96_000));

        engine.set_playback_speed(-2.0);
        record(&mut engine, &[0.1, 0.2]);
        engine.process(0.0);
        assert_relative_eq!(engine.playback_position(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_shared_state_mirrors_engine() {
        let mut engine = engine(64);
        let shared = engine.shared();

        assert!(shared.is_empty());
        record(&mut engine, &vec![0.5; 40]);
        assert!(!shared.is_empty());
        assert_eq!(shared.region(), (0, 40));

        for _ in 0..10 {
            engine.process(0.0);
        }
        assert_relative_eq!(shared.playhead(), 10.0 / 64.0, epsilon = 1e-4);
    }

    #[test]
    fn test_playhead_normalized_accounts_for_region_start() {
        let mut engine = engine(100);
        record(&mut engine, &vec![0.2; 80]);
        engine.set_loop_region(50, 79);

        engine.process(0.0);
        assert_relative_eq!(engine.playhead_normalized(), 51.0 / 100.0, epsilon = 1e-4);
    }

    proptest! {
        /// Playback addressing stays inside the physical store for any
        /// region, speed, and direction (an out-of-range index would panic).
        #[test]
        fn prop_playback_indices_stay_in_bounds(
            start in 0usize..128,
            end in 0usize..256,
            speed in 0.1f32..8.0,
            reverse in any::<bool>(),
        ) {
            let mut engine = LoopEngine::new(128, 0);
            engine.start_recording();
            for i in 0..128 {
                engine.process((i as f32 * 0.01).sin());
            }
            engine.stop_recording();

            engine.set_loop_region(start, end);
            engine.set_playback_speed(speed);
            engine.set_reverse(reverse);

            for _ in 0..1_000 {
                let out = engine.process(0.0);
                prop_assert!(out.is_finite());
            }
        }

        /// Quantized lengths never exceed the input and always divide by the
        /// configured beat count.
        #[test]
        fn prop_quantize_length_floors(beats in 1usize..16, recorded in 0usize..1_000_000) {
            let mut engine = LoopEngine::new(16, 0);
            engine.set_quantize(true, beats);
            let quantized = engine.quantize_length(recorded);
            prop_assert!(quantized <= recorded);
            prop_assert_eq!(quantized % beats, 0);
        }

        /// Quantized regions are non-empty and an exact beat multiple.
        #[test]
        fn prop_quantize_region_is_beat_multiple(
            start in 0usize..500_000,
            extra in 0usize..500_000,
            bpm in 40.0f32..240.0,
        ) {
            let mut engine = LoopEngine::new(16, 0);
            engine.set_tempo(bpm, 48_000.0);
            engine.set_quantize(true, 4);

            let (out_start, out_end) = engine.quantize_loop_region(start, start + extra);
            let spb = (48_000.0 * 60.0 / bpm).round() as usize;
            prop_assert!(out_end > out_start);
            prop_assert_eq!((out_end - out_start) % spb, 0);
        }
    }
}
