//! Complete looper instance wiring the mode machine to the engine.
//!
//! [`LooperSystem`] plays the host role described by the core crates: input
//! events go through the [`ModeController`], and every applied transition is
//! mapped onto the engine's recording/overdub lifecycle. The audio callback
//! calls [`LooperSystem::process`] once per sample (or
//! [`LooperSystem::process_block`] per block), which ticks the tempo clock
//! and runs the engine.

use ostinato_core::{
    ControlConsumer, EngineConfig, LoopEngine, LooperEvent, LooperMode, ModeController, Result,
    TempoClock,
};

/// A complete looper: engine + mode machine + tempo clock + event intake.
pub struct LooperSystem {
    engine: LoopEngine,
    controller: ModeController,
    clock: TempoClock,
    events: Option<ControlConsumer>,
    sample_rate: f32,
}

impl LooperSystem {
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;

        let mut engine = LoopEngine::new(config.capacity, config.undo_levels);
        engine.set_tempo(config.bpm, config.sample_rate);
        engine.set_quantize(config.quantize, config.quantize_beats);

        let mut clock = TempoClock::new(config.sample_rate);
        clock.set_bpm(config.bpm);
        clock.set_time_signature(
            config.time_signature.numerator,
            config.time_signature.denominator,
        );

        tracing::debug!(
            capacity = config.capacity,
            sample_rate = config.sample_rate,
            "looper system ready"
        );

        Ok(Self {
            engine,
            controller: ModeController::new(),
            clock,
            events: None,
            sample_rate: config.sample_rate,
        })
    }

    /// Attach the consumer half of a [`ostinato_core::control_channel`] so a
    /// UI thread can drive this looper.
    pub fn attach_event_source(&mut self, consumer: ControlConsumer) {
        self.events = Some(consumer);
    }

    pub fn engine(&self) -> &LoopEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut LoopEngine {
        &mut self.engine
    }

    pub fn controller(&self) -> &ModeController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut ModeController {
        &mut self.controller
    }

    pub fn clock(&self) -> &TempoClock {
        &self.clock
    }

    pub fn mode(&self) -> LooperMode {
        self.controller.mode()
    }

    /// Update tempo on the clock and the engine's quantization grid together.
    pub fn set_tempo(&mut self, bpm: f32) {
        self.clock.set_bpm(bpm);
        self.engine.set_tempo(bpm, self.sample_rate);
    }

    pub fn set_quantize(&mut self, enable: bool, beats: usize) {
        self.engine.set_quantize(enable, beats);
    }

    /// Feed one input event through the mode machine; on an applied
    /// transition, drive the engine lifecycle accordingly. Returns whether
    /// the mode changed.
    pub fn handle_event(&mut self, event: LooperEvent) -> bool {
        let from = self.controller.mode();
        if !self.controller.process_event(event) {
            return false;
        }
        let to = self.controller.mode();
        self.apply_transition(from, to, event);
        true
    }

    /// Drain all queued control events. Call at block boundaries.
    pub fn drain_events(&mut self) -> usize {
        let Some(mut consumer) = self.events.take() else {
            return 0;
        };
        let mut applied = 0;
        while let Some(event) = consumer.pop() {
            if self.handle_event(event) {
                applied += 1;
            }
        }
        self.events = Some(consumer);
        applied
    }

    fn apply_transition(&mut self, from: LooperMode, to: LooperMode, event: LooperEvent) {
        use LooperMode::*;
        match (from, to) {
            (Idle, RecordingInitial) => {
                // Realign beat phase with the loop start.
                self.clock.reset();
                self.engine.start_recording();
            }
            (RecordingInitial, Playing) => {
                self.engine.stop_recording();
                self.snap_region_to_grid();
            }
            (RecordingInitial, Idle) => {
                // Aborted take: nothing worth keeping.
                self.engine.clear();
            }
            (Playing, Overdubbing) => self.engine.start_overdub(),
            (Overdubbing, Playing) => self.engine.stop_overdub(),
            (Playing, Idle) | (Overdubbing, Idle) | (Paused, Idle) => {
                self.engine.stop_overdub();
                if event == LooperEvent::ClearLoop {
                    self.engine.clear();
                }
            }
            // Resume from pause holds the playback position.
            _ => {}
        }
    }

    /// Quantize the freshly recorded region onto the beat grid. Identity when
    /// quantization is disabled or the tempo is unset.
    fn snap_region_to_grid(&mut self) {
        let (start, length) = self.engine.loop_region();
        if length == 0 {
            return;
        }
        let (quantized_start, quantized_end) = self.engine.quantize_loop_region(start, start + length);
        if quantized_end > quantized_start {
            self.engine
                .set_loop_region(quantized_start, quantized_end - 1);
        }
    }

    /// Process one audio sample: tick the clock, then run the engine.
    /// Idle and Paused produce silence; Paused holds the playback position.
    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        self.clock.tick();
        match self.controller.mode() {
            LooperMode::Idle | LooperMode::Paused => 0.0,
            _ => self.engine.process(input),
        }
    }

    /// Block driver: drain queued events, then process per sample.
    pub fn process_block(&mut self, input: &[f32], output: &mut [f32]) {
        self.drain_events();
        for (out, sample) in output.iter_mut().zip(input.iter()) {
            *out = self.process(*sample);
        }
    }
}
