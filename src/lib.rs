//! # Ostinato - Embedded Audio Looper Core
//!
//! Control and signal-path core of an embedded audio looper: records, plays
//! back, overdubs, undoes/redoes, and tempo-quantizes a loop held in a
//! fixed-capacity sample store, driven once per audio sample from a
//! hard-real-time callback.
//!
//! ## Architecture
//!
//! Ostinato is an umbrella crate coordinating:
//! - **ostinato-core** - loop engine, mode state machine, tempo clock,
//!   undo history, lock-free shared state
//! - **ostinato-dsp** - elementwise buffer operations with swappable
//!   backends, pitch ratio, one-pole smoothing
//!
//! ## Quick Start
//!
//! ```
//! use ostinato::prelude::*;
//!
//! let mut looper = LooperSystem::new(EngineConfig {
//!     capacity: 48_000,
//!     ..Default::default()
//! })?;
//!
//! // UI thread sends events; the audio callback drives the rest.
//! looper.handle_event(LooperEvent::PressRec);
//! for _ in 0..24_000 {
//!     looper.process(0.5);
//! }
//! looper.handle_event(LooperEvent::ReleaseRec);
//!
//! assert_eq!(looper.mode(), LooperMode::Playing);
//! # Ok::<(), ostinato::Error>(())
//! ```

/// Re-export of ostinato-core for direct access
pub use ostinato_core as core;

/// Re-export of ostinato-dsp for direct access
pub use ostinato_dsp as dsp;

pub use ostinato_core::{
    control_channel,
    control_channel_with_capacity,
    // Lock-free primitives
    AtomicFlag,
    AtomicFloat,
    ControlConsumer,
    ControlProducer,
    EngineConfig,
    // Error
    Error,
    // Engine
    LoopEngine,
    LooperEvent,
    LooperMode,
    // Mode machine
    ModeController,
    ModeHook,
    PlayDirection,
    Result,
    SharedLoopRegion,
    SharedLooperState,
    // Tempo
    TempoClock,
    TimeSignature,
    UndoHistory,
    BEAT_TRIGGER_WINDOW,
    CROSSFADE_SAMPLES,
    DEFAULT_QUANTIZE_BEATS,
    MAX_UNDO_LEVELS,
};

pub use ostinato_dsp::{DefaultOps, ElementwiseOps, OnePole, PitchRatio};

mod system;
pub use system::LooperSystem;

pub mod prelude {
    //! Common imports for looper hosts.
    pub use crate::{
        EngineConfig, LoopEngine, LooperEvent, LooperMode, LooperSystem, ModeController,
        TempoClock,
    };
}
