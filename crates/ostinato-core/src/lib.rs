//! Looper core: loop engine, mode state machine, tempo clock, undo history.
//!
//! Everything here is built for a hard-real-time host: the per-sample entry
//! points ([`LoopEngine::process`], [`TempoClock::tick`]) never allocate,
//! block, or do unbounded work, and configuration setters silently retain
//! prior state on invalid input instead of returning errors the caller could
//! not observe.
//!
//! # Primary API
//!
//! - [`LoopEngine`]: sample store, record/playback heads, overdub, undo/redo
//! - [`ModeController`]: validated mode transitions with lifecycle hooks
//! - [`TempoClock`]: sample-accurate beat/bar tracking and beat rounding
//! - [`control_channel`]: lock-free event queue from a UI thread
//!
//! # Example
//!
//! ```
//! use ostinato_core::LoopEngine;
//!
//! let mut engine = LoopEngine::new(48_000, 3);
//! engine.start_recording();
//! for _ in 0..24_000 {
//!     engine.process(0.5);
//! }
//! engine.stop_recording();
//! assert_eq!(engine.loop_region(), (0, 24_000));
//! ```

pub mod error;
pub use error::{Error, Result};

mod config;
pub use config::EngineConfig;

pub mod lockfree;
pub use lockfree::{AtomicFlag, AtomicFloat, SharedLoopRegion};

mod clock;
pub use clock::{TempoClock, TimeSignature, BEAT_TRIGGER_WINDOW};

mod fsm;
pub use fsm::{LooperEvent, LooperMode, ModeController, ModeHook};

mod events;
pub use events::{
    control_channel, control_channel_with_capacity, ControlConsumer, ControlProducer,
};

pub(crate) mod engine;
pub use engine::{
    LoopEngine, PlayDirection, PlaybackCursor, RecordCursor, SharedLooperState, UndoHistory,
    CROSSFADE_SAMPLES, DEFAULT_QUANTIZE_BEATS, MAX_UNDO_LEVELS, SOFT_CLIP_DRIVE,
};
