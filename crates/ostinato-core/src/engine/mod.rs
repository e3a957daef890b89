//! Loop engine: sample store, cursors, undo history, record/playback/overdub.

mod cursor;
mod looper;
mod undo;

pub use cursor::{PlayDirection, PlaybackCursor, RecordCursor};
pub use looper::{
    LoopEngine, SharedLooperState, CROSSFADE_SAMPLES, DEFAULT_QUANTIZE_BEATS, SOFT_CLIP_DRIVE,
};
pub use undo::{UndoHistory, MAX_UNDO_LEVELS};
