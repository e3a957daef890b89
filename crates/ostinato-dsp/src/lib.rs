//! RT-safe elementwise DSP building blocks for the ostinato looper:
//! buffer operations with swappable backends, a per-sample pitch-ratio
//! multiplier, and a one-pole smoother.
//!
//! The looper engine consumes everything here through the [`ElementwiseOps`]
//! trait (or the scalar helpers), so the backend can change at build time
//! without touching engine code.

pub mod ops;
pub use ops::{lerp, soft_clip_sample, DefaultOps, ElementwiseOps, ScalarOps, UnrolledOps};

mod pitch;
pub use pitch::PitchRatio;

mod smooth;
pub use smooth::OnePole;
