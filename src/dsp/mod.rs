//! Fixed-point DSP math.
//!
//! Everything on the per-sample path is integer arithmetic: Q16.16 gains and
//! positions with 64-bit intermediates, shifts and masks instead of division.
//! Floating point appears only in configuration conversions, which happen at
//! block boundaries at most.

pub mod fixed;
pub mod wavetables;

pub use fixed::{scale_q16, to_q16, FixedPos, Q16_ONE};
pub use wavetables::{CROSSFADE_LEN, CROSSFADE_TABLE};
