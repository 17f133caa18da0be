//! Stream effects.
//!
//! Each effect owns its buffers outright and implements the
//! [`Effect`](crate::effect::Effect) trait. They are independent: the driver
//! chain owns one instance of each and selects between them per block.

mod pitch_shift;
mod echo;

pub use pitch_shift::{PitchRate, PitchShift};
pub use echo::Echo;
