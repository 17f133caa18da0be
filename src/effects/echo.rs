//! Damped feedback echo.
//!
//! A long delay line with a one-pole low-pass in the feedback path: each
//! repeat comes back quieter and duller, like a real room. The output is the
//! damped tap alone — the caller decides how (or whether) to mix the dry
//! signal back in.

use crate::constants::ECHO_BUFFER_LEN;
use crate::dsp::fixed::{scale_q16, to_q16, Q16_ONE};
use crate::effect::{Effect, Sample};
use crate::error::ConfigError;
use crate::ring::DelayLine;

/// Feedback delay with damping, fixed at [`ECHO_BUFFER_LEN`]` − 1` samples
/// of delay (≈ 0.42 s at 48 kHz).
#[derive(Debug)]
pub struct Echo {
    delay: DelayLine<ECHO_BUFFER_LEN>,
    /// One-pole low-pass state on the tapped signal.
    accumulator: Sample,
    /// Feedback gain in Q16.16, `[0, 0x10000]`.
    feedback: i32,
    /// Damping coefficient in Q16.16, `[0, 0x10000]`.
    damping: i32,
}

impl Echo {
    /// Delay between a sample entering the line and its first repeat.
    pub const DELAY_SAMPLES: usize = DelayLine::<ECHO_BUFFER_LEN>::DELAY;

    /// Create an echo with the given feedback gain and damping coefficient,
    /// each in `[0, 1]`.
    ///
    /// Higher feedback sustains repeats longer; higher damping lets more of
    /// each tap through the low-pass. A damping of zero never admits the tap
    /// into the filter state, which mutes the effect entirely.
    pub fn new(feedback: f32, damping: f32) -> Result<Self, ConfigError> {
        let mut echo = Echo {
            delay: DelayLine::new(),
            accumulator: 0,
            feedback: 0,
            damping: 0,
        };
        echo.configure(feedback, damping)?;
        Ok(echo)
    }

    /// Reconfigure feedback and damping. Safe only between blocks.
    pub fn configure(&mut self, feedback: f32, damping: f32) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&feedback) {
            return Err(ConfigError::FeedbackOutOfRange(feedback));
        }
        if !(0.0..=1.0).contains(&damping) {
            return Err(ConfigError::DampingOutOfRange(damping));
        }
        self.feedback = to_q16(feedback);
        self.damping = to_q16(damping);
        Ok(())
    }
}

impl Effect for Echo {
    fn process(&mut self, input: Sample) -> Sample {
        let tap = self.delay.read();

        // acc = acc·(1 − damping) + tap·damping, all Q16.16 products in i64
        self.accumulator = ((self.accumulator as i64 * (Q16_ONE - self.damping) as i64
            + tap as i64 * self.damping as i64)
            >> 16) as Sample;

        // Decayed feedback plus fresh input compounds across the delay.
        // Headroom note: the transport's samples leave enough unused high
        // bits that the sum cannot saturate for feedback < 1.
        let writeback = scale_q16(self.accumulator, self.feedback).wrapping_add(input);
        self.delay.write_and_advance(writeback);

        self.accumulator
    }

    fn reset(&mut self) {
        self.delay.reset();
        self.accumulator = 0;
    }
}
