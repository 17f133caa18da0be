//! Granular dual-tap pitch shifter.
//!
//! Resamples the live input at an arbitrary speed ratio without changing its
//! duration: the input streams into a circular buffer at the hardware rate
//! while two read taps, spaced half the buffer apart, consume it at the
//! configured rate. Whichever tap drifts close to the write cursor is faded
//! out against the other through the equal-power crossfade table, hiding the
//! discontinuity when it crosses.

use crate::constants::PITCH_BUFFER_LEN;
use crate::dsp::fixed::{FixedPos, Q16_ONE};
use crate::dsp::wavetables::{CROSSFADE_LEN, CROSSFADE_TABLE};
use crate::effect::{Effect, Sample};
use crate::error::ConfigError;
use crate::ring::SampleRing;

/// Read position wrap mask: buffer length in Q16.16, minus one.
const POS_MASK: u32 = ((PITCH_BUFFER_LEN as u32) << 16) - 1;

/// Tap spacing: half the buffer length in Q16.16.
const HALF_SPAN: u32 = ((PITCH_BUFFER_LEN as u32) / 2) << 16;

/// Index wrap mask for tap/write-cursor distances.
const INDEX_MASK: u32 = PITCH_BUFFER_LEN as u32 - 1;

/// Validated playback rate, precomputed into hot-path form.
///
/// Converting a ratio costs a float multiply and round, so the driver builds
/// its rates once at configuration time and swaps them in at block
/// boundaries for free.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PitchRate {
    /// Per-sample read position advance in Q16.16.
    increment: u32,
    /// Ratio ≤ 1.0: the taps fall behind the write cursor instead of
    /// catching up to it, so collision distances are measured the other way.
    reverse: bool,
}

impl PitchRate {
    /// Build a rate from a playback speed ratio.
    ///
    /// Rejects non-positive and non-finite ratios; `1.0` is passthrough
    /// speed, `2.0` reads twice as fast (one octave up).
    pub fn from_ratio(ratio: f32) -> Result<Self, ConfigError> {
        if !ratio.is_finite() || ratio <= 0.0 {
            return Err(ConfigError::InvalidPitchRatio(ratio));
        }
        Ok(PitchRate {
            increment: libm::roundf(ratio * 65536.0) as u32,
            reverse: ratio <= 1.0,
        })
    }
}

/// Dual-tap granular pitch shifter over a 2048-sample circular buffer.
///
/// Latency is constant at half the buffer length. State persists for the
/// life of the effect; [`Effect::reset`] returns it to cold start.
#[derive(Debug)]
pub struct PitchShift {
    buffer: SampleRing<PITCH_BUFFER_LEN>,
    read_pos1: FixedPos,
    read_pos2: FixedPos,
    /// Tap 1 gain in Q16.16. Held between crossfade windows.
    gain1: i32,
    /// Tap 2 gain in Q16.16.
    gain2: i32,
    rate: PitchRate,
}

impl PitchShift {
    /// Create a pitch shifter at the given rate.
    ///
    /// Cold start reads tap 1 at full gain from an empty buffer; output is
    /// silence until the taps reach written data.
    pub fn new(rate: PitchRate) -> Self {
        PitchShift {
            buffer: SampleRing::new(),
            read_pos1: 0,
            read_pos2: 0,
            gain1: Q16_ONE,
            gain2: 0,
            rate,
        }
    }

    /// Swap in a new playback rate.
    ///
    /// Safe only between blocks; mid-block changes would tear the crossfade
    /// bookkeeping.
    pub fn set_rate(&mut self, rate: PitchRate) {
        self.rate = rate;
    }

    /// Distance from a tap to its collision with the write cursor, in
    /// samples, measured along the direction of relative drift.
    #[inline(always)]
    fn collision_distance(&self, read_pos: FixedPos, write_index: u32) -> u32 {
        let tap_index = read_pos >> 16;
        if self.rate.reverse {
            tap_index.wrapping_sub(write_index) & INDEX_MASK
        } else {
            write_index.wrapping_sub(tap_index) & INDEX_MASK
        }
    }
}

impl Effect for PitchShift {
    fn process(&mut self, input: Sample) -> Sample {
        // Distances are measured against the slot the input lands in, so
        // sample the cursor before the write advances it.
        let write_index = self.buffer.write_index() as u32;
        self.buffer.write(input);

        let tap1 = self.buffer.read_interpolated(self.read_pos1);
        let tap2 = self.buffer.read_interpolated(self.read_pos2);

        // A tap inside the crossfade window fades itself out and the other
        // tap in; outside the window the gains hold their last values. The
        // half-buffer spacing keeps both taps from ever being in a window
        // at the same time after the first sample.
        let d1 = self.collision_distance(self.read_pos1, write_index);
        if d1 as usize <= CROSSFADE_LEN {
            self.gain1 = CROSSFADE_TABLE[d1 as usize];
            self.gain2 = CROSSFADE_TABLE[CROSSFADE_LEN - d1 as usize];
        }
        let d2 = self.collision_distance(self.read_pos2, write_index);
        if d2 as usize <= CROSSFADE_LEN {
            self.gain1 = CROSSFADE_TABLE[CROSSFADE_LEN - d2 as usize];
            self.gain2 = CROSSFADE_TABLE[d2 as usize];
        }

        let mixed = (tap1 as i64 * self.gain1 as i64 + tap2 as i64 * self.gain2 as i64) >> 16;

        self.read_pos1 = self.read_pos1.wrapping_add(self.rate.increment) & POS_MASK;
        self.read_pos2 = self.read_pos1.wrapping_add(HALF_SPAN) & POS_MASK;

        mixed as Sample
    }

    fn reset(&mut self) {
        self.buffer.reset();
        self.read_pos1 = 0;
        self.read_pos2 = 0;
        self.gain1 = Q16_ONE;
        self.gain2 = 0;
    }
}
