//! Circular sample storage.
//!
//! [`SampleRing`] is the sliding window behind the pitch shifter: a
//! power-of-two ring written one sample at a time and read at fractional
//! Q16.16 positions. [`DelayLine`] is the echo's long integer-indexed ring,
//! whose single cursor fixes the read/write offset at one slot.

use crate::dsp::fixed::{FixedPos, FRAC_MASK, Q16_ONE};
use crate::effect::Sample;

/// Fixed-capacity circular buffer with fractional-position reads.
///
/// The write cursor advances by exactly one slot per accepted sample,
/// silently overwriting the oldest data; reads never move it. Capacity must
/// be a power of two so address wraparound is a bitmask — other capacities
/// are rejected at compile time.
#[derive(Debug)]
pub struct SampleRing<const N: usize> {
    samples: [Sample; N],
    write_index: usize,
}

impl<const N: usize> SampleRing<N> {
    /// Index wrap mask. Evaluating it enforces the power-of-two capacity.
    const INDEX_MASK: usize = {
        assert!(N.is_power_of_two(), "SampleRing capacity must be a power of two");
        N - 1
    };

    /// Create a zeroed ring with the write cursor at slot 0.
    pub const fn new() -> Self {
        SampleRing {
            samples: [0; N],
            write_index: 0,
        }
    }

    /// Store `sample` at the write cursor and advance it one slot.
    #[inline(always)]
    pub fn write(&mut self, sample: Sample) {
        self.samples[self.write_index] = sample;
        self.write_index = (self.write_index + 1) & Self::INDEX_MASK;
    }

    /// Current write cursor, in `[0, N)`.
    #[inline(always)]
    pub fn write_index(&self) -> usize {
        self.write_index
    }

    /// Linearly interpolated read at a Q16.16 position.
    ///
    /// The integer part (masked to the ring) selects the base slot, the
    /// fractional part weights it against the next slot:
    /// `s[i]·(1 − frac) + s[i+1]·frac`, each term a 64-bit product shifted
    /// down 16, so full-scale samples cannot overflow.
    #[inline(always)]
    pub fn read_interpolated(&self, pos: FixedPos) -> Sample {
        let frac = (pos & FRAC_MASK) as i64;
        let index = (pos >> 16) as usize & Self::INDEX_MASK;
        let next = (index + 1) & Self::INDEX_MASK;
        let s1 = self.samples[index] as i64;
        let s2 = self.samples[next] as i64;
        ((s1 * (Q16_ONE as i64 - frac)) >> 16) as Sample + ((s2 * frac) >> 16) as Sample
    }

    /// Zero the contents and return the write cursor to slot 0.
    pub fn reset(&mut self) {
        self.samples = [0; N];
        self.write_index = 0;
    }
}

/// Long integer-indexed delay line with a fixed one-slot read/write offset.
///
/// Reading returns the oldest stored sample — the one written `N − 1` steps
/// ago — and writing overwrites that slot's predecessor and advances the
/// cursor. Capacity is arbitrary (no fractional reads, so no power-of-two
/// requirement); the wrap is a compare-and-reset rather than a mask.
#[derive(Debug)]
pub struct DelayLine<const N: usize> {
    samples: [Sample; N],
    write_index: usize,
}

impl<const N: usize> DelayLine<N> {
    /// Effective delay between a write and its readback, in samples.
    pub const DELAY: usize = N - 1;

    /// Create a zeroed delay line.
    pub const fn new() -> Self {
        DelayLine {
            samples: [0; N],
            write_index: 0,
        }
    }

    /// Read the sample written `N − 1` steps ago.
    #[inline(always)]
    pub fn read(&self) -> Sample {
        let read_index = if self.write_index + 1 == N {
            0
        } else {
            self.write_index + 1
        };
        self.samples[read_index]
    }

    /// Store `sample` at the write cursor and advance both cursors one slot.
    #[inline(always)]
    pub fn write_and_advance(&mut self, sample: Sample) {
        self.samples[self.write_index] = sample;
        self.write_index += 1;
        if self.write_index == N {
            self.write_index = 0;
        }
    }

    /// Zero the contents and return the cursors to their initial slots.
    pub fn reset(&mut self) {
        self.samples = [0; N];
        self.write_index = 0;
    }
}
