//! Q16.16 fixed-point helpers.
//!
//! A [`FixedPos`] packs a buffer address in its high 16 bits and an
//! interpolation weight in its low 16 bits, so a fractional read position
//! advances with a single `u32` add and wraps with a mask.

/// Fractional buffer position or gain in Q16.16 format.
pub type FixedPos = u32;

/// Unity (1.0) in Q16.16.
pub const Q16_ONE: i32 = 0x10000;

/// Number of fractional bits in a [`FixedPos`].
pub const FRAC_BITS: u32 = 16;

/// Mask selecting the fractional part of a [`FixedPos`].
pub const FRAC_MASK: u32 = 0xFFFF;

/// Convert a float parameter to Q16.16, rounding to nearest.
///
/// Used only at configuration time; the caller is responsible for range
/// checking first.
#[inline]
pub fn to_q16(value: f32) -> i32 {
    libm::roundf(value * 65536.0) as i32
}

/// Scale a sample by a Q16.16 gain: `(sample * gain) >> 16`.
///
/// The product is taken in 64 bits, so a full-scale `i32` sample times a
/// gain up to unity cannot overflow.
#[inline(always)]
pub fn scale_q16(sample: i32, gain: i32) -> i32 {
    ((sample as i64 * gain as i64) >> 16) as i32
}
