//! Equal-power crossfade wavetable.
//!
//! A quarter-cycle sin² curve in Q16.16, indexed by distance-to-crossover in
//! samples. Paired entries `d` and `CROSSFADE_LEN - d` sum to unity, so
//! blending two taps with `table[d]` and `table[CROSSFADE_LEN - d]` holds
//! perceived power constant across the fade.

/// Length of the crossfade window in samples (highest valid table index).
pub const CROSSFADE_LEN: usize = 100;

/// `sin²(π·d / 200) · 0x10000` for d in `0..=100`.
///
/// `CROSSFADE_TABLE[0] == 0`, `CROSSFADE_TABLE[100] == 0x10000`, midpoint at
/// exactly half gain.
pub const CROSSFADE_TABLE: [i32; CROSSFADE_LEN + 1] = [
    0x00000, 0x00010, 0x00041, 0x00091, 0x00102, 0x00193, 0x00244, 0x00315,
    0x00405, 0x00515, 0x00644, 0x00791, 0x008fd, 0x00a87, 0x00c2f, 0x00df3,
    0x00fd5, 0x011d3, 0x013ed, 0x01622, 0x01872, 0x01adc, 0x01d60, 0x01ffc,
    0x022b1, 0x0257e, 0x02861, 0x02b5a, 0x02e69, 0x0318c, 0x034c3, 0x0380e,
    0x03b6a, 0x03ed8, 0x04256, 0x045e4, 0x04980, 0x04d2a, 0x050e1, 0x054a4,
    0x05872, 0x05c4a, 0x0602b, 0x06414, 0x06804, 0x06bfa, 0x06ff5, 0x073f4,
    0x077f6, 0x07bfb, 0x08000, 0x08405, 0x0880a, 0x08c0c, 0x0900b, 0x09406,
    0x097fc, 0x09bec, 0x09fd5, 0x0a3b6, 0x0a78e, 0x0ab5c, 0x0af1f, 0x0b2d6,
    0x0b680, 0x0ba1c, 0x0bdaa, 0x0c128, 0x0c496, 0x0c7f2, 0x0cb3d, 0x0ce74,
    0x0d197, 0x0d4a6, 0x0d79f, 0x0da82, 0x0dd4f, 0x0e004, 0x0e2a0, 0x0e524,
    0x0e78e, 0x0e9de, 0x0ec13, 0x0ee2d, 0x0f02b, 0x0f20d, 0x0f3d1, 0x0f579,
    0x0f703, 0x0f86f, 0x0f9bc, 0x0faeb, 0x0fbfb, 0x0fceb, 0x0fdbc, 0x0fe6d,
    0x0fefe, 0x0ff6f, 0x0ffbf, 0x0fff0, 0x10000,
];
