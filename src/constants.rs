/// Audio sample rate in Hz (fixed by the external transport's clocking).
pub const SAMPLE_RATE: u32 = 48_000;

/// Number of frames per transport block.
pub const BLOCK_FRAMES: usize = 48;

/// Number of interleaved channels in a transport block.
pub const AUDIO_CHANNELS: usize = 2;

/// Pitch shifter circular buffer length in samples. Must be a power of two.
pub const PITCH_BUFFER_LEN: usize = 2048;

/// Echo delay line length in samples. The effective delay is one sample less.
pub const ECHO_BUFFER_LEN: usize = 20_000;

/// Default "slow" pitch ratio selected when the rate switch is low.
pub const SLOW_PITCH_RATIO: f32 = 0.6;

/// Default "fast" pitch ratio selected when the rate switch is high.
pub const FAST_PITCH_RATIO: f32 = 2.0;

/// Default echo feedback gain.
pub const ECHO_FEEDBACK: f32 = 0.3;

/// Default echo damping coefficient.
pub const ECHO_DAMPING: f32 = 0.2;
