use core::fmt;

/// Rejected configuration, reported before any processing starts.
///
/// All parameter validation happens at construction/configuration time; the
/// per-sample processing path never fails.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Pitch ratio was zero, negative, or not finite.
    InvalidPitchRatio(f32),
    /// Echo feedback gain outside `[0, 1]`.
    FeedbackOutOfRange(f32),
    /// Echo damping coefficient outside `[0, 1]`.
    DampingOutOfRange(f32),
    /// Block channel count was zero.
    ZeroChannels,
    /// Designated channel index not below the channel count.
    ChannelOutOfRange { channel: usize, channels: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ConfigError::InvalidPitchRatio(r) => {
                write!(f, "pitch ratio must be positive and finite, got {r}")
            }
            ConfigError::FeedbackOutOfRange(g) => {
                write!(f, "echo feedback must be in [0, 1], got {g}")
            }
            ConfigError::DampingOutOfRange(d) => {
                write!(f, "echo damping must be in [0, 1], got {d}")
            }
            ConfigError::ZeroChannels => write!(f, "block channel count must be nonzero"),
            ConfigError::ChannelOutOfRange { channel, channels } => {
                write!(f, "channel {channel} out of range for {channels}-channel blocks")
            }
        }
    }
}
