//! Per-block effect dispatch.
//!
//! The chain owns both effects and, once per block, selects which one (if
//! any) the designated channel runs through, based on mode flags sampled by
//! the external switch reader. It is a thin stateless dispatcher: all signal
//! state lives inside the effects, and the chain never looks at it.

use crate::constants::{
    AUDIO_CHANNELS, ECHO_DAMPING, ECHO_FEEDBACK, FAST_PITCH_RATIO, SLOW_PITCH_RATIO,
};
use crate::effect::{Effect, Sample};
use crate::effects::{Echo, PitchRate, PitchShift};
use crate::error::ConfigError;

/// Which effect the designated channel runs through this block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EffectSelect {
    /// Copy input to output unchanged.
    #[default]
    Bypass,
    PitchShift,
    Echo,
}

/// Discrete mode inputs, sampled once per block by the external reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModeFlags {
    pub effect: EffectSelect,
    /// Rate switch: selects the fast pitch ratio instead of the slow one.
    pub fast_rate: bool,
    /// Force the designated channel's output to zero. Effect state still
    /// advances, so releasing mute resumes without a discontinuity.
    pub mute: bool,
}

/// Chain construction parameters. Defaults match the reference hardware:
/// stereo blocks, effect on the left channel, 0.6×/2.0× pitch ratios, echo
/// feedback 0.3 with damping 0.2.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainConfig {
    /// Interleaved channels per frame in a transport block.
    pub channels: usize,
    /// Which channel the effects process; the rest pass through untouched.
    pub channel: usize,
    pub slow_ratio: f32,
    pub fast_ratio: f32,
    pub echo_feedback: f32,
    pub echo_damping: f32,
}

impl Default for ChainConfig {
    fn default() -> Self {
        ChainConfig {
            channels: AUDIO_CHANNELS,
            channel: 0,
            slow_ratio: SLOW_PITCH_RATIO,
            fast_ratio: FAST_PITCH_RATIO,
            echo_feedback: ECHO_FEEDBACK,
            echo_damping: ECHO_DAMPING,
        }
    }
}

/// Owns the effects and drives one of them across each transport block.
#[derive(Debug)]
pub struct EffectChain {
    pitch: PitchShift,
    echo: Echo,
    slow: PitchRate,
    fast: PitchRate,
    channels: usize,
    channel: usize,
}

impl EffectChain {
    /// Validate the configuration and build the chain.
    ///
    /// Every parameter is checked here, before any audio moves; the
    /// per-block path is infallible.
    pub fn new(config: ChainConfig) -> Result<Self, ConfigError> {
        if config.channels == 0 {
            return Err(ConfigError::ZeroChannels);
        }
        if config.channel >= config.channels {
            return Err(ConfigError::ChannelOutOfRange {
                channel: config.channel,
                channels: config.channels,
            });
        }
        let slow = PitchRate::from_ratio(config.slow_ratio)?;
        let fast = PitchRate::from_ratio(config.fast_ratio)?;
        Ok(EffectChain {
            pitch: PitchShift::new(slow),
            echo: Echo::new(config.echo_feedback, config.echo_damping)?,
            slow,
            fast,
            channels: config.channels,
            channel: config.channel,
        })
    }

    /// Process one interleaved block in place.
    ///
    /// Runs the selected effect sample-by-sample over the designated
    /// channel; other channels are never touched. Rate selection applies at
    /// this block boundary only. Mute zeroes the designated channel *after*
    /// the effect has consumed the input, so internal state keeps advancing.
    ///
    /// Debug-asserts that the block holds whole frames.
    pub fn process_block(&mut self, block: &mut [Sample], modes: ModeFlags) {
        debug_assert_eq!(block.len() % self.channels, 0);

        if modes.effect == EffectSelect::PitchShift {
            self.pitch
                .set_rate(if modes.fast_rate { self.fast } else { self.slow });
        }

        for frame in block.chunks_exact_mut(self.channels) {
            let input = frame[self.channel];
            let output = match modes.effect {
                EffectSelect::Bypass => input,
                EffectSelect::PitchShift => self.pitch.process(input),
                EffectSelect::Echo => self.echo.process(input),
            };
            frame[self.channel] = if modes.mute { 0 } else { output };
        }
    }

    /// Reset both effects to their start-of-day state.
    pub fn reset(&mut self) {
        self.pitch.reset();
        self.echo.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::BLOCK_FRAMES;

    const BLOCK_LEN: usize = BLOCK_FRAMES * AUDIO_CHANNELS;

    fn chain() -> EffectChain {
        EffectChain::new(ChainConfig::default()).unwrap()
    }

    /// Interleaved stereo block: a ramp on the left, a marker on the right.
    fn test_block(offset: i32) -> [Sample; BLOCK_LEN] {
        let mut block = [0; BLOCK_LEN];
        for (i, frame) in block.chunks_exact_mut(AUDIO_CHANNELS).enumerate() {
            frame[0] = offset + i as Sample;
            frame[1] = -(offset + i as Sample) - 7;
        }
        block
    }

    // ── Construction ──────────────────────────────────────────────────

    #[test]
    fn config_validated_up_front() {
        let bad_channel = ChainConfig {
            channel: 2,
            ..ChainConfig::default()
        };
        assert_eq!(
            EffectChain::new(bad_channel).unwrap_err(),
            ConfigError::ChannelOutOfRange { channel: 2, channels: 2 }
        );

        let no_channels = ChainConfig {
            channels: 0,
            ..ChainConfig::default()
        };
        assert_eq!(
            EffectChain::new(no_channels).unwrap_err(),
            ConfigError::ZeroChannels
        );

        let bad_ratio = ChainConfig {
            slow_ratio: -0.5,
            ..ChainConfig::default()
        };
        assert!(EffectChain::new(bad_ratio).is_err());

        let bad_echo = ChainConfig {
            echo_feedback: 2.0,
            ..ChainConfig::default()
        };
        assert!(EffectChain::new(bad_echo).is_err());
    }

    // ── Dispatch ──────────────────────────────────────────────────────

    #[test]
    fn bypass_copies_input() {
        let mut chain = chain();
        let original = test_block(100);
        let mut block = original;
        chain.process_block(&mut block, ModeFlags::default());
        assert_eq!(block, original);
    }

    #[test]
    fn other_channel_never_touched() {
        let mut chain = chain();
        for select in [EffectSelect::PitchShift, EffectSelect::Echo] {
            let original = test_block(0);
            let mut block = original;
            let modes = ModeFlags {
                effect: select,
                mute: true,
                ..ModeFlags::default()
            };
            chain.process_block(&mut block, modes);
            for (frame, orig) in block
                .chunks_exact(AUDIO_CHANNELS)
                .zip(original.chunks_exact(AUDIO_CHANNELS))
            {
                assert_eq!(frame[1], orig[1], "right channel modified by {select:?}");
            }
        }
    }

    #[test]
    fn mute_zeroes_designated_channel() {
        let mut chain = chain();
        let mut block = test_block(1000);
        let modes = ModeFlags {
            effect: EffectSelect::PitchShift,
            mute: true,
            ..ModeFlags::default()
        };
        chain.process_block(&mut block, modes);
        for frame in block.chunks_exact(AUDIO_CHANNELS) {
            assert_eq!(frame[0], 0);
        }
    }

    #[test]
    fn mute_does_not_stall_effect_state() {
        // Two chains fed identical input; one is muted for a stretch in the
        // middle. After unmuting, their outputs must be identical — muting
        // overrides the output without freezing the effect.
        let mut muted = chain();
        let mut reference = chain();

        for block_index in 0..40 {
            let mute_now = (10..20).contains(&block_index);
            let modes = |mute| ModeFlags {
                effect: EffectSelect::PitchShift,
                fast_rate: true,
                mute,
            };

            let mut a = test_block(block_index * BLOCK_FRAMES as i32);
            let mut b = a;
            muted.process_block(&mut a, modes(mute_now));
            reference.process_block(&mut b, modes(false));

            if mute_now {
                for frame in a.chunks_exact(AUDIO_CHANNELS) {
                    assert_eq!(frame[0], 0, "muted block must be silent");
                }
            } else {
                assert_eq!(a, b, "block {block_index} diverged after unmute");
            }
        }
    }

    #[test]
    fn rate_switch_changes_playback_speed() {
        // Prime two chains identically, then diverge the rate switch; the
        // pitch read cursors drift apart, so outputs must differ.
        let mut slow = chain();
        let mut fast = chain();
        let pitch = |fast_rate| ModeFlags {
            effect: EffectSelect::PitchShift,
            fast_rate,
            ..ModeFlags::default()
        };

        let mut diverged = false;
        for block_index in 0..60 {
            let mut a = test_block(block_index * BLOCK_FRAMES as i32);
            let mut b = a;
            slow.process_block(&mut a, pitch(false));
            fast.process_block(&mut b, pitch(true));
            if a != b {
                diverged = true;
            }
        }
        assert!(diverged, "slow and fast rates produced identical audio");
    }

    #[test]
    fn echo_selection_reaches_the_echo() {
        let mut chain = chain();
        let modes = ModeFlags {
            effect: EffectSelect::Echo,
            ..ModeFlags::default()
        };
        // Echo outputs the delayed tap only: the first blocks are silent on
        // the designated channel even with a loud input.
        let mut block = [1 << 20; BLOCK_LEN];
        chain.process_block(&mut block, modes);
        for frame in block.chunks_exact(AUDIO_CHANNELS) {
            assert_eq!(frame[0], 0);
            assert_eq!(frame[1], 1 << 20);
        }
    }

    #[test]
    fn reset_restarts_both_effects() {
        let mut chain = chain();
        let modes = ModeFlags {
            effect: EffectSelect::PitchShift,
            ..ModeFlags::default()
        };
        let mut first = test_block(1);
        let original = first;
        chain.process_block(&mut first, modes);
        chain.reset();
        let mut again = original;
        chain.process_block(&mut again, modes);
        assert_eq!(first, again, "reset must reproduce the cold-start output");
    }
}
