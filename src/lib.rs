//! # loopfx
//!
//! A `no_std`, zero-allocation audio effects core for live loopback
//! processors: a granular dual-tap pitch shifter and a damped feedback echo
//! operating sample-by-sample on a continuous stream of signed 32-bit audio,
//! with a thin per-block driver that dispatches between them.
//!
//! The hardware shell — codec bring-up, I²S transport, mode-switch reading —
//! stays outside this crate. The transport hands the driver fixed-size blocks
//! of interleaved samples and takes them back; the mode reader hands it a
//! [`ModeFlags`](chain::ModeFlags) once per block.
//!
//! ## Architecture
//!
//! | Layer | Module | Purpose |
//! |-------|--------|---------|
//! | Math | [`dsp`] | Q16.16 fixed-point helpers, crossfade wavetable |
//! | Storage | [`ring`] | Circular sample buffer with interpolated taps, delay line |
//! | Trait | [`effect`] | `Effect` per-sample processing trait |
//! | Effects | [`effects`] | Pitch shifter, echo |
//! | Driver | [`chain`] | Per-block effect selection, mute, rate switching |
//!
//! ## Quick start
//!
//! ```ignore
//! use loopfx::chain::{ChainConfig, EffectChain, EffectSelect, ModeFlags};
//!
//! let mut chain = EffectChain::new(ChainConfig::default())?;
//!
//! // In the transport loop, once per block:
//! let modes = ModeFlags {
//!     effect: EffectSelect::PitchShift,
//!     fast_rate: true,
//!     mute: false,
//! };
//! chain.process_block(&mut block, modes);
//! ```
//!
//! ## Audio parameters
//!
//! - **Block size:** 48 stereo frames ([`constants::BLOCK_FRAMES`])
//! - **Sample rate:** 48 kHz ([`constants::SAMPLE_RATE`])
//! - **Sample format:** `i32` (signed, full scale hardware-defined)
//! - **Pitch buffer:** 2048 samples; **echo delay:** 19 999 samples
//!
//! ## Real-time contract
//!
//! Nothing here blocks or allocates. All buffers live inline in the effect
//! state and are sized at compile time; configuration is validated before
//! processing starts and the per-sample path is infallible.

#![no_std]

pub mod constants;
pub mod error;
pub mod dsp;
pub mod ring;
pub mod effect;
pub mod effects;
pub mod chain;
