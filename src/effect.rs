/// One audio sample at full hardware scale.
///
/// The transport defines the actual bit width; narrower formats arrive
/// sign-extended. Effects apply no implicit scaling of their own.
pub type Sample = i32;

/// Core trait for per-sample audio effects.
///
/// Effects are stateful stream processors: each call consumes one input
/// sample and produces one output sample, with constant latency and no
/// allocation. State persists across calls for the life of the effect.
pub trait Effect {
    /// Process one sample.
    fn process(&mut self, input: Sample) -> Sample;

    /// Return to the start-of-day state: buffers cleared, cursors and gains
    /// at their initial values. Configuration is kept.
    fn reset(&mut self);
}
