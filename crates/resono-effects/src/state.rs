//! The effect-state capability interface and host-supplied context types.
//!
//! The host drives every effect through three operations, strictly
//! serialized against each other per instance:
//!
//! 1. [`EffectState::device_update`] once per device or sample-rate
//!    change (reallocates; must never overlap a `process` in flight),
//! 2. [`EffectState::update`] on parameter changes (writes targets and
//!    coefficients only, never buffer contents),
//! 3. [`EffectState::process`] once per audio block on the render thread.
//!
//! Concrete effects form a closed set of [`EffectProps`] variants; the
//! registry crate maps string identifiers onto their constructors.

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std as alloc;

use alloc::vec::Vec;

use crate::props::EchoProps;
use resono_core::MAX_AMBI_CHANNELS;

/// Output device description consumed by effect configuration.
#[derive(Debug, Clone, Copy)]
pub struct DeviceContext {
    /// Output sample rate in Hz.
    pub sample_rate: u32,
    /// Channel count of the ambisonic output bus.
    pub channels: usize,
}

impl DeviceContext {
    /// Describe a device with the given sample rate and a full
    /// first-order bus.
    pub fn new(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            channels: MAX_AMBI_CHANNELS,
        }
    }

    /// Override the output bus channel count, capped at
    /// [`MAX_AMBI_CHANNELS`].
    pub fn with_channels(mut self, channels: usize) -> Self {
        self.channels = channels.min(MAX_AMBI_CHANNELS);
        self
    }
}

/// Host effect-slot state an effect reads during `update`.
#[derive(Debug, Clone, Copy)]
pub struct EffectSlot {
    /// Wet-level gain applied on top of the panning coefficients.
    pub gain: f32,
}

impl Default for EffectSlot {
    fn default() -> Self {
        Self { gain: 1.0 }
    }
}

/// Parameters for each concrete effect type, as produced by the host
/// parameter layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EffectProps {
    /// Two-tap echo with damped feedback.
    Echo(EchoProps),
}

/// Per-instance processing state of an effect.
///
/// Implementations own all cross-block state (sample history, filter
/// recurrences, gain ramps). Construction gives a zeroed instance; the
/// first `device_update` makes it processable.
pub trait EffectState {
    /// Reconfigure for an output device. Reallocates the sample history
    /// when the required length changes and resets mixing gains.
    fn device_update(&mut self, device: &DeviceContext);

    /// Recompute tap offsets, filter coefficients, and target gains from
    /// new parameters. Leaves history contents and filter state alone so
    /// audio stays continuous through parameter changes.
    fn update(&mut self, device: &DeviceContext, slot: &EffectSlot, props: &EffectProps);

    /// Process one block: consume `samples_to_do` samples of the mono
    /// `input` and accumulate into the channels of `output`.
    ///
    /// Before the first `device_update` this is a no-op (nothing is
    /// accumulated).
    fn process(&mut self, samples_to_do: usize, input: &[f32], output: &mut [Vec<f32>]);
}
