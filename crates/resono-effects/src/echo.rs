//! Two-tap echo with a damped feedback loop.
//!
//! The echo keeps a power-of-two circular history of the input and reads
//! two taps behind the write cursor. The first tap is the primary delay;
//! the second adds the spread delay and doubles as the feedback source.
//! Feedback runs through a persistent high-shelf damping filter, is
//! attenuated, and is summed back onto the freshly written input sample,
//! so it only ever affects future reads. Each tap is panned to a
//! mirrored direction on the ambisonic bus and mixed in with a
//! block-length gain crossfade.

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std as alloc;

use alloc::vec;
use alloc::vec::Vec;

use libm::{roundf, sqrtf};
use resono_core::{
    FadeGains, HighShelf, MAX_AMBI_CHANNELS, MaskedDelay, ambi_coeffs, compute_pan_gains,
    flush_denormal, mix_fade,
};

use crate::props::{ECHO_MAX_DELAY, ECHO_MAX_LRDELAY};
use crate::state::{DeviceContext, EffectProps, EffectSlot, EffectState};

/// Corner frequency of the feedback damping shelf, in Hz.
const DAMPING_FREQ_REF: f32 = 5000.0;

/// Floor on the shelf's high-frequency gain (about -24 dB). Keeps full
/// damping from collapsing the feedback path to exact silence or pushing
/// the filter to its numeric extreme.
const MIN_DAMPING_GAIN_HF: f32 = 0.0625;

/// Longest block a single `process` call may cover. The per-tap scratch
/// buffers are allocated to this length up front so the audio path never
/// allocates.
pub const MAX_BLOCK_SAMPLES: usize = 1024;

/// Processing state of one echo instance.
///
/// Created zeroed via [`EchoState::new`]; the host must run
/// [`device_update`] before the first [`process`] (the registry's
/// `create` does this automatically). [`update`] may then retarget taps
/// and gains at any block boundary without disturbing the ringing
/// history or the filter recurrence.
///
/// [`device_update`]: EffectState::device_update
/// [`update`]: EffectState::update
/// [`process`]: EffectState::process
#[derive(Debug, Clone)]
pub struct EchoState {
    history: MaskedDelay,
    /// Tap offsets in samples behind the write cursor. `taps[0] >= 1`,
    /// `taps[1] >= taps[0]`.
    taps: [usize; 2],
    /// Next write position.
    offset: usize,
    /// Per-tap panning gain ramps.
    gains: [FadeGains<MAX_AMBI_CHANNELS>; 2],
    /// Feedback damping filter. State persists across blocks; reset only
    /// by a device reconfiguration that reallocates the history.
    filter: HighShelf,
    feed_gain: f32,
    /// Per-tap scratch output, mixed onto the bus after the block loop.
    taps_out: [Vec<f32>; 2],
}

impl EchoState {
    /// Create a fresh, silent instance with an empty history buffer.
    pub fn new() -> Self {
        Self {
            history: MaskedDelay::new(),
            taps: [1, 1],
            offset: 0,
            gains: [FadeGains::default(); 2],
            filter: HighShelf::new(),
            feed_gain: 0.0,
            taps_out: [
                vec![0.0; MAX_BLOCK_SAMPLES],
                vec![0.0; MAX_BLOCK_SAMPLES],
            ],
        }
    }

    /// Length of the sample history in samples. Zero until the first
    /// device update; a power of two afterwards.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

impl Default for EchoState {
    fn default() -> Self {
        Self::new()
    }
}

impl EffectState for EchoState {
    fn device_update(&mut self, device: &DeviceContext) {
        let frequency = device.sample_rate as f32;

        // Both engine maxima must fit simultaneously; MaskedDelay rounds
        // the sum up to a power of two.
        let required = roundf(ECHO_MAX_DELAY * frequency) as usize
            + roundf(ECHO_MAX_LRDELAY * frequency) as usize;
        let reallocated = self.history.resize(required);
        if reallocated {
            // Old cursor positions and filter history refer to a buffer
            // that no longer exists.
            self.offset = 0;
            self.filter.clear();
        }

        for gains in &mut self.gains {
            gains.clear();
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            sample_rate = device.sample_rate,
            history_len = self.history.len(),
            reallocated,
            "echo device_update"
        );
    }

    fn update(&mut self, device: &DeviceContext, slot: &EffectSlot, props: &EffectProps) {
        let EffectProps::Echo(props) = props;
        let frequency = device.sample_rate as f32;

        // A zero primary delay would collapse the feedback loop into a
        // same-sample pass-through, so floor it at one sample.
        self.taps[0] = (roundf(props.delay * frequency) as usize).max(1);
        self.taps[1] = roundf(props.lr_delay * frequency) as usize + self.taps[0];

        let gain_hf = (1.0 - props.damping).max(MIN_DAMPING_GAIN_HF);
        self.filter.set_params(DAMPING_FREQ_REF / frequency, gain_hf);

        self.feed_gain = props.feedback;

        // Project the spread onto the unit circle: 0 = straight ahead,
        // +/-1 = hard to either side. The clamp keeps a hostile spread
        // from turning sqrt into NaN and poisoning the whole bus.
        let x = props.spread.clamp(-1.0, 1.0);
        let z = sqrtf(1.0 - x * x);

        // Mirrored directions for the two taps; only the targets move so
        // the next block crossfades from whatever was active.
        let coeffs = [ambi_coeffs(x, 0.0, z), ambi_coeffs(-x, 0.0, z)];
        for (gains, coeffs) in self.gains.iter_mut().zip(&coeffs) {
            compute_pan_gains(device.channels, coeffs, slot.gain, &mut gains.target);
        }
    }

    fn process(&mut self, samples_to_do: usize, input: &[f32], output: &mut [Vec<f32>]) {
        // Unconfigured instance: nothing sensible to mask with.
        let Some(mask) = self.history.mask() else {
            return;
        };
        debug_assert!(samples_to_do > 0);
        debug_assert!(samples_to_do <= MAX_BLOCK_SAMPLES);
        let samples_to_do = samples_to_do.min(MAX_BLOCK_SAMPLES);
        let input = &input[..samples_to_do];

        let history = &mut self.history;
        let filter = &mut self.filter;
        let feed_gain = self.feed_gain;
        let [out1, out2] = &mut self.taps_out;

        let mut offset = self.offset;
        // Unsigned wraparound is intentional: the mask folds the
        // wrapped difference back into the buffer because the
        // power-of-two length divides 2^64.
        let mut tap1 = offset.wrapping_sub(self.taps[0]);
        let mut tap2 = offset.wrapping_sub(self.taps[1]);

        // Process in chunks sized so that none of the three cursors can
        // wrap mid-run; the wrap check then happens once per chunk
        // instead of once per sample.
        let mut i = 0;
        while i < samples_to_do {
            offset &= mask;
            tap1 &= mask;
            tap2 &= mask;

            let max_cursor = offset.max(tap1).max(tap2);
            let mut todo = (mask + 1 - max_cursor).min(samples_to_do - i);
            while todo > 0 {
                // Feed the history's input first: both taps observe the
                // already-decaying past, never this sample's feedback.
                history.write(offset, input[i]);

                // The second tap is also the feedback source.
                out1[i] = history.read(tap1);
                tap1 += 1;
                let feedb = history.read(tap2);
                out2[i] = feedb;
                tap2 += 1;
                i += 1;

                // Damped, attenuated feedback sums on top of the input
                // sample written above; it only affects future reads.
                history.add(offset, flush_denormal(filter.process_one(feedb)) * feed_gain);
                offset += 1;
                todo -= 1;
            }
        }
        self.offset = offset & mask;

        for (tap_out, gains) in self.taps_out.iter().zip(&mut self.gains) {
            mix_fade(
                &tap_out[..samples_to_do],
                output,
                &mut gains.current,
                &gains.target,
            );
        }
    }
}
