//! Gain-crossfaded mixing into a multi-channel bus.
//!
//! [`mix_fade`] is the de-click primitive for spatialized effects: a mono
//! source is summed into every bus channel through a per-channel gain
//! that ramps linearly from its current value to a target over the block.
//! Parameter changes between blocks only ever move the target, so the
//! audible gain is continuous across block boundaries.

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std as alloc;

use alloc::vec::Vec;

/// Gains below this are treated as silence; channels where both the
/// current and target gain sit under the threshold are skipped entirely.
pub const SILENCE_GAIN_THRESHOLD: f32 = 0.00001;

/// A per-channel gain ramp endpoint pair.
///
/// `current` converges onto `target` by the end of every block at least
/// as long as the fade window; the next block then fades from wherever
/// `current` landed if `target` moved again.
#[derive(Debug, Clone, Copy)]
pub struct FadeGains<const N: usize> {
    /// Gains in effect at the start of the block.
    pub current: [f32; N],
    /// Gains the block interpolates toward.
    pub target: [f32; N],
}

impl<const N: usize> Default for FadeGains<N> {
    fn default() -> Self {
        Self {
            current: [0.0; N],
            target: [0.0; N],
        }
    }
}

impl<const N: usize> FadeGains<N> {
    /// Reset both endpoints to silence.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Sum `src` into each channel of `dst` with a linear per-channel gain
/// ramp from `current[c]` to `target[c]` over `src.len()` samples.
///
/// Accumulates (adds) into the destination, never overwrites. After the
/// block, `current[c]` is set to `target[c]`: the fade window equals the
/// block length, so the ramp always resolves by block end.
///
/// Channels beyond `current.len().min(target.len())` are left untouched.
///
/// # Panics
///
/// Panics if a destination channel is shorter than `src`.
pub fn mix_fade(src: &[f32], dst: &mut [Vec<f32>], current: &mut [f32], target: &[f32]) {
    let samples = src.len();
    if samples == 0 {
        // Zero-length block: nothing to fade over, endpoints keep.
        return;
    }
    let step = 1.0 / samples as f32;

    for (c, channel) in dst.iter_mut().enumerate() {
        let (Some(cur), Some(&tgt)) = (current.get_mut(c), target.get(c)) else {
            break;
        };
        let start = *cur;
        *cur = tgt;
        if start.abs() < SILENCE_GAIN_THRESHOLD && tgt.abs() < SILENCE_GAIN_THRESHOLD {
            continue;
        }

        let out = &mut channel[..samples];
        let diff = tgt - start;
        for (i, (o, &s)) in out.iter_mut().zip(src).enumerate() {
            let gain = start + diff * (i as f32 * step);
            *o += s * gain;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bus(channels: usize, len: usize) -> Vec<Vec<f32>> {
        (0..channels).map(|_| vec![0.0; len]).collect()
    }

    #[test]
    fn test_constant_gain_accumulates() {
        let src = [1.0, 2.0, 3.0, 4.0];
        let mut dst = bus(2, 4);
        dst[1][0] = 10.0;
        let mut current = [0.5, 1.0];
        let target = [0.5, 1.0];

        mix_fade(&src, &mut dst, &mut current, &target);

        assert_eq!(dst[0], vec![0.5, 1.0, 1.5, 2.0]);
        assert_eq!(dst[1], vec![11.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_fade_resolves_to_target() {
        let src = [1.0; 8];
        let mut dst = bus(1, 8);
        let mut current = [0.0];
        let target = [1.0];

        mix_fade(&src, &mut dst, &mut current, &target);

        assert_eq!(current[0], 1.0);
        // First sample uses the old gain exactly.
        assert_eq!(dst[0][0], 0.0);
        // Ramp is monotonic toward the target.
        for w in dst[0].windows(2) {
            assert!(w[1] >= w[0]);
        }
    }

    #[test]
    fn test_fade_never_overshoots_endpoints() {
        let src = [1.0; 16];
        let mut dst = bus(1, 16);
        let mut current = [0.8];
        let target = [0.2];

        mix_fade(&src, &mut dst, &mut current, &target);

        for &v in &dst[0] {
            assert!(v <= 0.8 + 1e-6 && v >= 0.2 - 1e-6, "gain overshoot: {v}");
        }
    }

    #[test]
    fn test_silent_channels_skipped_but_endpoint_kept() {
        let src = [1.0; 4];
        let mut dst = bus(1, 4);
        let mut current = [0.0];
        let target = [0.0];

        mix_fade(&src, &mut dst, &mut current, &target);
        assert_eq!(dst[0], vec![0.0; 4]);
        assert_eq!(current[0], 0.0);
    }

    #[test]
    fn test_settled_gains_are_split_invariant() {
        // With current == target the interpolation is constant, so
        // mixing a block in one call or two must be bit-identical.
        let src: Vec<f32> = (0..32).map(|i| (i as f32 * 0.3).sin()).collect();

        let mut dst_whole = bus(2, 32);
        let mut cur_whole = [0.7, 0.3];
        mix_fade(&src, &mut dst_whole, &mut cur_whole, &[0.7, 0.3]);

        let mut dst_split = bus(2, 32);
        let mut cur_split = [0.7, 0.3];
        let (head, tail) = src.split_at(11);
        mix_fade(head, &mut dst_split, &mut cur_split, &[0.7, 0.3]);
        let mut tail_bus = bus(2, tail.len());
        mix_fade(tail, &mut tail_bus, &mut cur_split, &[0.7, 0.3]);
        for c in 0..2 {
            dst_split[c].truncate(11);
            dst_split[c].extend_from_slice(&tail_bus[c]);
        }

        assert_eq!(dst_whole, dst_split);
    }

    #[test]
    fn test_extra_bus_channels_untouched() {
        let src = [1.0; 4];
        let mut dst = bus(3, 4);
        let mut current = [1.0, 1.0];
        let target = [1.0, 1.0];

        mix_fade(&src, &mut dst, &mut current, &target);
        assert_eq!(dst[2], vec![0.0; 4]);
    }
}
