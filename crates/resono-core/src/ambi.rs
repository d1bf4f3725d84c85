//! First-order ambisonic panning coefficients.
//!
//! Effects in resono mix into a first-order ambisonic bus (ACN channel
//! ordering, N3D normalization). This module turns a direction vector
//! into the per-channel encoding coefficients and scales them into
//! target mixing gains.

use libm::sqrtf;

/// Channel count of a full first-order ambisonic bus (W, Y, Z, X).
pub const MAX_AMBI_CHANNELS: usize = 4;

/// Encoding coefficients for a direction vector.
///
/// The vector convention matches the effects' panning math: `+x` is
/// left, `+y` is up, `+z` is forward. The input should be close to unit
/// length; it is not re-normalized here.
///
/// Returns ACN-ordered, N3D-scaled coefficients `[W, Y, Z, X]`.
pub fn ambi_coeffs(x: f32, y: f32, z: f32) -> [f32; MAX_AMBI_CHANNELS] {
    let sqrt3 = sqrtf(3.0);
    [1.0, sqrt3 * y, sqrt3 * z, sqrt3 * x]
}

/// Scale encoding coefficients by a wet-level gain into per-channel
/// mixing targets.
///
/// Channels past `channel_count` are zeroed so a narrower bus never
/// inherits stale gains from a previous, wider configuration.
pub fn compute_pan_gains(
    channel_count: usize,
    coeffs: &[f32; MAX_AMBI_CHANNELS],
    in_gain: f32,
    gains: &mut [f32; MAX_AMBI_CHANNELS],
) {
    let channel_count = channel_count.min(MAX_AMBI_CHANNELS);
    for (c, gain) in gains.iter_mut().enumerate() {
        *gain = if c < channel_count { coeffs[c] * in_gain } else { 0.0 };
    }
}
