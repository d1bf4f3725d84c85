//! One-stage high-shelf filter for feedback damping.
//!
//! Coefficients come from the RBJ Audio EQ Cookbook high-shelf formula
//! with unity slope. The filter runs in transposed direct form II, so the
//! entire recurrence state is two accumulator values that persist across
//! block boundaries for the lifetime of the owning effect.

use libm::{cosf, sinf, sqrtf};

/// High-shelf filter in transposed direct form II.
///
/// ```text
/// y[n] = b0*x[n] + z1
/// z1   = b1*x[n] - a1*y[n] + z2
/// z2   = b2*x[n] - a2*y[n]
/// ```
///
/// `z1`/`z2` are the only state; they are mutated exactly once per
/// processed sample, in sample order. Callers that need the recurrence to
/// survive across calls (echo feedback paths) simply keep the struct
/// alive and never call [`clear`] between blocks.
///
/// [`clear`]: HighShelf::clear
#[derive(Debug, Clone)]
pub struct HighShelf {
    b0: f32,
    b1: f32,
    b2: f32,
    a1: f32,
    a2: f32,
    z1: f32,
    z2: f32,
}

impl HighShelf {
    /// Create a passthrough filter (unity shelf gain, cleared state).
    pub fn new() -> Self {
        Self {
            b0: 1.0,
            b1: 0.0,
            b2: 0.0,
            a1: 0.0,
            a2: 0.0,
            z1: 0.0,
            z2: 0.0,
        }
    }

    /// Recompute coefficients for a corner at normalized frequency
    /// `f0_norm` (corner Hz / sample rate) with linear amplitude gain
    /// `gain_hf` above the corner. Unity gain below the corner.
    ///
    /// State is left untouched so the recurrence stays continuous when
    /// parameters change mid-stream.
    pub fn set_params(&mut self, f0_norm: f32, gain_hf: f32) {
        // RBJ cookbook: shelf "A" is the square root of the linear gain,
        // slope fixed at 1.
        let a = sqrtf(gain_hf);
        let w0 = 2.0 * core::f32::consts::PI * f0_norm;
        let cos_w0 = cosf(w0);
        let sin_w0 = sinf(w0);
        let alpha = sin_w0 * 0.5 * core::f32::consts::SQRT_2;
        let sqrt_a_2 = 2.0 * sqrtf(a) * alpha;

        let b0 = a * ((a + 1.0) + (a - 1.0) * cos_w0 + sqrt_a_2);
        let b1 = -2.0 * a * ((a - 1.0) + (a + 1.0) * cos_w0);
        let b2 = a * ((a + 1.0) + (a - 1.0) * cos_w0 - sqrt_a_2);
        let a0 = (a + 1.0) - (a - 1.0) * cos_w0 + sqrt_a_2;
        let a1 = 2.0 * ((a - 1.0) - (a + 1.0) * cos_w0);
        let a2 = (a + 1.0) - (a - 1.0) * cos_w0 - sqrt_a_2;

        let a0_inv = 1.0 / a0;
        self.b0 = b0 * a0_inv;
        self.b1 = b1 * a0_inv;
        self.b2 = b2 * a0_inv;
        self.a1 = a1 * a0_inv;
        self.a2 = a2 * a0_inv;
    }

    /// Process one sample, advancing the two-value recurrence.
    #[inline]
    pub fn process_one(&mut self, input: f32) -> f32 {
        let output = self.b0 * input + self.z1;
        self.z1 = self.b1 * input - self.a1 * output + self.z2;
        self.z2 = self.b2 * input - self.a2 * output;
        output
    }

    /// Zero the accumulator state without touching coefficients.
    pub fn clear(&mut self) {
        self.z1 = 0.0;
        self.z2 = 0.0;
    }
}

impl Default for HighShelf {
    fn default() -> Self {
        Self::new()
    }
}
