//! Circular sample history with power-of-two length.
//!
//! [`MaskedDelay`] stores recent input history for tap-delay effects. The
//! length is always a power of two so read/write cursors can wrap with a
//! bitmask AND instead of a modulo. Cursor masking is the caller's job:
//! the hot loop masks once per chunk, then indexes directly (see the echo
//! effect's block loop in `resono-effects`).

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std as alloc;

use alloc::vec;
use alloc::vec::Vec;

/// Circular delay history sized to a power of two.
///
/// Freshly constructed, the buffer is empty: callers must [`resize`]
/// before indexing. [`mask`] on an empty buffer returns `None` so the
/// degenerate `0 - 1` mask can never be computed.
///
/// # Example
///
/// ```rust
/// use resono_core::MaskedDelay;
///
/// let mut history = MaskedDelay::new();
/// history.resize(1000); // rounds up to 1024
/// assert_eq!(history.len(), 1024);
///
/// let mask = history.mask().unwrap();
/// history.write(1500 & mask, 0.5);
/// assert_eq!(history.read(1500 & mask), 0.5);
/// ```
///
/// [`resize`]: MaskedDelay::resize
/// [`mask`]: MaskedDelay::mask
#[derive(Debug, Clone, Default)]
pub struct MaskedDelay {
    buffer: Vec<f32>,
}

impl MaskedDelay {
    /// Create an empty delay history.
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Resize the history to hold at least `required` samples, rounded up
    /// to the next power of two.
    ///
    /// Reallocates and zero-fills only when the rounded length actually
    /// differs from the current one; old history is meaningless after a
    /// length change, but an unchanged length keeps its contents.
    ///
    /// Returns `true` if a reallocation happened.
    pub fn resize(&mut self, required: usize) -> bool {
        let maxlen = required.max(1).next_power_of_two();
        if maxlen == self.buffer.len() {
            return false;
        }
        self.buffer = vec![0.0; maxlen];
        true
    }

    /// Length of the history in samples. Zero until the first [`resize`].
    ///
    /// [`resize`]: MaskedDelay::resize
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if [`resize`] has never been called.
    ///
    /// [`resize`]: MaskedDelay::resize
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Index wrap mask (`len - 1`), or `None` while the buffer is empty.
    #[inline]
    pub fn mask(&self) -> Option<usize> {
        self.buffer.len().checked_sub(1)
    }

    /// Read the sample at `index`. The caller keeps `index` in range by
    /// masking with [`mask`].
    ///
    /// [`mask`]: MaskedDelay::mask
    #[inline]
    pub fn read(&self, index: usize) -> f32 {
        self.buffer[index]
    }

    /// Overwrite the sample at `index`.
    #[inline]
    pub fn write(&mut self, index: usize, sample: f32) {
        self.buffer[index] = sample;
    }

    /// Add `sample` onto the value already stored at `index`. Used by the
    /// feedback path, which sums onto the just-written input sample.
    #[inline]
    pub fn add(&mut self, index: usize, sample: f32) {
        self.buffer[index] += sample;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_rounds_to_power_of_two() {
        let mut delay = MaskedDelay::new();
        delay.resize(1000);
        assert_eq!(delay.len(), 1024);

        delay.resize(1025);
        assert_eq!(delay.len(), 2048);

        delay.resize(4096);
        assert_eq!(delay.len(), 4096);
    }

    #[test]
    fn test_resize_length_covers_requirement() {
        for required in [1usize, 3, 100, 9999, 29315] {
            let mut delay = MaskedDelay::new();
            delay.resize(required);
            assert!(delay.len() >= required);
            assert!(delay.len().is_power_of_two());
        }
    }

    #[test]
    fn test_resize_idempotent_keeps_contents() {
        let mut delay = MaskedDelay::new();
        assert!(delay.resize(500));
        delay.write(100, 0.75);

        // Same rounded length: no reallocation, contents untouched.
        assert!(!delay.resize(600));
        assert_eq!(delay.read(100), 0.75);

        // Different rounded length: fresh zeroed buffer.
        assert!(delay.resize(2000));
        assert_eq!(delay.read(100), 0.0);
    }

    #[test]
    fn test_empty_buffer_has_no_mask() {
        let delay = MaskedDelay::new();
        assert!(delay.is_empty());
        assert!(delay.mask().is_none());
    }

    #[test]
    fn test_mask_wraps_wrapping_cursor() {
        let mut delay = MaskedDelay::new();
        delay.resize(8);
        let mask = delay.mask().unwrap();

        // An "offset - tap" cursor computed with wrapping arithmetic masks
        // back into range because the length divides 2^64.
        let offset = 3usize;
        let tap = 5usize;
        let cursor = offset.wrapping_sub(tap) & mask;
        assert_eq!(cursor, 6);

        delay.write(cursor, 1.0);
        assert_eq!(delay.read(6), 1.0);
    }

    #[test]
    fn test_add_accumulates() {
        let mut delay = MaskedDelay::new();
        delay.resize(4);
        delay.write(2, 0.5);
        delay.add(2, 0.25);
        assert_eq!(delay.read(2), 0.75);
    }
}
