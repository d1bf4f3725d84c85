//! Echo effect parameters and host-side validation.

use thiserror::Error;

/// Maximum primary tap delay in seconds.
pub const ECHO_MAX_DELAY: f32 = 0.207;

/// Maximum extra delay of the second tap, in seconds.
pub const ECHO_MAX_LRDELAY: f32 = 0.404;

/// Maximum damping amount.
pub const ECHO_MAX_DAMPING: f32 = 0.99;

/// Parameters of the two-tap echo.
///
/// The DSP core assumes these are in range (see [`EchoProps::validate`]);
/// the only defensive measures it keeps are the ones with numeric
/// consequences (a 1-sample delay floor, the damping gain floor, and a
/// spread clamp ahead of the `sqrt(1 - x^2)` projection).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EchoProps {
    /// Primary tap delay in seconds, up to [`ECHO_MAX_DELAY`].
    pub delay: f32,
    /// Extra delay of the second tap in seconds, up to
    /// [`ECHO_MAX_LRDELAY`].
    pub lr_delay: f32,
    /// High-frequency damping of the feedback path, 0 (bright) to
    /// [`ECHO_MAX_DAMPING`] (dark).
    pub damping: f32,
    /// Linear feedback gain in [0, 1].
    pub feedback: f32,
    /// Stereo spread in [-1, 1]: 0 pans both taps to center, +/-1 pans
    /// them hard to opposite sides.
    pub spread: f32,
}

impl Default for EchoProps {
    fn default() -> Self {
        Self {
            delay: 0.1,
            lr_delay: 0.1,
            damping: 0.5,
            feedback: 0.5,
            spread: -1.0,
        }
    }
}

/// A parameter value outside its documented range.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("echo parameter `{name}` = {value} is outside [{min}, {max}]")]
pub struct EchoPropsError {
    /// Name of the offending parameter.
    pub name: &'static str,
    /// Lower bound of the allowed range.
    pub min: f32,
    /// Upper bound of the allowed range.
    pub max: f32,
    /// The rejected value.
    pub value: f32,
}

impl EchoProps {
    /// Check every parameter against its range.
    ///
    /// This is the host parameter layer's entry point: hosts that want
    /// to reject bad values (rather than rely on the core's clamps)
    /// call this before handing the props to `update`. NaN fails every
    /// range check and is reported like any other out-of-range value.
    pub fn validate(&self) -> Result<(), EchoPropsError> {
        let ranges = [
            ("delay", self.delay, 0.0, ECHO_MAX_DELAY),
            ("lr_delay", self.lr_delay, 0.0, ECHO_MAX_LRDELAY),
            ("damping", self.damping, 0.0, ECHO_MAX_DAMPING),
            ("feedback", self.feedback, 0.0, 1.0),
            ("spread", self.spread, -1.0, 1.0),
        ];
        for (name, value, min, max) in ranges {
            if !(value >= min && value <= max) {
                return Err(EchoPropsError {
                    name,
                    min,
                    max,
                    value,
                });
            }
        }
        Ok(())
    }
}
