//! Resono Effects - effect implementations for the resono echo engine
//!
//! Effects implement the [`EffectState`] capability trait and are driven
//! by the host through three serialized operations: `device_update` on
//! device or sample-rate changes, `update` on parameter changes, and
//! `process` once per audio block. All output goes onto a first-order
//! ambisonic bus with per-channel gain crossfades.
//!
//! - [`EchoState`] - two-tap echo with damped feedback ([`EchoProps`])
//!
//! # Example
//!
//! ```rust
//! use resono_effects::{DeviceContext, EchoProps, EchoState, EffectProps, EffectSlot, EffectState};
//!
//! let device = DeviceContext::new(48000);
//! let mut echo = EchoState::new();
//! echo.device_update(&device);
//! echo.update(
//!     &device,
//!     &EffectSlot::default(),
//!     &EffectProps::Echo(EchoProps::default()),
//! );
//!
//! let input = vec![0.0f32; 256];
//! let mut bus: Vec<Vec<f32>> = (0..device.channels).map(|_| vec![0.0; 256]).collect();
//! echo.process(256, &input, &mut bus);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod echo;
pub mod props;
pub mod state;

// Re-export main types at crate root
pub use echo::{EchoState, MAX_BLOCK_SAMPLES};
pub use props::{ECHO_MAX_DAMPING, ECHO_MAX_DELAY, ECHO_MAX_LRDELAY, EchoProps, EchoPropsError};
pub use state::{DeviceContext, EffectProps, EffectSlot, EffectState};
