//! Resono Core - DSP primitives for the resono echo engine
//!
//! This crate provides the building blocks the effect crates are
//! assembled from, designed for real-time audio processing with zero
//! allocation in the audio path.
//!
//! # Components
//!
//! - [`MaskedDelay`] - power-of-two circular sample history with
//!   bitmask index wrapping
//! - [`HighShelf`] - one-stage shelving filter with a two-value
//!   persistent recurrence, used for feedback damping
//! - [`mix_fade`] / [`FadeGains`] - click-free per-channel gain
//!   crossfades that accumulate a mono source into a multi-channel bus
//! - [`ambi_coeffs`] / [`compute_pan_gains`] - first-order ambisonic
//!   panning coefficients
//! - Math helpers: [`db_to_linear`], [`linear_to_db`], [`flush_denormal`]
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible (heap allocation is still required
//! for the delay history). Disable the default `std` feature:
//!
//! ```toml
//! [dependencies]
//! resono-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Design Principles
//!
//! - **Real-time safe**: allocation only in explicit resize paths,
//!   never per block
//! - **libm for math**: no dependency on std float intrinsics
//! - **Masked indexing over modulo**: history buffers are power-of-two
//!   sized so cursors wrap with a single AND

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod ambi;
pub mod delay;
pub mod math;
pub mod mix;
pub mod shelf;

// Re-export main types at crate root
pub use ambi::{MAX_AMBI_CHANNELS, ambi_coeffs, compute_pan_gains};
pub use delay::MaskedDelay;
pub use math::{db_to_linear, flush_denormal, linear_to_db};
pub use mix::{FadeGains, SILENCE_GAIN_THRESHOLD, mix_fade};
pub use shelf::HighShelf;
