//! Core logic for a six-digit nixie clock.
//!
//! Everything here is plain state machines over caller-owned buffers, so
//! it runs unchanged on the host for testing and on the nRF52840 target.
//!
//! Usage: `cargo test --lib` (host), `cargo build --release --features embedded`
//! (firmware).
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main].
//! This library is what it links against.

#![cfg_attr(not(test), no_std)]

pub mod button;
pub mod config;
pub mod display;
pub mod error;
pub mod protocol;
pub mod transition;

pub use button::{ClockButton, PressTier};
pub use display::{DigitBuffer, DisplayMode, DisplayState, ModeBuffer};
pub use error::Error;
pub use transition::{Effect, Phase, Transition};

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests - display model and I2C protocol
// ═══════════════════════════════════════════════════════════════════════════
