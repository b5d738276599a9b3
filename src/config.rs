//! Application-wide constants and compile-time configuration.
//!
//! All timing parameters, display geometry and pin assignments live
//! here so they can be tuned in one place.

// Display

/// Number of digit slots (tubes) on the clock.
pub const DIGIT_COUNT: usize = 6;

/// Largest value a single tube can show.
pub const MAX_DIGIT: u8 = 9;

// Button

/// Number of successive pressed reads before a press is trusted.
pub const DEBOUNCE_COUNT: u8 = 5;

/// Held time (ms) after which a press counts as a 1 s press.
pub const PRESS_1S_MS: u64 = 1_000;

/// Held time (ms) after which a press counts as a 2 s press.
pub const PRESS_2S_MS: u64 = 2_000;

/// Held time (ms) after which a press counts as an 8 s press.
pub const PRESS_8S_MS: u64 = 8_000;

// Transitions

/// Scramble digits change every this many milliseconds.
pub const SCRAMBLE_FRAME_MS: u64 = 20;

/// Default duration (ms) of each of the two entrance phases.
pub const TRANSITION_EFFECT_IN_MS: u32 = 500;

/// Default duration (ms) the message is held steady.
pub const TRANSITION_HOLD_MS: u32 = 2_500;

/// Default duration (ms) of each of the two exit phases.
pub const TRANSITION_EFFECT_OUT_MS: u32 = 500;

// Main loop

/// Poll period of the control loop (ms). Five ticks at this rate
/// give a 25 ms debounce window.
pub const TICK_MS: u64 = 5;

/// Depth of the button-event channel between the button and display tasks.
pub const BUTTON_EVENT_QUEUE: usize = 4;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; the concrete `embassy_nrf::peripherals::*`
// are picked in `main.rs`.  Adjust for your custom PCB.
//
//   Mode button    → P0.11 (active-low, internal pull-up)
