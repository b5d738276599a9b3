//! Shared display model - digits, per-digit modes and the scrollback flag.
//!
//! The control loop owns a single [`DisplayState`] and lends it by `&mut`
//! to whichever component needs to touch the tubes this tick.

use crate::config::{DIGIT_COUNT, MAX_DIGIT};
use crate::error::Error;

/// Per-digit rendering mode.
///
/// The discriminants are the mode bytes the clock has always used and
/// must not be renumbered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum DisplayMode {
    Blanked = 0,
    Dimmed = 1,
    #[default]
    Fade = 2,
    Normal = 3,
    Blink = 4,
    Scroll = 5,
    Bright = 6,
}

impl TryFrom<u8> for DisplayMode {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(DisplayMode::Blanked),
            1 => Ok(DisplayMode::Dimmed),
            2 => Ok(DisplayMode::Fade),
            3 => Ok(DisplayMode::Normal),
            4 => Ok(DisplayMode::Blink),
            5 => Ok(DisplayMode::Scroll),
            6 => Ok(DisplayMode::Bright),
            other => Err(Error::InvalidDisplayMode(other)),
        }
    }
}

impl From<DisplayMode> for u8 {
    fn from(mode: DisplayMode) -> Self {
        mode as u8
    }
}

/// Values shown on the six tubes, leftmost first.
pub type DigitBuffer = [u8; DIGIT_COUNT];

/// Display mode of each tube, leftmost first.
pub type ModeBuffer = [DisplayMode; DIGIT_COUNT];

/// Everything the transition engine may read or write on the caller's side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayState {
    pub digits: DigitBuffer,
    pub modes: ModeBuffer,
    /// Caller option; suppressed while an overlay is running.
    pub scrollback: bool,
}

impl DisplayState {
    /// All zeros, all tubes fading, scrollback off.
    pub const fn new() -> Self {
        Self {
            digits: [0; DIGIT_COUNT],
            modes: [DisplayMode::Fade; DIGIT_COUNT],
            scrollback: false,
        }
    }

    /// Write `HH MM SS` style pairs into the digit buffer.
    ///
    /// Each pair is reduced mod 100 so the buffer never holds a value above 9.
    pub fn set_pairs(&mut self, pairs: [u8; DIGIT_COUNT / 2]) {
        for (slot, value) in pairs.iter().enumerate() {
            let value = value % 100;
            self.digits[slot * 2] = value / 10;
            self.digits[slot * 2 + 1] = value % 10;
        }
    }

    /// Set every tube to the same mode.
    pub fn fill_modes(&mut self, mode: DisplayMode) {
        self.modes = [mode; DIGIT_COUNT];
    }

    /// True when every digit is a single decimal digit.
    pub fn digits_valid(&self) -> bool {
        self.digits.iter().all(|&d| d <= MAX_DIGIT)
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new()
    }
}
