//! Polled push-button debouncing and press-length classification.
//!
//! One [`ClockButton`] tracks one physical switch.  The control loop calls
//! [`ClockButton::check_button`] once per tick with the current time and the
//! raw pin level; the button then exposes two kinds of flags:
//!
//! - **level flags** (`is_pressed*`) that stay set while the switch is held
//!   and nest by duration: 8 s ⇒ 2 s ⇒ 1 s ⇒ pressed;
//! - **release flags** (`is_pressed_and_released`, `is_pressed_released_*`)
//!   that fire once per debounced release for the longest tier reached and
//!   clear when read.
//!
//! ```text
//!  pin     ▔▔▔╲▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁╱▔▔▔▔
//!  count   0  1 2 3 4 5 5 5 ...           0
//!                     ▲ press_start       ▲ release flag for highest tier
//! ```


use embedded_hal::digital::InputPin;

use crate::config::{DEBOUNCE_COUNT, PRESS_1S_MS, PRESS_2S_MS, PRESS_8S_MS};

/// Press-duration class.  Ordered from shortest to longest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PressTier {
    /// Debounced press shorter than 1 s.
    Momentary,
    /// Held for at least 1 s.
    OneSecond,
    /// Held for at least 2 s.
    TwoSeconds,
    /// Held for at least 8 s.
    EightSeconds,
}

impl PressTier {
    /// Tier reached after holding for `held_ms`.
    pub const fn from_held_ms(held_ms: u64) -> Self {
        if held_ms >= PRESS_8S_MS {
            PressTier::EightSeconds
        } else if held_ms >= PRESS_2S_MS {
            PressTier::TwoSeconds
        } else if held_ms >= PRESS_1S_MS {
            PressTier::OneSecond
        } else {
            PressTier::Momentary
        }
    }
}

/// Four flags, one per [`PressTier`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
struct TierFlags {
    pressed: bool,
    pressed_1s: bool,
    pressed_2s: bool,
    pressed_8s: bool,
}

impl TierFlags {
    const NONE: Self = Self {
        pressed: false,
        pressed_1s: false,
        pressed_2s: false,
        pressed_8s: false,
    };

    /// Cumulative flags: every tier up to and including `tier`.
    fn held(tier: PressTier) -> Self {
        Self {
            pressed: true,
            pressed_1s: tier >= PressTier::OneSecond,
            pressed_2s: tier >= PressTier::TwoSeconds,
            pressed_8s: tier >= PressTier::EightSeconds,
        }
    }

    /// Exclusive flags: only the one for `tier`.
    fn only(tier: PressTier) -> Self {
        Self {
            pressed: tier == PressTier::Momentary,
            pressed_1s: tier == PressTier::OneSecond,
            pressed_2s: tier == PressTier::TwoSeconds,
            pressed_8s: tier == PressTier::EightSeconds,
        }
    }

    fn highest(&self) -> Option<PressTier> {
        if self.pressed_8s {
            Some(PressTier::EightSeconds)
        } else if self.pressed_2s {
            Some(PressTier::TwoSeconds)
        } else if self.pressed_1s {
            Some(PressTier::OneSecond)
        } else if self.pressed {
            Some(PressTier::Momentary)
        } else {
            None
        }
    }

    fn slot(&mut self, tier: PressTier) -> &mut bool {
        match tier {
            PressTier::Momentary => &mut self.pressed,
            PressTier::OneSecond => &mut self.pressed_1s,
            PressTier::TwoSeconds => &mut self.pressed_2s,
            PressTier::EightSeconds => &mut self.pressed_8s,
        }
    }
}

/// Debounced, duration-classifying button.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockButton {
    active_low: bool,
    pressed_count: u8,
    press_start_ms: u64,
    level: TierFlags,
    released: TierFlags,
}

impl ClockButton {
    /// Create an idle button.
    ///
    /// `active_low` selects which pin level means "pressed"; switches wired
    /// to ground with a pull-up are active-low.
    pub const fn new(active_low: bool) -> Self {
        Self {
            active_low,
            pressed_count: 0,
            press_start_ms: 0,
            level: TierFlags::NONE,
            released: TierFlags::NONE,
        }
    }

    /// Main entry point - call once per tick.
    ///
    /// `now_ms` must not decrease between calls.  If it does, the press is
    /// treated as having just started rather than underflowing.
    pub fn check_button(&mut self, now_ms: u64, pin_high: bool) {
        let pressed = pin_high != self.active_low;

        if pressed {
            if self.pressed_count < DEBOUNCE_COUNT {
                self.pressed_count += 1;
                if self.pressed_count == DEBOUNCE_COUNT {
                    self.press_start_ms = now_ms;
                }
            }

            if self.pressed_count == DEBOUNCE_COUNT {
                let held_ms = now_ms.saturating_sub(self.press_start_ms);
                self.level = TierFlags::held(PressTier::from_held_ms(held_ms));
            }
        } else {
            if self.pressed_count == DEBOUNCE_COUNT {
                if let Some(tier) = self.level.highest() {
                    #[cfg(feature = "defmt")]
                    defmt::debug!(
                        "Button: released after {} ms -> {}",
                        now_ms.saturating_sub(self.press_start_ms),
                        tier
                    );
                    self.released = TierFlags::only(tier);
                }
            }

            self.level = TierFlags::NONE;
            self.pressed_count = 0;
        }
    }

    /// Read the pin through `embedded-hal` and feed [`Self::check_button`].
    ///
    /// On a read error the button state is left untouched.
    pub fn check_pin<P: InputPin>(&mut self, now_ms: u64, pin: &mut P) -> Result<(), P::Error> {
        let high = pin.is_high()?;
        self.check_button(now_ms, high);
        Ok(())
    }

    /// Force the idle state without generating a release event.
    pub fn reset(&mut self) {
        self.level = TierFlags::NONE;
        self.released = TierFlags::NONE;
        self.pressed_count = 0;
    }

    /// Debounced pressed right now, regardless of duration.
    pub fn is_pressed_now(&self) -> bool {
        self.pressed_count == DEBOUNCE_COUNT
    }

    pub fn is_pressed(&self) -> bool {
        self.level.pressed
    }

    pub fn is_pressed_1s(&self) -> bool {
        self.level.pressed_1s
    }

    pub fn is_pressed_2s(&self) -> bool {
        self.level.pressed_2s
    }

    pub fn is_pressed_8s(&self) -> bool {
        self.level.pressed_8s
    }

    /// Highest tier of the press currently held, if any.
    pub fn held_tier(&self) -> Option<PressTier> {
        self.level.highest()
    }

    /// Short press released. Clears on read.
    pub fn is_pressed_and_released(&mut self) -> bool {
        self.take(PressTier::Momentary)
    }

    /// 1 s press released. Clears on read.
    pub fn is_pressed_released_1s(&mut self) -> bool {
        self.take(PressTier::OneSecond)
    }

    /// 2 s press released. Clears on read.
    pub fn is_pressed_released_2s(&mut self) -> bool {
        self.take(PressTier::TwoSeconds)
    }

    /// 8 s press released. Clears on read.
    pub fn is_pressed_released_8s(&mut self) -> bool {
        self.take(PressTier::EightSeconds)
    }

    /// Whichever release event is pending, cleared on read.
    pub fn take_release(&mut self) -> Option<PressTier> {
        let tier = self.released.highest()?;
        self.take(tier);
        Some(tier)
    }

    fn take(&mut self, tier: PressTier) -> bool {
        core::mem::replace(self.released.slot(tier), false)
    }
}

impl Default for ClockButton {
    fn default() -> Self {
        Self::new(true)
    }
}
