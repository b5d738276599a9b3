//! Timed message overlays on the digit buffer.
//!
//! A [`Transition`] swaps the tubes from the "regular" digits (normally the
//! time) to an "alternate" set (the message) and back again.  One session
//! is split into five phases:
//!
//! ```text
//!  | effect_in | effect_in |   hold   | effect_out | effect_out |
//!  | regular   | alternate | alternate| alternate  | regular    |
//!  |   out     |    in     |  steady  |    out     |    in      |
//!  ^ started                                                    ^ end
//! ```
//!
//! "Out" and "in" are drawn either by scrolling the digits sideways or by
//! scrambling a growing/shrinking window of slots ([`Effect`]).
//!
//! Usage from the control loop:
//!
//! 1. put the regular digits in the buffer, [`Transition::set_regular_values`];
//! 2. put the message in the buffer, [`Transition::set_alternate_values`];
//! 3. [`Transition::start`], then call a stepper every tick until it
//!    returns `false`;
//! 4. [`Transition::restore_current_display_type`] and resume normal
//!    rendering.

mod effects;

pub use effects::{hash, scramble, scroll};

use crate::config::{
    DIGIT_COUNT, TRANSITION_EFFECT_IN_MS, TRANSITION_EFFECT_OUT_MS, TRANSITION_HOLD_MS,
};
use crate::display::{DigitBuffer, DisplayMode, DisplayState, ModeBuffer};

/// How the digits enter and leave.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Effect {
    /// Scroll out and in, both ways.
    Scroll,
    /// Scramble out and in, both ways.
    Scramble,
    /// Scroll the message in, scramble it out.
    ScrollInScrambleOut,
}

/// Sub-interval of a running session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    ExitRegular,
    EnterAlternate,
    Hold,
    ExitAlternate,
    EnterRegular,
}

impl Phase {
    const ALL: [Phase; 5] = [
        Phase::ExitRegular,
        Phase::EnterAlternate,
        Phase::Hold,
        Phase::ExitAlternate,
        Phase::EnterRegular,
    ];

    /// Whether this phase shows the regular (rather than alternate) digits.
    pub const fn shows_regular(self) -> bool {
        matches!(self, Phase::ExitRegular | Phase::EnterRegular)
    }
}

/// Position inside a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhasePosition {
    pub phase: Phase,
    /// Milliseconds since the phase began.
    pub elapsed_ms: u64,
    /// Whole slots of travel so far, `0..=5`.
    pub step: i8,
}

/// Overlay engine.  At most one session runs at a time.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transition {
    effect_in_ms: u32,
    effect_out_ms: u32,
    hold_ms: u32,
    started: u64,
    end: u64,
    regular: DigitBuffer,
    alternate: DigitBuffer,
    saved_modes: ModeBuffer,
    saved_scrollback: bool,
}

impl Transition {
    pub const fn new(effect_in_ms: u32, effect_out_ms: u32, hold_ms: u32) -> Self {
        Self {
            effect_in_ms,
            effect_out_ms,
            hold_ms,
            started: 0,
            end: 0,
            regular: [0; DIGIT_COUNT],
            alternate: [0; DIGIT_COUNT],
            saved_modes: [DisplayMode::Fade; DIGIT_COUNT],
            saved_scrollback: false,
        }
    }

    /// Engine with the durations from [`crate::config`].
    pub const fn with_defaults() -> Self {
        Self::new(
            TRANSITION_EFFECT_IN_MS,
            TRANSITION_EFFECT_OUT_MS,
            TRANSITION_HOLD_MS,
        )
    }

    /// Begin a session at `now`, unless one is still running.
    ///
    /// Snapshots the display modes and scrollback flag, and switches
    /// scrollback off until [`Self::restore_current_display_type`].
    ///
    /// `end` saturates at `u64::MAX`, so a session started near the end of
    /// the clock range is cut short instead of wrapping.
    pub fn start(&mut self, now: u64, state: &mut DisplayState) {
        if self.end > now {
            #[cfg(feature = "defmt")]
            defmt::trace!("Transition: already running until {}", self.end);
            return;
        }

        self.started = now;
        self.end = now.saturating_add(self.total_ms());
        self.save_current_display_type(state);

        #[cfg(feature = "defmt")]
        defmt::debug!("Transition: start at {} ms, end at {} ms", self.started, self.end);
    }

    pub fn is_message_on_display(&self, now: u64) -> bool {
        now < self.end
    }

    pub fn started(&self) -> u64 {
        self.started
    }

    pub fn end(&self) -> u64 {
        self.end
    }

    /// Full session length: `2*in + hold + 2*out`.
    pub fn total_ms(&self) -> u64 {
        2 * u64::from(self.effect_in_ms)
            + u64::from(self.hold_ms)
            + 2 * u64::from(self.effect_out_ms)
    }

    /// Where the session is at `now`, or `None` once it has ended.
    ///
    /// A `now` before `started` is treated as the very first frame.
    pub fn phase_at(&self, now: u64) -> Option<PhasePosition> {
        if !self.is_message_on_display(now) {
            return None;
        }
        self.locate(now.saturating_sub(self.started))
    }

    fn phase_len(&self, phase: Phase) -> u32 {
        match phase {
            Phase::ExitRegular | Phase::EnterAlternate => self.effect_in_ms,
            Phase::Hold => self.hold_ms,
            Phase::ExitAlternate | Phase::EnterRegular => self.effect_out_ms,
        }
    }

    fn locate(&self, mut elapsed: u64) -> Option<PhasePosition> {
        for phase in Phase::ALL {
            let len = u64::from(self.phase_len(phase));
            if elapsed < len {
                // `elapsed < len` keeps `step` within 0..=5 and `len` non-zero.
                let step = (elapsed * DIGIT_COUNT as u64 / len) as i8;
                return Some(PhasePosition {
                    phase,
                    elapsed_ms: elapsed,
                    step,
                });
            }
            elapsed -= len;
        }
        None
    }

    /// Keep the regular digits' seconds current while a message is up.
    pub fn update_regular_display_seconds(&mut self, seconds: u8) {
        let seconds = seconds % 100;
        self.regular[4] = seconds / 10;
        self.regular[5] = seconds % 10;
    }

    /// Advance a scroll-out / scroll-in session. `false` once finished.
    pub fn scroll_msg(&mut self, now: u64, state: &mut DisplayState) -> bool {
        self.step(Effect::Scroll, now, state)
    }

    /// Advance a scramble-out / scramble-in session. `false` once finished.
    pub fn scramble_msg(&mut self, now: u64, state: &mut DisplayState) -> bool {
        self.step(Effect::Scramble, now, state)
    }

    /// Scroll the message in, scramble it out. `false` once finished.
    pub fn scroll_in_scramble_out(&mut self, now: u64, state: &mut DisplayState) -> bool {
        self.step(Effect::ScrollInScrambleOut, now, state)
    }

    /// Draw the frame for `now` with `effect`.
    ///
    /// Returns `true` while the session is running and leaves `state`
    /// untouched once it has ended.
    pub fn step(&mut self, effect: Effect, now: u64, state: &mut DisplayState) -> bool {
        let Some(pos) = self.phase_at(now) else {
            return false;
        };

        // Each frame starts from the snapshot so blanked slots never linger
        // into a later frame.
        state.modes = self.saved_modes;

        if pos.phase.shows_regular() {
            self.load_regular_values(state);
        } else {
            self.load_alternate_values(state);
        }

        let elapsed = now.saturating_sub(self.started);
        let scrolls = match pos.phase {
            Phase::ExitRegular | Phase::EnterAlternate => effect != Effect::Scramble,
            Phase::Hold => return true,
            Phase::ExitAlternate | Phase::EnterRegular => effect == Effect::Scroll,
        };

        let p = pos.step;
        if scrolls {
            let count = match pos.phase {
                Phase::ExitRegular => -p - 1,
                Phase::EnterAlternate => 5 - p,
                Phase::ExitAlternate => p + 1,
                _ => p - 5,
            };
            scroll(state, count);
        } else {
            let (start, end) = match pos.phase {
                Phase::ExitRegular => (5 - p, 6),
                Phase::EnterAlternate => (0, 5 - p),
                Phase::ExitAlternate => (0, p + 1),
                _ => (p + 1, 6),
            };
            scramble(&mut state.digits, elapsed, start, end);
        }

        true
    }

    /// Remember the buffer as the regular digits (e.g. the current time).
    pub fn set_regular_values(&mut self, state: &DisplayState) {
        self.regular = state.digits;
    }

    /// Remember the buffer as the alternate digits (e.g. the message).
    pub fn set_alternate_values(&mut self, state: &DisplayState) {
        self.alternate = state.digits;
    }

    pub fn load_regular_values(&self, state: &mut DisplayState) {
        state.digits = self.regular;
    }

    pub fn load_alternate_values(&self, state: &mut DisplayState) {
        state.digits = self.alternate;
    }

    /// Snapshot the modes and scrollback flag, then suppress scrollback.
    pub fn save_current_display_type(&mut self, state: &mut DisplayState) {
        self.saved_modes = state.modes;
        self.saved_scrollback = state.scrollback;
        state.scrollback = false;
    }

    /// Put back what [`Self::save_current_display_type`] captured.
    pub fn restore_current_display_type(&self, state: &mut DisplayState) {
        state.modes = self.saved_modes;
        state.scrollback = self.saved_scrollback;
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::with_defaults()
    }
}
