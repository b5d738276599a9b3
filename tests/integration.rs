//! Integration tests for nixie-clock host-testable logic.
//!
//! Drives the button and the transition engine the way the firmware's
//! control loop does: one call each per 5 ms tick.

use nixie_clock::config::{DEBOUNCE_COUNT, TICK_MS};
use nixie_clock::{ClockButton, DisplayMode, DisplayState, Effect, PressTier, Transition};

const DOWN: bool = false;
const UP: bool = true;

/// Minimal control loop: the button triggers a message overlay.
struct Clock {
    button: ClockButton,
    transition: Transition,
    state: DisplayState,
    overlay: bool,
    frames: usize,
}

impl Clock {
    fn new() -> Self {
        let mut state = DisplayState::new();
        state.set_pairs([12, 34, 56]);
        state.fill_modes(DisplayMode::Normal);
        state.scrollback = true;
        Self {
            button: ClockButton::default(),
            transition: Transition::new(300, 300, 1000),
            state,
            overlay: false,
            frames: 0,
        }
    }

    fn tick(&mut self, now: u64, pin_high: bool, effect: Effect) {
        self.button.check_button(now, pin_high);

        if self.button.is_pressed_and_released() && !self.overlay {
            self.transition.set_regular_values(&self.state);
            self.state.set_pairs([0, 0, 54]);
            self.transition.set_alternate_values(&self.state);
            self.transition.load_regular_values(&mut self.state);
            self.transition.start(now, &mut self.state);
            self.overlay = true;
        }

        if self.overlay {
            if self.transition.step(effect, now, &mut self.state) {
                self.frames += 1;
                assert!(self.state.digits_valid());
            } else {
                self.transition.restore_current_display_type(&mut self.state);
                self.overlay = false;
            }
        }
    }
}

fn run_overlay(effect: Effect) -> (Clock, u64) {
    let mut clock = Clock::new();
    let mut now = 0;

    for _ in 0..DEBOUNCE_COUNT + 10 {
        clock.tick(now, DOWN, effect);
        now += TICK_MS;
    }
    clock.tick(now, UP, effect);
    assert!(clock.overlay, "release should start the overlay");
    assert!(!clock.state.scrollback);
    let started = now;

    while clock.overlay {
        now += TICK_MS;
        clock.tick(now, UP, effect);
        assert!(now < started + 5_000, "overlay never finished");
    }
    (clock, now - started)
}

#[test]
fn short_press_runs_scroll_overlay_and_restores_display() {
    let (clock, duration) = run_overlay(Effect::Scroll);

    assert_eq!(duration, 2200);
    assert_eq!(clock.state.digits, [1, 2, 3, 4, 5, 6]);
    assert_eq!(clock.state.modes, [DisplayMode::Normal; 6]);
    assert!(clock.state.scrollback);
    assert!(clock.frames > 400);
}

#[test]
fn every_effect_ends_on_the_regular_digits() {
    for effect in [Effect::Scroll, Effect::Scramble, Effect::ScrollInScrambleOut] {
        let (clock, _) = run_overlay(effect);
        assert_eq!(clock.state.digits, [1, 2, 3, 4, 5, 6], "{:?}", effect);
        assert_eq!(clock.state.modes, [DisplayMode::Normal; 6], "{:?}", effect);
        assert!(clock.state.scrollback, "{:?}", effect);
    }
}

#[test]
fn message_is_visible_during_hold() {
    let mut clock = Clock::new();
    let mut now = 0;
    for _ in 0..DEBOUNCE_COUNT {
        clock.tick(now, DOWN, Effect::Scroll);
        now += TICK_MS;
    }
    clock.tick(now, UP, Effect::Scroll);
    let started = now;

    while now < started + 1000 {
        now += TICK_MS;
        clock.tick(now, UP, Effect::Scroll);
    }
    assert_eq!(clock.state.digits, [0, 0, 0, 0, 5, 4]);
    assert_eq!(clock.state.modes, [DisplayMode::Normal; 6]);
}

#[test]
fn long_press_does_not_trigger_short_press_overlay() {
    let mut button = ClockButton::default();
    let mut now = 0;
    while now <= 2_500 {
        button.check_button(now, DOWN);
        now += TICK_MS;
    }
    assert!(button.is_pressed_2s());
    button.check_button(now, UP);

    assert!(!button.is_pressed_and_released());
    assert_eq!(button.take_release(), Some(PressTier::TwoSeconds));
}
