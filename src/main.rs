//! nixie-clock - six-digit nixie clock firmware for nRF52840.
//!
//! # Architecture
//!
//! - **Button task**: polls the mode button every tick, debounces and
//!   classifies it with [`ClockButton`], and forwards each release as a
//!   [`PressTier`] over a channel.
//! - **Main task**: sole owner of the [`DisplayState`].  Renders the
//!   uptime clock every tick and, on request, runs a [`Transition`]
//!   overlay until it finishes.
//!
//! # Button Controls
//!
//! - **Short press**: show the protocol number as a message
//! - **1 s press**: toggle scrollback
//! - **2 s press**: cycle the overlay effect
//! - **8 s press**: restore default display settings
//!
//! Tube multiplexing is not part of this firmware; the rendered frame is
//! logged over RTT instead.

#![no_std]
#![no_main]

use defmt::{debug, info, warn};
use embassy_executor::Spawner;
use embassy_futures::select::{select, Either};
use embassy_nrf::gpio::{Input, Pull};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_time::{Duration, Instant, Ticker};
use {defmt_rtt as _, panic_probe as _};

use nixie_clock::config::{BUTTON_EVENT_QUEUE, TICK_MS};
use nixie_clock::protocol::I2C_PROTOCOL_NUMBER;
use nixie_clock::{ClockButton, DisplayMode, DisplayState, Effect, PressTier, Transition};

/// Releases travelling from the button task to the main task.
static BUTTON_EVENTS: Channel<CriticalSectionRawMutex, PressTier, BUTTON_EVENT_QUEUE> =
    Channel::new();

fn now_ms() -> u64 {
    Instant::now().as_millis()
}

/// `[hours, minutes, seconds]` since boot, hours wrapping at 24.
fn uptime_pairs(now_ms: u64) -> [u8; 3] {
    let secs = now_ms / 1000;
    [
        ((secs / 3600) % 24) as u8,
        ((secs / 60) % 60) as u8,
        (secs % 60) as u8,
    ]
}

#[embassy_executor::task]
async fn button_task(pin: Input<'static>) {
    let mut button = ClockButton::new(true);
    let mut ticker = Ticker::every(Duration::from_millis(TICK_MS));

    loop {
        ticker.next().await;
        button.check_button(now_ms(), pin.is_high());

        if let Some(tier) = button.take_release() {
            info!("Button: {}", tier);
            if BUTTON_EVENTS.try_send(tier).is_err() {
                warn!("Button: event queue full, dropping {}", tier);
            }
        }
    }
}

/// Display-side settings the buttons can change.
struct Settings {
    effect: Effect,
    scrollback: bool,
}

impl Settings {
    const fn new() -> Self {
        Self {
            effect: Effect::Scroll,
            scrollback: false,
        }
    }

    fn next_effect(&mut self) {
        self.effect = match self.effect {
            Effect::Scroll => Effect::Scramble,
            Effect::Scramble => Effect::ScrollInScrambleOut,
            Effect::ScrollInScrambleOut => Effect::Scroll,
        };
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("nixie-clock starting");

    let mode_button = Input::new(p.P0_11, Pull::Up);
    spawner.must_spawn(button_task(mode_button));

    let mut state = DisplayState::new();
    let mut transition = Transition::with_defaults();
    let mut settings = Settings::new();
    let mut overlay = false;
    let mut last_logged = state;

    let mut ticker = Ticker::every(Duration::from_millis(TICK_MS));

    loop {
        match select(ticker.next(), BUTTON_EVENTS.receive()).await {
            Either::First(()) => {}
            Either::Second(tier) => match tier {
                PressTier::Momentary if !overlay => {
                    let now = now_ms();
                    state.set_pairs(uptime_pairs(now));
                    transition.set_regular_values(&state);
                    state.set_pairs([0, 0, I2C_PROTOCOL_NUMBER]);
                    transition.set_alternate_values(&state);
                    transition.load_regular_values(&mut state);
                    transition.start(now, &mut state);
                    overlay = true;
                }
                PressTier::Momentary => debug!("Overlay already running"),
                PressTier::OneSecond => {
                    settings.scrollback = !settings.scrollback;
                    info!("Scrollback: {}", settings.scrollback);
                }
                PressTier::TwoSeconds => {
                    settings.next_effect();
                    info!("Overlay effect: {}", settings.effect);
                }
                PressTier::EightSeconds => {
                    settings = Settings::new();
                    info!("Display settings restored to defaults");
                }
            },
        }

        let now = now_ms();
        if overlay {
            transition.update_regular_display_seconds(uptime_pairs(now)[2]);
            if !transition.step(settings.effect, now, &mut state) {
                transition.restore_current_display_type(&mut state);
                overlay = false;
                debug!("Overlay finished");
            }
        }

        if !overlay {
            state.set_pairs(uptime_pairs(now));
            state.fill_modes(DisplayMode::Fade);
            state.scrollback = settings.scrollback;
        }

        if state != last_logged {
            debug!("Tubes: {} {}", state.digits, state.modes);
            last_logged = state;
        }
    }
}
