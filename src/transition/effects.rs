//! Buffer primitives the transition effects are built from.

use crate::config::{DIGIT_COUNT, SCRAMBLE_FRAME_MS};
use crate::display::{DigitBuffer, DisplayMode, DisplayState};

/// Largest useful shift; anything beyond empties the display just the same.
const MAX_SHIFT: i8 = DIGIT_COUNT as i8;

/// Shift the digits by `count` slots.
///
/// Positive counts move values towards higher indices (rightwards), negative
/// towards lower indices.  Values pushed past the edge are dropped, and the
/// `|count|` slots left behind are set to [`DisplayMode::Blanked`]; their
/// digit values are not touched.  `count` is clamped to `-6..=6`.
pub fn scroll(state: &mut DisplayState, count: i8) {
    let count = count.clamp(-MAX_SHIFT, MAX_SHIFT);
    let shift = usize::from(count.unsigned_abs());
    let copy = state.digits;

    for slot in 0..DIGIT_COUNT {
        let source = if count >= 0 {
            slot.checked_sub(shift)
        } else {
            Some(slot + shift).filter(|&s| s < DIGIT_COUNT)
        };

        match source {
            Some(from) => state.digits[slot] = copy[from],
            None => state.modes[slot] = DisplayMode::Blanked,
        }
    }
}

/// Overwrite slots `start..end` with pseudo-random digits.
///
/// The digits change every [`SCRAMBLE_FRAME_MS`] and differ per slot, but are
/// fully determined by `(elapsed_ms, slot)`.  Bounds are clamped to the
/// buffer; an empty or inverted range does nothing.
pub fn scramble(digits: &mut DigitBuffer, elapsed_ms: u64, start: i8, end: i8) {
    let start = start.clamp(0, MAX_SHIFT) as usize;
    let end = end.clamp(0, MAX_SHIFT) as usize;
    let frame = (elapsed_ms / SCRAMBLE_FRAME_MS) as u32;

    for (slot, digit) in digits.iter_mut().enumerate().take(end).skip(start) {
        *digit = (hash(frame.wrapping_add(slot as u32)) % 10) as u8;
    }
}

/// 32-bit integer mixer (two multiply-xor-shift rounds).
///
/// Visual noise only; not suitable for anything security related.
pub const fn hash(x: u32) -> u32 {
    let x = ((x >> 16) ^ x).wrapping_mul(0x045d_9f3b);
    let x = ((x >> 16) ^ x).wrapping_mul(0x045d_9f3b);
    (x >> 16) ^ x
}
