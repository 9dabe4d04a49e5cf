use std::time::Duration;

use super::TickOutcome;

const BASE_INTERVAL_MS: u64 = 200;
const MIN_INTERVAL_MS: u64 = 10;

/// `max(10, 200 - 2 * speed)` milliseconds between revealed characters.
pub fn tick_interval(speed: u32) -> Duration {
    let ms = BASE_INTERVAL_MS.saturating_sub(2 * u64::from(speed));
    Duration::from_millis(ms.max(MIN_INTERVAL_MS))
}

/// Reveal one more character. Finishes on the tick that reveals the last
/// one, or immediately if everything is already shown.
pub fn tick(index: &mut usize, len: usize) -> TickOutcome {
    if *index < len {
        *index += 1;
    }
    if *index >= len {
        TickOutcome::Finished
    } else {
        TickOutcome::Continue
    }
}

/// The first `chars` characters of `text`.
pub fn visible_prefix(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((byte, _)) => &text[..byte],
        None => text,
    }
}
