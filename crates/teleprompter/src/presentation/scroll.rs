use std::time::Duration;

use super::TickOutcome;

pub const TICK_INTERVAL: Duration = Duration::from_millis(20);

/// Blank space above the text, as a fraction of viewport height, so the
/// first line starts near the middle of the screen.
pub const LEAD_PADDING: f32 = 0.45;
/// Blank space below the text, so the last line scrolls past the middle.
pub const TRAIL_PADDING: f32 = 0.50;
/// Horizontal margin on each side, as a fraction of viewport width.
pub const SIDE_PADDING: f32 = 0.10;
pub const LINE_HEIGHT: f32 = 1.4;

/// Rough glyph advance relative to font size, for height estimates.
const AVG_GLYPH_WIDTH: f32 = 0.55;

/// Offset added per tick at `speed`.
pub fn step(speed: u32) -> f32 {
    speed as f32 / 10.0
}

/// Rendered dimensions of the scroll container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub content_height: f32,
    pub viewport_height: f32,
}

impl ScrollMetrics {
    /// Metrics for a laid-out text block of `text_height` inside the padded
    /// scroll container.
    pub fn from_text_height(text_height: f32, viewport_height: f32) -> Self {
        Self {
            content_height: viewport_height * (LEAD_PADDING + TRAIL_PADDING) + text_height,
            viewport_height,
        }
    }

    /// Estimate from character counts, used before the first frame has
    /// measured the real layout.
    pub fn estimate(text: &str, font_size: f32, viewport_width: f32, viewport_height: f32) -> Self {
        let wrap_width = (viewport_width * (1.0 - 2.0 * SIDE_PADDING)).max(1.0);
        let glyph = font_size * AVG_GLYPH_WIDTH;
        let rows: usize = text
            .split('\n')
            .map(|line| {
                let width = line.chars().count() as f32 * glyph;
                ((width / wrap_width).ceil() as usize).max(1)
            })
            .sum();
        let text_height = rows as f32 * font_size * LINE_HEIGHT;
        Self::from_text_height(text_height, viewport_height)
    }

    pub fn max_scroll(&self) -> f32 {
        self.content_height - self.viewport_height
    }
}

/// Advance `offset` by one tick.
///
/// If the proposed offset reaches `max_scroll` it is clamped there and the
/// tick finishes playback. With nothing to scroll (`max_scroll <= 0`) the
/// offset stays put and playback finishes immediately.
pub fn tick(offset: &mut f32, speed: u32, max_scroll: f32) -> TickOutcome {
    if max_scroll <= 0.0 {
        return TickOutcome::Finished;
    }
    let proposed = *offset + step(speed);
    if proposed >= max_scroll {
        *offset = max_scroll;
        TickOutcome::Finished
    } else {
        *offset = proposed;
        TickOutcome::Continue
    }
}
