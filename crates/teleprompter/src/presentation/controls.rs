//! Control bar actions and auto-hide.

use std::time::{Duration, Instant};

use crate::timer::DelayedAction;

pub const HIDE_DELAY: Duration = Duration::from_millis(2000);

/// Keyboard step sizes for the sliders.
pub const SPEED_STEP: u32 = 5;
pub const FONT_SIZE_STEP: u32 = 4;

/// Every mutation the control bar (or its keyboard shortcuts) can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    TogglePlay,
    SetSpeed(u32),
    SetFontSize(u32),
    Reset,
    ToggleMirror,
    SwitchMode,
    Exit,
}

/// Debounced visibility of the control bar.
///
/// Pointer movement shows the bar and restarts the hide timer. When the
/// timer fires the bar hides only if playback is running; otherwise it
/// stays up until the next time the timer fires while playing.
#[derive(Debug, Clone)]
pub struct AutoHide {
    visible: bool,
    timer: DelayedAction,
}

impl Default for AutoHide {
    fn default() -> Self {
        Self::new()
    }
}

impl AutoHide {
    pub fn new() -> Self {
        Self {
            visible: true,
            timer: DelayedAction::new(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn pointer_moved(&mut self, now: Instant) {
        self.visible = true;
        self.timer.restart(HIDE_DELAY, now);
    }

    pub fn poll(&mut self, now: Instant, playing: bool) {
        if self.timer.fire_if_due(now) && playing {
            self.visible = false;
        }
    }

    pub fn until_due(&self, now: Instant) -> Option<Duration> {
        self.timer.until_due(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_visible_by_default() {
        let hide = AutoHide::new();
        assert!(hide.is_visible());
        assert_eq!(hide.until_due(Instant::now()), None);
    }

    #[test]
    fn test_hides_after_inactivity_while_playing() {
        let t0 = Instant::now();
        let mut hide = AutoHide::new();
        hide.pointer_moved(t0);
        hide.poll(t0 + ms(1999), true);
        assert!(hide.is_visible());
        hide.poll(t0 + ms(2000), true);
        assert!(!hide.is_visible());
    }

    #[test]
    fn test_stays_visible_when_paused() {
        let t0 = Instant::now();
        let mut hide = AutoHide::new();
        hide.pointer_moved(t0);
        hide.poll(t0 + ms(2000), false);
        assert!(hide.is_visible());
        // The timer has been consumed; later playback alone does not hide.
        hide.poll(t0 + ms(10_000), true);
        assert!(hide.is_visible());
    }

    #[test]
    fn test_pointer_movement_restarts_timer() {
        let t0 = Instant::now();
        let mut hide = AutoHide::new();
        hide.pointer_moved(t0);
        hide.pointer_moved(t0 + ms(1500));
        hide.poll(t0 + ms(2500), true);
        assert!(hide.is_visible());
        hide.poll(t0 + ms(3500), true);
        assert!(!hide.is_visible());
        hide.pointer_moved(t0 + ms(3600));
        assert!(hide.is_visible());
    }
}
