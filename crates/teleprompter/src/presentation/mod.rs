//! Presentation engine: play/pause state machine over a text snapshot,
//! animated in scroll or typewriter mode.
//!
//! The engine owns every timer it uses. Dropping a [`Presenter`] (on exit
//! back to the editor) tears all of them down with it.

pub mod controls;
pub mod scroll;
pub mod typewriter;

#[cfg(test)]
mod tests;

use std::ops::RangeInclusive;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::timer::RepeatingTask;
use controls::{AutoHide, ControlAction};
use scroll::ScrollMetrics;

pub const SPEED_RANGE: RangeInclusive<u32> = 1..=100;
pub const FONT_SIZE_RANGE: RangeInclusive<u32> = 24..=128;

pub const DEFAULT_SPEED: u32 = 30;
pub const DEFAULT_FONT_SIZE: u32 = 64;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    #[default]
    Scroll,
    Typewriter,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Scroll => Self::Typewriter,
            Self::Typewriter => Self::Scroll,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Scroll => "Scroll",
            Self::Typewriter => "Typewriter",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "scroll" => Some(Self::Scroll),
            "typewriter" => Some(Self::Typewriter),
            _ => None,
        }
    }

    /// Interval of the animation timer for this mode at `speed`.
    pub fn tick_interval(self, speed: u32) -> Duration {
        match self {
            Self::Scroll => scroll::TICK_INTERVAL,
            Self::Typewriter => typewriter::tick_interval(speed),
        }
    }
}

pub fn clamp_speed(speed: u32) -> u32 {
    speed.clamp(*SPEED_RANGE.start(), *SPEED_RANGE.end())
}

pub fn clamp_font_size(size: u32) -> u32 {
    size.clamp(*FONT_SIZE_RANGE.start(), *FONT_SIZE_RANGE.end())
}

/// Initial settings for a fresh presentation view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub mode: Mode,
    pub speed: u32,
    pub font_size: u32,
    pub mirrored: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: Mode::Scroll,
            speed: DEFAULT_SPEED,
            font_size: DEFAULT_FONT_SIZE,
            mirrored: false,
        }
    }
}

impl Settings {
    pub fn clamped(self) -> Self {
        Self {
            speed: clamp_speed(self.speed),
            font_size: clamp_font_size(self.font_size),
            ..self
        }
    }
}

/// Result of a single animation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    /// Reached the end of the content. Playback stops, position is kept.
    Finished,
}

/// Horizontal flip applied to the display region only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayTransform {
    pub flip_x: bool,
}

impl DisplayTransform {
    /// Map an x coordinate through the transform, mirroring around `axis`.
    pub fn apply_x(self, x: f32, axis: f32) -> f32 {
        if self.flip_x { 2.0 * axis - x } else { x }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// What the animation timer is currently armed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Armed {
    mode: Mode,
    speed: u32,
}

pub struct Presenter {
    text: String,
    char_count: usize,
    mode: Mode,
    speed: u32,
    font_size: u32,
    playing: bool,
    mirrored: bool,
    scroll_offset: f32,
    char_index: usize,
    animation: Option<RepeatingTask>,
    armed: Option<Armed>,
    controls: AutoHide,
}

impl Presenter {
    pub fn new(text: String, settings: Settings) -> Self {
        let settings = settings.clamped();
        let char_count = text.chars().count();
        Self {
            text,
            char_count,
            mode: settings.mode,
            speed: settings.speed,
            font_size: settings.font_size,
            playing: false,
            mirrored: settings.mirrored,
            scroll_offset: 0.0,
            char_index: 0,
            animation: None,
            armed: None,
            controls: AutoHide::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_mirrored(&self) -> bool {
        self.mirrored
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    #[allow(dead_code)]
    pub fn char_index(&self) -> usize {
        self.char_index
    }

    /// The revealed prefix in typewriter mode.
    pub fn displayed_text(&self) -> &str {
        typewriter::visible_prefix(&self.text, self.char_index)
    }

    pub fn display_transform(&self) -> DisplayTransform {
        DisplayTransform {
            flip_x: self.mirrored,
        }
    }

    pub fn controls_visible(&self) -> bool {
        self.controls.is_visible()
    }

    pub fn tick_interval(&self) -> Duration {
        self.mode.tick_interval(self.speed)
    }

    pub fn toggle_play(&mut self, now: Instant) {
        self.playing = !self.playing;
        self.sync_animation(now);
    }

    pub fn reset(&mut self, now: Instant) {
        self.clear_progress();
        log::debug!("presentation reset ({})", self.mode.display_name());
        self.sync_animation(now);
    }

    /// Switch mode. Progress is always cleared and playback stopped, even
    /// when `mode` equals the current one.
    pub fn switch_mode(&mut self, mode: Mode, now: Instant) {
        self.mode = mode;
        self.clear_progress();
        log::debug!("switched to {} mode", mode.display_name());
        self.sync_animation(now);
    }

    pub fn set_speed(&mut self, speed: u32, now: Instant) {
        self.speed = clamp_speed(speed);
        self.sync_animation(now);
    }

    pub fn set_font_size(&mut self, size: u32) {
        self.font_size = clamp_font_size(size);
    }

    pub fn toggle_mirror(&mut self) {
        self.mirrored = !self.mirrored;
    }

    pub fn apply(&mut self, action: ControlAction, now: Instant) -> Flow {
        match action {
            ControlAction::TogglePlay => self.toggle_play(now),
            ControlAction::SetSpeed(speed) => self.set_speed(speed, now),
            ControlAction::SetFontSize(size) => self.set_font_size(size),
            ControlAction::Reset => self.reset(now),
            ControlAction::ToggleMirror => self.toggle_mirror(),
            ControlAction::SwitchMode => self.switch_mode(self.mode.toggled(), now),
            ControlAction::Exit => {
                log::debug!("leaving presentation");
                return Flow::Exit;
            }
        }
        Flow::Continue
    }

    pub fn pointer_moved(&mut self, now: Instant) {
        self.controls.pointer_moved(now);
    }

    /// Run every animation tick that has come due, then the auto-hide check.
    /// `metrics` describes the scroll layout from the last rendered frame.
    pub fn advance(&mut self, now: Instant, metrics: ScrollMetrics) {
        let due = self.animation.as_mut().map_or(0, |task| task.poll(now));
        for _ in 0..due {
            if self.tick(metrics) == TickOutcome::Finished {
                log::debug!("{} playback finished", self.mode.display_name());
                self.playing = false;
                self.sync_animation(now);
                break;
            }
        }
        self.controls.poll(now, self.playing);
    }

    /// How long the host may sleep before `advance` has work to do.
    pub fn next_wakeup(&self, now: Instant) -> Option<Duration> {
        let animation = self.animation.as_ref().map(|task| task.until_next(now));
        let hide = self.controls.until_due(now);
        match (animation, hide) {
            (Some(a), Some(h)) => Some(a.min(h)),
            (a, h) => a.or(h),
        }
    }

    fn tick(&mut self, metrics: ScrollMetrics) -> TickOutcome {
        match self.mode {
            Mode::Scroll => scroll::tick(&mut self.scroll_offset, self.speed, metrics.max_scroll()),
            Mode::Typewriter => typewriter::tick(&mut self.char_index, self.char_count),
        }
    }

    fn clear_progress(&mut self) {
        self.scroll_offset = 0.0;
        self.char_index = 0;
        self.playing = false;
    }

    /// Keep at most one animation timer, armed for the current mode and
    /// speed while playing. Any change re-creates it.
    fn sync_animation(&mut self, now: Instant) {
        let wanted = self.playing.then_some(Armed {
            mode: self.mode,
            speed: self.speed,
        });
        if wanted == self.armed {
            return;
        }
        self.animation = wanted.map(|armed| {
            let task = RepeatingTask::start(armed.mode.tick_interval(armed.speed), now);
            log::trace!(
                "armed {} timer every {}ms",
                armed.mode.display_name(),
                task.interval().as_millis()
            );
            task
        });
        if wanted.is_none() {
            log::trace!("animation timer cancelled");
        }
        self.armed = wanted;
    }
}
