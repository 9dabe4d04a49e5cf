use std::time::{Duration, Instant};

use super::controls::ControlAction;
use super::scroll::ScrollMetrics;
use super::*;
use crate::editor::Editor;
use crate::script::ScriptStore;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn typewriter(text: &str, speed: u32) -> Presenter {
    Presenter::new(
        text.to_string(),
        Settings {
            mode: Mode::Typewriter,
            speed,
            ..Settings::default()
        },
    )
}

fn scroller(speed: u32) -> Presenter {
    Presenter::new(
        "line\n".repeat(50),
        Settings {
            mode: Mode::Scroll,
            speed,
            ..Settings::default()
        },
    )
}

/// Metrics with exactly `max` pixels of scrollable range.
fn metrics(max: f32) -> ScrollMetrics {
    ScrollMetrics {
        content_height: 720.0 + max,
        viewport_height: 720.0,
    }
}

#[test]
fn test_hello_world_typewriter_scenario() {
    let t0 = Instant::now();
    let mut p = typewriter("Hello world", 50);
    assert_eq!(p.tick_interval(), ms(100));

    p.toggle_play(t0);
    p.advance(t0 + ms(600), ScrollMetrics::default());
    assert_eq!(p.displayed_text(), "Hello ");
    assert!(p.is_playing());

    p.advance(t0 + ms(1100), ScrollMetrics::default());
    assert_eq!(p.displayed_text(), "Hello world");
    assert!(!p.is_playing());
    assert_eq!(p.next_wakeup(t0 + ms(1100)), None);
}

#[test]
fn test_typewriter_index_is_monotonic_and_prefix() {
    let t0 = Instant::now();
    let text = "The quick brown fox";
    let mut p = typewriter(text, 90);
    p.toggle_play(t0);
    let mut last = 0;
    for step in 1..=40 {
        p.advance(t0 + ms(step * 7), ScrollMetrics::default());
        assert!(p.char_index() >= last);
        last = p.char_index();
        let expected: String = text.chars().take(p.char_index()).collect();
        assert_eq!(p.displayed_text(), expected);
    }
}

#[test]
fn test_typewriter_empty_text_stops_on_first_tick() {
    let t0 = Instant::now();
    let mut p = typewriter("", 50);
    p.toggle_play(t0);
    p.advance(t0 + ms(100), ScrollMetrics::default());
    assert!(!p.is_playing());
    assert_eq!(p.displayed_text(), "");
}

#[test]
fn test_completion_keeps_position() {
    let t0 = Instant::now();
    let mut p = typewriter("abc", 100);
    p.toggle_play(t0);
    p.advance(t0 + ms(1000), ScrollMetrics::default());
    assert!(!p.is_playing());
    assert_eq!(p.char_index(), 3);
}

#[test]
fn test_scroll_never_exceeds_max_and_stops() {
    let t0 = Instant::now();
    let mut p = scroller(100);
    p.toggle_play(t0);
    let m = metrics(95.0);
    for step in 1..=20 {
        p.advance(t0 + ms(step * 20), m);
        assert!(p.scroll_offset() <= m.max_scroll());
    }
    assert_eq!(p.scroll_offset(), 95.0);
    assert!(!p.is_playing());
}

#[test]
fn test_scroll_advances_speed_over_ten_per_tick() {
    let t0 = Instant::now();
    let mut p = scroller(30);
    p.toggle_play(t0);
    p.advance(t0 + ms(100), metrics(10_000.0));
    assert!((p.scroll_offset() - 15.0).abs() < 1e-3);
    assert!(p.is_playing());
}

#[test]
fn test_scroll_with_nothing_to_scroll_stops() {
    let t0 = Instant::now();
    let mut p = scroller(50);
    p.toggle_play(t0);
    p.advance(t0 + ms(20), metrics(-10.0));
    assert!(!p.is_playing());
    assert_eq!(p.scroll_offset(), 0.0);
}

#[test]
fn test_paused_presenter_does_not_advance() {
    let t0 = Instant::now();
    let mut p = scroller(100);
    p.advance(t0 + ms(5000), metrics(10_000.0));
    assert_eq!(p.scroll_offset(), 0.0);

    p.toggle_play(t0);
    p.advance(t0 + ms(40), metrics(10_000.0));
    p.toggle_play(t0 + ms(40));
    let paused_at = p.scroll_offset();
    p.advance(t0 + ms(5000), metrics(10_000.0));
    assert_eq!(p.scroll_offset(), paused_at);
}

#[test]
fn test_switch_mode_always_resets() {
    let t0 = Instant::now();
    let mut p = typewriter("Hello world", 50);
    p.toggle_play(t0);
    p.advance(t0 + ms(300), ScrollMetrics::default());
    assert_eq!(p.char_index(), 3);

    p.switch_mode(Mode::Scroll, t0 + ms(300));
    assert_eq!(p.mode(), Mode::Scroll);
    assert_eq!(p.char_index(), 0);
    assert_eq!(p.scroll_offset(), 0.0);
    assert!(!p.is_playing());

    // Same-mode switch resets too.
    p.toggle_play(t0 + ms(300));
    p.advance(t0 + ms(400), metrics(10_000.0));
    assert!(p.scroll_offset() > 0.0);
    p.switch_mode(Mode::Scroll, t0 + ms(400));
    assert_eq!(p.scroll_offset(), 0.0);
    assert!(!p.is_playing());
    assert_eq!(p.next_wakeup(t0 + ms(400)), None);
}

#[test]
fn test_reset_keeps_mode() {
    let t0 = Instant::now();
    let mut p = typewriter("Hello", 50);
    p.toggle_play(t0);
    p.advance(t0 + ms(200), ScrollMetrics::default());
    p.reset(t0 + ms(200));
    assert_eq!(p.mode(), Mode::Typewriter);
    assert_eq!(p.displayed_text(), "");
    assert!(!p.is_playing());
}

#[test]
fn test_speed_change_rearms_timer() {
    let t0 = Instant::now();
    let mut p = typewriter("abcdefghij", 50);
    p.toggle_play(t0);
    p.advance(t0 + ms(90), ScrollMetrics::default());
    assert_eq!(p.char_index(), 0);

    p.set_speed(95, t0 + ms(90));
    assert_eq!(p.tick_interval(), ms(10));
    assert_eq!(p.next_wakeup(t0 + ms(90)), Some(ms(10)));
    p.advance(t0 + ms(120), ScrollMetrics::default());
    assert_eq!(p.char_index(), 3);
}

#[test]
fn test_speed_and_font_size_are_clamped() {
    let t0 = Instant::now();
    let mut p = scroller(500);
    assert_eq!(p.speed(), 100);
    p.set_speed(0, t0);
    assert_eq!(p.speed(), 1);
    p.set_font_size(4);
    assert_eq!(p.font_size(), 24);
    p.set_font_size(1000);
    assert_eq!(p.font_size(), 128);
}

#[test]
fn test_mirror_round_trip() {
    let mut p = scroller(30);
    assert_eq!(p.display_transform(), DisplayTransform::default());
    p.toggle_mirror();
    assert!(p.display_transform().flip_x);
    assert_eq!(p.display_transform().apply_x(10.0, 100.0), 190.0);
    p.toggle_mirror();
    assert_eq!(p.display_transform(), DisplayTransform::default());
    assert_eq!(p.display_transform().apply_x(10.0, 100.0), 10.0);
}

#[test]
fn test_apply_routes_actions() {
    let t0 = Instant::now();
    let mut p = scroller(30);
    assert_eq!(p.apply(ControlAction::TogglePlay, t0), Flow::Continue);
    assert!(p.is_playing());
    p.apply(ControlAction::SetSpeed(70), t0);
    assert_eq!(p.speed(), 70);
    p.apply(ControlAction::SetFontSize(100), t0);
    assert_eq!(p.font_size(), 100);
    p.apply(ControlAction::SwitchMode, t0);
    assert_eq!(p.mode(), Mode::Typewriter);
    assert!(!p.is_playing());
    p.apply(ControlAction::ToggleMirror, t0);
    assert!(p.is_mirrored());
    assert_eq!(p.apply(ControlAction::Exit, t0), Flow::Exit);
}

#[test]
fn test_controls_hide_only_while_playing() {
    let t0 = Instant::now();
    let mut p = scroller(10);
    p.pointer_moved(t0);
    p.advance(t0 + ms(2500), metrics(10_000.0));
    assert!(p.controls_visible());

    p.toggle_play(t0 + ms(2500));
    p.pointer_moved(t0 + ms(2500));
    p.advance(t0 + ms(4500), metrics(10_000.0));
    assert!(!p.controls_visible());

    p.pointer_moved(t0 + ms(4600));
    assert!(p.controls_visible());
}

#[test]
fn test_next_wakeup_prefers_earliest_timer() {
    let t0 = Instant::now();
    let mut p = typewriter("abc", 1);
    p.pointer_moved(t0);
    assert_eq!(p.next_wakeup(t0), Some(ms(2000)));
    p.toggle_play(t0);
    assert_eq!(p.next_wakeup(t0), Some(ms(198)));
}

#[test]
fn test_start_exit_round_trip_keeps_buffer() {
    let t0 = Instant::now();
    let text = "Line one\nLine two";
    let editor = Editor::new(ScriptStore::new(text));
    let mut p = Presenter::new(editor.start(), Settings::default());
    p.toggle_play(t0);
    p.advance(t0 + ms(1000), metrics(10_000.0));
    assert_eq!(p.apply(ControlAction::Exit, t0 + ms(1000)), Flow::Exit);
    drop(p);
    assert_eq!(editor.text(), text);
}
