//! The mirrored-or-not display region of the presentation view.

use eframe::egui::{self, Color32, Rect, Stroke, pos2};

use crate::presentation::scroll::{LEAD_PADDING, SIDE_PADDING, ScrollMetrics};
use crate::presentation::{Mode, Presenter};
use crate::render::{paint_transformed, prompter_format, prompter_job};
use crate::theme::Theme;

const CARET: &str = "|";
const GUIDE_WIDTH: f32 = 32.0;
const GUIDE_OPACITY: f32 = 0.2;

/// Draw the presenter's text into `rect` and return the scroll layout
/// measured on the way, for the next frame's tick clamp.
pub fn draw(
    ui: &egui::Ui,
    presenter: &Presenter,
    theme: &Theme,
    rect: Rect,
    time: f64,
) -> ScrollMetrics {
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, theme.background);

    let font_size = presenter.font_size() as f32;
    let wrap_width = rect.width() * (1.0 - 2.0 * SIDE_PADDING);

    match presenter.mode() {
        Mode::Scroll => {
            let job = prompter_job(presenter.text(), font_size, theme.foreground, wrap_width);
            let galley = painter.layout_job(job);
            let metrics = ScrollMetrics::from_text_height(galley.rect.height(), rect.height());

            // The container clamps like a native scroll position would.
            let offset = presenter
                .scroll_offset()
                .clamp(0.0, metrics.max_scroll().max(0.0));
            let top = rect.top() + rect.height() * LEAD_PADDING - offset;
            let shape = egui::Shape::galley(pos2(rect.center().x, top), galley, theme.foreground);
            paint_transformed(
                ui.ctx(),
                &painter,
                shape,
                presenter.display_transform(),
                rect.center().x,
            );

            draw_reading_guide(&painter, theme, rect);
            metrics
        }
        Mode::Typewriter => {
            let mut job = prompter_job(
                presenter.displayed_text(),
                font_size,
                theme.foreground,
                wrap_width,
            );
            job.append(
                CARET,
                font_size * 0.1,
                prompter_format(font_size, caret_color(theme.accent, time)),
            );
            let galley = painter.layout_job(job);
            let top = rect.center().y - galley.rect.height() / 2.0;
            let shape = egui::Shape::galley(pos2(rect.center().x, top), galley, theme.foreground);
            paint_transformed(
                ui.ctx(),
                &painter,
                shape,
                presenter.display_transform(),
                rect.center().x,
            );

            ScrollMetrics::default()
        }
    }
}

/// Short ticks at both edges marking the reading line.
fn draw_reading_guide(painter: &egui::Painter, theme: &Theme, rect: Rect) {
    let y = rect.center().y;
    let stroke = Stroke::new(1.0, Theme::with_opacity(theme.foreground, GUIDE_OPACITY));
    painter.hline(rect.left()..=rect.left() + GUIDE_WIDTH, y, stroke);
    painter.hline(rect.right() - GUIDE_WIDTH..=rect.right(), y, stroke);
}

/// Caret pulses between full and half opacity on a two second cycle.
fn caret_color(accent: Color32, time: f64) -> Color32 {
    let pulse = 0.75 + 0.25 * (time * std::f64::consts::PI).cos();
    Theme::with_opacity(accent, pulse as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caret_pulse_range() {
        let accent = Color32::from_rgb(10, 20, 30);
        assert_eq!(caret_color(accent, 0.0).a(), 255);
        let dim = caret_color(accent, 1.0).a();
        assert!((126..=128).contains(&dim));
    }
}
