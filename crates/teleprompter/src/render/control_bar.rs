//! Floating control bar. Never mirrored: it lives in its own foreground
//! area, outside the display region's transform.

use eframe::egui::{self, Align2, RichText, vec2};

use crate::presentation::controls::ControlAction;
use crate::presentation::{FONT_SIZE_RANGE, Mode, Presenter, SPEED_RANGE};
use crate::theme::Theme;

const SLIDE_DURATION: f32 = 0.5;
const BOTTOM_MARGIN: f32 = 32.0;
const HIDDEN_DROP: f32 = 80.0;
const SLIDER_WIDTH: f32 = 120.0;

pub fn show(ctx: &egui::Context, presenter: &Presenter, theme: &Theme) -> Option<ControlAction> {
    let shown = ctx.animate_bool_with_time(
        egui::Id::new("control_bar_visible"),
        presenter.controls_visible(),
        SLIDE_DURATION,
    );
    if shown <= 0.0 {
        return None;
    }

    let mut action = None;
    let drop = (1.0 - shown) * HIDDEN_DROP;

    egui::Area::new(egui::Id::new("control_bar"))
        .order(egui::Order::Foreground)
        .anchor(Align2::CENTER_BOTTOM, vec2(0.0, -BOTTOM_MARGIN + drop))
        .show(ctx, |ui| {
            ui.set_opacity(shown);
            egui::Frame::new()
                .fill(Theme::with_opacity(theme.panel, 0.9))
                .stroke(egui::Stroke::new(1.0, theme.panel_border))
                .corner_radius(32.0)
                .inner_margin(egui::Margin::symmetric(24, 8))
                .show(ui, |ui| {
                    ui.spacing_mut().slider_width = SLIDER_WIDTH;
                    ui.horizontal(|ui| {
                        draw_controls(ui, presenter, theme, &mut action);
                    });
                });
        });

    action
}

fn draw_controls(
    ui: &mut egui::Ui,
    presenter: &Presenter,
    theme: &Theme,
    action: &mut Option<ControlAction>,
) {
    let play_icon = if presenter.is_playing() { "\u{23F8}" } else { "\u{25B6}" };
    let play = egui::Button::new(RichText::new(play_icon).size(20.0))
        .min_size(vec2(48.0, 48.0))
        .corner_radius(24.0);
    if ui
        .add(play)
        .on_hover_text(if presenter.is_playing() { "Pause" } else { "Play" })
        .clicked()
    {
        *action = Some(ControlAction::TogglePlay);
    }

    ui.separator();

    let mut speed = presenter.speed();
    ui.vertical(|ui| {
        slider_caption(ui, theme, "SPEED", &format!("{speed}%"));
        let slider = egui::Slider::new(&mut speed, SPEED_RANGE).show_value(false);
        let tick = format!("{}ms per tick", presenter.tick_interval().as_millis());
        if ui.add(slider).on_hover_text(tick).changed() {
            *action = Some(ControlAction::SetSpeed(speed));
        }
    });

    ui.separator();

    let mut font_size = presenter.font_size();
    ui.vertical(|ui| {
        slider_caption(ui, theme, "SIZE", &format!("{font_size}px"));
        let slider = egui::Slider::new(&mut font_size, FONT_SIZE_RANGE).show_value(false);
        if ui.add(slider).changed() {
            *action = Some(ControlAction::SetFontSize(font_size));
        }
    });

    ui.separator();

    if icon_button(ui, "\u{27F2}", false).on_hover_text("Reset").clicked() {
        *action = Some(ControlAction::Reset);
    }
    if icon_button(ui, "\u{21D4}", presenter.is_mirrored())
        .on_hover_text("Mirror Text")
        .clicked()
    {
        *action = Some(ControlAction::ToggleMirror);
    }
    let target = presenter.mode().toggled();
    let mode_icon = match target {
        Mode::Typewriter => "T",
        Mode::Scroll => "\u{2B07}",
    };
    if icon_button(ui, mode_icon, false)
        .on_hover_text(format!("Switch to {}", target.display_name()))
        .clicked()
    {
        *action = Some(ControlAction::SwitchMode);
    }
    let exit = egui::Button::new(RichText::new("\u{2716}").size(18.0).color(theme.danger))
        .frame(false);
    if ui.add(exit).on_hover_text("Exit").clicked() {
        *action = Some(ControlAction::Exit);
    }
}

fn slider_caption(ui: &mut egui::Ui, theme: &Theme, label: &str, value: &str) {
    ui.label(
        RichText::new(format!("{label}  {value}"))
            .size(10.0)
            .color(theme.muted),
    );
}

fn icon_button(ui: &mut egui::Ui, icon: &str, selected: bool) -> egui::Response {
    ui.add(
        egui::Button::new(RichText::new(icon).size(18.0))
            .selected(selected)
            .frame(selected),
    )
}
