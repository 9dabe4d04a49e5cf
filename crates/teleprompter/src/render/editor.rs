//! Editor screen: script text area, saved-scripts drawer, save-name prompt.

use eframe::egui::{self, Align, Align2, FontId, Layout, RichText, vec2};

use crate::editor::Editor;
use crate::script::ScriptId;
use crate::theme::Theme;

const PLACEHOLDER: &str = "Start typing your script here...";
const DRAWER_WIDTH: f32 = 320.0;
const START_BUTTON_HEIGHT: f32 = 56.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorEvent {
    Start,
}

enum DrawerAction {
    Load(ScriptId),
    Delete(ScriptId),
    Close,
}

enum PromptAction {
    Save,
    Cancel,
}

pub fn show(ctx: &egui::Context, editor: &mut Editor, theme: &Theme) -> Option<EditorEvent> {
    if editor.is_drawer_open() {
        draw_drawer(ctx, editor, theme);
    }
    if editor.is_naming() {
        draw_name_prompt(ctx, editor);
    }

    let mut event = None;
    egui::CentralPanel::default()
        .frame(
            egui::Frame::new()
                .fill(theme.background)
                .inner_margin(egui::Margin::same(48)),
        )
        .show(ctx, |ui| {
            draw_header(ui, editor, theme);
            ui.add_space(24.0);

            let text_size = vec2(
                ui.available_width(),
                (ui.available_height() - START_BUTTON_HEIGHT).max(0.0),
            );
            let text_edit = egui::TextEdit::multiline(editor.text_mut())
                .hint_text(PLACEHOLDER)
                .font(FontId::proportional(theme.editor_size))
                .text_color(theme.foreground)
                .frame(false);
            ui.add_sized(text_size, text_edit);

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let start = egui::Button::new(RichText::new("\u{25B6}  Start Prompter").size(16.0))
                    .min_size(vec2(160.0, 44.0))
                    .corner_radius(22.0);
                if ui.add(start).clicked() {
                    event = Some(EditorEvent::Start);
                }
            });
        });

    event
}

fn draw_header(ui: &mut egui::Ui, editor: &mut Editor, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.label(
            RichText::new("Teleprompter")
                .size(theme.heading_size)
                .strong()
                .color(theme.foreground),
        );
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let save = egui::Button::new(RichText::new("\u{1F4BE}").size(18.0)).frame(false);
            if ui.add(save).on_hover_text("Save Script").clicked() {
                editor.begin_save();
            }
            let open = egui::Button::new(RichText::new("\u{1F4C2}").size(18.0)).frame(false);
            if ui.add(open).on_hover_text("Saved Scripts").clicked() {
                editor.open_drawer();
            }
        });
    });
}

fn draw_drawer(ctx: &egui::Context, editor: &mut Editor, theme: &Theme) {
    let mut action = None;

    egui::SidePanel::right("saved_scripts")
        .exact_width(DRAWER_WIDTH)
        .resizable(false)
        .frame(
            egui::Frame::new()
                .fill(theme.panel)
                .stroke(egui::Stroke::new(1.0, theme.panel_border))
                .inner_margin(egui::Margin::same(24)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("Saved Scripts").size(20.0).strong());
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.add(egui::Button::new("\u{2716}").frame(false)).clicked() {
                        action = Some(DrawerAction::Close);
                    }
                });
            });
            ui.add_space(16.0);

            let scripts = editor.store().scripts();
            if scripts.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.label(RichText::new("No saved scripts yet.").color(theme.muted));
                });
                return;
            }

            egui::ScrollArea::vertical().show(ui, |ui| {
                for script in scripts {
                    egui::Frame::group(ui.style()).show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.horizontal(|ui| {
                            let name = egui::Button::new(RichText::new(script.name()).strong())
                                .frame(false);
                            let preview = script.content().lines().next().unwrap_or_default();
                            if ui.add(name).on_hover_text(preview).clicked() {
                                action = Some(DrawerAction::Load(script.id()));
                            }
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                let delete = egui::Button::new(
                                    RichText::new("\u{1F5D1}").color(theme.danger),
                                )
                                .frame(false);
                                if ui.add(delete).on_hover_text("Delete").clicked() {
                                    action = Some(DrawerAction::Delete(script.id()));
                                }
                            });
                        });
                    });
                }
            });
        });

    match action {
        Some(DrawerAction::Load(id)) => editor.load(id),
        Some(DrawerAction::Delete(id)) => editor.delete(id),
        Some(DrawerAction::Close) => editor.close_drawer(),
        None => {}
    }
}

fn draw_name_prompt(ctx: &egui::Context, editor: &mut Editor) {
    let Some(name) = editor.pending_name_mut() else {
        return;
    };
    let mut action = None;

    egui::Window::new("Save Script")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.label("Enter script name:");
            let response = ui.add(egui::TextEdit::singleline(name).desired_width(240.0));
            if !response.has_focus() && !response.lost_focus() {
                response.request_focus();
            }
            let submitted =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            ui.horizontal(|ui| {
                if ui.button("Save").clicked() || submitted {
                    action = Some(PromptAction::Save);
                }
                if ui.button("Cancel").clicked() {
                    action = Some(PromptAction::Cancel);
                }
            });
        });

    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        action = Some(PromptAction::Cancel);
    }

    match action {
        Some(PromptAction::Save) => {
            editor.confirm_save();
        }
        Some(PromptAction::Cancel) => editor.cancel_save(),
        None => {}
    }
}
