use eframe::egui;
use std::time::{Duration, Instant};

use crate::editor::Editor;
use crate::presentation::controls::{ControlAction, FONT_SIZE_STEP, SPEED_STEP};
use crate::presentation::scroll::ScrollMetrics;
use crate::presentation::{Flow, Mode, Presenter, Settings};
use crate::render;
use crate::render::editor::EditorEvent;
use crate::script::ScriptStore;
use crate::theme::Theme;

/// Repaint cadence for the pulsing typewriter caret.
const CARET_FRAME: Duration = Duration::from_millis(50);

/// A mounted presentation. Built fresh from a text snapshot on start and
/// dropped on exit, taking its timers with it.
struct PresentationView {
    presenter: Presenter,
    /// Scroll layout measured during the previous frame.
    metrics: Option<ScrollMetrics>,
}

enum Screen {
    Editor,
    Presenting(Box<PresentationView>),
}

struct TeleprompterApp {
    editor: Editor,
    screen: Screen,
    theme: Theme,
    settings: Settings,
}

impl TeleprompterApp {
    fn new(theme: Theme, settings: Settings) -> Self {
        Self {
            editor: Editor::new(ScriptStore::default()),
            screen: Screen::Editor,
            theme,
            settings,
        }
    }

    fn start_presentation(&mut self) {
        let presenter = Presenter::new(self.editor.start(), self.settings);
        self.screen = Screen::Presenting(Box::new(PresentationView {
            presenter,
            metrics: None,
        }));
    }

    fn update_editor(&mut self, ctx: &egui::Context) {
        if let Some(EditorEvent::Start) = render::editor::show(ctx, &mut self.editor, &self.theme) {
            self.start_presentation();
        }
    }

    /// Returns `Flow::Exit` when the user leaves the presentation.
    fn update_presentation(
        view: &mut PresentationView,
        theme: &Theme,
        ctx: &egui::Context,
    ) -> Flow {
        let now = Instant::now();
        let presenter = &mut view.presenter;

        let mut viewport_cmds: Vec<egui::ViewportCommand> = Vec::new();
        let mut actions = shortcut_actions(ctx, presenter, &mut viewport_cmds);
        for cmd in viewport_cmds {
            ctx.send_viewport_cmd(cmd);
        }

        if ctx.input(|i| i.pointer.delta() != egui::Vec2::ZERO) {
            presenter.pointer_moved(now);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(theme.background).inner_margin(0.0))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let metrics = view.metrics.unwrap_or_else(|| {
                    ScrollMetrics::estimate(
                        presenter.text(),
                        presenter.font_size() as f32,
                        rect.width(),
                        rect.height(),
                    )
                });
                presenter.advance(now, metrics);
                let time = ui.input(|i| i.time);
                view.metrics = Some(render::display::draw(ui, presenter, theme, rect, time));
            });

        actions.extend(render::control_bar::show(ctx, presenter, theme));

        for action in actions {
            if presenter.apply(action, now) == Flow::Exit {
                return Flow::Exit;
            }
        }

        if let Some(wait) = presenter.next_wakeup(now) {
            ctx.request_repaint_after(wait);
        }
        if presenter.mode() == Mode::Typewriter {
            ctx.request_repaint_after(CARET_FRAME);
        }
        Flow::Continue
    }
}

/// Keyboard shortcuts for the presentation view. Keys are consumed so a
/// focused control bar button does not also react to them.
fn shortcut_actions(
    ctx: &egui::Context,
    presenter: &Presenter,
    viewport_cmds: &mut Vec<egui::ViewportCommand>,
) -> Vec<ControlAction> {
    use egui::{Key, Modifiers};

    let mut actions = Vec::new();
    ctx.input_mut(|i| {
        if i.consume_key(Modifiers::NONE, Key::Escape) {
            actions.push(ControlAction::Exit);
            return;
        }
        if i.consume_key(Modifiers::NONE, Key::Space) {
            actions.push(ControlAction::TogglePlay);
        }
        if i.consume_key(Modifiers::NONE, Key::R) {
            actions.push(ControlAction::Reset);
        }
        if i.consume_key(Modifiers::NONE, Key::M) {
            actions.push(ControlAction::ToggleMirror);
        }
        if i.consume_key(Modifiers::NONE, Key::T) {
            actions.push(ControlAction::SwitchMode);
        }
        if i.consume_key(Modifiers::NONE, Key::ArrowUp) {
            actions.push(ControlAction::SetSpeed(presenter.speed() + SPEED_STEP));
        }
        if i.consume_key(Modifiers::NONE, Key::ArrowDown) {
            actions.push(ControlAction::SetSpeed(
                presenter.speed().saturating_sub(SPEED_STEP),
            ));
        }
        if i.consume_key(Modifiers::NONE, Key::Plus) || i.consume_key(Modifiers::NONE, Key::Equals)
        {
            actions.push(ControlAction::SetFontSize(
                presenter.font_size() + FONT_SIZE_STEP,
            ));
        }
        if i.consume_key(Modifiers::NONE, Key::Minus) {
            actions.push(ControlAction::SetFontSize(
                presenter.font_size().saturating_sub(FONT_SIZE_STEP),
            ));
        }
        if i.consume_key(Modifiers::NONE, Key::F) {
            viewport_cmds.push(egui::ViewportCommand::Fullscreen(
                !i.viewport().fullscreen.unwrap_or(false),
            ));
        }
    });
    actions
}

impl eframe::App for TeleprompterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Screen::Presenting(view) = &mut self.screen {
            if Self::update_presentation(view, &self.theme, ctx) == Flow::Exit {
                self.screen = Screen::Editor;
                ctx.request_repaint();
            }
            return;
        }
        self.update_editor(ctx);
    }
}

pub fn run(windowed: bool, theme: Theme, settings: Settings) -> anyhow::Result<()> {
    let title = "Teleprompter";

    let viewport = if windowed {
        egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_title(title)
    } else {
        egui::ViewportBuilder::default()
            .with_fullscreen(true)
            .with_title(title)
    };

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    log::debug!(
        "launching ({}, {} mode, speed {}, size {}px)",
        theme.name,
        settings.mode.display_name(),
        settings.speed,
        settings.font_size
    );

    eframe::run_native(
        title,
        options,
        Box::new(move |cc| {
            let visuals = if theme.is_dark() {
                egui::Visuals::dark()
            } else {
                egui::Visuals::light()
            };
            cc.egui_ctx.set_visuals(visuals);
            Ok(Box::new(TeleprompterApp::new(theme, settings)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
