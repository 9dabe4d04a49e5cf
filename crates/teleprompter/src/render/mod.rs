pub mod control_bar;
pub mod display;
pub mod editor;

use eframe::egui::{self, Align, Color32, FontFamily, FontId};

use crate::presentation::DisplayTransform;
use crate::presentation::scroll::LINE_HEIGHT;

/// Centered, wrapped prompter text at `font_size` with the prompter line height.
pub fn prompter_job(
    text: &str,
    font_size: f32,
    color: Color32,
    max_width: f32,
) -> egui::text::LayoutJob {
    let mut job = egui::text::LayoutJob::default();
    job.wrap.max_width = max_width;
    job.halign = Align::Center;
    job.append(text, 0.0, prompter_format(font_size, color));
    job
}

pub fn prompter_format(font_size: f32, color: Color32) -> egui::text::TextFormat {
    egui::text::TextFormat {
        font_id: FontId::new(font_size, FontFamily::Proportional),
        color,
        line_height: Some(font_size * LINE_HEIGHT),
        ..Default::default()
    }
}

/// Paint a shape through the display transform. Mirrored shapes are
/// tessellated here and their vertices flipped around `axis`.
pub fn paint_transformed(
    ctx: &egui::Context,
    painter: &egui::Painter,
    shape: egui::Shape,
    transform: DisplayTransform,
    axis: f32,
) {
    if !transform.flip_x {
        painter.add(shape);
        return;
    }
    let clipped = egui::epaint::ClippedShape {
        clip_rect: painter.clip_rect(),
        shape,
    };
    for primitive in ctx.tessellate(vec![clipped], ctx.pixels_per_point()) {
        if let egui::epaint::Primitive::Mesh(mut mesh) = primitive.primitive {
            for vertex in &mut mesh.vertices {
                vertex.pos.x = transform.apply_x(vertex.pos.x, axis);
            }
            painter.add(egui::Shape::mesh(mesh));
        }
    }
}
