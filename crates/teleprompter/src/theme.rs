use eframe::egui::Color32;

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub background: Color32,
    pub foreground: Color32,
    pub muted: Color32,
    pub accent: Color32,
    pub panel: Color32,
    pub panel_border: Color32,
    pub danger: Color32,
    pub editor_size: f32,
    pub heading_size: f32,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            background: Color32::BLACK,
            foreground: Color32::WHITE,
            muted: Color32::from_rgb(0xA1, 0xA1, 0xAA),
            accent: Color32::from_rgb(0x52, 0x94, 0xE2),
            panel: Color32::from_rgb(0x18, 0x18, 0x1B),
            panel_border: Color32::from_rgba_unmultiplied(255, 255, 255, 26),
            danger: Color32::from_rgb(0xEF, 0x44, 0x44),
            editor_size: 20.0,
            heading_size: 36.0,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            background: Color32::WHITE,
            foreground: Color32::from_rgb(0x1A, 0x1A, 0x2E),
            muted: Color32::from_rgb(0x71, 0x71, 0x7A),
            accent: Color32::from_rgb(0x0F, 0x34, 0x60),
            panel: Color32::from_rgb(0xF4, 0xF4, 0xF5),
            panel_border: Color32::from_rgba_unmultiplied(0, 0, 0, 26),
            danger: Color32::from_rgb(0xDC, 0x26, 0x26),
            editor_size: 20.0,
            heading_size: 36.0,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.name == "dark"
    }

    /// Apply opacity to a color
    pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
        let opacity = opacity.clamp(0.0, 1.0);
        Color32::from_rgba_unmultiplied(
            color.r(),
            color.g(),
            color.b(),
            (opacity * color.a() as f32) as u8,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_name_falls_back_to_dark() {
        assert!(Theme::from_name("neon").is_dark());
        assert!(!Theme::from_name("light").is_dark());
    }

    #[test]
    fn test_with_opacity_scales_alpha() {
        let c = Theme::with_opacity(Color32::WHITE, 0.5);
        assert_eq!(c.a(), 127);
        assert_eq!(Theme::with_opacity(Color32::WHITE, 2.0).a(), 255);
    }
}
