use ab_glyph::FontVec;
use common::Settings;

const DEFAULT_BOX_COLOR: [u8; 3] = [255, 0, 0];
const DEFAULT_TEXT_COLOR: [u8; 3] = [255, 255, 255];
pub const ACCENT_COLOR: [u8; 3] = [0, 255, 0];
pub const GUIDE_COLOR: [u8; 3] = [0, 0, 255];

/// Display options from the `[Display]` settings section.
///
/// Label text needs a font file (`font_path`); without one the boxes and
/// guides still render, only the text is skipped.
pub struct OverlayStyle {
    pub box_color: [u8; 3],
    pub text_color: [u8; 3],
    pub box_thickness: u32,
    pub text_scale: f32,
    pub show_confidence: bool,
    pub show_class_name: bool,
    pub font: Option<FontVec>,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            box_color: DEFAULT_BOX_COLOR,
            text_color: DEFAULT_TEXT_COLOR,
            box_thickness: 2,
            text_scale: 0.5,
            show_confidence: true,
            show_class_name: true,
            font: None,
        }
    }
}

impl OverlayStyle {
    pub fn from_settings(settings: &Settings) -> Self {
        let font = load_font(&settings.get_str("Display", "font_path", ""));
        Self {
            box_color: settings.get_color("Display", "box_color", DEFAULT_BOX_COLOR),
            text_color: settings.get_color("Display", "text_color", DEFAULT_TEXT_COLOR),
            box_thickness: settings.get_u32("Display", "box_thickness", 2),
            text_scale: settings.get_f32("Display", "text_scale", 0.5),
            show_confidence: settings.get_bool("Display", "show_confidence", true),
            show_class_name: settings.get_bool("Display", "show_class_name", true),
            font,
        }
    }
}

fn load_font(path: &str) -> Option<FontVec> {
    if path.is_empty() {
        return None;
    }
    match std::fs::read(path).map(FontVec::try_from_vec) {
        Ok(Ok(font)) => Some(font),
        Ok(Err(err)) => {
            tracing::warn!(path, error = %err, "Font file is not a usable font, labels disabled");
            None
        }
        Err(err) => {
            tracing::warn!(path, error = %err, "Failed to read font file, labels disabled");
            None
        }
    }
}
