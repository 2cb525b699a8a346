use anyhow::Context;
use std::collections::HashMap;
use std::path::Path;

/// Key-value settings loaded from a `[section]` / `key=value` file.
///
/// `#` starts a comment (anywhere in a line), surrounding whitespace is
/// trimmed, and keys appearing before the first section header are ignored.
/// Typed getters never fail: a missing or malformed value falls back to the
/// caller's default, malformed values additionally emit a warning.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    sections: HashMap<String, HashMap<String, String>>,
}

impl Settings {
    /// Read settings from a file once at startup.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        Ok(Self::parse(&text))
    }

    pub fn parse(text: &str) -> Self {
        let mut sections: HashMap<String, HashMap<String, String>> = HashMap::new();
        let mut current_section: Option<String> = None;

        for raw_line in text.lines() {
            let line = match raw_line.find('#') {
                Some(pos) => &raw_line[..pos],
                None => raw_line,
            };
            let line = line.trim();

            if line.is_empty() {
                continue;
            }

            if line.starts_with('[') && line.ends_with(']') {
                let name = line[1..line.len() - 1].to_string();
                sections.entry(name.clone()).or_default();
                current_section = Some(name);
            } else if let (Some(section), Some(equal_pos)) = (&current_section, line.find('=')) {
                let key = line[..equal_pos].trim();
                let value = line[equal_pos + 1..].trim();
                if !key.is_empty() {
                    sections
                        .entry(section.clone())
                        .or_default()
                        .insert(key.to_string(), value.to_string());
                }
            }
        }

        Self { sections }
    }

    fn raw(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|s| s.get(key))
            .map(String::as_str)
    }

    pub fn get_str(&self, section: &str, key: &str, default: &str) -> String {
        self.raw(section, key).unwrap_or(default).to_string()
    }

    pub fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
        match self.raw(section, key) {
            Some(value) => value == "true",
            None => default,
        }
    }

    pub fn get_u32(&self, section: &str, key: &str, default: u32) -> u32 {
        self.parse_numeric(section, key, default)
    }

    pub fn get_f32(&self, section: &str, key: &str, default: f32) -> f32 {
        self.parse_numeric(section, key, default)
    }

    /// Comma-separated triple, used for RGB colors. Falls back to the default
    /// as a whole if any component is malformed or missing.
    pub fn get_color(&self, section: &str, key: &str, default: [u8; 3]) -> [u8; 3] {
        let Some(value) = self.raw(section, key) else {
            return default;
        };

        let mut parts = value.split(',').map(|item| item.trim().parse::<u8>());
        match (parts.next(), parts.next(), parts.next()) {
            (Some(Ok(r)), Some(Ok(g)), Some(Ok(b))) => [r, g, b],
            _ => {
                tracing::warn!(
                    section,
                    key,
                    value,
                    "Invalid color triple in settings, using default"
                );
                default
            }
        }
    }

    fn parse_numeric<T: std::str::FromStr + Copy>(
        &self,
        section: &str,
        key: &str,
        default: T,
    ) -> T {
        match self.raw(section, key) {
            Some(value) => match value.parse() {
                Ok(parsed) => parsed,
                Err(_) => {
                    tracing::warn!(
                        section,
                        key,
                        value,
                        "Invalid numeric value in settings, using default"
                    );
                    default
                }
            },
            None => default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# deployment settings
[Model]
input_width = 640
conf_threshold = 0.25  # strict lower bound
model_path = models/detector.onnx

[Display]
box_color = 0, 0, 255
show_confidence = true

[Performance]
target_fps = not-a-number
";

    #[test]
    fn test_parses_sections_and_values() {
        let settings = Settings::parse(SAMPLE);

        assert_eq!(settings.get_u32("Model", "input_width", 0), 640);
        assert_eq!(settings.get_f32("Model", "conf_threshold", 0.0), 0.25);
        assert_eq!(
            settings.get_str("Model", "model_path", ""),
            "models/detector.onnx"
        );
    }

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let settings = Settings::parse(SAMPLE);

        assert_eq!(settings.get_u32("Model", "input_height", 640), 640);
        assert_eq!(settings.get_f32("Tracking", "gain", 1.5), 1.5);
        assert_eq!(settings.get_str("Model", "classes", "none"), "none");
    }

    #[test]
    fn test_malformed_numeric_falls_back_to_default() {
        let settings = Settings::parse(SAMPLE);
        assert_eq!(settings.get_u32("Performance", "target_fps", 120), 120);
    }

    #[test]
    fn test_inline_comments_are_stripped() {
        let settings = Settings::parse(SAMPLE);
        // "0.25  # strict lower bound" must parse as 0.25, not fall back
        assert_eq!(settings.get_f32("Model", "conf_threshold", 9.9), 0.25);
    }

    #[test]
    fn test_bool_values_compare_against_true() {
        let settings = Settings::parse(SAMPLE);
        assert!(settings.get_bool("Display", "show_confidence", false));
        assert!(!settings.get_bool("Display", "show_class_name", false));
    }

    #[test]
    fn test_color_triple_parsing() {
        let settings = Settings::parse(SAMPLE);
        assert_eq!(settings.get_color("Display", "box_color", [0, 0, 0]), [0, 0, 255]);
        assert_eq!(
            settings.get_color("Display", "text_color", [255, 255, 255]),
            [255, 255, 255]
        );
    }

    #[test]
    fn test_keys_before_any_section_are_ignored() {
        let settings = Settings::parse("orphan = 1\n[Section]\nkey = 2\n");
        assert_eq!(settings.get_u32("Section", "orphan", 0), 0);
        assert_eq!(settings.get_u32("Section", "key", 0), 2);
    }
}
