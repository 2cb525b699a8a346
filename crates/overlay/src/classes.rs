use common::Settings;

/// This deployment ships six classes.
const DEFAULT_CLASS_NAMES: [&str; 6] = ["person", "bicycle", "car", "motorcycle", "bus", "truck"];

/// Fixed class vocabulary the model's class ids index into.
#[derive(Debug, Clone)]
pub struct ClassNames {
    names: Vec<String>,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            names: DEFAULT_CLASS_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ClassNames {
    /// Comma-separated `class_names` from the `[Model]` section, or the
    /// built-in vocabulary.
    pub fn from_settings(settings: &Settings) -> Self {
        let raw = settings.get_str("Model", "class_names", "");
        if raw.is_empty() {
            return Self::default();
        }
        Self {
            names: raw
                .split(',')
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty())
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Ids beyond the vocabulary still get a stable label.
    pub fn label(&self, class_id: u32) -> String {
        match self.names.get(class_id as usize) {
            Some(name) => name.clone(),
            None => format!("Class {class_id}"),
        }
    }
}
