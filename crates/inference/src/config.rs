use common::Settings;

pub const DEFAULT_MODEL_PATH: &str = "models/detector.onnx";

/// Model-loading knobs from the `[Model]` section of the settings file.
/// Post-processing thresholds live in `detection::PipelineConfig`.
#[derive(Debug, Clone)]
pub struct ModelConfig {
    pub model_path: String,
    pub input_size: (u32, u32),
    pub use_cuda: bool,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model_path: DEFAULT_MODEL_PATH.to_string(),
            input_size: (640, 640),
            use_cuda: false,
        }
    }
}

impl ModelConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            model_path: settings.get_str("Model", "model_path", DEFAULT_MODEL_PATH),
            input_size: (
                settings.get_u32("Model", "input_width", 640),
                settings.get_u32("Model", "input_height", 640),
            ),
            use_cuda: settings.get_bool("Model", "use_cuda", false),
        }
    }
}
