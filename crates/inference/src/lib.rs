pub mod backend;
pub mod config;
pub mod detector;
pub mod preprocessing;

// Re-export commonly used types for convenience
pub use backend::{InferenceBackend, InferenceOutput};
pub use config::ModelConfig;
pub use detector::Detector;
pub use preprocessing::Preprocessor;
