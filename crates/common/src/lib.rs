pub mod logging;
pub mod settings;

pub use logging::{Environment, setup_logging};
pub use settings::Settings;
