pub mod classes;
pub mod draw;
pub mod style;

pub use classes::ClassNames;
pub use draw::{draw_detections, draw_fov_overlay};
pub use style::OverlayStyle;
