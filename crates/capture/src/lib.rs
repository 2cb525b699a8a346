pub mod error;
pub mod frame;
pub mod region;
pub mod source;
pub mod synthetic;

pub use error::CaptureError;
pub use frame::{Frame, PixelFormat};
pub use region::{Region, centered_region};
pub use source::FrameSource;
pub use synthetic::SyntheticSource;
