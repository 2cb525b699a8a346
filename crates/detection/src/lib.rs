pub mod filter;
pub mod fov;
pub mod layout;
pub mod mapper;
pub mod nms;
pub mod pipeline;
pub mod report;
pub mod types;

// Re-export commonly used types for convenience
pub use pipeline::{Pipeline, PipelineConfig};
pub use report::{ReportKind, Reporter, TracingReporter};
pub use types::{BBox, Detection, RawOutput};
