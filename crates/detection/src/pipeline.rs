use crate::filter::ConfidenceFilter;
use crate::fov::FovGeometry;
use crate::layout::OutputLayout;
use crate::mapper::CoordinateMapper;
use crate::report::{ReportKind, Reporter, TracingReporter};
use crate::types::{Detection, RawOutput};

pub const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 0.25;
pub const DEFAULT_IOU_THRESHOLD: f32 = 0.45;
pub const DEFAULT_INPUT_SIZE: (u32, u32) = (640, 640);
pub const DEFAULT_FOV_SIZE: (u32, u32) = (400, 400);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineConfig {
    pub confidence_threshold: f32,
    pub iou_threshold: f32,
    pub input_width: u32,
    pub input_height: u32,
    pub fov_width: u32,
    pub fov_height: u32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            iou_threshold: DEFAULT_IOU_THRESHOLD,
            input_width: DEFAULT_INPUT_SIZE.0,
            input_height: DEFAULT_INPUT_SIZE.1,
            fov_width: DEFAULT_FOV_SIZE.0,
            fov_height: DEFAULT_FOV_SIZE.1,
        }
    }
}

impl PipelineConfig {
    /// Read the `[Model]` section of the settings file, falling back to the
    /// defaults for anything missing or malformed.
    pub fn from_settings(settings: &common::Settings) -> Self {
        Self {
            confidence_threshold: settings.get_f32(
                "Model",
                "conf_threshold",
                DEFAULT_CONFIDENCE_THRESHOLD,
            ),
            iou_threshold: settings.get_f32("Model", "iou_threshold", DEFAULT_IOU_THRESHOLD),
            input_width: settings.get_u32("Model", "input_width", DEFAULT_INPUT_SIZE.0),
            input_height: settings.get_u32("Model", "input_height", DEFAULT_INPUT_SIZE.1),
            fov_width: settings.get_u32("Model", "fov_width", DEFAULT_FOV_SIZE.0),
            fov_height: settings.get_u32("Model", "fov_height", DEFAULT_FOV_SIZE.1),
        }
    }
}

/// The detection post-processing pipeline: decode, filter, map, suppress,
/// annotate - strictly in that order, once per frame.
///
/// Synchronous and stateless across calls apart from the config fields,
/// which may be adjusted between runs but not during one. Per-frame
/// conditions never fail the run; they degrade to an empty result and go to
/// the injected [`Reporter`].
pub struct Pipeline {
    config: PipelineConfig,
    reporter: Box<dyn Reporter>,
}

impl Pipeline {
    pub fn new(config: PipelineConfig, reporter: Box<dyn Reporter>) -> Self {
        Self { config, reporter }
    }

    /// Pipeline reporting through `tracing`, the usual production wiring.
    pub fn with_tracing(config: PipelineConfig) -> Self {
        Self::new(config, Box::new(TracingReporter))
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn set_thresholds(&mut self, confidence_threshold: f32, iou_threshold: f32) {
        self.config.confidence_threshold = confidence_threshold;
        self.config.iou_threshold = iou_threshold;
    }

    pub fn set_input_size(&mut self, width: u32, height: u32) {
        self.config.input_width = width;
        self.config.input_height = height;
    }

    pub fn set_fov_size(&mut self, width: u32, height: u32) {
        self.config.fov_width = width;
        self.config.fov_height = height;
    }

    /// Process one inference output into the final detection sequence for a
    /// frame of `image_size` pixels.
    pub fn run(&self, raw: RawOutput<'_>, image_size: (u32, u32)) -> Vec<Detection> {
        if raw.data.is_empty() {
            self.reporter
                .report(ReportKind::EmptyOutput, "Model output is empty");
            return Vec::new();
        }

        let Some(layout) = OutputLayout::from_shape(raw.shape) else {
            self.reporter.report(
                ReportKind::UnrecognizedFormat,
                &format!("Output format not recognized: shape {:?}", raw.shape),
            );
            return Vec::new();
        };

        if raw.data.len() < layout.expected_len() {
            self.reporter.report(
                ReportKind::UnrecognizedFormat,
                &format!(
                    "Output buffer too short for shape {:?}: {} < {}",
                    raw.shape,
                    raw.data.len(),
                    layout.expected_len()
                ),
            );
            return Vec::new();
        }

        let filter = ConfidenceFilter::new(self.config.confidence_threshold);
        let mapper = CoordinateMapper::new(self.config.input_width, self.config.input_height);
        let space = layout.coord_space();
        let (img_width, img_height) = image_size;

        let candidates = layout.decode(raw.data);
        let detections: Vec<Detection> = candidates
            .iter()
            .filter(|candidate| filter.accepts(&layout, candidate))
            .map(|candidate| {
                Detection::new(
                    mapper.map(space, candidate, img_width, img_height),
                    candidate.score,
                    candidate.class_id as u32,
                )
            })
            .collect();

        let mut kept = crate::nms::non_max_suppression(&detections, self.config.iou_threshold);

        FovGeometry::new(self.config.fov_width, self.config.fov_height).annotate_all(&mut kept);

        kept
    }
}
