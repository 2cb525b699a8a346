use crate::backend::InferenceBackend;
use crate::preprocessing::Preprocessor;
use capture::Frame;
use detection::{Detection, Pipeline};

/// Preprocess, infer, post-process: one call per captured frame.
pub struct Detector<B: InferenceBackend> {
    backend: B,
    preprocessor: Preprocessor,
    pipeline: Pipeline,
}

impl<B: InferenceBackend> Detector<B> {
    pub fn new(backend: B, pipeline: Pipeline) -> Self {
        let config = pipeline.config();
        let preprocessor = Preprocessor::new((config.input_width, config.input_height));
        Self {
            backend,
            preprocessor,
            pipeline,
        }
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    pub fn pipeline_mut(&mut self) -> &mut Pipeline {
        &mut self.pipeline
    }

    /// Detect objects in a frame; detections come back in the frame's own
    /// pixel space, FOV metrics included.
    pub fn detect(&mut self, frame: &Frame) -> anyhow::Result<Vec<Detection>> {
        let input = self.preprocessor.prepare(frame)?;
        let output = self.backend.infer(&input)?;
        Ok(self.pipeline.run(output.raw(), (frame.width, frame.height)))
    }
}
