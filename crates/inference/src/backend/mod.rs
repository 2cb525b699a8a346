use ndarray::{Array, IxDyn};

#[cfg(feature = "ort-backend")]
pub mod ort;

/// Inference-runtime collaborator: turns a preprocessed NCHW batch into the
/// model's first output tensor. The pipeline never talks to the runtime
/// directly.
pub trait InferenceBackend {
    fn load_model(path: &str) -> anyhow::Result<Self>
    where
        Self: Sized;

    fn infer(&mut self, images: &Array<f32, IxDyn>) -> anyhow::Result<InferenceOutput>;
}

/// Flattened copy of one output tensor plus its shape descriptor.
pub struct InferenceOutput {
    pub data: Vec<f32>,
    pub shape: Vec<i64>,
}

impl InferenceOutput {
    /// Borrow as the post-processing pipeline's input view.
    pub fn raw(&self) -> detection::RawOutput<'_> {
        detection::RawOutput::new(&self.data, &self.shape)
    }
}
