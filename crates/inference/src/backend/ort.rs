use super::{InferenceBackend, InferenceOutput};
use ndarray::{Array, IxDyn};
use ort::{
    session::{Session, builder::GraphOptimizationLevel},
    value::TensorRef,
};

#[derive(Debug, Clone, Copy)]
pub enum ExecutionProvider {
    Cpu,
    Cuda,
}

pub struct OrtBackend {
    session: Session,
    output_name: String,
}

impl OrtBackend {
    /// Load model with specified execution provider
    pub fn load_model_with_provider(
        path: &str,
        provider: ExecutionProvider,
    ) -> anyhow::Result<Self> {
        // Initialize ORT environment (idempotent)
        let _ = ort::init().commit();

        #[allow(unused_mut)]
        let mut builder = Session::builder()?
            .with_optimization_level(GraphOptimizationLevel::Level3)?
            .with_intra_threads(4)?;

        match provider {
            ExecutionProvider::Cuda => {
                #[cfg(feature = "cuda")]
                {
                    tracing::info!("Initializing ONNX Runtime with CUDA execution provider");
                    builder = builder.with_execution_providers([
                        ort::execution_providers::CUDAExecutionProvider::default()
                            .with_device_id(0)
                            .build()
                            .error_on_failure(),
                    ])?;
                }
                #[cfg(not(feature = "cuda"))]
                tracing::warn!("CUDA requested but the cuda feature is off, falling back to CPU");
            }
            ExecutionProvider::Cpu => {
                tracing::info!("Initializing ONNX Runtime with CPU execution provider");
            }
        }

        let session = builder.commit_from_file(path)?;

        let output_name = session
            .outputs()
            .first()
            .map(|output| output.name().to_string())
            .ok_or_else(|| anyhow::anyhow!("Model has no outputs"))?;

        tracing::info!(
            path,
            inputs = session.inputs().len(),
            outputs = session.outputs().len(),
            output_name,
            "Model loaded"
        );

        Ok(Self {
            session,
            output_name,
        })
    }
}

impl InferenceBackend for OrtBackend {
    fn load_model(path: &str) -> anyhow::Result<Self> {
        Self::load_model_with_provider(path, ExecutionProvider::Cpu)
    }

    fn infer(&mut self, images: &Array<f32, IxDyn>) -> anyhow::Result<InferenceOutput> {
        let outputs = self
            .session
            .run(ort::inputs![TensorRef::from_array_view(images.view())?])?;

        let array = outputs[self.output_name.as_str()].try_extract_array::<f32>()?;
        let shape: Vec<i64> = array.shape().iter().map(|&dim| dim as i64).collect();
        let data: Vec<f32> = array.iter().copied().collect();

        Ok(InferenceOutput { data, shape })
    }
}
