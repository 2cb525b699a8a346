mod args;
mod fps;
mod runner;

use args::Args;
use clap::Parser;
use common::{Environment, Settings, setup_logging};

#[cfg(feature = "ort-backend")]
use inference::backend::ort::{ExecutionProvider, OrtBackend as Backend};

#[cfg(not(feature = "ort-backend"))]
compile_error!("The 'ort-backend' feature must be enabled to build the application");

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    setup_logging(Environment::from_env());

    let settings = match Settings::load(&args.config) {
        Ok(settings) => settings,
        Err(err) => {
            tracing::warn!(
                path = %args.config.display(),
                error = %err,
                "Settings file unavailable, using defaults"
            );
            Settings::default()
        }
    };

    let model_config = inference::ModelConfig::from_settings(&settings);
    let pipeline_config = detection::PipelineConfig::from_settings(&settings);
    let style = overlay::OverlayStyle::from_settings(&settings);
    let classes = overlay::ClassNames::from_settings(&settings);
    let perf = runner::PerformanceConfig::from_settings(&settings);

    tracing::info!(
        model = ?model_config,
        pipeline = ?pipeline_config,
        classes = classes.len(),
        "Loaded configuration"
    );

    let provider = if model_config.use_cuda {
        ExecutionProvider::Cuda
    } else {
        ExecutionProvider::Cpu
    };

    tracing::info!("Loading inference model");
    let backend = Backend::load_model_with_provider(&model_config.model_path, provider)?;
    tracing::info!("Model loaded successfully");

    let pipeline = detection::Pipeline::with_tracing(pipeline_config);
    let mut detector = inference::Detector::new(backend, pipeline);

    match &args.image {
        Some(path) => runner::run_oneshot(&mut detector, path, &args.output, &style, &classes),
        None => {
            let screen_width = settings.get_u32("Capture", "screen_width", 1920);
            let screen_height = settings.get_u32("Capture", "screen_height", 1080);
            let mut source = capture::SyntheticSource::new(screen_width, screen_height);

            tracing::info!(
                screen_width,
                screen_height,
                fov_width = pipeline_config.fov_width,
                fov_height = pipeline_config.fov_height,
                "Screen capture ready"
            );

            runner::run_loop(
                &mut detector,
                &mut source,
                &style,
                &classes,
                &perf,
                args.frames,
                args.save_dir.as_deref(),
            )
        }
    }
}
