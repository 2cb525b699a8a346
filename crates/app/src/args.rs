use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fovscan", about = "FOV object detection with visual overlays")]
pub struct Args {
    /// Settings file ([Model] / [Display] / [Performance] sections)
    #[arg(short, long, default_value = "detector.cfg")]
    pub config: PathBuf,

    /// Detect on a single image instead of running the capture loop
    #[arg(long)]
    pub image: Option<PathBuf>,

    /// Where to write the annotated image in single-image mode
    #[arg(short, long, default_value = "detections.png")]
    pub output: PathBuf,

    /// Stop the capture loop after this many frames (0 = run until killed)
    #[arg(long, default_value_t = 0)]
    pub frames: u64,

    /// Save an overlay snapshot every FPS measurement interval
    #[arg(long)]
    pub save_dir: Option<PathBuf>,
}
