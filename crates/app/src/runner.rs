use crate::fps::FpsTracker;
use anyhow::Context;
use capture::{Frame, FrameSource, PixelFormat};
use common::Settings;
use image::RgbImage;
use inference::{Detector, InferenceBackend};
use overlay::{ClassNames, OverlayStyle};
use std::path::Path;
use std::time::{Duration, Instant};

pub struct PerformanceConfig {
    pub target_fps: u32,
    pub measurement_interval: u64,
    pub log_fps: bool,
}

impl PerformanceConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        let mode = settings.get_str("Performance", "performance_mode", "normal");
        if mode == "maximum" {
            tracing::info!("Maximum performance mode enabled");
        }
        Self {
            target_fps: settings.get_u32("Performance", "target_fps", 120),
            measurement_interval: settings.get_u32("Performance", "fps_measurement_interval", 60)
                as u64,
            log_fps: settings.get_bool("Performance", "enable_fps_logging", true),
        }
    }
}

pub fn frame_to_rgb_image(frame: &Frame) -> RgbImage {
    let mut image = RgbImage::new(frame.width, frame.height);
    let bpp = frame.format.bytes_per_pixel();
    for (i, px) in frame.pixels.chunks_exact(bpp).enumerate() {
        let x = (i as u32) % frame.width;
        let y = (i as u32) / frame.width;
        let rgb = match frame.format {
            PixelFormat::Rgb8 => [px[0], px[1], px[2]],
            PixelFormat::Bgra8 => [px[2], px[1], px[0]],
        };
        image.put_pixel(x, y, image::Rgb(rgb));
    }
    image
}

/// Detect on a single image file and write the annotated copy next to it.
pub fn run_oneshot<B: InferenceBackend>(
    detector: &mut Detector<B>,
    input: &Path,
    output: &Path,
    style: &OverlayStyle,
    classes: &ClassNames,
) -> anyhow::Result<()> {
    let image = image::open(input)
        .with_context(|| format!("Failed to open {}", input.display()))?
        .to_rgb8();

    let frame = Frame::new(
        image.width(),
        image.height(),
        PixelFormat::Rgb8,
        image.as_raw().clone(),
    );
    let detections = detector.detect(&frame)?;

    tracing::info!(count = detections.len(), "Detection complete");
    log_detections(&detections, classes);

    let mut annotated = image;
    overlay::draw_detections(&mut annotated, &detections, style, classes);
    annotated
        .save(output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    tracing::info!(path = %output.display(), "Annotated image written");
    Ok(())
}

/// The capture loop: grab the centered FOV, detect, log, pace to the target
/// frame rate. Never aborts on a bad frame - it skips and keeps going.
pub fn run_loop<B: InferenceBackend, S: FrameSource>(
    detector: &mut Detector<B>,
    source: &mut S,
    style: &OverlayStyle,
    classes: &ClassNames,
    perf: &PerformanceConfig,
    max_frames: u64,
    save_dir: Option<&Path>,
) -> anyhow::Result<()> {
    let (fov_width, fov_height) = {
        let config = detector.pipeline().config();
        (config.fov_width, config.fov_height)
    };
    let frame_budget = Duration::from_secs_f64(1.0 / perf.target_fps.max(1) as f64);
    let mut fps = FpsTracker::new(perf.measurement_interval);
    let mut frame_number = 0u64;

    tracing::info!(
        fov_width,
        fov_height,
        target_fps = perf.target_fps,
        "Starting capture loop"
    );

    if let Some(dir) = save_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }

    loop {
        let frame_start = Instant::now();
        frame_number += 1;

        let fov_frame = match source.capture_fov(fov_width, fov_height) {
            Ok(frame) if !frame.is_empty() => frame,
            Ok(_) => {
                tracing::error!(frame_number, "Captured empty FOV frame");
                continue;
            }
            Err(err) => {
                tracing::error!(frame_number, error = %err, "Failed to capture FOV");
                continue;
            }
        };

        match detector.detect(&fov_frame) {
            Ok(detections) => {
                if !detections.is_empty() {
                    tracing::info!(
                        frame_number,
                        count = detections.len(),
                        "Objects detected in FOV"
                    );
                    log_detections(&detections, classes);
                }

                let sample = fps.tick();
                if let Some(sample) = sample {
                    if perf.log_fps {
                        tracing::info!(
                            "FPS at frame {}: current {:.0} | average {:.0} | target {}",
                            sample.frame_count,
                            sample.current,
                            sample.average,
                            perf.target_fps
                        );
                    }
                    if let Some(dir) = save_dir {
                        let mut snapshot = frame_to_rgb_image(&fov_frame);
                        overlay::draw_fov_overlay(&mut snapshot, &detections, style);
                        let path = dir.join(format!("frame_{frame_number:08}.png"));
                        if let Err(err) = snapshot.save(&path) {
                            tracing::warn!(error = %err, "Failed to save overlay snapshot");
                        }
                    }
                }
            }
            Err(err) => {
                tracing::error!(frame_number, error = %err, "Failed to process frame");
            }
        }

        let elapsed = frame_start.elapsed();
        if elapsed < frame_budget {
            std::thread::sleep(frame_budget - elapsed);
        }

        if max_frames > 0 && frame_number >= max_frames {
            break;
        }
    }

    if let Some(summary) = fps.summary() {
        let target = perf.target_fps as f64;
        let verdict = if summary.average >= target * 0.9 {
            "EXCELLENT"
        } else if summary.average >= target * 0.7 {
            "GOOD"
        } else {
            "NEEDS OPTIMIZATION"
        };
        tracing::info!(
            "Run statistics: {} frames | average {:.0} fps | min {:.0} | max {:.0} | target {} | {}",
            summary.frames,
            summary.average,
            summary.min,
            summary.max,
            perf.target_fps,
            verdict
        );
    }

    Ok(())
}

fn log_detections(detections: &[detection::Detection], classes: &ClassNames) {
    for (index, det) in detections.iter().enumerate() {
        tracing::info!(
            "Detection {}: class {} | score {:.2} | distance {:.3} | angle {:.1} deg",
            index,
            classes.label(det.class_id),
            det.score,
            det.fov_distance,
            det.fov_angle.to_degrees()
        );
    }
}
