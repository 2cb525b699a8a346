use detection::pipeline::{Pipeline, PipelineConfig};
use detection::report::{ReportKind, Reporter};
use detection::types::{Detection, RawOutput};
use ndarray::{Array, IxDyn};
use std::cell::RefCell;
use std::rc::Rc;

/// Captures reports for assertion.
#[derive(Default, Clone)]
struct RecordingReporter {
    reports: Rc<RefCell<Vec<ReportKind>>>,
}

impl Reporter for RecordingReporter {
    fn report(&self, kind: ReportKind, _message: &str) {
        self.reports.borrow_mut().push(kind);
    }
}

/// Build a `[1, 5, n]` channel-major buffer with the given
/// `(cx, cy, w, h, score)` rows, everything else zero.
fn single_class_tensor(n: usize, rows: &[[f32; 5]]) -> Array<f32, IxDyn> {
    let mut data = vec![0.0f32; 5 * n];
    for (i, row) in rows.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            data[c * n + i] = *value;
        }
    }
    Array::from_shape_vec(IxDyn(&[1, 5, n]), data).unwrap()
}

fn run(
    pipeline: &Pipeline,
    tensor: &Array<f32, IxDyn>,
    image_size: (u32, u32),
) -> Vec<Detection> {
    let shape: Vec<i64> = tensor.shape().iter().map(|&d| d as i64).collect();
    pipeline.run(
        RawOutput::new(tensor.as_slice().unwrap(), &shape),
        image_size,
    )
}

fn test_config() -> PipelineConfig {
    PipelineConfig {
        confidence_threshold: 0.25,
        iou_threshold: 0.5,
        input_width: 640,
        input_height: 640,
        fov_width: 400,
        fov_height: 400,
    }
}

#[test]
fn test_single_box_maps_into_fov_frame() {
    // One model-space box at the center of a 640x640 input, mapped onto a
    // 400x400 capture: center lands at ~(200, 200), size scales to ~62.5
    let tensor = single_class_tensor(8400, &[[320.0, 320.0, 100.0, 100.0, 0.9]]);
    let pipeline = Pipeline::with_tracing(test_config());

    let detections = run(&pipeline, &tensor, (400, 400));

    assert_eq!(detections.len(), 1);
    let det = &detections[0];
    let (cx, cy) = det.bbox.center();
    assert!((cx - 200.0).abs() <= 1.0, "center x ~200, got {cx}");
    assert!((cy - 200.0).abs() <= 1.0, "center y ~200, got {cy}");
    assert!((det.bbox.width as f32 - 62.5).abs() <= 1.0);
    assert!((det.bbox.height as f32 - 62.5).abs() <= 1.0);
    assert_eq!(det.score, 0.9);
    assert_eq!(det.class_id, 0);

    // FOV geometry ran: centered box, so distance is ~0
    assert!((det.fov_center.0 - 0.5).abs() < 0.01);
    assert!((det.fov_center.1 - 0.5).abs() < 0.01);
    assert!(det.fov_distance < 0.01);
}

#[test]
fn test_overlapping_boxes_keep_highest_score() {
    // Two 100x100 boxes offset by 25px have IoU exactly 0.6; with the
    // threshold at 0.5 only the 0.9 survives.
    let tensor = single_class_tensor(
        8400,
        &[
            [100.0, 100.0, 100.0, 100.0, 0.8],
            [125.0, 100.0, 100.0, 100.0, 0.9],
        ],
    );
    let pipeline = Pipeline::with_tracing(test_config());

    let detections = run(&pipeline, &tensor, (640, 640));

    assert_eq!(detections.len(), 1);
    assert_eq!(detections[0].score, 0.9);
}

#[test]
fn test_unrecognized_rank_four_shape_returns_empty() {
    let tensor = Array::from_shape_vec(IxDyn(&[1, 2, 3, 4]), vec![0.5f32; 24]).unwrap();
    let reporter = RecordingReporter::default();
    let pipeline = Pipeline::new(test_config(), Box::new(reporter.clone()));

    let detections = run(&pipeline, &tensor, (400, 400));

    assert!(detections.is_empty());
    assert_eq!(
        reporter.reports.borrow().as_slice(),
        &[ReportKind::UnrecognizedFormat]
    );
}

#[test]
fn test_linear_layout_class_range() {
    // 600 floats -> 100 boxes x 6 elements. Class 50 is retained, class 150
    // is dropped no matter how confident.
    let mut data = vec![0.0f32; 600];
    data[0..6].copy_from_slice(&[0.25, 0.25, 0.1, 0.1, 0.95, 50.0]);
    data[6..12].copy_from_slice(&[0.75, 0.75, 0.1, 0.1, 0.99, 150.0]);
    let tensor = Array::from_shape_vec(IxDyn(&[1, 600]), data).unwrap();
    let pipeline = Pipeline::with_tracing(test_config());

    let detections = run(&pipeline, &tensor, (400, 400));

    assert_eq!(detections.len(), 1);
    assert_eq!(detections[0].class_id, 50);
    assert_eq!(detections[0].score, 0.95);
    // Normalized coordinates scale straight to pixels
    let (cx, cy) = detections[0].bbox.center();
    assert!((cx - 100.0).abs() <= 1.0);
    assert!((cy - 100.0).abs() <= 1.0);
}

#[test]
fn test_empty_buffer_is_reported_and_skipped() {
    let reporter = RecordingReporter::default();
    let pipeline = Pipeline::new(test_config(), Box::new(reporter.clone()));

    let detections = pipeline.run(RawOutput::new(&[], &[1, 5, 8400]), (400, 400));

    assert!(detections.is_empty());
    assert_eq!(
        reporter.reports.borrow().as_slice(),
        &[ReportKind::EmptyOutput]
    );
}

#[test]
fn test_short_buffer_is_reported_not_panicking() {
    let reporter = RecordingReporter::default();
    let pipeline = Pipeline::new(test_config(), Box::new(reporter.clone()));

    // Shape promises 5 * 8400 floats, buffer holds 10
    let detections = pipeline.run(RawOutput::new(&[0.0; 10], &[1, 5, 8400]), (400, 400));

    assert!(detections.is_empty());
    assert_eq!(
        reporter.reports.borrow().as_slice(),
        &[ReportKind::UnrecognizedFormat]
    );
}

#[test]
fn test_multi_class_end_to_end() {
    // [1, 10, n]: 4 box params + 6 class scores
    let n = 100;
    let mut data = vec![0.0f32; 10 * n];
    // Box 0: center (320, 320), 64x64, best class 3 at 0.85
    data[0] = 320.0;
    data[n] = 320.0;
    data[2 * n] = 64.0;
    data[3 * n] = 64.0;
    data[(4 + 3) * n] = 0.85;
    let tensor = Array::from_shape_vec(IxDyn(&[1, 10, n]), data).unwrap();
    let pipeline = Pipeline::with_tracing(test_config());

    let detections = run(&pipeline, &tensor, (640, 640));

    assert_eq!(detections.len(), 1);
    assert_eq!(detections[0].class_id, 3);
    assert_eq!(detections[0].score, 0.85);
    assert_eq!(detections[0].bbox.width, 64);
}

#[test]
fn test_below_threshold_candidates_never_surface() {
    let tensor = single_class_tensor(
        8400,
        &[
            [100.0, 100.0, 50.0, 50.0, 0.25], // exactly at threshold: rejected
            [300.0, 300.0, 50.0, 50.0, 0.1],
        ],
    );
    let pipeline = Pipeline::with_tracing(test_config());

    assert!(run(&pipeline, &tensor, (400, 400)).is_empty());
}
