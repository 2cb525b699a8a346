use crate::types::{BBox, Detection};

/// Intersection-over-union with integer rectangle arithmetic.
///
/// A zero-area union reports 0 rather than dividing by zero.
pub fn iou(a: &BBox, b: &BBox) -> f32 {
    let x1 = a.x.max(b.x);
    let y1 = a.y.max(b.y);
    let x2 = (a.x + a.width).min(b.x + b.width);
    let y2 = (a.y + a.height).min(b.y + b.height);

    if x2 <= x1 || y2 <= y1 {
        return 0.0;
    }

    let intersection = (x2 - x1) as i64 * (y2 - y1) as i64;
    let union = a.area() + b.area() - intersection;
    if union <= 0 {
        return 0.0;
    }

    intersection as f32 / union as f32
}

/// Greedy non-maximum suppression, global across classes.
///
/// Indices are sorted by descending score with a stable sort, so exact
/// score ties keep their original candidate order and the earlier candidate
/// wins. Suppression is strict: only `iou > iou_threshold` removes a box.
pub fn non_max_suppression(detections: &[Detection], iou_threshold: f32) -> Vec<Detection> {
    if detections.is_empty() {
        return Vec::new();
    }

    let mut indices: Vec<usize> = (0..detections.len()).collect();
    indices.sort_by(|&a, &b| detections[b].score.total_cmp(&detections[a].score));

    let mut used = vec![false; detections.len()];
    let mut result = Vec::new();

    for i in 0..indices.len() {
        if used[indices[i]] {
            continue;
        }
        used[indices[i]] = true;
        result.push(detections[indices[i]].clone());

        for j in (i + 1)..indices.len() {
            if used[indices[j]] {
                continue;
            }
            if iou(&detections[indices[i]].bbox, &detections[indices[j]].bbox) > iou_threshold {
                used[indices[j]] = true;
            }
        }
    }

    result
}
