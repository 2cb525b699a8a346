use crate::types::Detection;

/// Per-detection FOV-relative geometry: normalized center, radial distance
/// from the FOV midpoint, and angle in the y-down convention.
///
/// Pure arithmetic, no state and no failure modes; degenerate boxes get
/// the standard math-library edge behavior (`atan2(0, 0) == 0`).
#[derive(Debug, Clone, Copy)]
pub struct FovGeometry {
    pub fov_width: u32,
    pub fov_height: u32,
}

impl FovGeometry {
    pub fn new(fov_width: u32, fov_height: u32) -> Self {
        Self {
            fov_width,
            fov_height,
        }
    }

    pub fn center_of(&self, detection: &Detection) -> (f32, f32) {
        let (cx, cy) = detection.bbox.center();
        (cx / self.fov_width as f32, cy / self.fov_height as f32)
    }

    pub fn distance(center: (f32, f32)) -> f32 {
        let dx = center.0 - 0.5;
        let dy = center.1 - 0.5;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn angle(center: (f32, f32)) -> f32 {
        let dx = center.0 - 0.5;
        let dy = center.1 - 0.5;
        dy.atan2(dx)
    }

    pub fn annotate(&self, detection: &mut Detection) {
        let center = self.center_of(detection);
        detection.fov_center = center;
        detection.fov_distance = Self::distance(center);
        detection.fov_angle = Self::angle(center);
    }

    pub fn annotate_all(&self, detections: &mut [Detection]) {
        for detection in detections {
            self.annotate(detection);
        }
    }
}
