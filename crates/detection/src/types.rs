/// Axis-aligned integer rectangle in source-image pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BBox {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl BBox {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rect from two corner points, truncating to integers.
    ///
    /// The corners are normalized so width/height are never negative, even
    /// when clamping produced an inverted box.
    pub fn from_corners(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        let (x1, y1, x2, y2) = (x1 as i32, y1 as i32, x2 as i32, y2 as i32);
        Self {
            x: x1.min(x2),
            y: y1.min(y2),
            width: (x2 - x1).abs(),
            height: (y2 - y1).abs(),
        }
    }

    pub fn area(&self) -> i64 {
        self.width as i64 * self.height as i64
    }

    pub fn center(&self) -> (f32, f32) {
        (
            self.x as f32 + self.width as f32 / 2.0,
            self.y as f32 + self.height as f32 / 2.0,
        )
    }
}

/// A single detected object.
///
/// The FOV fields stay zero until the FOV geometry stage runs; nothing
/// mutates a detection after that.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    pub bbox: BBox,
    pub score: f32,
    pub class_id: u32,
    /// Box center normalized by FOV size, in [0,1] x [0,1].
    pub fov_center: (f32, f32),
    /// Euclidean distance from the FOV center (0.5, 0.5).
    pub fov_distance: f32,
    /// atan2(dy, dx) from the FOV center, radians, y-down.
    pub fov_angle: f32,
}

impl Detection {
    pub fn new(bbox: BBox, score: f32, class_id: u32) -> Self {
        Self {
            bbox,
            score,
            class_id,
            fov_center: (0.0, 0.0),
            fov_distance: 0.0,
            fov_angle: 0.0,
        }
    }
}

/// Borrowed view over one inference output: a flat float buffer plus its
/// shape descriptor. Owned by the inference collaborator, valid for the
/// duration of a single pipeline run.
#[derive(Debug, Clone, Copy)]
pub struct RawOutput<'a> {
    pub data: &'a [f32],
    pub shape: &'a [i64],
}

impl<'a> RawOutput<'a> {
    pub fn new(data: &'a [f32], shape: &'a [i64]) -> Self {
        Self { data, shape }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_corners_truncates_and_orders() {
        let bbox = BBox::from_corners(10.9, 20.1, 110.7, 220.9);
        assert_eq!(bbox, BBox::new(10, 20, 100, 200));
    }

    #[test]
    fn test_from_corners_normalizes_inverted_box() {
        let bbox = BBox::from_corners(50.0, 50.0, 10.0, 30.0);
        assert_eq!(bbox, BBox::new(10, 30, 40, 20));
        assert!(bbox.width >= 0 && bbox.height >= 0);
    }

    #[test]
    fn test_center_of_odd_sized_box() {
        let bbox = BBox::new(10, 10, 5, 5);
        assert_eq!(bbox.center(), (12.5, 12.5));
    }

    #[test]
    fn test_new_detection_has_zeroed_fov_fields() {
        let det = Detection::new(BBox::new(0, 0, 10, 10), 0.9, 2);
        assert_eq!(det.fov_center, (0.0, 0.0));
        assert_eq!(det.fov_distance, 0.0);
        assert_eq!(det.fov_angle, 0.0);
    }
}
