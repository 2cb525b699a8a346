use crate::layout::{Candidate, CoordSpace};
use crate::types::BBox;

/// Rescales center-form candidate boxes into pixel-space corners in the
/// source image, clamped to its bounds.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateMapper {
    pub input_width: u32,
    pub input_height: u32,
}

impl CoordinateMapper {
    pub fn new(input_width: u32, input_height: u32) -> Self {
        Self {
            input_width,
            input_height,
        }
    }

    /// Map a candidate into a pixel-space rect inside
    /// `[0, img_w-1] x [0, img_h-1]`.
    ///
    /// Degenerate inputs survive as zero-area boxes; later stages tolerate
    /// them.
    pub fn map(
        &self,
        space: CoordSpace,
        candidate: &Candidate,
        img_width: u32,
        img_height: u32,
    ) -> BBox {
        let (scale_x, scale_y) = match space {
            CoordSpace::ModelInput => (
                img_width as f32 / self.input_width as f32,
                img_height as f32 / self.input_height as f32,
            ),
            CoordSpace::Normalized => (img_width as f32, img_height as f32),
        };

        let cx = candidate.cx * scale_x;
        let cy = candidate.cy * scale_y;
        let w = candidate.w * scale_x;
        let h = candidate.h * scale_y;

        let x1 = cx - w / 2.0;
        let y1 = cy - h / 2.0;
        let x2 = x1 + w;
        let y2 = y1 + h;

        let max_x = (img_width - 1) as f32;
        let max_y = (img_height - 1) as f32;

        // min-then-max mirrors saturating clamp and stays safe for 1-pixel
        // images where max_x is 0.
        BBox::from_corners(
            x1.min(max_x).max(0.0),
            y1.min(max_y).max(0.0),
            x2.min(max_x).max(0.0),
            y2.min(max_y).max(0.0),
        )
    }
}
