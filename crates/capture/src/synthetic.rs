use crate::error::CaptureError;
use crate::frame::{Frame, PixelFormat};
use crate::source::FrameSource;

/// Deterministic BGRA test-pattern source: a dark gradient background with a
/// bright square orbiting the frame center. Stands in for a real compositor
/// backend in demos and tests.
pub struct SyntheticSource {
    width: u32,
    height: u32,
    frame_counter: u64,
}

impl SyntheticSource {
    pub fn new(width: u32, height: u32) -> Self {
        tracing::debug!(width, height, "Synthetic capture source ready");
        Self {
            width,
            height,
            frame_counter: 0,
        }
    }

    fn square_origin(&self) -> (u32, u32) {
        // Orbit of radius 1/8 frame, advancing ~3.6 degrees per frame
        let angle = (self.frame_counter % 100) as f32 / 100.0 * std::f32::consts::TAU;
        let radius_x = self.width as f32 / 8.0;
        let radius_y = self.height as f32 / 8.0;
        let cx = self.width as f32 / 2.0 + angle.cos() * radius_x;
        let cy = self.height as f32 / 2.0 + angle.sin() * radius_y;
        (cx as u32, cy as u32)
    }
}

const SQUARE_SIZE: u32 = 32;

impl FrameSource for SyntheticSource {
    fn frame_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn next_frame(&mut self) -> Result<Frame, CaptureError> {
        let (sx, sy) = self.square_origin();
        let mut pixels = Vec::with_capacity((self.width * self.height * 4) as usize);

        for y in 0..self.height {
            for x in 0..self.width {
                let in_square = x >= sx
                    && x < (sx + SQUARE_SIZE).min(self.width)
                    && y >= sy
                    && y < (sy + SQUARE_SIZE).min(self.height);
                if in_square {
                    pixels.extend_from_slice(&[255, 255, 255, 255]);
                } else {
                    let shade = (x * 64 / self.width.max(1)) as u8;
                    pixels.extend_from_slice(&[shade, shade / 2, shade / 4, 255]);
                }
            }
        }

        self.frame_counter += 1;
        Ok(Frame::new(self.width, self.height, PixelFormat::Bgra8, pixels))
    }
}
