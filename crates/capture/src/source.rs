use crate::error::CaptureError;
use crate::frame::Frame;
use crate::region::centered_region;

/// Contract every capture backend fulfills: full frames on demand.
///
/// The surrounding loop drives pacing; a source only has to produce the
/// latest frame when asked.
pub trait FrameSource {
    /// Size of the surface being captured.
    fn frame_size(&self) -> (u32, u32);

    fn next_frame(&mut self) -> Result<Frame, CaptureError>;

    /// Capture and crop the centered FOV region in one step.
    fn capture_fov(&mut self, fov_width: u32, fov_height: u32) -> Result<Frame, CaptureError> {
        let frame = self.next_frame()?;
        let region = centered_region(frame.width, frame.height, fov_width, fov_height);
        Ok(frame.crop(&region))
    }
}
