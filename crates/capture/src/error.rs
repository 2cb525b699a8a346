use thiserror::Error;

#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("Capture source not initialized")]
    NotInitialized,
    #[error("Failed to acquire frame: {0}")]
    Acquisition(String),
}
