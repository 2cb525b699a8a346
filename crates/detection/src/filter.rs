use crate::layout::{Candidate, OutputLayout};

/// Class ids outside [0, LINEAR_CLASS_LIMIT) in the linear layout are noise
/// from misparsed records and get dropped here.
const LINEAR_CLASS_LIMIT: i32 = 100;

/// Drops candidates that do not clear the confidence threshold.
#[derive(Debug, Clone, Copy)]
pub struct ConfidenceFilter {
    pub threshold: f32,
}

impl ConfidenceFilter {
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }

    /// Strictly greater than the threshold: a score exactly at the
    /// threshold is rejected.
    pub fn accepts(&self, layout: &OutputLayout, candidate: &Candidate) -> bool {
        if !(candidate.score > self.threshold) {
            return false;
        }
        match layout {
            OutputLayout::Linear { .. } => {
                candidate.class_id >= 0 && candidate.class_id < LINEAR_CLASS_LIMIT
            }
            _ => true,
        }
    }
}
