//! Output tensor decoding.
//!
//! Exported detector models disagree on output layout; the shape descriptor
//! is the only reliable discriminator, so the decoder is a tagged union
//! selected from the shape at runtime. Rank-3 layouts carry coordinates in
//! model-input units, the rank-2 linear layout carries them normalized to
//! [0,1] - both conventions are preserved downstream.

/// Box count assumed for the rank-2 linear layout.
pub const LINEAR_BOX_COUNT: usize = 100;

/// Unfiltered candidate in the decoder's coordinate convention:
/// center-form box, best score, best class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub cx: f32,
    pub cy: f32,
    pub w: f32,
    pub h: f32,
    pub score: f32,
    pub class_id: i32,
}

/// Coordinate convention of decoded candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordSpace {
    /// Units of the model's declared input size (e.g. 640x640).
    ModelInput,
    /// Normalized to [0,1].
    Normalized,
}

/// Recognized output tensor layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputLayout {
    /// `[1, 5, N]`: single-class detector, channel-major planes
    /// (x, y, w, h, score).
    SingleClass { boxes: usize },
    /// `[1, 4+C, N]` with C > 1: channel-major box planes followed by C
    /// class-score planes.
    MultiClass { classes: usize, boxes: usize },
    /// `[1, total]`: packed boxes of `stride` floats each
    /// (x, y, w, h, score, then class id when the stride allows).
    Linear { stride: usize, boxes: usize },
}

impl OutputLayout {
    /// Select a layout from the output shape. Returns `None` for anything
    /// the decoder does not recognize.
    pub fn from_shape(shape: &[i64]) -> Option<Self> {
        match *shape {
            [1, 5, n] if n > 0 => Some(OutputLayout::SingleClass { boxes: n as usize }),
            [1, c, n] if c > 5 && n > 0 => Some(OutputLayout::MultiClass {
                classes: (c - 4) as usize,
                boxes: n as usize,
            }),
            [1, total] if total > 0 => {
                let total = total as usize;
                let stride = total / LINEAR_BOX_COUNT;
                if stride >= 5 {
                    Some(OutputLayout::Linear {
                        stride,
                        boxes: total / stride,
                    })
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    pub fn coord_space(&self) -> CoordSpace {
        match self {
            OutputLayout::SingleClass { .. } | OutputLayout::MultiClass { .. } => {
                CoordSpace::ModelInput
            }
            OutputLayout::Linear { .. } => CoordSpace::Normalized,
        }
    }

    /// Number of floats this layout expects in the buffer.
    pub fn expected_len(&self) -> usize {
        match *self {
            OutputLayout::SingleClass { boxes } => 5 * boxes,
            OutputLayout::MultiClass { classes, boxes } => (4 + classes) * boxes,
            OutputLayout::Linear { stride, boxes } => stride * boxes,
        }
    }

    /// Decode the raw buffer into unfiltered candidates.
    ///
    /// The buffer must hold at least [`Self::expected_len`] floats; the
    /// pipeline validates that before calling.
    pub fn decode(&self, data: &[f32]) -> Vec<Candidate> {
        match *self {
            OutputLayout::SingleClass { boxes } => decode_single_class(data, boxes),
            OutputLayout::MultiClass { classes, boxes } => decode_multi_class(data, classes, boxes),
            OutputLayout::Linear { stride, boxes } => decode_linear(data, stride, boxes),
        }
    }
}

fn decode_single_class(data: &[f32], boxes: usize) -> Vec<Candidate> {
    let mut candidates = Vec::with_capacity(boxes);
    for i in 0..boxes {
        candidates.push(Candidate {
            cx: data[i],
            cy: data[boxes + i],
            w: data[2 * boxes + i],
            h: data[3 * boxes + i],
            score: data[4 * boxes + i],
            class_id: 0,
        });
    }
    candidates
}

fn decode_multi_class(data: &[f32], classes: usize, boxes: usize) -> Vec<Candidate> {
    let mut candidates = Vec::with_capacity(boxes);
    // Channel-major, so box i lives strided across the planes: a logical
    // transpose to box-major order.
    for i in 0..boxes {
        let mut best_score = f32::NEG_INFINITY;
        let mut best_class = 0usize;
        for c in 0..classes {
            let score = data[(4 + c) * boxes + i];
            // Strict > keeps the lowest class index on exact ties.
            if score > best_score {
                best_score = score;
                best_class = c;
            }
        }
        candidates.push(Candidate {
            cx: data[i],
            cy: data[boxes + i],
            w: data[2 * boxes + i],
            h: data[3 * boxes + i],
            score: best_score,
            class_id: best_class as i32,
        });
    }
    candidates
}

fn decode_linear(data: &[f32], stride: usize, boxes: usize) -> Vec<Candidate> {
    let mut candidates = Vec::with_capacity(boxes);
    for i in 0..boxes {
        let record = &data[i * stride..(i + 1) * stride];
        candidates.push(Candidate {
            cx: record[0],
            cy: record[1],
            w: record[2],
            h: record[3],
            score: record[4],
            class_id: if stride > 5 { record[5] as i32 } else { 0 },
        });
    }
    candidates
}
