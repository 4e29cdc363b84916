//! Approximate "how much has been painted" accounting.

use crate::brush::StrokeSegment;
use crate::constants::FILL_INCREMENT;

/// Turns one frame of stroke activity into a number of newly filled pixels.
pub trait FillEstimator {
    fn estimate(&mut self, segment: &StrokeSegment, brush_size: f32) -> u32;
}

/// Counts a fixed number of pixels for every frame, moving or not.
#[derive(Clone, Copy, Debug)]
pub struct FixedIncrement(pub u32);

impl Default for FixedIncrement {
    fn default() -> Self {
        Self(FILL_INCREMENT)
    }
}

impl FillEstimator for FixedIncrement {
    fn estimate(&mut self, _segment: &StrokeSegment, _brush_size: f32) -> u32 {
        self.0
    }
}

/// Estimates coverage as the swept area of the segment (length × width).
///
/// Overlapping strokes are counted again; the total is still clamped.
#[derive(Clone, Copy, Debug, Default)]
pub struct SegmentCoverage;

impl FillEstimator for SegmentCoverage {
    fn estimate(&mut self, segment: &StrokeSegment, brush_size: f32) -> u32 {
        (segment.length() * brush_size.max(0.0)).round() as u32
    }
}

/// Filled-pixel counter bounded by the drawable area.
pub struct FillState {
    filled: u32,
    total: u32,
    estimator: Box<dyn FillEstimator>,
}

impl std::fmt::Debug for FillState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FillState")
            .field("filled", &self.filled)
            .field("total", &self.total)
            .finish_non_exhaustive()
    }
}

impl FillState {
    pub fn new(total: u32, estimator: Box<dyn FillEstimator>) -> Self {
        Self {
            filled: 0,
            total,
            estimator,
        }
    }

    /// Account for one frame of drawing.
    pub fn record_stroke_activity(&mut self, segment: &StrokeSegment, brush_size: f32) {
        let added = self.estimator.estimate(segment, brush_size);
        self.filled = self.filled.saturating_add(added).min(self.total);
    }

    /// Fraction of the drawable area considered filled, in [0, 1].
    pub fn fill_ratio(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        self.filled as f32 / self.total as f32
    }

    pub fn reset(&mut self) {
        self.filled = 0;
    }

    #[inline]
    pub fn filled(&self) -> u32 {
        self.filled
    }

    #[inline]
    pub fn total(&self) -> u32 {
        self.total
    }
}
