use crate::constants::{
    BRUSH_SIZE_DEFAULT, BRUSH_SIZE_MAX, BRUSH_SIZE_MIN, CANVAS_HEIGHT, CANVAS_WIDTH, PALETTE_WIDTH,
};
use glam::Vec2;

/// Axis-aligned region the brush may occupy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawableRegion {
    pub min: Vec2,
    pub max: Vec2,
}

impl DrawableRegion {
    /// The canvas to the right of the palette strip.
    pub const CANVAS: DrawableRegion = DrawableRegion {
        min: Vec2::new(PALETTE_WIDTH, 0.0),
        max: Vec2::new(CANVAS_WIDTH, CANVAS_HEIGHT),
    };

    #[inline]
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        p.clamp(self.min, self.max)
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    pub fn area(&self) -> u32 {
        let size = self.max - self.min;
        (size.x * size.y).max(0.0) as u32
    }

    /// Center of the region; where the brush starts.
    pub fn start_position(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }
}

/// The segment drawn in one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeSegment {
    pub from: Vec2,
    pub to: Vec2,
}

impl StrokeSegment {
    #[inline]
    pub fn length(&self) -> f32 {
        self.from.distance(self.to)
    }
}

/// Brush position integrated from joystick input.
///
/// `previous` trails `position` until [`Brush::commit`] is called, which the
/// frame loop does only after the segment between them has been drawn.
#[derive(Clone, Debug)]
pub struct Brush {
    position: Vec2,
    previous: Vec2,
    size: f32,
    region: DrawableRegion,
}

impl Default for Brush {
    fn default() -> Self {
        Self::new(DrawableRegion::CANVAS)
    }
}

impl Brush {
    pub fn new(region: DrawableRegion) -> Self {
        let start = region.start_position();
        Self {
            position: start,
            previous: start,
            size: BRUSH_SIZE_DEFAULT,
            region,
        }
    }

    /// Move by `joystick * speed`, clamped to the drawable region.
    pub fn advance(&mut self, joystick: Vec2, speed: f32) {
        if joystick == Vec2::ZERO {
            return;
        }
        self.position = self.region.clamp(self.position + joystick * speed);
    }

    /// Segment from the last committed position to the current one.
    #[inline]
    pub fn stroke_segment(&self) -> StrokeSegment {
        StrokeSegment {
            from: self.previous,
            to: self.position,
        }
    }

    /// Mark the current segment as drawn.
    #[inline]
    pub fn commit(&mut self) {
        self.previous = self.position;
    }

    pub fn set_size(&mut self, size: f32) {
        if size.is_finite() {
            self.size = size.clamp(BRUSH_SIZE_MIN, BRUSH_SIZE_MAX);
        }
    }

    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn previous(&self) -> Vec2 {
        self.previous
    }

    #[inline]
    pub fn region(&self) -> DrawableRegion {
        self.region
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_in_the_middle_of_the_drawable_area() {
        let b = Brush::default();
        assert_eq!(b.position(), Vec2::new(425.0, 300.0));
        assert_eq!(b.previous(), b.position());
        assert_eq!(b.size(), BRUSH_SIZE_DEFAULT);
    }

    #[test]
    fn previous_trails_until_commit() {
        let mut b = Brush::default();
        b.advance(Vec2::new(1.0, 0.0), 5.0);
        let seg = b.stroke_segment();
        assert_eq!(seg.from, Vec2::new(425.0, 300.0));
        assert_eq!(seg.to, Vec2::new(430.0, 300.0));
        assert_eq!(seg.length(), 5.0);
        b.commit();
        assert_eq!(b.stroke_segment().length(), 0.0);
    }

    #[test]
    fn size_is_clamped() {
        let mut b = Brush::default();
        b.set_size(0.0);
        assert_eq!(b.size(), BRUSH_SIZE_MIN);
        b.set_size(99.0);
        assert_eq!(b.size(), BRUSH_SIZE_MAX);
        b.set_size(f32::NAN);
        assert_eq!(b.size(), BRUSH_SIZE_MAX);
    }
}
