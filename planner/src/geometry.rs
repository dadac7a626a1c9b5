//! Canvas geometry primitives
//!
//! All coordinates are pixels. Pointer positions arrive in viewport space;
//! table positions are offsets relative to the canvas top-left corner.

use serde::{Deserialize, Serialize};
use shared::Position;

/// Point in viewport space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub const fn square(side: f64) -> Self {
        Self::new(side, side)
    }

    pub fn is_finite(&self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.origin.x
            && point.y >= self.origin.y
            && point.x <= self.origin.x + self.size.width
            && point.y <= self.origin.y + self.size.height
    }
}

/// Clamp one axis of a table offset to `[0, extent - footprint]`.
///
/// A footprint larger than the container pins the table to 0. NaN input
/// collapses to 0 so emitted positions are always finite.
pub fn clamp_axis(candidate: f64, extent: f64, footprint: f64) -> f64 {
    let max = (extent - footprint).max(0.0);
    if candidate.is_nan() || !max.is_finite() {
        return 0.0;
    }
    candidate.min(max).max(0.0)
}

/// Clamp a candidate offset so a `footprint`-sized table stays inside `container`.
pub fn clamp_to_container(candidate: Point, container: Size, footprint: Size) -> Position {
    Position::new(
        clamp_axis(candidate.x, container.width, footprint.width),
        clamp_axis(candidate.y, container.height, footprint.height),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_axis_inside_range() {
        assert_eq!(clamp_axis(50.0, 600.0, 112.0), 50.0);
        assert_eq!(clamp_axis(0.0, 600.0, 112.0), 0.0);
        assert_eq!(clamp_axis(488.0, 600.0, 112.0), 488.0);
    }

    #[test]
    fn test_clamp_axis_pins_to_edges() {
        assert_eq!(clamp_axis(-40.0, 600.0, 112.0), 0.0);
        assert_eq!(clamp_axis(900.0, 600.0, 112.0), 488.0);
        assert_eq!(clamp_axis(f64::INFINITY, 600.0, 112.0), 488.0);
        assert_eq!(clamp_axis(f64::NEG_INFINITY, 600.0, 112.0), 0.0);
    }

    #[test]
    fn test_clamp_axis_degenerate_inputs() {
        assert_eq!(clamp_axis(f64::NAN, 600.0, 112.0), 0.0);
        // container narrower than the table
        assert_eq!(clamp_axis(30.0, 80.0, 112.0), 0.0);
        assert_eq!(clamp_axis(30.0, f64::INFINITY, 112.0), 0.0);
        assert_eq!(clamp_axis(30.0, f64::NAN, 112.0), 0.0);
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(10.0, 10.0, 100.0, 50.0);
        assert!(rect.contains(Point::new(10.0, 10.0)));
        assert!(rect.contains(Point::new(110.0, 60.0)));
        assert!(!rect.contains(Point::new(111.0, 30.0)));
    }
}
