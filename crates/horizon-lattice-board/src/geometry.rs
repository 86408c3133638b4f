//! Basic geometry types and the scroll-axis parameterization.
//!
//! This module provides the small geometric vocabulary the reorder and
//! autoscroll subsystems share: points, sizes, rectangles, and [`Axis`],
//! which projects 2D pointer positions and viewport bounds onto the single
//! dimension a list scrolls along.

/// A point in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The origin point (0, 0).
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance_to(self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// A size in 2D space (width and height).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Zero size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };
}

/// A rectangle defined by origin and size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    /// Create a new rectangle from origin and size.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point { x, y },
            size: Size { width, height },
        }
    }

    /// Empty rectangle at origin.
    pub const ZERO: Self = Self {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    /// Left edge x coordinate.
    #[inline]
    pub fn left(&self) -> f32 {
        self.origin.x
    }

    /// Top edge y coordinate.
    #[inline]
    pub fn top(&self) -> f32 {
        self.origin.y
    }

    /// Right edge x coordinate.
    #[inline]
    pub fn right(&self) -> f32 {
        self.origin.x + self.size.width
    }

    /// Bottom edge y coordinate.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.height
    }

    /// Returns true if the point lies within the rectangle.
    ///
    /// Gesture layers use this for hit testing against the viewport bounds
    /// they also hand to the autoscroll controller.
    ///
    /// # Example
    ///
    /// ```
    /// use horizon_lattice_board::geometry::{Point, Rect};
    ///
    /// let viewport_bounds = Rect::new(0.0, 0.0, 300.0, 400.0);
    /// assert!(viewport_bounds.contains(Point::new(150.0, 20.0)));
    /// assert!(!viewport_bounds.contains(Point::new(150.0, 420.0)));
    /// ```
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }
}

/// The axis a board scrolls and lays its lists out along.
///
/// A vertical board stacks items top to bottom and autoscrolls on y; a
/// horizontal board lays lists left to right and autoscrolls on x. All
/// edge-band math in the autoscroll controller is written once against this
/// projection instead of duplicating a branch per orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    /// Content scrolls top to bottom.
    #[default]
    Vertical,
    /// Content scrolls left to right.
    Horizontal,
}

impl Axis {
    /// Project a point onto this axis.
    #[inline]
    pub fn coord(self, point: Point) -> f32 {
        match self {
            Self::Vertical => point.y,
            Self::Horizontal => point.x,
        }
    }

    /// The start edge of a rectangle along this axis (top or left).
    #[inline]
    pub fn start(self, rect: &Rect) -> f32 {
        match self {
            Self::Vertical => rect.top(),
            Self::Horizontal => rect.left(),
        }
    }

    /// The end edge of a rectangle along this axis (bottom or right).
    #[inline]
    pub fn end(self, rect: &Rect) -> f32 {
        match self {
            Self::Vertical => rect.bottom(),
            Self::Horizontal => rect.right(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(rect.left(), 10.0);
        assert_eq!(rect.top(), 20.0);
        assert_eq!(rect.right(), 110.0);
        assert_eq!(rect.bottom(), 70.0);
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains(Point::new(5.0, 5.0)));
        assert!(rect.contains(Point::ZERO));
        assert!(!rect.contains(Point::new(10.0, 5.0)));
        assert!(!rect.contains(Point::new(-1.0, 5.0)));
    }

    #[test]
    fn test_axis_projection() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        let point = Point::new(3.0, 7.0);

        assert_eq!(Axis::Vertical.coord(point), 7.0);
        assert_eq!(Axis::Horizontal.coord(point), 3.0);
        assert_eq!(Axis::Vertical.start(&rect), 20.0);
        assert_eq!(Axis::Vertical.end(&rect), 70.0);
        assert_eq!(Axis::Horizontal.start(&rect), 10.0);
        assert_eq!(Axis::Horizontal.end(&rect), 110.0);
    }

    #[test]
    fn test_point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance_to(b), 5.0);
    }
}
