//! Integer geometry for low-resolution displays

use core::ops::{Add, AddAssign};

/// 2D integer point, also used as a per-step velocity vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Point {
    pub x: i16,
    pub y: i16,
}

impl Point {
    /// Origin / zero vector
    pub const ZERO: Point = Point { x: 0, y: 0 };

    /// Create a new point
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point {
            x: self.x.saturating_add(rhs.x),
            y: self.y.saturating_add(rhs.y),
        }
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        *self = *self + rhs;
    }
}

/// Drawable area dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Size {
    pub width: i16,
    pub height: i16,
}

impl Size {
    /// Create a new size
    pub const fn new(width: i16, height: i16) -> Self {
        Self { width, height }
    }

    /// Check if a point lies inside `[0, width) x [0, height)`
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    /// Largest valid x coordinate (0 for an empty area)
    pub fn max_x(&self) -> i16 {
        (self.width - 1).max(0)
    }

    /// Largest valid y coordinate (0 for an empty area)
    pub fn max_y(&self) -> i16 {
        (self.height - 1).max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_add() {
        let mut p = Point::new(10, 20);
        p += Point::new(-2, 5);
        assert_eq!(p, Point::new(8, 25));
    }

    #[test]
    fn test_point_add_saturates() {
        let p = Point::new(i16::MAX, i16::MIN) + Point::new(1, -1);
        assert_eq!(p, Point::new(i16::MAX, i16::MIN));
    }

    #[test]
    fn test_size_contains() {
        let size = Size::new(144, 168);
        assert!(size.contains(Point::new(0, 0)));
        assert!(size.contains(Point::new(143, 167)));
        assert!(!size.contains(Point::new(144, 0)));
        assert!(!size.contains(Point::new(-1, 10)));
    }

    #[test]
    fn test_empty_size_extents() {
        let size = Size::new(0, 0);
        assert_eq!(size.max_x(), 0);
        assert_eq!(size.max_y(), 0);
    }
}
