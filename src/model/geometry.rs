// SPDX-FileCopyrightText: 2026 Skein Contributors
// SPDX-License-Identifier: MIT

use std::ops::{Add, Sub};

/// A position in the unbounded 2D canvas space of a mind map.
///
/// Coordinates are local to the map container; the origin is its top-left
/// corner and values may go negative when nodes are dragged past it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn midpoint(self, other: Self) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[cfg(test)]
mod tests {
    use super::Point;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(10.0, 4.0);
        let b = Point::new(2.0, 6.0);

        assert_eq!(a + b, Point::new(12.0, 10.0));
        assert_eq!(a - b, Point::new(8.0, -2.0));
    }

    #[test]
    fn midpoint_is_halfway() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 20.0);

        assert_eq!(a.midpoint(b), Point::new(5.0, 10.0));
    }
}
