//! 2D geometric predicates and the triangle type
//!
//! Coordinates are y-up cartesian. A positive cross product means a
//! counter-clockwise turn; all winding-sensitive code in the crate keys off
//! that convention.

pub mod triangulate;

pub use triangulate::triangulate;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Z component of the cross product of (a - o) and (b - o)
#[inline]
pub fn cross(o: Vec2, a: Vec2, b: Vec2) -> f32 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

/// Turn direction at `curr` walking prev -> curr -> next.
/// Positive is a counter-clockwise (left) turn.
#[inline]
pub fn turn(prev: Vec2, curr: Vec2, next: Vec2) -> f32 {
    (curr.x - prev.x) * (next.y - curr.y) - (curr.y - prev.y) * (next.x - curr.x)
}

/// Strict interior containment test.
///
/// Returns true only when `p` lies strictly inside triangle (a, b, c): all
/// three edge cross products must share a strict sign, so boundary points
/// and zero-area triangles are rejected.
pub fn point_in_triangle(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> bool {
    let d1 = cross(a, b, p);
    let d2 = cross(b, c, p);
    let d3 = cross(c, a, p);

    (d1 > 0.0 && d2 > 0.0 && d3 > 0.0) || (d1 < 0.0 && d2 < 0.0 && d3 < 0.0)
}

/// Absolute area of a simple polygon (shoelace formula)
pub fn polygon_area(points: &[Vec2]) -> f32 {
    if points.len() < 3 {
        return 0.0;
    }

    let mut sum = 0.0;
    for i in 0..points.len() {
        let p1 = points[i];
        let p2 = points[(i + 1) % points.len()];
        sum += p1.x * p2.y - p2.x * p1.y;
    }
    sum.abs() / 2.0
}

/// An ordered vertex triple produced by triangulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub a: Vec2,
    pub b: Vec2,
    pub c: Vec2,
}

impl Triangle {
    pub const fn new(a: Vec2, b: Vec2, c: Vec2) -> Self {
        Self { a, b, c }
    }

    /// Signed area: positive when the vertices wind counter-clockwise
    #[inline]
    pub fn signed_area(&self) -> f32 {
        cross(self.a, self.b, self.c) / 2.0
    }

    #[inline]
    pub fn area(&self) -> f32 {
        self.signed_area().abs()
    }

    #[inline]
    pub fn is_ccw(&self) -> bool {
        cross(self.a, self.b, self.c) > 0.0
    }

    /// Same triangle with counter-clockwise vertex order (b/c swapped when
    /// needed). Positions are untouched.
    pub fn ccw(self) -> Self {
        if self.is_ccw() {
            self
        } else {
            Self::new(self.a, self.c, self.b)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_sign() {
        // Left turn walking along +x then up
        let t = turn(Vec2::ZERO, Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0));
        assert!(t > 0.0);
        // Right turn
        let t = turn(Vec2::ZERO, Vec2::new(1.0, 0.0), Vec2::new(1.0, -1.0));
        assert!(t < 0.0);
        // Collinear
        let t = turn(Vec2::ZERO, Vec2::new(1.0, 0.0), Vec2::new(2.0, 0.0));
        assert_eq!(t, 0.0);
    }

    #[test]
    fn test_point_in_triangle_strict() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        let c = Vec2::new(0.0, 10.0);

        assert!(point_in_triangle(Vec2::new(2.0, 2.0), a, b, c));
        assert!(!point_in_triangle(Vec2::new(8.0, 8.0), a, b, c));
        // Vertices and edge midpoints are not strictly inside
        assert!(!point_in_triangle(a, a, b, c));
        assert!(!point_in_triangle(Vec2::new(5.0, 0.0), a, b, c));
        // Works for either triangle winding
        assert!(point_in_triangle(Vec2::new(2.0, 2.0), a, c, b));
    }

    #[test]
    fn test_point_in_degenerate_triangle() {
        // Zero-area triangle contains nothing
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(5.0, 0.0);
        let c = Vec2::new(10.0, 0.0);
        assert!(!point_in_triangle(Vec2::new(5.0, 0.0), a, b, c));
        assert!(!point_in_triangle(Vec2::new(5.0, 1.0), a, b, c));
    }

    #[test]
    fn test_polygon_area() {
        let square = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ];
        assert!((polygon_area(&square) - 100.0).abs() < 1e-4);

        // Winding does not change the absolute area
        let mut reversed = square;
        reversed.reverse();
        assert!((polygon_area(&reversed) - 100.0).abs() < 1e-4);

        assert_eq!(polygon_area(&square[..2]), 0.0);
    }

    #[test]
    fn test_triangle_ccw_normalization() {
        let cw = Triangle::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 10.0),
            Vec2::new(10.0, 0.0),
        );
        assert!(!cw.is_ccw());

        let fixed = cw.ccw();
        assert!(fixed.is_ccw());
        assert_eq!(fixed.a, cw.a);
        assert_eq!(fixed.b, cw.c);
        assert_eq!(fixed.c, cw.b);
        assert!((fixed.area() - cw.area()).abs() < 1e-6);

        let ccw = Triangle::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(0.0, 10.0),
        );
        assert_eq!(ccw.ccw(), ccw);
    }
}
