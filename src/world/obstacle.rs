//! Static obstacle data model
//!
//! Two kinds: primitive boxes and chain obstacles. A chain stores its
//! logical boundary only; the loop-closing duplicate points exist solely in
//! the list handed to the physics engine.

use glam::Vec2;

use crate::consts::{LOOP_CLOSE_EXTRA, MAX_CHAIN_POINTS};
use crate::physics::{BodyId, ShapeId};

/// Axis-aligned box obstacle
#[derive(Debug, Clone)]
pub struct BoxObstacle {
    pub body: BodyId,
    pub shape: ShapeId,
    /// Center position
    pub pos: Vec2,
    /// Full width and height
    pub dim: Vec2,
    pub color: [f32; 4],
}

impl BoxObstacle {
    /// Corner boundary in counter-clockwise order, for rendering
    pub fn corners(&self) -> [Vec2; 4] {
        let half = self.dim / 2.0;
        [
            Vec2::new(self.pos.x - half.x, self.pos.y - half.y),
            Vec2::new(self.pos.x + half.x, self.pos.y - half.y),
            Vec2::new(self.pos.x + half.x, self.pos.y + half.y),
            Vec2::new(self.pos.x - half.x, self.pos.y + half.y),
        ]
    }
}

/// Chain-shaped static obstacle with a closed polygon boundary
#[derive(Debug, Clone)]
pub struct ChainObstacle {
    pub body: BodyId,
    pub shape: ShapeId,
    /// Logical boundary, at most `MAX_CHAIN_POINTS` points
    points: Vec<Vec2>,
    /// True when the boundary winds clockwise
    pub clockwise: bool,
    /// Concave boundaries are filled via ear clipping, convex ones as a fan
    pub concave: bool,
    /// Current display color, mutated by contact events
    pub color: [f32; 4],
    /// At-rest color restored when contact ends
    pub base_color: [f32; 4],
}

impl ChainObstacle {
    /// Panics when `points` exceeds the chain point cap; the two extra
    /// storage slots are reserved for loop closing and never hold caller
    /// data.
    pub fn new(
        body: BodyId,
        shape: ShapeId,
        points: &[Vec2],
        color: [f32; 4],
        clockwise: bool,
        concave: bool,
    ) -> Self {
        assert!(
            points.len() <= MAX_CHAIN_POINTS,
            "chain boundary has {} points, cap is {}",
            points.len(),
            MAX_CHAIN_POINTS
        );

        let mut stored = Vec::with_capacity(points.len() + LOOP_CLOSE_EXTRA);
        stored.extend_from_slice(points);

        Self {
            body,
            shape,
            points: stored,
            clockwise,
            concave,
            color,
            base_color: color,
        }
    }

    /// Logical boundary, without loop-closing duplicates
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Physics-facing point list: the boundary plus the first point twice.
    /// The duplicate closes the loop; the second copy keeps the chain
    /// algorithm from treating the final segment as touching the first.
    pub fn loop_points(&self) -> Vec<Vec2> {
        let mut looped = Vec::with_capacity(self.points.len() + LOOP_CLOSE_EXTRA);
        looped.extend_from_slice(&self.points);
        if let Some(&first) = self.points.first() {
            looped.push(first);
            looped.push(first);
        }
        looped
    }
}

/// Build the loop-closed physics point list for a boundary that has not been
/// committed to an obstacle yet (used when defining collision geometry up
/// front).
pub fn close_loop(points: &[Vec2]) -> Vec<Vec2> {
    let mut looped = Vec::with_capacity(points.len() + LOOP_CLOSE_EXTRA);
    looped.extend_from_slice(points);
    if let Some(&first) = points.first() {
        looped.push(first);
        looped.push(first);
    }
    looped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boundary() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ]
    }

    #[test]
    fn test_loop_points_appends_first_twice() {
        let chain = ChainObstacle::new(
            BodyId(1),
            ShapeId(1),
            &boundary(),
            [0.0; 4],
            false,
            false,
        );

        assert_eq!(chain.points().len(), 4);

        let looped = chain.loop_points();
        assert_eq!(looped.len(), 6);
        assert_eq!(looped[4], Vec2::new(0.0, 0.0));
        assert_eq!(looped[5], Vec2::new(0.0, 0.0));
        // Logical boundary untouched
        assert_eq!(chain.points().len(), 4);
    }

    #[test]
    fn test_boundary_at_cap_is_accepted() {
        let points: Vec<Vec2> = (0..MAX_CHAIN_POINTS)
            .map(|i| Vec2::new(i as f32, (i % 7) as f32))
            .collect();
        let chain =
            ChainObstacle::new(BodyId(1), ShapeId(1), &points, [0.0; 4], false, true);
        assert_eq!(chain.loop_points().len(), MAX_CHAIN_POINTS + LOOP_CLOSE_EXTRA);
    }

    #[test]
    #[should_panic(expected = "cap is 50")]
    fn test_boundary_over_cap_panics() {
        let points: Vec<Vec2> = (0..MAX_CHAIN_POINTS + 1)
            .map(|i| Vec2::new(i as f32, 0.0))
            .collect();
        ChainObstacle::new(BodyId(1), ShapeId(1), &points, [0.0; 4], false, true);
    }

    #[test]
    fn test_box_corners_ccw() {
        let obstacle = BoxObstacle {
            body: BodyId(1),
            shape: ShapeId(1),
            pos: Vec2::new(10.0, 20.0),
            dim: Vec2::new(4.0, 2.0),
            color: [0.0; 4],
        };
        let corners = obstacle.corners();
        assert_eq!(corners[0], Vec2::new(8.0, 19.0));
        assert_eq!(corners[2], Vec2::new(12.0, 21.0));
        assert!((crate::geom::polygon_area(&corners) - 8.0).abs() < 1e-5);
    }
}
