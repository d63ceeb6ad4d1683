//! Per-frame primitive accumulation
//!
//! A `Frame` collects the triangle-list and line-list vertices for one
//! render pass. Drawing an entity only appends vertices; geometry is read,
//! never mutated.

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::world::authoring::AuthoringSession;
use crate::world::obstacle::{BoxObstacle, ChainObstacle};

/// Vertex buffers for one frame: filled triangles and outline lines
#[derive(Debug, Default)]
pub struct Frame {
    pub triangles: Vec<Vertex>,
    pub lines: Vec<Vertex>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset both buffers, keeping their allocations
    pub fn clear(&mut self) {
        self.triangles.clear();
        self.lines.clear();
    }

    /// Fill and outline a chain obstacle in its current display color.
    /// Concave boundaries go through the triangulator; convex ones are
    /// fanned from their centroid.
    pub fn draw_chain(&mut self, chain: &ChainObstacle) {
        let fill = if chain.concave {
            shapes::concave_fill(chain.points(), chain.color, chain.clockwise)
        } else {
            shapes::convex_fill(chain.points(), chain.color, chain.clockwise)
        };
        self.triangles.extend(fill);
        self.lines.extend(shapes::outline(chain.points(), chain.color));
    }

    /// Fill a box obstacle
    pub fn draw_box(&mut self, obstacle: &BoxObstacle) {
        let corners = obstacle.corners();
        self.triangles
            .extend(shapes::convex_fill(&corners, obstacle.color, false));
    }

    /// Preview the in-progress authoring boundary as an open polyline
    pub fn draw_session(&mut self, session: &AuthoringSession) {
        self.lines
            .extend(shapes::polyline(session.points(), colors::AUTHORING));
    }
}
