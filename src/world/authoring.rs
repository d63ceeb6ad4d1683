//! Interactive boundary authoring
//!
//! The in-progress point list for a chain obstacle being drawn by the user.
//! The session is an explicit object owned by the caller's input layer:
//! left-click appends a candidate point, Enter commits, Escape cancels.
//! The session itself knows nothing about input devices.

use glam::Vec2;

use crate::consts::MAX_CHAIN_POINTS;

/// Minimum boundary points required to commit
pub const MIN_COMMIT_POINTS: usize = 4;

/// An in-progress chain boundary
#[derive(Debug, Default)]
pub struct AuthoringSession {
    points: Vec<Vec2>,
}

impl AuthoringSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a candidate point. Returns false (and drops the point) when
    /// the session already holds the maximum boundary size.
    pub fn push_point(&mut self, point: Vec2) -> bool {
        if self.points.len() >= MAX_CHAIN_POINTS {
            log::warn!("authoring session full ({MAX_CHAIN_POINTS} points), ignoring point");
            return false;
        }
        self.points.push(point);
        true
    }

    /// Candidate points so far, for preview rendering
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn can_commit(&self) -> bool {
        self.points.len() >= MIN_COMMIT_POINTS
    }

    /// Take the boundary out of the session, leaving it empty.
    /// Returns None (and keeps the points) below the commit minimum.
    pub fn take_boundary(&mut self) -> Option<Vec<Vec2>> {
        if !self.can_commit() {
            return None;
        }
        Some(std::mem::take(&mut self.points))
    }

    /// Discard all candidate points
    pub fn cancel(&mut self) {
        self.points.clear();
    }
}
