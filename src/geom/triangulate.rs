//! Ear-clipping triangulation for simple polygons
//!
//! Handles concave boundaries in either winding. Self-intersecting input is
//! outside the algorithm's assumptions; it degrades to a partial
//! triangulation rather than failing.

use glam::Vec2;

use super::{Triangle, point_in_triangle, turn};

/// Triangulate a simple polygon into at most `max_triangles` triangles.
///
/// `points` is the ordered boundary; `clockwise` declares its winding (it is
/// never inferred). Fewer than 3 points yields an empty set. A full
/// ear-clipping pass emits `points.len() - 2` triangles; degenerate input
/// (collinear runs, duplicated points) may stall the scan early and emit
/// fewer. Callers that need the complete decomposition should budget
/// `N - 2` triangles.
pub fn triangulate(points: &[Vec2], clockwise: bool, max_triangles: usize) -> Vec<Triangle> {
    if points.len() < 3 || max_triangles == 0 {
        return Vec::new();
    }

    // Working cycle of indices into `points`; clipping removes entries here,
    // never from the input.
    let mut indices: Vec<usize> = (0..points.len()).collect();
    let mut triangles = Vec::with_capacity(points.len() - 2);

    while indices.len() > 3 && triangles.len() < max_triangles {
        let n = indices.len();
        let mut ear = None;

        'scan: for i in 0..n {
            let i0 = indices[(i + n - 1) % n];
            let i1 = indices[i];
            let i2 = indices[(i + 1) % n];

            // Swap neighbors for clockwise boundaries so convexity is always
            // evaluated in counter-clockwise sense.
            let (prev, curr, next) = if clockwise {
                (points[i2], points[i1], points[i0])
            } else {
                (points[i0], points[i1], points[i2])
            };

            if turn(prev, curr, next) <= 0.0 {
                continue;
            }

            // Ear emptiness: no vertex still in the working cycle may lie
            // inside the candidate triangle. Clipped vertices are excluded
            // by membership, not by original array position.
            for &idx in &indices {
                if idx == i0 || idx == i1 || idx == i2 {
                    continue;
                }
                if point_in_triangle(points[idx], prev, curr, next) {
                    continue 'scan;
                }
            }

            ear = Some((i, Triangle::new(prev, curr, next)));
            break;
        }

        match ear {
            Some((i, tri)) => {
                triangles.push(tri);
                indices.remove(i);
            }
            // No ear in a full scan: degenerate or self-intersecting input.
            // Stop with a partial triangulation.
            None => break,
        }
    }

    if indices.len() == 3 && triangles.len() < max_triangles {
        triangles.push(Triangle::new(
            points[indices[0]],
            points[indices[1]],
            points[indices[2]],
        ));
    }

    triangles
}
