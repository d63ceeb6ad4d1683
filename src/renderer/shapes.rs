//! Shape generation for polygon fills and outlines
//!
//! Fills emit triangle-list vertices with counter-clockwise front faces;
//! outlines emit line-list vertices (two per segment). Input geometry is
//! never mutated.

use glam::Vec2;

use super::vertex::Vertex;
use crate::consts::MAX_FILL_TRIANGLES;
use crate::geom::triangulate;

/// Generate vertices for a convex polygon as a centroid fan.
///
/// One triangle per boundary edge, fanning from the arithmetic mean of the
/// points. Edge traversal is reversed for clockwise boundaries so every
/// emitted triangle winds counter-clockwise.
pub fn convex_fill(points: &[Vec2], color: [f32; 4], clockwise: bool) -> Vec<Vertex> {
    if points.len() < 3 {
        return Vec::new();
    }

    let n = points.len();
    let center = points.iter().copied().sum::<Vec2>() / n as f32;

    let mut vertices = Vec::with_capacity(n * 3);

    if clockwise {
        for i in (0..n).rev() {
            let p1 = points[(i + 1) % n];
            let p2 = points[i];
            vertices.push(Vertex::from_vec2(center, color));
            vertices.push(Vertex::from_vec2(p1, color));
            vertices.push(Vertex::from_vec2(p2, color));
        }
    } else {
        for i in 0..n {
            let p1 = points[i];
            let p2 = points[(i + 1) % n];
            vertices.push(Vertex::from_vec2(center, color));
            vertices.push(Vertex::from_vec2(p1, color));
            vertices.push(Vertex::from_vec2(p2, color));
        }
    }

    vertices
}

/// Generate vertices for a concave polygon via ear clipping.
///
/// Each triangle is normalized to counter-clockwise order before emission,
/// whatever order the clipper produced it in.
pub fn concave_fill(points: &[Vec2], color: [f32; 4], clockwise: bool) -> Vec<Vertex> {
    let triangles = triangulate(points, clockwise, MAX_FILL_TRIANGLES);

    let mut vertices = Vec::with_capacity(triangles.len() * 3);
    for tri in triangles {
        let tri = tri.ccw();
        vertices.push(Vertex::from_vec2(tri.a, color));
        vertices.push(Vertex::from_vec2(tri.b, color));
        vertices.push(Vertex::from_vec2(tri.c, color));
    }

    vertices
}

/// Generate line-list vertices for a closed polygon outline, including the
/// wrap-around edge from the last point back to the first.
pub fn outline(points: &[Vec2], color: [f32; 4]) -> Vec<Vertex> {
    if points.len() < 3 {
        return Vec::new();
    }

    let n = points.len();
    let mut vertices = Vec::with_capacity(n * 2);
    for i in 0..n {
        vertices.push(Vertex::from_vec2(points[i], color));
        vertices.push(Vertex::from_vec2(points[(i + 1) % n], color));
    }

    vertices
}

/// Generate line-list vertices for an open point strip (no closing edge).
/// Used for the in-progress authoring preview.
pub fn polyline(points: &[Vec2], color: [f32; 4]) -> Vec<Vertex> {
    if points.len() < 2 {
        return Vec::new();
    }

    let mut vertices = Vec::with_capacity((points.len() - 1) * 2);
    for pair in points.windows(2) {
        vertices.push(Vertex::from_vec2(pair[0], color));
        vertices.push(Vertex::from_vec2(pair[1], color));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Triangle;
    use crate::renderer::colors;

    fn emitted_triangles(vertices: &[Vertex]) -> Vec<Triangle> {
        assert_eq!(vertices.len() % 3, 0);
        vertices
            .chunks(3)
            .map(|v| {
                Triangle::new(
                    Vec2::from(v[0].position),
                    Vec2::from(v[1].position),
                    Vec2::from(v[2].position),
                )
            })
            .collect()
    }

    fn square() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ]
    }

    #[test]
    fn test_convex_fill_fan() {
        let vertices = convex_fill(&square(), colors::OBSTACLE, false);
        let triangles = emitted_triangles(&vertices);

        // One triangle per edge, all front-facing
        assert_eq!(triangles.len(), 4);
        let area: f32 = triangles.iter().map(Triangle::area).sum();
        assert!((area - 100.0).abs() < 1e-4);
        assert!(triangles.iter().all(Triangle::is_ccw));
    }

    #[test]
    fn test_convex_fill_clockwise_boundary() {
        let mut reversed = square();
        reversed.reverse();

        let vertices = convex_fill(&reversed, colors::OBSTACLE, true);
        let triangles = emitted_triangles(&vertices);
        assert_eq!(triangles.len(), 4);
        assert!(triangles.iter().all(Triangle::is_ccw));
    }

    #[test]
    fn test_concave_fill_normalizes_winding() {
        let l_shape = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 5.0),
            Vec2::new(5.0, 5.0),
            Vec2::new(5.0, 10.0),
            Vec2::new(0.0, 10.0),
        ];

        let vertices = concave_fill(&l_shape, colors::OBSTACLE, false);
        let triangles = emitted_triangles(&vertices);
        assert_eq!(triangles.len(), 4);
        let area: f32 = triangles.iter().map(Triangle::area).sum();
        assert!((area - 75.0).abs() < 1e-4);
        assert!(triangles.iter().all(Triangle::is_ccw));
    }

    #[test]
    fn test_fills_empty_below_three_points() {
        let two = [Vec2::ZERO, Vec2::new(5.0, 0.0)];
        assert!(convex_fill(&two, colors::OBSTACLE, false).is_empty());
        assert!(concave_fill(&two, colors::OBSTACLE, false).is_empty());
        assert!(outline(&two, colors::OBSTACLE).is_empty());
    }

    #[test]
    fn test_outline_closes_loop() {
        let vertices = outline(&square(), colors::CHAIN_DEFAULT);
        // Two vertices per edge, wrap-around included
        assert_eq!(vertices.len(), 8);
        assert_eq!(vertices[6].position, [0.0, 10.0]);
        assert_eq!(vertices[7].position, [0.0, 0.0]);
    }

    #[test]
    fn test_polyline_open() {
        let points = [Vec2::ZERO, Vec2::new(5.0, 0.0), Vec2::new(5.0, 5.0)];
        let vertices = polyline(&points, colors::AUTHORING);
        assert_eq!(vertices.len(), 4);
        // No segment back to the start
        assert_eq!(vertices[3].position, [5.0, 5.0]);

        assert!(polyline(&points[..1], colors::AUTHORING).is_empty());
    }
}
