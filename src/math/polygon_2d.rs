use std::f64::consts::TAU;

use super::{round_point, Edge2, Point2, Vector2};
use crate::error::{GeometryError, Result};

/// Computes vertex `index` of a regular polygon.
///
/// The vertex sits at angle `TAU * index / sides + (rotation_deg + 90°)`
/// from `center`, so with zero rotation vertex 0 points straight up.
/// `index` is real valued: a fractional index yields the point on the
/// circumscribed circle between two vertices, e.g. `i + 0.5` lies on the
/// bisector of vertices `i` and `i + 1`.
///
/// Both coordinates are rounded, see [`round_point`].
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn vertex(
    center: &Point2,
    radius: f64,
    index: f64,
    sides: usize,
    rotation_deg: f64,
) -> Point2 {
    let angle = TAU * (index / sides as f64) + (rotation_deg + 90.0).to_radians();
    round_point(center + Vector2::new(angle.cos(), angle.sin()) * radius)
}

/// Computes the `sides` vertices of a regular polygon in rotational order.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn polygon_vertices(
    center: &Point2,
    sides: usize,
    radius: f64,
    rotation_deg: f64,
) -> Vec<Point2> {
    (0..sides)
        .map(|i| vertex(center, radius, i as f64, sides, rotation_deg))
        .collect()
}

/// Pairs consecutive vertices into edges.
///
/// Edge `i` runs from `vertices[i]` to `vertices[i + 1]`; the wrap-around
/// edge back to `vertices[0]` is emitted last, so edge indices line up with
/// the directions cells are attached in.
///
/// # Errors
///
/// Returns `GeometryError::EmptyInput` if `vertices` is empty.
pub fn polygon_edges(vertices: &[Point2]) -> Result<Vec<Edge2>> {
    let (&first, &last) = match (vertices.first(), vertices.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(GeometryError::EmptyInput.into()),
    };
    let mut edges: Vec<Edge2> = vertices.windows(2).map(|w| (w[0], w[1])).collect();
    edges.push((last, first));
    Ok(edges)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::COORD_TOLERANCE;

    fn origin() -> Point2 {
        Point2::origin()
    }

    #[test]
    fn vertex_zero_points_up() {
        let p = vertex(&origin(), 3.0, 0.0, 5, 0.0);
        assert!(p.x.abs() < COORD_TOLERANCE);
        assert!((p.y - 3.0).abs() < COORD_TOLERANCE);
    }

    #[test]
    fn vertex_is_rounded() {
        let p = vertex(&origin(), 3.0, 1.0, 5, 0.0);
        // cos(162°) * 3 = -2.853169...
        assert!((p.x + 2.853).abs() < 1e-12);
        assert!((p.y - 0.927).abs() < 1e-12);
    }

    #[test]
    fn vertex_respects_center_offset() {
        let p = vertex(&Point2::new(1.0, -2.0), 1.0, 0.0, 4, 0.0);
        assert!((p.x - 1.0).abs() < COORD_TOLERANCE);
        assert!((p.y + 1.0).abs() < COORD_TOLERANCE);
    }

    #[test]
    fn half_index_lies_between_vertices() {
        let a = vertex(&origin(), 3.0, 0.0, 5, 0.0);
        let b = vertex(&origin(), 3.0, 1.0, 5, 0.0);
        let w = vertex(&origin(), 3.0, 0.5, 5, 0.0);
        // On the circle, equidistant from both neighbours.
        assert!(((w - origin()).norm() - 3.0).abs() < COORD_TOLERANCE);
        assert!(((w - a).norm() - (w - b).norm()).abs() < COORD_TOLERANCE);
    }

    #[test]
    fn vertex_count_matches_sides() {
        for sides in 3..=12 {
            let verts = polygon_vertices(&origin(), sides, 2.0, 17.0);
            assert_eq!(verts.len(), sides);
        }
    }

    #[test]
    fn vertices_lie_on_circumcircle() {
        let center = Point2::new(4.0, 1.5);
        for v in polygon_vertices(&center, 5, 3.0, 36.0) {
            assert!(((v - center).norm() - 3.0).abs() < COORD_TOLERANCE);
        }
    }

    #[test]
    fn rotation_is_periodic() {
        let center = Point2::new(-1.0, 2.0);
        for theta in [0.0, 36.0, 100.0, 287.5] {
            let a = polygon_vertices(&center, 5, 3.0, theta);
            let b = polygon_vertices(&center, 5, 3.0, theta + 360.0);
            for (p, q) in a.iter().zip(&b) {
                assert!((p - q).norm() < COORD_TOLERANCE);
            }
        }
    }

    #[test]
    fn edges_close_the_loop() {
        let verts = polygon_vertices(&origin(), 5, 3.0, 0.0);
        let edges = polygon_edges(&verts).unwrap();
        assert_eq!(edges.len(), verts.len());
        assert_eq!(edges[0], (verts[0], verts[1]));
        assert_eq!(edges.last().unwrap().0, verts[4]);
        assert_eq!(edges.last().unwrap().1, verts[0]);
    }

    #[test]
    fn edges_are_consecutive() {
        let verts = polygon_vertices(&origin(), 6, 1.0, 0.0);
        let edges = polygon_edges(&verts).unwrap();
        for pair in edges.windows(2) {
            assert_eq!(pair[0].1, pair[1].0);
        }
    }

    #[test]
    fn single_vertex_wraps_onto_itself() {
        let p = Point2::new(1.0, 1.0);
        let edges = polygon_edges(&[p]).unwrap();
        assert_eq!(edges, vec![(p, p)]);
    }

    #[test]
    fn edges_of_empty_polygon_fail() {
        let result = polygon_edges(&[]);
        assert!(matches!(
            result,
            Err(crate::DodecalError::Geometry(GeometryError::EmptyInput))
        ));
    }
}
