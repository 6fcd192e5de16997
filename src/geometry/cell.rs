use nalgebra::{Isometry2, Translation2, UnitComplex};

use crate::error::Result;
use crate::math::polygon_2d::{polygon_edges, polygon_vertices};
use crate::math::{Edge2, Point2};

/// A placed face of the net: a regular polygon with a position and an
/// orientation in the sheet frame.
///
/// Vertices and edges are derived from `(center, rotation, sides, radius)`
/// when the cell is built and never change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    center: Point2,
    rotation: f64,
    sides: usize,
    radius: f64,
    vertices: Vec<Point2>,
    edges: Vec<Edge2>,
}

impl Cell {
    /// Creates a new cell.
    ///
    /// # Arguments
    ///
    /// * `center` - Centroid of the polygon in the sheet frame
    /// * `rotation` - Orientation in degrees; 0 puts vertex 0 straight up
    /// * `sides` - Number of polygon edges
    /// * `radius` - Circumradius
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::EmptyInput` if `sides` is zero.
    pub fn new(center: Point2, rotation: f64, sides: usize, radius: f64) -> Result<Self> {
        let vertices = polygon_vertices(&center, sides, radius, rotation);
        let edges = polygon_edges(&vertices)?;
        Ok(Self {
            center,
            rotation,
            sides,
            radius,
            vertices,
            edges,
        })
    }

    /// Returns the center of the cell.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the orientation in degrees.
    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn sides(&self) -> usize {
        self.sides
    }

    /// Returns the circumradius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the vertices in rotational order.
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// Returns the edges; edge `i` joins vertex `i` and vertex `i + 1`.
    #[must_use]
    pub fn edges(&self) -> &[Edge2] {
        &self.edges
    }

    /// Returns edge `index`, if it exists.
    #[must_use]
    pub fn edge(&self, index: usize) -> Option<&Edge2> {
        self.edges.get(index)
    }

    /// Returns the rigid transform from the cell's local frame to the sheet.
    #[must_use]
    pub fn frame(&self) -> Isometry2<f64> {
        Isometry2::from_parts(
            Translation2::from(self.center.coords),
            UnitComplex::new(self.rotation.to_radians()),
        )
    }

    /// Maps a point from the cell's local, unrotated frame to the sheet frame.
    ///
    /// Local points are rotated by the cell's orientation about the local
    /// origin, then moved to the cell's center.
    #[must_use]
    pub fn to_global(&self, local: &Point2) -> Point2 {
        self.frame() * local
    }
}
