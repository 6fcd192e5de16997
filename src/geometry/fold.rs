use crate::math::Point2;

/// Crease marking where two adjacent faces of the net fold.
///
/// `start` and `end` are the endpoints of the shared edge; `apex` is the
/// point on the circumscribed circle at the edge's angular bisector, so the
/// polyline `start -> apex -> end` bulges outward past the edge midpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoldLine {
    pub start: Point2,
    pub apex: Point2,
    pub end: Point2,
}

impl FoldLine {
    /// Creates a fold line from the shared edge `(start, end)` and its apex.
    #[must_use]
    pub fn new(start: Point2, apex: Point2, end: Point2) -> Self {
        Self { start, apex, end }
    }

    /// Returns the crease in drawing order.
    #[must_use]
    pub fn polyline(&self) -> [Point2; 3] {
        [self.start, self.apex, self.end]
    }

    /// Returns the midpoint of the shared edge.
    #[must_use]
    pub fn edge_midpoint(&self) -> Point2 {
        nalgebra::center(&self.start, &self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polyline_runs_through_apex() {
        let fold = FoldLine::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 0.0),
        );
        let [a, b, c] = fold.polyline();
        assert_eq!(a, fold.start);
        assert_eq!(b, fold.apex);
        assert_eq!(c, fold.end);
    }

    #[test]
    fn midpoint_of_shared_edge() {
        let fold = FoldLine::new(
            Point2::new(-1.0, 2.0),
            Point2::new(0.0, 3.0),
            Point2::new(1.0, 2.0),
        );
        let m = fold.edge_midpoint();
        assert!(m.x.abs() < f64::EPSILON);
        assert!((m.y - 2.0).abs() < f64::EPSILON);
    }
}
