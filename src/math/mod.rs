pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// A polygon edge as an ordered pair of endpoints.
pub type Edge2 = (Point2, Point2);

/// Number of decimal digits kept in every generated coordinate.
pub const COORD_DECIMALS: i32 = 3;

/// Tolerance for comparing rounded coordinates.
///
/// One unit in the last kept decimal plus slack for the error that builds up
/// when a rounded point is reused to place the next cell.
pub const COORD_TOLERANCE: f64 = 2e-3;

/// Rounds `value` to [`COORD_DECIMALS`] decimal digits.
#[must_use]
pub fn round_coord(value: f64) -> f64 {
    let scale = 10f64.powi(COORD_DECIMALS);
    let rounded = (value * scale).round() / scale;
    // Normalize -0.0 so equal points compare and print identically.
    if rounded.abs() < f64::EPSILON {
        0.0
    } else {
        rounded
    }
}

/// Rounds both coordinates of a point, see [`round_coord`].
#[must_use]
pub fn round_point(p: Point2) -> Point2 {
    Point2::new(round_coord(p.x), round_coord(p.y))
}

/// Returns whether two points coincide within [`COORD_TOLERANCE`].
#[must_use]
pub fn points_coincide(a: &Point2, b: &Point2) -> bool {
    (a - b).norm() < COORD_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_coord_keeps_three_decimals() {
        assert!((round_coord(1.234_56) - 1.235).abs() < f64::EPSILON);
        assert!((round_coord(-2.000_4) + 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn round_coord_normalizes_negative_zero() {
        let r = round_coord(-0.000_1);
        assert!(r.is_sign_positive());
    }

    #[test]
    fn coincide_within_tolerance() {
        let a = Point2::new(1.0, 1.0);
        assert!(points_coincide(&a, &Point2::new(1.001, 0.999)));
        assert!(!points_coincide(&a, &Point2::new(1.01, 1.0)));
    }
}
