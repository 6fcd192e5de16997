use crate::error::{GeometryError, Result};

/// Shape parameters shared by every cell of a net.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetConfig {
    sides: usize,
    radius: f64,
}

impl NetConfig {
    /// Number of edges of a dodecahedron face.
    pub const PENTAGON_SIDES: usize = 5;

    /// Circumradius of a face on the printed sheet.
    pub const PENTAGON_RADIUS: f64 = 3.0;

    /// Creates a new net configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `sides < 3` or `radius` is not positive.
    pub fn new(sides: usize, radius: f64) -> Result<Self> {
        if sides < 3 {
            return Err(GeometryError::InvalidSides { sides }.into());
        }
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(GeometryError::InvalidRadius { radius }.into());
        }
        Ok(Self { sides, radius })
    }

    /// Returns the number of edges per cell.
    #[must_use]
    pub fn sides(&self) -> usize {
        self.sides
    }

    /// Returns the circumradius of every cell.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Angle between consecutive vertices, `360° / sides`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn turn_step(&self) -> f64 {
        360.0 / self.sides as f64
    }

    /// Extra rotation given to a cell attached across an edge.
    ///
    /// `180° / sides` for odd face counts (36° for pentagons). A polygon with
    /// an even face count already has a vertex opposite each vertex, so
    /// reflected neighbours keep the parent's phase and the offset is zero.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn attach_offset(&self) -> f64 {
        if self.sides % 2 == 1 {
            180.0 / self.sides as f64
        } else {
            0.0
        }
    }
}

impl Default for NetConfig {
    fn default() -> Self {
        Self {
            sides: Self::PENTAGON_SIDES,
            radius: Self::PENTAGON_RADIUS,
        }
    }
}
