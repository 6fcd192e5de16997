use tracing::{debug, info};

use super::{Cursor, NetConfig};
use crate::error::{CalendarError, LayoutError, Result};
use crate::geometry::{Cell, FoldLine};

/// Order in which months are placed on one printed sheet.
///
/// The root face carries `root_month`; neighbour `i` is attached across
/// edge `i` of the root and carries `neighbors[i]`. Each neighbour gets a
/// fold crease on every edge listed in `fold_edges`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetPlan {
    pub root_month: u32,
    pub neighbors: Vec<u32>,
    pub fold_edges: Vec<usize>,
}

/// Edges of a neighbour face that fold onto faces of the other sheet.
const OUTER_FOLD_EDGES: [usize; 2] = [1, 4];

impl SheetPlan {
    /// Creates a new sheet plan.
    #[must_use]
    pub fn new(root_month: u32, neighbors: Vec<u32>, fold_edges: Vec<usize>) -> Self {
        Self {
            root_month,
            neighbors,
            fold_edges,
        }
    }

    /// First sheet of the dodecahedron: January in the middle.
    #[must_use]
    pub fn front() -> Self {
        Self::new(1, vec![5, 6, 4, 2, 10], OUTER_FOLD_EDGES.to_vec())
    }

    /// Second sheet of the dodecahedron: December in the middle.
    #[must_use]
    pub fn back() -> Self {
        Self::new(12, vec![3, 11, 9, 7, 8], OUTER_FOLD_EDGES.to_vec())
    }

    /// The two sheets that together cover all twelve months.
    #[must_use]
    pub fn standard_pair() -> [Self; 2] {
        [Self::front(), Self::back()]
    }

    /// Lays out the sheet on a fresh cursor.
    ///
    /// # Errors
    ///
    /// Returns `CalendarError::InvalidMonth` for a month outside `1..=12`,
    /// and `LayoutError::InvalidEdgeIndex` if there are more neighbours than
    /// root edges or a fold edge does not exist.
    pub fn lay_out(&self, config: &NetConfig) -> Result<SheetLayout> {
        for &month in std::iter::once(&self.root_month).chain(&self.neighbors) {
            if !(1..=12).contains(&month) {
                return Err(CalendarError::InvalidMonth(month).into());
            }
        }
        if let Some(&index) = self.fold_edges.iter().find(|&&e| e >= config.sides()) {
            return Err(LayoutError::InvalidEdgeIndex {
                index,
                sides: config.sides(),
            }
            .into());
        }

        let mut cursor = Cursor::new(*config)?;
        let mut faces = Vec::with_capacity(self.neighbors.len() + 1);
        faces.push(PlacedFace {
            month: self.root_month,
            cell: cursor.current().clone(),
            folds: Vec::new(),
        });

        for (edge, &month) in self.neighbors.iter().enumerate() {
            let face = cursor.with_cell(edge, |c| {
                let folds = self
                    .fold_edges
                    .iter()
                    .map(|&e| c.fold_points(e))
                    .collect::<Result<Vec<_>>>()?;
                Ok(PlacedFace {
                    month,
                    cell: c.current().clone(),
                    folds,
                })
            })?;
            debug!(
                "month {month} on edge {edge}: center ({:.3}, {:.3}), rotation {:.4}",
                face.cell.center().x,
                face.cell.center().y,
                face.cell.rotation(),
            );
            faces.push(face);
        }

        info!(
            "laid out sheet with root month {} and {} faces",
            self.root_month,
            faces.len()
        );
        Ok(SheetLayout { faces })
    }
}

/// A face of a laid-out sheet with the month it carries.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedFace {
    pub month: u32,
    pub cell: Cell,
    /// Creases to draw on this face; empty for the root.
    pub folds: Vec<FoldLine>,
}

/// Geometry of one printed sheet, root face first.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetLayout {
    pub faces: Vec<PlacedFace>,
}

impl SheetLayout {
    /// Returns the root face.
    #[must_use]
    pub fn root(&self) -> Option<&PlacedFace> {
        self.faces.first()
    }

    /// Returns the face carrying `month`, if it is on this sheet.
    #[must_use]
    pub fn face_for_month(&self, month: u32) -> Option<&PlacedFace> {
        self.faces.iter().find(|f| f.month == month)
    }
}
