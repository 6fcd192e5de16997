use std::ops::{Deref, DerefMut};

use tracing::{debug, trace};

use super::NetConfig;
use crate::error::{LayoutError, Result};
use crate::geometry::{Cell, FoldLine};
use crate::math::polygon_2d::vertex;
use crate::math::{round_point, Edge2, Point2};

/// Walk through a net, one face at a time.
///
/// The cursor holds the path of cells from the root face to the current
/// one. Attaching a cell across an edge of the current cell makes it the new
/// current cell; popping returns to its parent. The root is never removed,
/// nor is any cell held by an open [`CellScope`].
#[derive(Debug, Clone)]
pub struct Cursor {
    config: NetConfig,
    root: Cell,
    path: Vec<Cell>,
    /// Path length below which `pop_cell` refuses to go.
    floor: usize,
}

impl Cursor {
    /// Creates a cursor on a root cell at the origin with zero rotation.
    ///
    /// # Errors
    ///
    /// Returns an error if the root cell cannot be built from `config`.
    pub fn new(config: NetConfig) -> Result<Self> {
        let root = Cell::new(Point2::origin(), 0.0, config.sides(), config.radius())?;
        Ok(Self {
            config,
            root,
            path: Vec::new(),
            floor: 0,
        })
    }

    /// Returns the net configuration.
    #[must_use]
    pub fn config(&self) -> &NetConfig {
        &self.config
    }

    /// Returns the current cell.
    #[must_use]
    pub fn current(&self) -> &Cell {
        self.path.last().unwrap_or(&self.root)
    }

    /// Returns the number of cells on the path, root included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.path.len() + 1
    }

    /// Returns the vertices of the current cell.
    #[must_use]
    pub fn current_vertices(&self) -> &[Point2] {
        self.current().vertices()
    }

    /// Returns the edges of the current cell.
    #[must_use]
    pub fn current_edges(&self) -> &[Edge2] {
        self.current().edges()
    }

    /// Returns the center of the current cell.
    #[must_use]
    pub fn current_center(&self) -> &Point2 {
        self.current().center()
    }

    /// Returns the rotation of the current cell, in degrees.
    #[must_use]
    pub fn current_rotation(&self) -> f64 {
        self.current().rotation()
    }

    /// Attaches a new cell across edge `edge_index` of the current cell and
    /// makes it current.
    ///
    /// The new center is the current center reflected through the midpoint
    /// of the shared edge `(u, v)`, i.e. `u + v - center`. The new rotation
    /// is `rotation + attach_offset + turn_step * edge_index`, modulo 360°.
    /// The attached cell has `u` and `v` among its own vertices.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::InvalidEdgeIndex` if `edge_index` is not an edge
    /// of the current cell.
    #[allow(clippy::cast_precision_loss)]
    pub fn push_cell(&mut self, edge_index: usize) -> Result<&Cell> {
        let parent = self.current();
        let &(u, v) = parent.edge(edge_index).ok_or(LayoutError::InvalidEdgeIndex {
            index: edge_index,
            sides: parent.sides(),
        })?;

        let center = round_point(Point2::from(u.coords + v.coords - parent.center().coords));
        let rotation = (parent.rotation()
            + self.config.attach_offset()
            + self.config.turn_step() * edge_index as f64)
            .rem_euclid(360.0);

        debug!(
            "attach across edge {edge_index}: ({:.3}, {:.3}) @ {:.4} -> ({:.3}, {:.3}) @ {rotation:.4}",
            parent.center().x,
            parent.center().y,
            parent.rotation(),
            center.x,
            center.y,
        );
        trace!("shared edge u = {u}, v = {v}");

        let cell = Cell::new(center, rotation, self.config.sides(), self.config.radius())?;
        self.path.push(cell);
        Ok(self.current())
    }

    /// Discards the current cell and returns to its parent.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::Underflow` if the current cell is the root or
    /// the cell attached by the innermost open [`CellScope`].
    pub fn pop_cell(&mut self) -> Result<Cell> {
        if self.path.len() <= self.floor {
            return Err(LayoutError::Underflow.into());
        }
        let cell = self.path.pop().ok_or(LayoutError::Underflow)?;
        debug!(
            "back to ({:.3}, {:.3}) @ {:.4}",
            self.current().center().x,
            self.current().center().y,
            self.current().rotation(),
        );
        Ok(cell)
    }

    /// Attaches a cell across `edge_index` for the lifetime of the returned
    /// scope.
    ///
    /// While the scope is open the attached cell cannot be popped; dropping
    /// the scope discards it along with anything pushed through the scope.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::InvalidEdgeIndex` if `edge_index` is not an edge
    /// of the current cell; nothing is pushed in that case.
    pub fn enter(&mut self, edge_index: usize) -> Result<CellScope<'_>> {
        let base = self.path.len();
        self.push_cell(edge_index)?;
        let outer_floor = std::mem::replace(&mut self.floor, base + 1);
        Ok(CellScope {
            cursor: self,
            base,
            outer_floor,
        })
    }

    /// Runs `f` with a cell attached across `edge_index`, then returns to the
    /// current cell.
    ///
    /// # Errors
    ///
    /// Returns the attach error or whatever `f` returns.
    pub fn with_cell<T>(
        &mut self,
        edge_index: usize,
        f: impl FnOnce(&mut Cursor) -> Result<T>,
    ) -> Result<T> {
        let mut scope = self.enter(edge_index)?;
        f(&mut scope)
    }

    /// Computes the fold crease along edge `edge_index` of the current cell.
    ///
    /// The apex is the vertex formula evaluated at index `edge_index + 0.5`.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::InvalidEdgeIndex` if `edge_index` is not an edge
    /// of the current cell.
    #[allow(clippy::cast_precision_loss)]
    pub fn fold_points(&self, edge_index: usize) -> Result<FoldLine> {
        let cell = self.current();
        let &(u, v) = cell.edge(edge_index).ok_or(LayoutError::InvalidEdgeIndex {
            index: edge_index,
            sides: cell.sides(),
        })?;
        let apex = vertex(
            cell.center(),
            cell.radius(),
            edge_index as f64 + 0.5,
            cell.sides(),
            cell.rotation(),
        );
        Ok(FoldLine::new(u, apex, v))
    }
}

/// A cell attached by [`Cursor::enter`], released when dropped.
#[derive(Debug)]
pub struct CellScope<'a> {
    cursor: &'a mut Cursor,
    base: usize,
    outer_floor: usize,
}

impl Deref for CellScope<'_> {
    type Target = Cursor;

    fn deref(&self) -> &Cursor {
        self.cursor
    }
}

impl DerefMut for CellScope<'_> {
    fn deref_mut(&mut self) -> &mut Cursor {
        self.cursor
    }
}

impl Drop for CellScope<'_> {
    fn drop(&mut self) {
        self.cursor.path.truncate(self.base);
        self.cursor.floor = self.outer_floor;
        trace!("scope released, depth {}", self.cursor.depth());
    }
}
