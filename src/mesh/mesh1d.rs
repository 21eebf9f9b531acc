//! Structured 1D mesh.
//!
//! A uniform partition of [x_min, x_max] into N cells with one boundary
//! policy per end.
//!
//! Indexing convention (0-based, used throughout the crate): cells are
//! `0..N`; nodes are `0..=N`; node j is the interface between cell j−1 and
//! cell j, so node 0 and node N are the domain boundaries.

use crate::boundary::{BoundaryPolicy, ResolvedCell};
use crate::error::ConfigError;
use crate::solver::State1D;

use super::traits::{MeshGeometry, MeshTopology};

/// Uniform 1D mesh of an interval.
///
/// Immutable after construction; the assembler and the solution wrapper
/// share it read-only. All ghost-cell logic lives in the
/// [`cell_value`](UniformMesh1D::cell_value) accessors; schemes never index
/// the raw state array near the domain ends themselves.
#[derive(Clone, Debug)]
pub struct UniformMesh1D {
    /// Left endpoint of the domain
    x_min: f64,
    /// Right endpoint of the domain
    x_max: f64,
    /// Number of cells
    n_cells: usize,
    /// Cell spacing Δx = (x_max − x_min) / n_cells
    dx: f64,
    /// Boundary policy at x = x_min
    left: BoundaryPolicy,
    /// Boundary policy at x = x_max
    right: BoundaryPolicy,
}

impl UniformMesh1D {
    /// Create a uniform mesh with the given boundary policies.
    ///
    /// Fails with [`ConfigError`] for an empty mesh or inverted bounds;
    /// invalid parameters are never clamped.
    pub fn new(
        n_cells: usize,
        bounds: (f64, f64),
        left: BoundaryPolicy,
        right: BoundaryPolicy,
    ) -> Result<Self, ConfigError> {
        let (x_min, x_max) = bounds;
        if n_cells == 0 {
            return Err(ConfigError::EmptyMesh(n_cells));
        }
        if !(x_max > x_min) || !x_min.is_finite() || !x_max.is_finite() {
            return Err(ConfigError::InvalidBounds { x_min, x_max });
        }

        let dx = (x_max - x_min) / n_cells as f64;
        Ok(Self {
            x_min,
            x_max,
            n_cells,
            dx,
            left,
            right,
        })
    }

    /// Create a mesh with periodic boundaries at both ends.
    pub fn periodic(n_cells: usize, bounds: (f64, f64)) -> Result<Self, ConfigError> {
        Self::new(
            n_cells,
            bounds,
            BoundaryPolicy::Periodic,
            BoundaryPolicy::Periodic,
        )
    }

    /// Number of cells.
    pub fn n_cells(&self) -> usize {
        self.n_cells
    }

    /// Cell spacing Δx.
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Left endpoint of the domain.
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    /// Right endpoint of the domain.
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    /// Total domain length.
    pub fn length(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Boundary policy at the left end.
    pub fn left_boundary(&self) -> &BoundaryPolicy {
        &self.left
    }

    /// Boundary policy at the right end.
    pub fn right_boundary(&self) -> &BoundaryPolicy {
        &self.right
    }

    /// Center of cell i.
    pub fn cell_center(&self, i: usize) -> f64 {
        debug_assert!(i < self.n_cells);
        self.x_min + (i as f64 + 0.5) * self.dx
    }

    /// Measure of cell i; every cell of a uniform mesh spans Δx.
    pub fn cell_volume(&self, i: usize) -> f64 {
        debug_assert!(i < self.n_cells);
        self.dx
    }

    /// Position of node j (interface between cell j−1 and cell j).
    pub fn node_position(&self, j: usize) -> f64 {
        debug_assert!(j <= self.n_cells);
        self.x_min + j as f64 * self.dx
    }

    /// Iterator over cell indices `0..N`.
    pub fn cell_indices(&self) -> std::ops::Range<usize> {
        0..self.n_cells
    }

    /// Iterator over node indices `0..=N`.
    pub fn node_indices(&self) -> std::ops::RangeInclusive<usize> {
        0..=self.n_cells
    }

    /// Resolve a signed cell index through the boundary policies.
    ///
    /// Indices below the domain use the left policy, indices above it the
    /// right policy. Arbitrary offsets are supported so that wide stencils
    /// can reach several ghost layers deep.
    pub fn resolve_cell(&self, index: isize) -> ResolvedCell<'_> {
        if index < 0 {
            self.left.resolve(index, self.n_cells)
        } else {
            self.right.resolve(index, self.n_cells)
        }
    }

    /// State vector of the (possibly ghost) cell at a signed index.
    ///
    /// This is the single point where boundary logic is applied; every
    /// scheme goes through it rather than indexing `state` directly near the
    /// domain ends.
    pub fn cell_value<'a>(&'a self, index: isize, state: &'a State1D) -> &'a [f64] {
        match self.resolve_cell(index) {
            ResolvedCell::Interior(i) => state.cell(i),
            ResolvedCell::Fixed(value) => value,
        }
    }

    /// State vector biased from the left of node j (cell j−1, ghost-resolved).
    pub fn cell_value_at_left<'a>(&'a self, node: usize, state: &'a State1D) -> &'a [f64] {
        debug_assert!(node <= self.n_cells);
        self.cell_value(node as isize - 1, state)
    }

    /// State vector biased from the right of node j (cell j, ghost-resolved).
    pub fn cell_value_at_right<'a>(&'a self, node: usize, state: &'a State1D) -> &'a [f64] {
        debug_assert!(node <= self.n_cells);
        self.cell_value(node as isize, state)
    }
}

impl MeshTopology for UniformMesh1D {
    type Coord = f64;

    fn n_cells(&self) -> usize {
        self.n_cells
    }

    fn n_nodes(&self) -> usize {
        self.n_cells + 1
    }

    fn is_periodic(&self) -> bool {
        self.left.is_periodic() && self.right.is_periodic()
    }
}

impl MeshGeometry for UniformMesh1D {
    fn cell_centroid(&self, cell: usize) -> f64 {
        self.cell_center(cell)
    }

    fn cell_volume(&self, _cell: usize) -> f64 {
        self.dx
    }

    fn h_min(&self) -> f64 {
        self.dx
    }
}
