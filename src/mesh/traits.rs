//! Dimension-independent mesh traits.
//!
//! A layered pair of traits separating connectivity from geometry:
//!
//! - [`MeshTopology`]: cell and node counts
//! - [`MeshGeometry`]: centroids, volumes and characteristic lengths
//!
//! [`super::UniformMesh1D`] is the only implementation in this crate; the
//! traits exist so a polytopal or multi-dimensional mesh can implement the
//! same geometric interface without touching the solver.

use std::fmt::Debug;

/// Base trait providing mesh connectivity counts.
pub trait MeshTopology: Send + Sync {
    /// Physical coordinate type (`f64` for 1D).
    type Coord: Copy + Debug;

    /// Total number of cells.
    fn n_cells(&self) -> usize;

    /// Total number of nodes (cell interfaces).
    fn n_nodes(&self) -> usize;

    /// Whether the mesh wraps around at both ends.
    fn is_periodic(&self) -> bool {
        false
    }
}

/// Geometric operations on cells.
pub trait MeshGeometry: MeshTopology {
    /// Centroid of a cell.
    fn cell_centroid(&self, cell: usize) -> Self::Coord;

    /// Measure (length/area/volume) of a cell.
    fn cell_volume(&self, cell: usize) -> f64;

    /// Minimum cell diameter, used for CFL step-size bounds.
    fn h_min(&self) -> f64;
}
