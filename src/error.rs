//! Error types for mesh construction, flux evaluation and solution queries.

use thiserror::Error;

/// Errors detected when constructing meshes, schemes, controllers or
/// solution wrappers. These are fatal and surfaced immediately; invalid
/// parameters are never silently clamped.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Mesh needs at least one cell.
    #[error("mesh must have at least one cell, got {0}")]
    EmptyMesh(usize),

    /// Domain bounds must satisfy x_max > x_min.
    #[error("invalid domain bounds [{x_min}, {x_max}]")]
    InvalidBounds { x_min: f64, x_max: f64 },

    /// Dirichlet boundary data must match the number of conserved variables.
    #[error("Dirichlet boundary value has {got} components, equation has {expected}")]
    BoundaryDimension { expected: usize, got: usize },

    /// Scheme stencil does not fit on the mesh.
    #[error("scheme stencil spans {required} cells, mesh has only {n_cells}")]
    StencilTooWide { required: usize, n_cells: usize },

    /// TeCNO reconstruction order outside the supported range.
    #[error("reconstruction order must be in 2..=5, got {0}")]
    InvalidOrder(usize),

    /// CFL number must be positive.
    #[error("CFL number must be positive, got {0}")]
    InvalidCfl(f64),

    /// Trajectory handed to the solution wrapper is empty.
    #[error("trajectory must contain at least one sample")]
    EmptyTrajectory,

    /// Trajectory times must be strictly increasing.
    #[error("trajectory times must be strictly increasing (violated at sample {index})")]
    NonMonotonicTimes { index: usize },

    /// Trajectory state does not match the mesh/equation shape.
    #[error("trajectory sample {index} has shape ({n_cells}, {n_vars}), expected ({expected_cells}, {expected_vars})")]
    TrajectoryShape {
        index: usize,
        n_cells: usize,
        n_vars: usize,
        expected_cells: usize,
        expected_vars: usize,
    },
}

/// Numerical failures during a right-hand-side evaluation. These are fatal
/// for the current evaluation and propagated to the caller (the external
/// time integrator); the core never retries internally.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NumericalError {
    /// The flux Jacobian could not be diagonalized at a node-averaged state.
    #[error("flux Jacobian eigendecomposition failed at node {node}")]
    Eigendecomposition { node: usize },

    /// A computed edge flux contains NaN or Inf.
    #[error("non-finite edge flux at node {node}")]
    NonFiniteFlux { node: usize },

    /// The input state contains NaN or Inf.
    #[error("non-finite state in cell {cell}")]
    NonFiniteState { cell: usize },
}

/// Errors from point queries against a computed solution.
///
/// Spatial out-of-domain queries are NOT errors (they resolve through the
/// mesh boundary policy); only temporal out-of-range queries fail.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    /// Queried time lies outside the recorded trajectory.
    #[error("time {t} outside recorded range [{t_min}, {t_max}]")]
    TimeOutOfRange { t: f64, t_min: f64, t_max: f64 },

    /// Variable index out of range.
    #[error("variable index {var} out of range for {n_vars} variables")]
    VariableOutOfRange { var: usize, n_vars: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = ConfigError::EmptyMesh(0);
        assert!(e.to_string().contains("at least one cell"));

        let e = NumericalError::Eigendecomposition { node: 3 };
        assert!(e.to_string().contains("node 3"));

        let e = QueryError::TimeOutOfRange {
            t: 2.0,
            t_min: 0.0,
            t_max: 1.0,
        };
        assert!(e.to_string().contains("outside recorded range"));
    }
}
