//! # fv-rs
//!
//! A finite-volume spatial discretization library for 1D hyperbolic
//! conservation laws u_t + f(u)_x = 0.
//!
//! The crate turns a conservation law, a numerical flux scheme and a pair of
//! boundary policies into a semi-discrete ODE system (method of lines):
//! - Structured 1D mesh with ghost-cell boundary resolution
//! - Conservation law abstractions (advection, Burgers, shallow water)
//! - Numerical flux schemes (Lax-Friedrichs, entropy-stable TeCNO)
//! - Semi-discretization assembly producing du/dt = rhs(u, t)
//! - CFL-driven step-size control
//! - Space-time solution wrapper for point queries
//!
//! Time integration itself is left to an external ODE integrator: the
//! library produces the right-hand-side function, the initial cell averages
//! and a recurring step-size hook, and wraps the trajectory the integrator
//! hands back.

pub mod boundary;
pub mod equations;
pub mod error;
pub mod flux;
pub mod mesh;
pub mod solver;

// Re-export main types for convenience
pub use boundary::{BoundaryPolicy, ResolvedCell};
pub use equations::{Advection1D, Burgers1D, ConservationLaw, ShallowWater1D};
pub use error::{ConfigError, NumericalError, QueryError};
pub use flux::{
    advection_entropy_flux, burgers_entropy_flux, eno_edge_values, shallow_water_entropy_flux,
    EdgeFluxes, EntropyFluxFn, LaxFriedrichsScheme, NumericalFluxScheme, TecnoScheme,
    ViscosityMode,
};
pub use mesh::{MeshGeometry, MeshTopology, UniformMesh1D};
pub use solver::{
    project_initial_condition, CellQuadrature, CflController, FvSolution, SemiDiscretization,
    State1D, StepProposal,
};
