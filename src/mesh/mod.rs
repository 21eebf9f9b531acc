//! Mesh representation.
//!
//! [`UniformMesh1D`] is the structured 1D mesh the solver operates on. The
//! [`MeshTopology`] / [`MeshGeometry`] traits keep the geometric interface
//! dimension-independent so more general cell shapes can slot in later.

mod mesh1d;
mod traits;

pub use mesh1d::UniformMesh1D;
pub use traits::{MeshGeometry, MeshTopology};
