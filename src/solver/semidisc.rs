//! Semi-discretization assembly (method of lines).
//!
//! Couples a mesh, a conservation law and a numerical flux scheme into the
//! right-hand-side function
//!
//! du_i/dt = −(F_{i+1} − F_i) / Δx
//!
//! consumed by an external ODE integrator. The single differencing formula
//! enforces conservation: summing du_i·Δx over all cells telescopes to the
//! boundary flux difference, which vanishes for periodic ends.

use crate::equations::ConservationLaw;
use crate::error::{ConfigError, NumericalError};
use crate::flux::NumericalFluxScheme;
use crate::mesh::UniformMesh1D;

use super::state::State1D;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Black-box quadrature collaborator used to project a continuous initial
/// condition onto cell averages.
///
/// The crate implements no quadrature rule of its own; callers supply one
/// (a Gauss rule, an adaptive integrator, ...).
pub trait CellQuadrature {
    /// Integrate a vector-valued function over [a, b].
    fn integrate(&self, f: &dyn Fn(f64) -> Vec<f64>, a: f64, b: f64) -> Vec<f64>;
}

/// Project a continuous initial condition onto cell averages.
///
/// Each cell average is `∫ ic dx / Δx` over the cell, evaluated by the
/// quadrature collaborator.
pub fn project_initial_condition<F, Q>(
    mesh: &UniformMesh1D,
    n_vars: usize,
    ic: F,
    quad: &Q,
) -> State1D
where
    F: Fn(f64) -> Vec<f64>,
    Q: CellQuadrature + ?Sized,
{
    let mut state = State1D::new(mesh.n_cells(), n_vars);
    let dx = mesh.dx();
    for i in mesh.cell_indices() {
        let a = mesh.node_position(i);
        let b = mesh.node_position(i + 1);
        let integral = quad.integrate(&ic, a, b);
        debug_assert_eq!(integral.len(), n_vars);
        for (v, value) in integral.iter().enumerate() {
            state.cell_mut(i)[v] = value / dx;
        }
    }
    state
}

/// Assembled semi-discretization of a conservation law.
///
/// Owns the mesh, the law and the scheme; stateless between calls: every
/// [`rhs`](SemiDiscretization::rhs) evaluation recomputes all edge fluxes
/// from scratch, since the state changes between calls.
pub struct SemiDiscretization<L, S> {
    mesh: UniformMesh1D,
    law: L,
    scheme: S,
}

impl<L, S> SemiDiscretization<L, S>
where
    L: ConservationLaw,
    S: NumericalFluxScheme<L>,
{
    /// Assemble mesh, law and scheme.
    ///
    /// Validates that Dirichlet boundary data matches the law's variable
    /// count and that the scheme's stencil fits on the mesh.
    pub fn new(mesh: UniformMesh1D, law: L, scheme: S) -> Result<Self, ConfigError> {
        for policy in [mesh.left_boundary(), mesh.right_boundary()] {
            if let Some(dim) = policy.dirichlet_dim() {
                if dim != L::N_VARS {
                    return Err(ConfigError::BoundaryDimension {
                        expected: L::N_VARS,
                        got: dim,
                    });
                }
            }
        }

        let required = 2 * scheme.stencil_radius() - 1;
        if mesh.n_cells() < required {
            return Err(ConfigError::StencilTooWide {
                required,
                n_cells: mesh.n_cells(),
            });
        }

        Ok(Self { mesh, law, scheme })
    }

    /// The mesh this discretization lives on.
    pub fn mesh(&self) -> &UniformMesh1D {
        &self.mesh
    }

    /// The conservation law being discretized.
    pub fn law(&self) -> &L {
        &self.law
    }

    /// The numerical flux scheme in use.
    pub fn scheme(&self) -> &S {
        &self.scheme
    }

    /// Evaluate the right-hand side du/dt = rhs(u, t).
    ///
    /// This is the function handed to the external time integrator. A
    /// non-finite input state or edge flux is fatal for this evaluation and
    /// propagated; the integrator decides whether to reject the step.
    pub fn rhs(&self, u: &State1D, t: f64) -> Result<State1D, NumericalError> {
        let _ = t; // fluxes of u_t + f(u)_x = 0 are autonomous
        self.check_shape(u);
        if let Some(cell) = u.first_non_finite_cell() {
            return Err(NumericalError::NonFiniteState { cell });
        }

        let fluxes = self.scheme.edge_fluxes(u, &self.mesh, &self.law, 0.0)?;
        debug_assert_eq!(fluxes.len(), self.mesh.n_cells() + 1);

        let inv_dx = 1.0 / self.mesh.dx();
        let mut du = State1D::new(u.n_cells, u.n_vars);
        for i in self.mesh.cell_indices() {
            let out = du.cell_mut(i);
            for v in 0..u.n_vars {
                out[v] = -(fluxes[i + 1][v] - fluxes[i][v]) * inv_dx;
            }
        }
        Ok(du)
    }

    /// Parallel right-hand-side evaluation.
    ///
    /// Fork-join over disjoint node and cell indices; bitwise identical to
    /// the serial path.
    #[cfg(feature = "parallel")]
    pub fn rhs_parallel(&self, u: &State1D, t: f64) -> Result<State1D, NumericalError> {
        let _ = t;
        self.check_shape(u);
        if let Some(cell) = u.first_non_finite_cell() {
            return Err(NumericalError::NonFiniteState { cell });
        }

        let fluxes = self
            .scheme
            .edge_fluxes_parallel(u, &self.mesh, &self.law, 0.0)?;

        let inv_dx = 1.0 / self.mesh.dx();
        let n_vars = u.n_vars;
        let fluxes_ref = &fluxes;
        let data: Vec<f64> = (0..u.n_cells)
            .into_par_iter()
            .flat_map_iter(move |i| {
                (0..n_vars).map(move |v| -(fluxes_ref[i + 1][v] - fluxes_ref[i][v]) * inv_dx)
            })
            .collect();

        Ok(State1D {
            data,
            n_cells: u.n_cells,
            n_vars: u.n_vars,
        })
    }

    fn check_shape(&self, u: &State1D) {
        assert_eq!(u.n_cells, self.mesh.n_cells(), "state/mesh cell mismatch");
        assert_eq!(u.n_vars, L::N_VARS, "state/equation variable mismatch");
    }
}
