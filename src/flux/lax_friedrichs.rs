//! Lax-Friedrichs (Rusanov) numerical flux.
//!
//! First-order and robust: for the edge between states u_l and u_r,
//!
//! F* = ½ (f(u_l) + f(u_r)) − ½ α (u_r − u_l)
//!
//! where α bounds the maximum characteristic speed over the stencil. It is
//! well-defined for any flux with a computable Jacobian spectral radius and
//! serves as the fallback scheme for step-size control.

use crate::equations::ConservationLaw;
use crate::error::NumericalError;
use crate::mesh::{MeshTopology, UniformMesh1D};
use crate::solver::State1D;

use super::{check_finite, EdgeFluxes, NumericalFluxScheme};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// How the viscosity coefficient α is bounded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViscosityMode {
    /// α per edge, from the spectral radius of the flux Jacobian at the two
    /// adjacent states (local Lax-Friedrichs / Rusanov).
    #[default]
    Local,
    /// One global α, the maximum spectral radius over the whole mesh.
    Global,
}

/// First-order Lax-Friedrichs scheme.
///
/// Stateless; the viscosity coefficient is re-derived from the current
/// state on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct LaxFriedrichsScheme {
    /// Viscosity bound configuration.
    pub viscosity: ViscosityMode,
}

impl LaxFriedrichsScheme {
    /// Local (per-edge) viscosity, the usual choice.
    pub fn local() -> Self {
        Self {
            viscosity: ViscosityMode::Local,
        }
    }

    /// Global viscosity bounded over the whole mesh.
    pub fn global() -> Self {
        Self {
            viscosity: ViscosityMode::Global,
        }
    }

    /// Maximum wave speed over all interior cells, for the global bound.
    fn global_alpha<L: ConservationLaw>(&self, state: &State1D, law: &L) -> f64 {
        (0..state.n_cells)
            .map(|i| law.max_wave_speed(state.cell(i)))
            .fold(0.0, f64::max)
    }

    /// Flux across one node.
    fn node_flux<L: ConservationLaw>(
        &self,
        node: usize,
        state: &State1D,
        mesh: &UniformMesh1D,
        law: &L,
        global_alpha: Option<f64>,
    ) -> Result<Vec<f64>, NumericalError> {
        let u_l = mesh.cell_value_at_left(node, state);
        let u_r = mesh.cell_value_at_right(node, state);

        let alpha = match global_alpha {
            Some(a) => a,
            None => law.max_wave_speed(u_l).max(law.max_wave_speed(u_r)),
        };

        let f_l = law.flux(u_l);
        let f_r = law.flux(u_r);

        let flux: Vec<f64> = (0..L::N_VARS)
            .map(|v| 0.5 * (f_l[v] + f_r[v]) - 0.5 * alpha * (u_r[v] - u_l[v]))
            .collect();

        check_finite(&flux, node)?;
        Ok(flux)
    }
}

impl<L: ConservationLaw> NumericalFluxScheme<L> for LaxFriedrichsScheme {
    fn edge_fluxes(
        &self,
        state: &State1D,
        mesh: &UniformMesh1D,
        law: &L,
        _dt: f64,
    ) -> Result<EdgeFluxes, NumericalError> {
        let global_alpha = match self.viscosity {
            ViscosityMode::Global => Some(self.global_alpha(state, law)),
            ViscosityMode::Local => None,
        };

        let mut fluxes: EdgeFluxes = mesh
            .node_indices()
            .map(|j| self.node_flux(j, state, mesh, law, global_alpha))
            .collect::<Result<_, _>>()?;

        // Periodic ends share one physical interface
        if mesh.is_periodic() {
            fluxes[mesh.n_cells()] = fluxes[0].clone();
        }
        Ok(fluxes)
    }

    #[cfg(feature = "parallel")]
    fn edge_fluxes_parallel(
        &self,
        state: &State1D,
        mesh: &UniformMesh1D,
        law: &L,
        _dt: f64,
    ) -> Result<EdgeFluxes, NumericalError> {
        let global_alpha = match self.viscosity {
            ViscosityMode::Global => Some(self.global_alpha(state, law)),
            ViscosityMode::Local => None,
        };

        let mut fluxes: EdgeFluxes = (0..=mesh.n_cells())
            .into_par_iter()
            .map(|j| self.node_flux(j, state, mesh, law, global_alpha))
            .collect::<Result<_, _>>()?;

        if mesh.is_periodic() {
            fluxes[mesh.n_cells()] = fluxes[0].clone();
        }
        Ok(fluxes)
    }

    fn name(&self) -> &'static str {
        match self.viscosity {
            ViscosityMode::Local => "lax-friedrichs (local)",
            ViscosityMode::Global => "lax-friedrichs (global)",
        }
    }

    fn is_entropy_stable(&self) -> bool {
        true
    }
}
