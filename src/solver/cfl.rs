//! CFL-driven step-size control.
//!
//! The controller derives a stable explicit step size from the spectral
//! radius of the flux Jacobian over the current state (plus the diffusion
//! bound when the law carries a parabolic term). It is a recurring hook:
//! the external integrator calls it once per accepted step and caps its own
//! proposal with the result.

use crate::equations::ConservationLaw;
use crate::error::ConfigError;
use crate::mesh::UniformMesh1D;

use super::state::State1D;

/// Step size proposed by the controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StepProposal {
    /// A finite stable step size.
    Bounded(f64),
    /// The current state imposes no constraint (zero wave speed everywhere
    /// and no configured maximum step).
    Unconstrained,
}

impl StepProposal {
    /// The proposed step, or `fallback` when unconstrained.
    pub fn dt_or(&self, fallback: f64) -> f64 {
        match self {
            StepProposal::Bounded(dt) => *dt,
            StepProposal::Unconstrained => fallback,
        }
    }
}

/// CFL-based step-size controller.
///
/// Proposes, never mutates solver state; safe to call repeatedly with the
/// latest accepted state.
#[derive(Clone, Debug)]
pub struct CflController {
    /// Target CFL number.
    cfl: f64,
    /// Optional cap on the proposed step.
    dt_max: Option<f64>,
    /// Maximum spectral radius seen in the most recent evaluation.
    last_max_speed: f64,
}

impl CflController {
    /// Create a controller with the given CFL number.
    ///
    /// Fails with [`ConfigError::InvalidCfl`] unless cfl > 0.
    pub fn new(cfl: f64) -> Result<Self, ConfigError> {
        if !(cfl > 0.0) || !cfl.is_finite() {
            return Err(ConfigError::InvalidCfl(cfl));
        }
        Ok(Self {
            cfl,
            dt_max: None,
            last_max_speed: 0.0,
        })
    }

    /// Cap every proposal (and the degenerate zero-wave-speed case) at
    /// `dt_max`.
    pub fn with_dt_max(mut self, dt_max: f64) -> Self {
        self.dt_max = Some(dt_max);
        self
    }

    /// Target CFL number.
    pub fn cfl(&self) -> f64 {
        self.cfl
    }

    /// Maximum spectral radius from the most recent proposal.
    pub fn last_max_speed(&self) -> f64 {
        self.last_max_speed
    }

    /// Propose a stable step size for the current state.
    ///
    /// Hyperbolic: dt = CFL·Δx / maxρ. With a diffusion bound:
    /// dt = CFL / (maxρ/Δx + maxρ_B/(2Δx²)). A degenerate state with zero
    /// wave speed yields the configured maximum step or
    /// [`StepProposal::Unconstrained`], never a division by zero.
    pub fn propose_dt<L: ConservationLaw>(
        &mut self,
        state: &State1D,
        mesh: &UniformMesh1D,
        law: &L,
    ) -> StepProposal {
        let mut max_speed = 0.0_f64;
        let mut max_diffusion = 0.0_f64;
        for i in 0..state.n_cells {
            let q = state.cell(i);
            max_speed = max_speed.max(law.max_wave_speed(q));
            if let Some(b) = law.max_diffusion(q) {
                max_diffusion = max_diffusion.max(b);
            }
        }
        self.last_max_speed = max_speed;

        let dx = mesh.dx();
        let rate = max_speed / dx + max_diffusion / (2.0 * dx * dx);
        if rate <= 0.0 {
            return match self.dt_max {
                Some(dt_max) => StepProposal::Bounded(dt_max),
                None => StepProposal::Unconstrained,
            };
        }

        let mut dt = self.cfl / rate;
        if let Some(dt_max) = self.dt_max {
            dt = dt.min(dt_max);
        }
        StepProposal::Bounded(dt)
    }
}
