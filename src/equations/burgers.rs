//! Inviscid and viscous Burgers equation.
//!
//! ∂u/∂t + ∂(u²/2)/∂x = ν ∂²u/∂x²
//!
//! The standard nonlinear scalar test equation. The viscous term is not
//! discretized by this crate; its coefficient only tightens the parabolic
//! part of the CFL bound.

use super::ConservationLaw;

/// 1D Burgers equation with flux f(u) = u²/2.
#[derive(Clone, Debug)]
pub struct Burgers1D {
    /// Viscosity coefficient ν for the parabolic regularization term,
    /// `None` for the inviscid equation.
    pub viscosity: Option<f64>,
}

impl Burgers1D {
    /// Inviscid Burgers equation.
    pub fn inviscid() -> Self {
        Self { viscosity: None }
    }

    /// Burgers equation with viscosity ν.
    pub fn viscous(nu: f64) -> Self {
        Self {
            viscosity: Some(nu),
        }
    }
}

impl ConservationLaw for Burgers1D {
    const N_VARS: usize = 1;

    fn flux(&self, q: &[f64]) -> Vec<f64> {
        debug_assert_eq!(q.len(), 1);
        vec![0.5 * q[0] * q[0]]
    }

    fn eigenvalues(&self, q: &[f64]) -> Vec<f64> {
        // f'(u) = u
        vec![q[0]]
    }

    fn max_diffusion(&self, _q: &[f64]) -> Option<f64> {
        self.viscosity
    }
}
