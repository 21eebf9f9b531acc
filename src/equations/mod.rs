//! Conservation law abstractions.
//!
//! Provides a trait-based interface for hyperbolic conservation laws:
//!
//! ∂u/∂t + ∂f(u)/∂x = 0
//!
//! where u is the state vector and f is the physical flux. The trait carries
//! the flux, its characteristic structure (eigenvalues and right
//! eigenvectors of ∂f/∂u), the entropy-variable transform used by
//! entropy-stable schemes, and an optional diffusion bound for parabolic
//! regularization terms in step-size control.

mod advection;
mod burgers;
mod shallow_water;

pub use advection::Advection1D;
pub use burgers::Burgers1D;
pub use shallow_water::ShallowWater1D;

/// A hyperbolic conservation law in 1D.
///
/// Abstracts over scalar equations (advection, Burgers) and systems
/// (shallow water). Implementations supply the physical flux and the
/// spectral data of its Jacobian; everything a numerical flux scheme or the
/// CFL controller needs is derived from these.
///
/// # Example
///
/// ```
/// use fv_rs::equations::{Advection1D, ConservationLaw};
///
/// let law = Advection1D::new(2.0);
/// assert_eq!(law.flux(&[3.0]), vec![6.0]);
/// assert_eq!(law.max_wave_speed(&[3.0]), 2.0);
/// ```
pub trait ConservationLaw: Clone + Send + Sync {
    /// Number of conserved variables.
    ///
    /// - 1 for scalar equations (advection, Burgers)
    /// - 2 for 1D shallow water (h, hu)
    const N_VARS: usize;

    /// Compute the physical flux f(q).
    ///
    /// # Arguments
    /// * `q` - State vector of length N_VARS
    fn flux(&self, q: &[f64]) -> Vec<f64>;

    /// Eigenvalues of the flux Jacobian ∂f/∂q at state q.
    ///
    /// For advection: [a]. For shallow water: [u − c, u + c] with c = √(gh).
    fn eigenvalues(&self, q: &[f64]) -> Vec<f64>;

    /// Maximum absolute wave speed (spectral radius of ∂f/∂q).
    ///
    /// Used for Lax-Friedrichs viscosity and CFL step-size bounds. The
    /// default takes the largest |λ| over `eigenvalues`.
    fn max_wave_speed(&self, q: &[f64]) -> f64 {
        self.eigenvalues(q)
            .iter()
            .fold(0.0_f64, |m, &l| m.max(l.abs()))
    }

    /// Right eigenvectors of the flux Jacobian.
    ///
    /// Returns a matrix R where R[i] is the eigenvector paired with
    /// `eigenvalues(q)[i]`. Default is the identity, which is exact for
    /// scalar equations.
    fn right_eigenvectors(&self, _q: &[f64]) -> Vec<Vec<f64>> {
        let n = Self::N_VARS;
        let mut r = vec![vec![0.0; n]; n];
        for (i, row) in r.iter_mut().enumerate() {
            row[i] = 1.0;
        }
        r
    }

    /// Entropy variables v(q).
    ///
    /// Gradient of the entropy function with respect to the conserved
    /// variables. Entropy-stable schemes reconstruct and dissipate in these
    /// variables. Default is the identity map, which is the usual choice for
    /// scalar equations with the quadratic entropy.
    fn entropy_variables(&self, q: &[f64]) -> Vec<f64> {
        q.to_vec()
    }

    /// Spectral radius of the diffusion-matrix Jacobian, if the law carries
    /// a parabolic regularization term.
    ///
    /// Only consumed by the CFL controller; `None` means purely hyperbolic.
    fn max_diffusion(&self, _q: &[f64]) -> Option<f64> {
        None
    }
}
