//! 1D Shallow Water Equations.
//!
//! The 1D shallow water (Saint-Venant) equations over a flat bottom:
//!
//! ∂h/∂t + ∂(hu)/∂x = 0
//! ∂(hu)/∂t + ∂(hu² + gh²/2)/∂x = 0
//!
//! State vector q = [h, hu] with water depth h, velocity u and
//! gravitational acceleration g.

use super::ConservationLaw;

/// 1D Shallow Water Equations.
///
/// Flux: f(q) = [hu, hu²/h + gh²/2]. Carries the full eigenstructure of the
/// flux Jacobian and the entropy variables of the total-energy entropy
/// η = ½hu² + ½gh², so it exercises every hook an entropy-stable scheme
/// needs on a genuine system.
#[derive(Clone, Debug)]
pub struct ShallowWater1D {
    /// Gravitational acceleration (default 9.81 m/s²)
    pub g: f64,
    /// Minimum depth guard against division by a vanishing h (default 1e-6)
    pub h_min: f64,
}

impl ShallowWater1D {
    /// Create shallow water equations with the given gravity.
    pub fn new(g: f64) -> Self {
        Self { g, h_min: 1e-6 }
    }

    /// Standard gravity (9.81 m/s²).
    pub fn standard() -> Self {
        Self::new(9.81)
    }

    /// Velocity u = hu/h, zero below the depth guard.
    pub fn velocity(&self, h: f64, hu: f64) -> f64 {
        if h > self.h_min {
            hu / h
        } else {
            0.0
        }
    }

    /// Wave celerity c = √(gh).
    pub fn celerity(&self, h: f64) -> f64 {
        (self.g * h.max(0.0)).sqrt()
    }
}

impl Default for ShallowWater1D {
    fn default() -> Self {
        Self::standard()
    }
}

impl ConservationLaw for ShallowWater1D {
    const N_VARS: usize = 2;

    fn flux(&self, q: &[f64]) -> Vec<f64> {
        debug_assert_eq!(q.len(), 2);

        let h = q[0];
        let hu = q[1];

        if h <= self.h_min {
            return vec![0.0, 0.0];
        }

        let u = hu / h;
        vec![hu, h * u * u + 0.5 * self.g * h * h]
    }

    fn eigenvalues(&self, q: &[f64]) -> Vec<f64> {
        let h = q[0];
        let u = self.velocity(h, q[1]);
        let c = self.celerity(h);
        vec![u - c, u + c]
    }

    fn right_eigenvectors(&self, q: &[f64]) -> Vec<Vec<f64>> {
        let h = q[0];

        if h <= self.h_min {
            return vec![vec![1.0, 0.0], vec![0.0, 1.0]];
        }

        let u = self.velocity(h, q[1]);
        let c = self.celerity(h);

        // r₁ = [1, u − c]ᵀ for λ₁ = u − c
        // r₂ = [1, u + c]ᵀ for λ₂ = u + c
        vec![vec![1.0, u - c], vec![1.0, u + c]]
    }

    fn entropy_variables(&self, q: &[f64]) -> Vec<f64> {
        let h = q[0];
        let u = self.velocity(h, q[1]);

        // v = ∇η = [gh − u²/2, u] for η = ½hu² + ½gh²
        vec![self.g * h - 0.5 * u * u, u]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn test_flux_still_water() {
        let swe = ShallowWater1D::new(10.0);

        // h = 2, u = 0: f = [0, gh²/2] = [0, 20]
        let flux = swe.flux(&[2.0, 0.0]);
        assert!(flux[0].abs() < TOL);
        assert!((flux[1] - 20.0).abs() < TOL);
    }

    #[test]
    fn test_flux_moving_water() {
        let swe = ShallowWater1D::new(10.0);

        // h = 2, u = 3: f = [6, 18 + 20] = [6, 38]
        let flux = swe.flux(&[2.0, 6.0]);
        assert!((flux[0] - 6.0).abs() < TOL);
        assert!((flux[1] - 38.0).abs() < TOL);
    }

    #[test]
    fn test_eigenvalues() {
        let swe = ShallowWater1D::new(10.0);

        let eigs = swe.eigenvalues(&[1.0, 2.0]);
        let c = 10.0_f64.sqrt();
        assert!((eigs[0] - (2.0 - c)).abs() < TOL);
        assert!((eigs[1] - (2.0 + c)).abs() < TOL);
    }

    #[test]
    fn test_max_wave_speed() {
        let swe = ShallowWater1D::new(10.0);

        let speed = swe.max_wave_speed(&[1.0, 2.0]);
        let expected = 2.0 + 10.0_f64.sqrt();
        assert!((speed - expected).abs() < TOL);
    }

    #[test]
    fn test_eigenvector_directions() {
        let swe = ShallowWater1D::new(10.0);

        let q = [2.0, 3.0];
        let eigs = swe.eigenvalues(&q);
        let r = swe.right_eigenvectors(&q);

        // Each r_i must satisfy A r_i = λ_i r_i with
        // A = [[0, 1], [c² − u², 2u]]
        let u = swe.velocity(q[0], q[1]);
        let c2 = swe.g * q[0];
        for (lambda, rv) in eigs.iter().zip(r.iter()) {
            let a_r0 = rv[1];
            let a_r1 = (c2 - u * u) * rv[0] + 2.0 * u * rv[1];
            assert!((a_r0 - lambda * rv[0]).abs() < 1e-10);
            assert!((a_r1 - lambda * rv[1]).abs() < 1e-10);
        }
    }

    #[test]
    fn test_entropy_variables() {
        let swe = ShallowWater1D::new(10.0);

        // h = 2, u = 3
        let v = swe.entropy_variables(&[2.0, 6.0]);
        assert!((v[0] - (20.0 - 4.5)).abs() < TOL);
        assert!((v[1] - 3.0).abs() < TOL);
    }

    #[test]
    fn test_dry_state_is_finite() {
        let swe = ShallowWater1D::standard();

        let flux = swe.flux(&[1e-10, 1e-10]);
        assert!(flux[0].abs() < TOL);
        assert!(flux[1].abs() < TOL);
        assert!(swe.max_wave_speed(&[1e-10, 1e-10]).is_finite());
    }
}
