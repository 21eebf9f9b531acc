//! Two-point entropy-conservative fluxes.
//!
//! An entropy-conservative flux f*(u_l, u_r) is symmetric, consistent
//! (f*(u, u) = f(u)) and satisfies the Tadmor shuffle condition
//! (v_r − v_l)·f* = ψ_r − ψ_l with entropy potential ψ. The TeCNO scheme
//! builds its high-order central part from these; this module supplies the
//! standard choices for the bundled equations.

use crate::equations::{Advection1D, Burgers1D, ShallowWater1D};

/// Two-point entropy-conservative flux signature.
///
/// Takes the conservation law and the two adjacent states, returns the flux
/// vector. A plain function pointer keeps schemes cheap to copy and
/// configuration-driven, mirroring how numerical flux functions are wired
/// elsewhere in the crate.
pub type EntropyFluxFn<L> = fn(&L, &[f64], &[f64]) -> Vec<f64>;

/// Arithmetic-mean flux for linear advection, f* = a (u_l + u_r) / 2.
///
/// Entropy-conservative for the quadratic entropy.
pub fn advection_entropy_flux(law: &Advection1D, q_l: &[f64], q_r: &[f64]) -> Vec<f64> {
    vec![0.5 * law.velocity * (q_l[0] + q_r[0])]
}

/// Entropy-conservative Burgers flux, f* = (u_l² + u_l u_r + u_r²) / 6.
pub fn burgers_entropy_flux(_law: &Burgers1D, q_l: &[f64], q_r: &[f64]) -> Vec<f64> {
    let (ul, ur) = (q_l[0], q_r[0]);
    vec![(ul * ul + ul * ur + ur * ur) / 6.0]
}

/// Entropy-conservative shallow-water flux (Fjordholm, Mishra & Tadmor):
///
/// f* = [ h̄ ū, h̄ ū² + ½ g avg(h²) ]
///
/// with arithmetic averages of h, u and h².
pub fn shallow_water_entropy_flux(law: &ShallowWater1D, q_l: &[f64], q_r: &[f64]) -> Vec<f64> {
    let h_l = q_l[0];
    let h_r = q_r[0];
    let u_l = law.velocity(h_l, q_l[1]);
    let u_r = law.velocity(h_r, q_r[1]);

    let h_avg = 0.5 * (h_l + h_r);
    let u_avg = 0.5 * (u_l + u_r);
    let h2_avg = 0.5 * (h_l * h_l + h_r * h_r);

    vec![h_avg * u_avg, h_avg * u_avg * u_avg + 0.5 * law.g * h2_avg]
}
