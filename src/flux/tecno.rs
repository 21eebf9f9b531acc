//! TeCNO entropy-stable scheme.
//!
//! High-order entropy-stable flux of Fjordholm, Mishra & Tadmor: an
//! order-accurate symmetric combination of two-point entropy-conservative
//! fluxes, stabilized by upwind-type dissipation acting on ENO-reconstructed
//! entropy variables in the local eigenbasis of the flux Jacobian.
//!
//! Per node j (interface between cells j−1 and j):
//!
//! 1. eigendecompose ∂f/∂u at the node-averaged state,
//! 2. transform the stencil to entropy variables v(u),
//! 3. ENO-reconstruct the left/right-biased values v⁻, v⁺ at the node,
//! 4. dissipation dd = ½ R |Λ| R⁻¹ (v⁺ − v⁻),
//! 5. entropy-conservative part ff from the weighted two-point flux pairs,
//! 6. numerical flux = ff − dd.

use faer::{linalg::solvers::Solve, Mat};

use crate::equations::ConservationLaw;
use crate::error::{ConfigError, NumericalError};
use crate::mesh::{MeshTopology, UniformMesh1D};
use crate::solver::State1D;

use super::eno::eno_edge_values;
use super::{check_finite, EdgeFluxes, EntropyFluxFn, NumericalFluxScheme};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Weights of the 2p-th order entropy-conservative flux combination.
///
/// One pair at second order; three pairs at fourth order; six pairs at
/// sixth order.
fn combination_weights(order: usize) -> &'static [f64] {
    match order {
        2 => &[1.0],
        3 | 4 => &[4.0 / 3.0, -1.0 / 6.0],
        5 => &[1.5, -0.3, 1.0 / 30.0],
        _ => unreachable!("order validated at construction"),
    }
}

/// High-order entropy-stable TeCNO scheme.
///
/// Configured with a reconstruction order in 2..=5 (nominal accuracy
/// 2·order−1), a two-point entropy-conservative flux and the law's
/// entropy-variable transform (identity unless the law overrides it).
#[derive(Clone)]
pub struct TecnoScheme<L: ConservationLaw> {
    /// ENO reconstruction order (also the ghost-cell depth).
    order: usize,
    /// Two-point entropy-conservative flux.
    ec_flux: EntropyFluxFn<L>,
}

impl<L: ConservationLaw> TecnoScheme<L> {
    /// Create a TeCNO scheme of the given reconstruction order.
    ///
    /// Fails with [`ConfigError::InvalidOrder`] outside 2..=5.
    pub fn new(order: usize, ec_flux: EntropyFluxFn<L>) -> Result<Self, ConfigError> {
        if !(2..=5).contains(&order) {
            return Err(ConfigError::InvalidOrder(order));
        }
        Ok(Self { order, ec_flux })
    }

    /// Reconstruction order.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Resolve the ghost-padded stencil of conserved states and their
    /// entropy-variable transforms.
    ///
    /// Pads `order` cells beyond each end through the mesh accessors, so
    /// every per-node kernel afterwards only reads shared immutable data.
    fn padded_stencil(
        &self,
        state: &State1D,
        mesh: &UniformMesh1D,
        law: &L,
    ) -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
        let pad = self.order as isize;
        let n = mesh.n_cells() as isize;

        let conserved: Vec<Vec<f64>> = (-pad..n + pad)
            .map(|c| mesh.cell_value(c, state).to_vec())
            .collect();
        let entropy: Vec<Vec<f64>> = conserved.iter().map(|q| law.entropy_variables(q)).collect();
        (conserved, entropy)
    }

    /// Numerical flux across node j.
    ///
    /// `conserved` and `entropy` are the padded stencils from
    /// [`padded_stencil`](Self::padded_stencil); cell c lives at slot
    /// `c + order`.
    fn node_flux(
        &self,
        node: usize,
        conserved: &[Vec<f64>],
        entropy: &[Vec<f64>],
        law: &L,
    ) -> Result<Vec<f64>, NumericalError> {
        let m = L::N_VARS;
        let k = self.order;
        let pad = k as isize;
        let i = node as isize - 1; // cell left of the node
        let cell = |c: isize| conserved[(c + pad) as usize].as_slice();
        let ent = |c: isize| entropy[(c + pad) as usize].as_slice();

        // Entropy-conservative part: weighted two-point flux pairs over a
        // widening neighborhood of the edge.
        let mut ff = vec![0.0; m];
        for (s_idx, &alpha) in combination_weights(k).iter().enumerate() {
            let s = (s_idx + 1) as isize;
            for t in 0..s {
                let f = (self.ec_flux)(law, cell(i - t), cell(i - t + s));
                for v in 0..m {
                    ff[v] += alpha * f[v];
                }
            }
        }

        // Local linearization at the node-averaged state.
        let u_avg: Vec<f64> = (0..m)
            .map(|v| 0.5 * (cell(i)[v] + cell(i + 1)[v]))
            .collect();
        let lambda = law.eigenvalues(&u_avg);
        let rvecs = law.right_eigenvectors(&u_avg);
        if lambda.iter().any(|l| !l.is_finite())
            || rvecs.iter().flatten().any(|r| !r.is_finite())
        {
            return Err(NumericalError::Eigendecomposition { node });
        }

        // ENO reconstruction of the entropy variables on both sides of the
        // node, component-wise.
        let half = (k - 1) as isize;
        let mut jump = vec![0.0; m];
        for v in 0..m {
            let window_l: Vec<f64> = (i - half..=i + half).map(|c| ent(c)[v]).collect();
            let (_, v_minus) = eno_edge_values(&window_l, k);

            let window_r: Vec<f64> = (i + 1 - half..=i + 1 + half).map(|c| ent(c)[v]).collect();
            let (v_plus, _) = eno_edge_values(&window_r, k);

            jump[v] = v_plus - v_minus;
        }

        // Project the jump into the eigenbasis, scale by |λ|, map back.
        let dd = eigen_dissipation::<L>(&lambda, &rvecs, &jump, node)?;

        let flux: Vec<f64> = (0..m).map(|v| ff[v] - 0.5 * dd[v]).collect();
        check_finite(&flux, node)?;
        Ok(flux)
    }
}

/// Compute R |Λ| R⁻¹ applied to the entropy-variable jump.
///
/// `rvecs[i]` is the right eigenvector paired with `lambda[i]`. The inverse
/// eigenvector matrix is obtained from a full-pivoting LU solve; a singular
/// or non-finite factorization means the Jacobian is not diagonalizable at
/// this state, which is fatal for the evaluation.
fn eigen_dissipation<L: ConservationLaw>(
    lambda: &[f64],
    rvecs: &[Vec<f64>],
    jump: &[f64],
    node: usize,
) -> Result<Vec<f64>, NumericalError> {
    let m = L::N_VARS;

    if m == 1 {
        let r = rvecs[0][0];
        let z = jump[0] / r;
        let dd = r * lambda[0].abs() * z;
        if !dd.is_finite() {
            return Err(NumericalError::Eigendecomposition { node });
        }
        return Ok(vec![dd]);
    }

    // Eigenvector matrix with R[:, i] = rvecs[i]
    let mut r_mat = Mat::zeros(m, m);
    for col in 0..m {
        for row in 0..m {
            r_mat[(row, col)] = rvecs[col][row];
        }
    }

    let lu = r_mat.as_ref().full_piv_lu();
    let mut rhs = Mat::zeros(m, 1);
    for row in 0..m {
        rhs[(row, 0)] = jump[row];
    }
    let z = lu.solve(&rhs);
    if (0..m).any(|row| !z[(row, 0)].is_finite()) {
        return Err(NumericalError::Eigendecomposition { node });
    }

    let mut dd = vec![0.0; m];
    for row in 0..m {
        for comp in 0..m {
            dd[row] += rvecs[comp][row] * lambda[comp].abs() * z[(comp, 0)];
        }
    }
    Ok(dd)
}

impl<L: ConservationLaw> NumericalFluxScheme<L> for TecnoScheme<L> {
    fn edge_fluxes(
        &self,
        state: &State1D,
        mesh: &UniformMesh1D,
        law: &L,
        _dt: f64,
    ) -> Result<EdgeFluxes, NumericalError> {
        let (conserved, entropy) = self.padded_stencil(state, mesh, law);

        let mut fluxes: EdgeFluxes = mesh
            .node_indices()
            .map(|j| self.node_flux(j, &conserved, &entropy, law))
            .collect::<Result<_, _>>()?;

        // The periodic seam is one physical interface; both ends carry the
        // same flux and the same reconstruction jump.
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
        let (conserved, entropy) = self.padded_stencil(state, mesh, law);

        let mut fluxes: EdgeFluxes = (0..=mesh.n_cells())
            .into_par_iter()
            .map(|j| self.node_flux(j, &conserved, &entropy, law))
            .collect::<Result<_, _>>()?;

        if mesh.is_periodic() {
            fluxes[mesh.n_cells()] = fluxes[0].clone();
        }
        Ok(fluxes)
    }

    fn name(&self) -> &'static str {
        "tecno"
    }

    fn is_entropy_stable(&self) -> bool {
        true
    }

    fn recommended_cfl(&self) -> f64 {
        0.4
    }

    fn stencil_radius(&self) -> usize {
        self.order
    }
}
