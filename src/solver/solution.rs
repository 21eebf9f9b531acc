//! Space-time solution wrapper.
//!
//! Couples a mesh with the time trajectory produced by the external
//! integrator and answers point queries `value(x, t)`. Spatial lookups
//! resolve out-of-domain points through the mesh's boundary policy; temporal
//! lookups are nearest-sample by default with optional linear interpolation,
//! and never extrapolate.

use crate::boundary::ResolvedCell;
use crate::error::{ConfigError, QueryError};
use crate::mesh::UniformMesh1D;

use super::state::State1D;

/// A computed space-time solution.
///
/// Owns the mesh and an ordered sequence of (time, state) samples with
/// strictly increasing times; both invariants are checked at construction.
pub struct FvSolution {
    mesh: UniformMesh1D,
    times: Vec<f64>,
    states: Vec<State1D>,
    n_vars: usize,
}

impl FvSolution {
    /// Wrap a trajectory produced by an external integrator.
    ///
    /// Fails with [`ConfigError`] on an empty trajectory, non-increasing
    /// times, or a sample whose shape disagrees with the mesh.
    pub fn new(
        mesh: UniformMesh1D,
        times: Vec<f64>,
        states: Vec<State1D>,
    ) -> Result<Self, ConfigError> {
        if times.is_empty() || times.len() != states.len() {
            return Err(ConfigError::EmptyTrajectory);
        }
        for (index, pair) in times.windows(2).enumerate() {
            if !(pair[1] > pair[0]) {
                return Err(ConfigError::NonMonotonicTimes { index: index + 1 });
            }
        }
        let n_vars = states[0].n_vars;
        for (index, state) in states.iter().enumerate() {
            if state.n_cells != mesh.n_cells() || state.n_vars != n_vars {
                return Err(ConfigError::TrajectoryShape {
                    index,
                    n_cells: state.n_cells,
                    n_vars: state.n_vars,
                    expected_cells: mesh.n_cells(),
                    expected_vars: n_vars,
                });
            }
        }

        Ok(Self {
            mesh,
            times,
            states,
            n_vars,
        })
    }

    /// The mesh the solution lives on.
    pub fn mesh(&self) -> &UniformMesh1D {
        &self.mesh
    }

    /// Recorded sample times.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Number of recorded samples.
    pub fn n_samples(&self) -> usize {
        self.times.len()
    }

    /// State of sample i.
    pub fn state(&self, i: usize) -> &State1D {
        &self.states[i]
    }

    /// The last recorded state.
    pub fn final_state(&self) -> &State1D {
        self.states.last().expect("trajectory is non-empty")
    }

    /// The last recorded time.
    pub fn final_time(&self) -> f64 {
        *self.times.last().expect("trajectory is non-empty")
    }

    /// Value of one variable at (x, t), nearest sample in time.
    pub fn value_at(&self, x: f64, t: f64, var: usize) -> Result<f64, QueryError> {
        let (lo, hi) = self.bracket(t)?;
        let sample = if t - self.times[lo] <= self.times[hi] - t {
            lo
        } else {
            hi
        };
        self.spatial_value(&self.states[sample], x, var)
    }

    /// Value of one variable at (x, t), linearly interpolated between the
    /// bracketing time samples.
    pub fn value_at_interpolated(&self, x: f64, t: f64, var: usize) -> Result<f64, QueryError> {
        let (lo, hi) = self.bracket(t)?;
        if lo == hi {
            return self.spatial_value(&self.states[lo], x, var);
        }
        let theta = (t - self.times[lo]) / (self.times[hi] - self.times[lo]);
        let v_lo = self.spatial_value(&self.states[lo], x, var)?;
        let v_hi = self.spatial_value(&self.states[hi], x, var)?;
        Ok((1.0 - theta) * v_lo + theta * v_hi)
    }

    /// Indices of the samples bracketing t.
    ///
    /// Binary search over the strictly increasing times; querying outside
    /// the recorded range is an error, not extrapolation.
    fn bracket(&self, t: f64) -> Result<(usize, usize), QueryError> {
        let t_min = self.times[0];
        let t_max = *self.times.last().expect("trajectory is non-empty");
        if !(t >= t_min && t <= t_max) {
            return Err(QueryError::TimeOutOfRange { t, t_min, t_max });
        }

        // First sample with time >= t
        let hi = self.times.partition_point(|&s| s < t);
        if self.times[hi] == t {
            return Ok((hi, hi));
        }
        Ok((hi - 1, hi))
    }

    /// Cell value at x, resolving out-of-domain points through the boundary
    /// policy (periodic wrap, clamp, or fixed value).
    fn spatial_value(&self, state: &State1D, x: f64, var: usize) -> Result<f64, QueryError> {
        if var >= self.n_vars {
            return Err(QueryError::VariableOutOfRange {
                var,
                n_vars: self.n_vars,
            });
        }

        let index = ((x - self.mesh.x_min()) / self.mesh.dx()).floor() as isize;
        let value = match self.mesh.resolve_cell(index) {
            ResolvedCell::Interior(i) => state.cell(i)[var],
            ResolvedCell::Fixed(fixed) => fixed[var],
        };
        Ok(value)
    }
}
