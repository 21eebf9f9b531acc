//! 1D advection demo.
//!
//! Advects u(x, 0) = sin(4πx) once around the periodic domain [0, 1] with
//! Lax-Friedrichs and TeCNO and reports the L1 error of each against the
//! exact solution. Time stepping is a plain SSP-RK3 loop driving the
//! assembled right-hand side, with the step size re-derived from the CFL
//! controller on every step.
//!
//! Run with: `cargo run --example advection_1d`

use fv_rs::{
    Advection1D, CflController, ConservationLaw, LaxFriedrichsScheme, NumericalFluxScheme,
    SemiDiscretization, State1D, TecnoScheme, UniformMesh1D, advection_entropy_flux,
};
use std::f64::consts::PI;

fn ssp_rk3_step<L, S>(semi: &SemiDiscretization<L, S>, u: &mut State1D, t: f64, dt: f64)
where
    L: ConservationLaw,
    S: NumericalFluxScheme<L>,
{
    let l0 = semi.rhs(u, t).expect("rhs evaluation failed");
    let mut u1 = u.clone();
    u1.axpy(dt, &l0);

    let l1 = semi.rhs(&u1, t + dt).expect("rhs evaluation failed");
    let mut u2 = u.clone();
    u2.scale(0.75);
    u2.axpy(0.25, &u1);
    u2.axpy(0.25 * dt, &l1);

    let l2 = semi.rhs(&u2, t + 0.5 * dt).expect("rhs evaluation failed");
    u.scale(1.0 / 3.0);
    u.axpy(2.0 / 3.0, &u2);
    u.axpy(2.0 / 3.0 * dt, &l2);
}

fn run<S: NumericalFluxScheme<Advection1D>>(
    label: &str,
    n_cells: usize,
    scheme: S,
    cfl: f64,
    t_final: f64,
) {
    let mesh = UniformMesh1D::periodic(n_cells, (0.0, 1.0)).unwrap();
    let semi = SemiDiscretization::new(mesh.clone(), Advection1D::new(1.0), scheme).unwrap();

    let ic = |x: f64| (4.0 * PI * x).sin();
    let mut u = State1D::from_cell_centers(&mesh, 1, |x| vec![ic(x)]);

    let mut controller = CflController::new(cfl).unwrap();
    let mut t = 0.0;
    let mut n_steps = 0usize;
    while t < t_final {
        let dt = controller
            .propose_dt(&u, semi.mesh(), semi.law())
            .dt_or(t_final - t)
            .min(t_final - t);
        ssp_rk3_step(&semi, &mut u, t, dt);
        t += dt;
        n_steps += 1;
    }

    // After one period the exact solution equals the initial condition
    let error = u.l1_error(&mesh, 0, ic);
    println!(
        "{:24} n={:4}  steps={:5}  L1 error={:.4e}",
        label, n_cells, n_steps, error
    );
}

fn main() {
    println!("1D advection, one period of sin(4πx) on [0, 1]");
    println!("==============================================");

    for n in [50, 100, 200] {
        run("lax-friedrichs", n, LaxFriedrichsScheme::local(), 0.5, 1.0);
    }
    println!();
    for order in [2, 3, 5] {
        let scheme = TecnoScheme::new(order, advection_entropy_flux).unwrap();
        run(
            &format!("tecno (order {})", order),
            100,
            scheme,
            0.4,
            1.0,
        );
    }
}
