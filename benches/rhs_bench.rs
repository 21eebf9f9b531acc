//! Benchmarks for right-hand-side assembly.
//!
//! Run with: `cargo bench --bench rhs_bench`
//!
//! Compares the per-evaluation cost of the Lax-Friedrichs and TeCNO schemes
//! on scalar advection and on the shallow-water system.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fv_rs::{
    Advection1D, LaxFriedrichsScheme, SemiDiscretization, ShallowWater1D, State1D, TecnoScheme,
    UniformMesh1D, advection_entropy_flux, shallow_water_entropy_flux,
};
use std::f64::consts::PI;

const N_CELLS: usize = 1024;

fn bench_advection_rhs(c: &mut Criterion) {
    let mut group = c.benchmark_group("advection_rhs");

    let mesh = UniformMesh1D::periodic(N_CELLS, (0.0, 1.0)).unwrap();
    let u = State1D::from_cell_centers(&mesh, 1, |x| vec![(2.0 * PI * x).sin()]);

    let lf = SemiDiscretization::new(
        mesh.clone(),
        Advection1D::new(1.0),
        LaxFriedrichsScheme::local(),
    )
    .unwrap();
    group.bench_function("lax_friedrichs", |b| {
        b.iter(|| lf.rhs(black_box(&u), 0.0).unwrap())
    });

    for order in [2, 3, 5] {
        let scheme = TecnoScheme::new(order, advection_entropy_flux).unwrap();
        let semi =
            SemiDiscretization::new(mesh.clone(), Advection1D::new(1.0), scheme).unwrap();
        group.bench_function(format!("tecno_order_{}", order), |b| {
            b.iter(|| semi.rhs(black_box(&u), 0.0).unwrap())
        });
    }

    group.finish();
}

fn bench_shallow_water_rhs(c: &mut Criterion) {
    let mut group = c.benchmark_group("shallow_water_rhs");

    let mesh = UniformMesh1D::periodic(N_CELLS, (0.0, 1.0)).unwrap();
    let u = State1D::from_cell_centers(&mesh, 2, |x| {
        vec![2.0 + 0.1 * (2.0 * PI * x).sin(), 0.05 * (2.0 * PI * x).cos()]
    });

    let lf = SemiDiscretization::new(
        mesh.clone(),
        ShallowWater1D::standard(),
        LaxFriedrichsScheme::local(),
    )
    .unwrap();
    group.bench_function("lax_friedrichs", |b| {
        b.iter(|| lf.rhs(black_box(&u), 0.0).unwrap())
    });

    let scheme = TecnoScheme::new(3, shallow_water_entropy_flux).unwrap();
    let semi = SemiDiscretization::new(mesh.clone(), ShallowWater1D::standard(), scheme).unwrap();
    group.bench_function("tecno_order_3", |b| {
        b.iter(|| semi.rhs(black_box(&u), 0.0).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_advection_rhs, bench_shallow_water_rhs);
criterion_main!(benches);
