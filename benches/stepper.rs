//! Benchmarks for the per-frame work of both scenarios.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::DVec2;

use relviz::config::{GpsConfig, OrbitConfig};
use relviz::controls::DisplayToggles;
use relviz::physics::{orbit_point, time_dilation, DilationUnit};
use relviz::raster::render_orbit_frame;
use relviz::scenario::{GpsSim, PerihelionSim};

fn bench_physics(c: &mut Criterion) {
    let mut group = c.benchmark_group("physics");

    group.bench_function("orbit_point", |b| {
        b.iter(|| black_box(orbit_point(DVec2::ZERO, 200.0, 0.3, black_box(1.234), black_box(0.05))))
    });

    group.bench_function("time_dilation", |b| {
        b.iter(|| {
            black_box(time_dilation(
                black_box(1.0),
                6371.0,
                black_box(26_600.0),
                DilationUnit::MicrosPerDay,
            ))
        })
    });

    group.finish();
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    // Trails fill up and start evicting after `trail_capacity` ticks
    for warmup in [0usize, 6000] {
        group.bench_with_input(BenchmarkId::new("perihelion", warmup), &warmup, |b, &warmup| {
            let mut sim = PerihelionSim::new(OrbitConfig::desktop());
            for _ in 0..warmup {
                sim.tick();
            }
            b.iter(|| black_box(sim.tick()))
        });
    }

    group.bench_function("gps_readout", |b| {
        let mut sim = GpsSim::new(GpsConfig::default());
        b.iter(|| {
            sim.tick();
            black_box(sim.readout())
        })
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.sample_size(20);

    for ticks in [10usize, 1500] {
        group.bench_with_input(BenchmarkId::new("dashboard_frame", ticks), &ticks, |b, &ticks| {
            let mut sim = PerihelionSim::new(OrbitConfig::dashboard());
            sim.start();
            for _ in 0..ticks {
                sim.tick();
            }
            b.iter(|| black_box(render_orbit_frame(&sim, DisplayToggles::default(), 800, 800, DVec2::ZERO)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_physics, bench_tick, bench_render);
criterion_main!(benches);
