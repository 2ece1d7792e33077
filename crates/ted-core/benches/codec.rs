use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::f64::consts::PI;
use ted_core::{
    iaf_decode, iaf_decode_fast, iaf_encode, IafParams, QuadratureMethod, TestSignal,
    DEFAULT_RCOND,
};

const BW: f64 = 2.0 * PI * 32.0;

fn make_input(dur: f64, dt: f64) -> Vec<f64> {
    TestSignal::new(BW)
        .generate(dur, dt, 1234)
        .expect("bench signal")
        .samples
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("iaf_encode");
    let dt = 1e-6;
    let p = IafParams::new(3.5, 0.7, 10.0, 0.01).unwrap();

    for &dur_ms in &[10u64, 50u64, 100u64] {
        let u = make_input(dur_ms as f64 * 1e-3, dt);
        group.throughput(Throughput::Elements(u.len() as u64));
        group.bench_with_input(BenchmarkId::new("leaky", dur_ms), &u, |b, u| {
            b.iter(|| {
                iaf_encode(u, dt, &p, QuadratureMethod::ExponentialEuler).unwrap();
            });
        });
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("iaf_decode");
    group.sample_size(10);
    // Coarse grid keeps the dense pseudoinverse affordable in CI
    let dt = 1e-5;
    let dur = 0.05;
    let p = IafParams::new(3.5, 0.7, 10.0, 0.01).unwrap();
    let u = make_input(dur, dt);
    let s = iaf_encode(&u, dt, &p, QuadratureMethod::ExponentialEuler).unwrap();

    group.throughput(Throughput::Elements(s.len() as u64));
    group.bench_function("dense", |b| {
        b.iter(|| {
            iaf_decode(&s, dur, dt, BW, &p, DEFAULT_RCOND).unwrap();
        });
    });

    for &m in &[8usize, 32usize] {
        group.bench_with_input(BenchmarkId::new("fast", m), &m, |b, &m| {
            b.iter(|| {
                iaf_decode_fast(&s, dur, dt, BW, m, &p, DEFAULT_RCOND).unwrap();
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
