//! Benchmarks for gate application and measurement
//!
//! Compares the scatter kernel against the rayon gather kernel

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use qrng_state::gates::HADAMARD;
use qrng_state::kernels::{apply_gather_parallel, apply_scatter};
use qrng_state::{hadamard_all, measure, sample_counts, ApplyOptions, StateVector};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_hadamard_kernels(c: &mut Criterion) {
    let mut group = c.benchmark_group("hadamard_kernel");

    for num_qubits in [10usize, 15, 20].iter() {
        let state = StateVector::new(*num_qubits).unwrap();
        group.throughput(Throughput::Elements(state.dimension() as u64));

        group.bench_with_input(
            BenchmarkId::new("scatter", num_qubits),
            num_qubits,
            |b, _| b.iter(|| apply_scatter(black_box(state.amplitudes()), &HADAMARD, 1)),
        );

        group.bench_with_input(
            BenchmarkId::new("gather_parallel", num_qubits),
            num_qubits,
            |b, _| b.iter(|| apply_gather_parallel(black_box(state.amplitudes()), &HADAMARD, 1)),
        );
    }

    group.finish();
}

fn bench_uniform_superposition(c: &mut Criterion) {
    let mut group = c.benchmark_group("hadamard_all");
    let options = ApplyOptions::default();

    for num_qubits in [8usize, 12, 16].iter() {
        let state = StateVector::new(*num_qubits).unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(num_qubits),
            num_qubits,
            |b, _| b.iter(|| hadamard_all(black_box(&state), &options).unwrap()),
        );
    }

    group.finish();
}

fn bench_measurement(c: &mut Criterion) {
    let mut group = c.benchmark_group("measurement");
    let uniform = hadamard_all(&StateVector::new(16).unwrap(), &ApplyOptions::default()).unwrap();

    group.bench_function("single_shot_16q", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| measure(black_box(uniform.clone()), None, &mut rng).unwrap())
    });

    group.bench_function("sample_1024_shots_16q", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| sample_counts(black_box(&uniform), 1024, &mut rng).unwrap())
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_hadamard_kernels,
    bench_uniform_superposition,
    bench_measurement
);
criterion_main!(benches);
