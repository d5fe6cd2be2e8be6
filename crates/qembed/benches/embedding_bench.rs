//! Benchmarks for embedding builds
//!
//! Run with: cargo bench -p qembed

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use qembed::{AmplitudeEmbedding, AngleEmbedding, BasisEmbedding, CvEmbedding, Embedding};

/// Benchmark symbolic builds for the per-qubit schemes
fn bench_linear_schemes(c: &mut Criterion) {
    let mut group = c.benchmark_group("linear_schemes");

    for num_qubits in [4_u32, 16, 64] {
        let basis = BasisEmbedding::new(num_qubits).unwrap();
        group.bench_with_input(BenchmarkId::new("basis", num_qubits), &basis, |b, e| {
            b.iter(|| black_box(e).build().unwrap());
        });

        let angle = AngleEmbedding::from_names(&["RY", "RZ", "RX"], num_qubits, false).unwrap();
        group.bench_with_input(BenchmarkId::new("angle", num_qubits), &angle, |b, e| {
            b.iter(|| black_box(e).build().unwrap());
        });

        let cv = CvEmbedding::displacement(num_qubits, true).unwrap();
        group.bench_with_input(BenchmarkId::new("displacement", num_qubits), &cv, |b, e| {
            b.iter(|| black_box(e).build().unwrap());
        });
    }

    group.finish();
}

/// Benchmark the amplitude tree with numeric inputs
fn bench_amplitude(c: &mut Criterion) {
    let mut group = c.benchmark_group("amplitude");

    for num_qubits in [2_u32, 6, 10] {
        let embedding = AmplitudeEmbedding::new(num_qubits).unwrap();
        let values: Vec<f64> = (0..embedding.input_len())
            .map(|i| (i as f64 * 0.37).sin())
            .collect();
        group.bench_with_input(
            BenchmarkId::new("embed_values", num_qubits),
            &values,
            |b, values| {
                b.iter(|| embedding.embed_values(black_box(values)).unwrap());
            },
        );
    }

    group.finish();
}

/// Benchmark binding and inverting a built program
fn bench_program_transforms(c: &mut Criterion) {
    let embedding = AngleEmbedding::from_names(&["RY", "RZ"], 32, false).unwrap();
    let (program, _) = embedding.build().unwrap();
    let values: Vec<f64> = (0..embedding.input_len()).map(|i| i as f64 * 0.01).collect();

    c.bench_function("bind_angle_32", |b| {
        b.iter(|| program.bind(black_box(&values)).unwrap());
    });
    c.bench_function("inverse_angle_32", |b| {
        b.iter(|| black_box(&program).inverse());
    });
}

criterion_group!(
    benches,
    bench_linear_schemes,
    bench_amplitude,
    bench_program_transforms
);
criterion_main!(benches);
