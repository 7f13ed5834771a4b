//! Benchmarks for inner-product proving and verification

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ipa::{prove, verify, Backend, IpaDriver};
use ipa_benches::{bench_descriptor, random_scalars};
use merlin::Transcript;

fn bench_prove(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let mut group = c.benchmark_group("ipa_prove");

    for n in [16usize, 64, 256, 1024] {
        group.throughput(Throughput::Elements(n as u64));
        let descriptor = bench_descriptor(n);
        let a_vector = random_scalars(n);

        for backend in [Backend::Host, Backend::Device] {
            let driver = IpaDriver::new(backend);
            group.bench_with_input(
                BenchmarkId::new(format!("{backend:?}"), n),
                &n,
                |bencher, _| {
                    bencher.to_async(&runtime).iter(|| async {
                        let mut transcript = Transcript::new(b"ipa-bench");
                        prove(&driver, &mut transcript, &descriptor, &a_vector)
                            .await
                            .unwrap()
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_verify(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let mut group = c.benchmark_group("ipa_verify");

    for n in [16usize, 64, 256, 1024] {
        group.throughput(Throughput::Elements(n as u64));
        let descriptor = bench_descriptor(n);
        let a_vector = random_scalars(n);
        let commitment = descriptor.commit(&a_vector).unwrap();

        let driver = IpaDriver::new(Backend::Host);
        let proof = runtime.block_on(async {
            let mut transcript = Transcript::new(b"ipa-bench");
            prove(&driver, &mut transcript, &descriptor, &a_vector)
                .await
                .unwrap()
        });

        group.bench_with_input(BenchmarkId::new("Host", n), &n, |bencher, _| {
            bencher.to_async(&runtime).iter(|| async {
                let mut transcript = Transcript::new(b"ipa-bench");
                verify(&driver, &mut transcript, &descriptor, &proof, &commitment)
                    .await
                    .unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_prove, bench_verify);
criterion_main!(benches);
