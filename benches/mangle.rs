use criterion::{criterion_group, criterion_main, Criterion};
use manglecore::{mangle_content, MutationContext, VecBuffer};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn bench_mangle_content(c: &mut Criterion) {
    let seed_input = b"The quick brown fox jumps over the lazy dog".to_vec();
    c.bench_function("mangle_content", |b| {
        b.iter(|| {
            let buf = VecBuffer::from_initial(&seed_input, 4096);
            let mut ctx = MutationContext::new(
                buf,
                seed_input.len(),
                vec![b"dict".to_vec()],
                6,
                false,
                SmallRng::seed_from_u64(1),
            )
            .unwrap();
            mangle_content(&mut ctx).unwrap();
        })
    });
}

criterion_group!(benches, bench_mangle_content);
criterion_main!(benches);
