use criterion::{criterion_group, criterion_main, Criterion};
use std::collections::HashMap;
use storage::{IndexStorage, IndexStore};

fn build_store(num_docs: u64) -> IndexStore {
    let mut store = IndexStore::new();
    for i in 0..num_docs {
        let id = store.register_document(&format!("docs/{i}.txt")).unwrap();
        let freqs: HashMap<String, u64> =
            (0..20).map(|t| (format!("term{}", (i + t) % 500), t + 1)).collect();
        store.update_postings(id, freqs).unwrap();
    }
    store
}

fn bench_register(c: &mut Criterion) {
    c.bench_function("register_1k_docs", |b| b.iter(|| build_store(1_000)));
}

fn bench_lookup(c: &mut Criterion) {
    let store = build_store(1_000);
    c.bench_function("lookup_term", |b| {
        b.iter(|| store.lookup_term("term42").unwrap())
    });
}

criterion_group!(benches, bench_register, bench_lookup);
criterion_main!(benches);
