use std::sync::Arc;

use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rollcall_core::config::EngineConfig;
use rollcall_core::SelectionOrder;
use rollcall_engine::RollCallEngine;
use rollcall_store::HistoryStore;

fn bench_selection(c: &mut Criterion) {
    let store = Arc::new(HistoryStore::open_in_memory());
    let engine = RollCallEngine::new(store, EngineConfig::default());
    let pool: Vec<String> = (1..=60).map(|i| i.to_string()).collect();
    let order = SelectionOrder::Random;
    let mut rng = StdRng::seed_from_u64(1);

    for _ in 0..100 {
        let picked = engine.select_candidates(&pool, 3, order, &mut rng);
        engine.record_draw(&picked).unwrap();
    }

    c.bench_function("select_5_of_60_weighted", |b| {
        b.iter(|| engine.select_candidates(&pool, 5, order, &mut rng))
    });

    c.bench_function("record_draw_3", |b| {
        let picked = vec!["1".to_string(), "2".to_string(), "3".to_string()];
        b.iter(|| engine.record_draw(&picked).unwrap())
    });
}

criterion_group!(benches, bench_selection);
criterion_main!(benches);
