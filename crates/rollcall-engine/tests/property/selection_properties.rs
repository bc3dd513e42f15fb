use std::collections::BTreeSet;
use std::sync::Arc;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rollcall_core::config::EngineConfig;
use rollcall_core::SelectionOrder;
use rollcall_engine::RollCallEngine;
use rollcall_store::HistoryStore;

fn arb_order() -> impl Strategy<Value = SelectionOrder> {
    prop_oneof![
        Just(SelectionOrder::Random),
        Just(SelectionOrder::Sequential),
        Just(SelectionOrder::Group),
    ]
}

fn arb_config() -> impl Strategy<Value = EngineConfig> {
    (1usize..60, 0.0f64..=1.0, any::<bool>()).prop_map(|(window, avoidance, weighting)| {
        EngineConfig::default()
            .with_max_recent_history(window)
            .with_avoidance_weight(avoidance)
            .with_weighting(weighting)
    })
}

fn pool_of(size: usize) -> Vec<String> {
    (1..=size).map(|i| i.to_string()).collect()
}

fn in_memory_engine(config: EngineConfig) -> RollCallEngine {
    RollCallEngine::new(Arc::new(HistoryStore::open_in_memory()), config)
}

fn arb_draws() -> impl Strategy<Value = Vec<BTreeSet<usize>>> {
    let draw = proptest::collection::btree_set(0usize..12, 1..5);
    proptest::collection::vec(draw, 1..60)
}

proptest! {
    #[test]
    fn no_duplicates_within_a_draw(
        size in 1usize..40,
        count in 0usize..45,
        order in arb_order(),
        config in arb_config(),
        seed in any::<u64>(),
        history in proptest::collection::vec(1usize..40, 0..30),
    ) {
        let engine = in_memory_engine(config);
        let pool = pool_of(size);
        for h in history {
            engine.record_draw(&[h.to_string()]).unwrap();
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let picked = engine.select_candidates(&pool, count, order, &mut rng);
        let mut unique = picked.clone();
        unique.sort();
        unique.dedup();
        prop_assert_eq!(unique.len(), picked.len());
        prop_assert!(picked.len() <= count.min(size));
        prop_assert!(picked.iter().all(|p| pool.contains(p)));
    }

    #[test]
    fn saturated_draw_returns_pool(
        size in 1usize..30,
        extra in 0usize..5,
        order in arb_order(),
        seed in any::<u64>(),
    ) {
        let engine = in_memory_engine(EngineConfig::default());
        let pool = pool_of(size);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut picked = engine.select_candidates(&pool, size + extra, order, &mut rng);
        picked.sort();
        let mut expected = pool.clone();
        expected.sort();
        prop_assert_eq!(picked, expected);
    }

    #[test]
    fn weights_stay_in_bounds_after_any_records(
        draws in arb_draws(),
        config in arb_config(),
    ) {
        let engine = in_memory_engine(config);
        for draw in draws {
            let picked: Vec<String> = draw.iter().map(|i| format!("C{i}")).collect();
            engine.record_draw(&picked).unwrap();
        }
        let state = engine.snapshot().unwrap();
        for w in state.name_probabilities.values() {
            prop_assert!((0.01..=10.0).contains(&w.value()));
        }
        prop_assert!(state.history.len() <= 100);
    }
}
