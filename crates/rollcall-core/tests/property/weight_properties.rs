use proptest::prelude::*;
use rollcall_core::{HistoryState, Weight};

proptest! {
    #[test]
    fn weight_always_within_bounds(value in proptest::num::f64::ANY) {
        let w = Weight::new(value);
        prop_assert!((Weight::MIN..=Weight::MAX).contains(&w.value()));
    }

    #[test]
    fn history_log_never_exceeds_capacity(
        picks in proptest::collection::vec("[A-E]", 0..300),
        capacity in 1usize..120,
    ) {
        let mut state = HistoryState::new();
        for p in &picks {
            state.push_history(p, capacity);
        }
        prop_assert!(state.history.len() <= capacity);
        prop_assert_eq!(state.history.len(), picks.len().min(capacity));
        if let Some(last) = picks.last() {
            prop_assert_eq!(state.history.last(), Some(last));
        }
    }

    #[test]
    fn json_roundtrip_preserves_state(
        counts in proptest::collection::btree_map("[a-z]{1,6}", 0u64..50, 0..20),
        weights in proptest::collection::btree_map("[a-z]{1,6}", 0.01f64..10.0, 0..20),
    ) {
        let mut state = HistoryState::new();
        state.name_frequency = counts;
        for (name, w) in &weights {
            state.set_weight(name, *w);
        }
        state.history = state.name_frequency.keys().cloned().collect();

        let json = serde_json::to_string(&state).unwrap();
        let back: HistoryState = serde_json::from_str(&json).unwrap();

        prop_assert_eq!(&back.history, &state.history);
        prop_assert_eq!(&back.name_frequency, &state.name_frequency);
        for (name, w) in &state.name_probabilities {
            let restored = back.name_probabilities[name].value();
            prop_assert!((restored - w.value()).abs() < 1e-12);
        }
    }
}
