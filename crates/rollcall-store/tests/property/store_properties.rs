use proptest::prelude::*;
use rollcall_core::traits::IHistoryStore;
use rollcall_core::HistoryState;
use rollcall_store::HistoryStore;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn save_then_load_reproduces_state(
        picks in proptest::collection::vec(("[A-F]", 0.01f64..10.0), 1..40),
    ) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        let store = HistoryStore::open(&path);
        for (name, weight) in &picks {
            store.update(&mut |state: &mut HistoryState| {
                state.push_history(name, 100);
                state.increment_frequency(name);
                state.set_weight(name, *weight);
            }).unwrap();
        }
        let before = store.snapshot().unwrap();
        let after = HistoryStore::open(&path).snapshot().unwrap();

        prop_assert_eq!(&after.history, &before.history);
        prop_assert_eq!(&after.name_frequency, &before.name_frequency);
        prop_assert_eq!(after.name_probabilities.len(), before.name_probabilities.len());
        for (name, w) in &before.name_probabilities {
            prop_assert!((after.weight_of(name) - w.value()).abs() < 1e-9);
        }
    }
}
