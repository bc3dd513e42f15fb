//! RecordDraw through a file-backed store: feedback loop and persistence.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rollcall_core::config::EngineConfig;
use rollcall_core::SelectionOrder;
use rollcall_engine::RollCallEngine;
use rollcall_store::HistoryStore;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn open(path: &std::path::Path) -> RollCallEngine {
    RollCallEngine::new(Arc::new(HistoryStore::open(path)), EngineConfig::default())
}

#[test]
fn recorded_draw_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");

    {
        let engine = open(&path);
        engine.record_draw(&names(&["Alice", "Bob"])).unwrap();
        engine.record_draw(&names(&["Carol"])).unwrap();
    }

    let engine = open(&path);
    let state = engine.snapshot().unwrap();
    assert_eq!(state.history, vec!["Alice", "Bob", "Carol"]);
    assert_eq!(state.total_picks(), 3);
    assert!(state.last_update.is_some());
    for name in ["Alice", "Bob", "Carol"] {
        assert!(state.weight_of(name) < 1.0, "{name} should be decayed");
    }
}

#[test]
fn first_pick_decays_to_point_eight_five() {
    let dir = tempfile::tempdir().unwrap();
    let engine = open(&dir.path().join("history.json"));
    engine.record_draw(&names(&["A"])).unwrap();
    let state = engine.snapshot().unwrap();
    assert!((state.weight_of("A") - 0.85).abs() < 1e-12);
    assert_eq!(state.lifetime_count("A"), 1);
}

#[test]
fn recording_twice_counts_twice() {
    let dir = tempfile::tempdir().unwrap();
    let engine = open(&dir.path().join("history.json"));
    let draw = names(&["A"]);
    engine.record_draw(&draw).unwrap();
    engine.record_draw(&draw).unwrap();
    let state = engine.snapshot().unwrap();
    assert_eq!(state.lifetime_count("A"), 2);
    assert_eq!(state.history.len(), 2);
}

#[test]
fn empty_record_is_a_no_op() {
    let dir = tempfile::tempdir().unwrap();
    let engine = open(&dir.path().join("history.json"));
    engine.record_draw(&[]).unwrap();
    assert!(engine.snapshot().unwrap().is_empty());
}

#[test]
fn clear_history_resets_feedback_loop() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    let engine = open(&path);
    for _ in 0..3 {
        engine.record_draw(&names(&["A"])).unwrap();
    }
    engine.clear_history().unwrap();

    let state = open(&path).snapshot().unwrap();
    assert!(state.is_empty());
    let breakdown = engine.weight_breakdown("A").unwrap();
    assert_eq!(breakdown.final_weight, 1.0);
}

#[test]
fn history_log_is_capped_at_one_hundred() {
    let dir = tempfile::tempdir().unwrap();
    let engine = open(&dir.path().join("history.json"));
    let pool: Vec<String> = (1..=10).map(|i| i.to_string()).collect();
    for i in 0..130 {
        engine.record_draw(&[pool[i % 10].clone()]).unwrap();
    }
    let state = engine.snapshot().unwrap();
    assert_eq!(state.history.len(), 100);
    assert_eq!(state.total_picks(), 130);
}

#[test]
fn full_loop_keeps_weights_in_bounds() {
    let dir = tempfile::tempdir().unwrap();
    let engine = open(&dir.path().join("history.json"));
    let pool: Vec<String> = (1..=25).map(|i| format!("S{i}")).collect();
    let mut rng = StdRng::seed_from_u64(31);

    for round in 0..200 {
        let count = 1 + round % 4;
        let picked = engine.select_candidates(&pool, count, SelectionOrder::Random, &mut rng);
        assert_eq!(picked.len(), count);
        engine.record_draw(&picked).unwrap();
    }

    let state = engine.snapshot().unwrap();
    for (name, w) in &state.name_probabilities {
        assert!((0.01..=10.0).contains(&w.value()), "{name} = {w}");
    }
}
