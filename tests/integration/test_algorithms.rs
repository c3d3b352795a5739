//! Every algorithm, run as a background task, against shared properties.

use std::time::Duration;

use proptest::prelude::*;
use rstest::rstest;
use sortviz_lib::algorithms::{AlgorithmKind, execute};
use sortviz_lib::control::StepRate;
use sortviz_lib::dataset::{DatasetKind, is_non_decreasing};
use sortviz_lib::engine::{Engine, EngineConfig};
use sortviz_lib::task::TaskState;

use crate::helpers::{engine_with, poll_until_terminal};

const LIMIT: Duration = Duration::from_secs(30);

#[rstest]
fn test_every_algorithm_sorts_every_dataset_kind(
    #[values(
        AlgorithmKind::Bubble,
        AlgorithmKind::Cocktail,
        AlgorithmKind::Gnome,
        AlgorithmKind::Insertion,
        AlgorithmKind::Selection,
        AlgorithmKind::Shell,
        AlgorithmKind::Comb,
        AlgorithmKind::Cycle
    )]
    algorithm: AlgorithmKind,
    #[values(DatasetKind::Ascending, DatasetKind::Shuffled, DatasetKind::Random)] kind: DatasetKind,
) {
    let mut engine = Engine::new(EngineConfig::default().with_seed(Some(17)));
    engine.generate(kind, 64).unwrap();
    let expected = engine.dataset().sorted_values();

    let handle = engine.start(algorithm, StepRate::Unlimited).unwrap();
    assert_eq!(engine.wait(handle, Some(LIMIT)).unwrap(), TaskState::Completed);
    let frame = engine.latest_frame(handle).unwrap().unwrap();
    assert_eq!(frame.values, expected, "{algorithm} on {kind:?}");
    assert!(frame.is_done());
}

#[rstest]
fn test_background_run_matches_inline_execution(
    #[values(AlgorithmKind::Gnome, AlgorithmKind::Shell, AlgorithmKind::Cycle)]
    algorithm: AlgorithmKind,
) {
    let values: Vec<f64> = vec![0.9, 0.1, 0.5, 0.5, 0.3, 0.7, 0.2, 0.8];
    let inline = execute(algorithm, values.clone());

    let mut engine = engine_with(&values);
    let handle = engine.start(algorithm, StepRate::Unlimited).unwrap();
    engine.wait(handle, Some(LIMIT)).unwrap();
    let summary = engine.retire(handle).unwrap();

    assert_eq!(summary.counters, inline.counters);
    assert_eq!(summary.steps, inline.steps);
}

#[test]
fn test_shell_sort_beats_bubble_sort_on_shuffled_input() {
    let mut engine = Engine::new(EngineConfig::default().with_seed(Some(23)));
    engine.generate(DatasetKind::Shuffled, 200).unwrap();
    let dataset = engine.dataset().clone();

    let bubble = engine.start_run(AlgorithmKind::Bubble, &dataset, StepRate::Unlimited).unwrap();
    engine.wait(bubble, Some(LIMIT)).unwrap();
    let bubble = engine.retire(bubble).unwrap();

    let shell = engine.start_run(AlgorithmKind::Shell, &dataset, StepRate::Unlimited).unwrap();
    engine.wait(shell, Some(LIMIT)).unwrap();
    let shell = engine.retire(shell).unwrap();

    assert!(shell.counters.comparisons < bubble.counters.comparisons);
    assert!(shell.counters.estimated_millis() < bubble.counters.estimated_millis());
}

fn algorithm_strategy() -> impl Strategy<Value = AlgorithmKind> {
    proptest::sample::select(AlgorithmKind::all().to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_completed_runs_end_sorted(
        algorithm in algorithm_strategy(),
        values in proptest::collection::vec(-1000.0f64..1000.0, 0..40),
    ) {
        let mut engine = engine_with(&values);
        let handle = engine.start(algorithm, StepRate::Unlimited).unwrap();
        let (state, frames) = poll_until_terminal(&engine, handle, LIMIT);
        prop_assert_eq!(state, TaskState::Completed);

        let last = frames.last().unwrap();
        prop_assert!(last.is_done());
        prop_assert!(is_non_decreasing(&last.values));
        prop_assert_eq!(&last.values, &engine.dataset().sorted_values());
    }

    #[test]
    fn prop_cancelled_runs_keep_a_permutation(
        algorithm in algorithm_strategy(),
        values in proptest::collection::vec(0.0f64..1.0, 10..60),
        delay_ms in 0u64..30,
    ) {
        let mut engine = engine_with(&values);
        let handle = engine.start(algorithm, StepRate::per_second(240).unwrap()).unwrap();
        std::thread::sleep(Duration::from_millis(delay_ms));
        engine.cancel(handle).unwrap();

        let state = engine.wait(handle, Some(LIMIT)).unwrap();
        prop_assert!(state.is_terminal());
        let frame = engine.latest_frame(handle).unwrap().unwrap();
        let mut observed = frame.values.clone();
        observed.sort_by(f64::total_cmp);
        prop_assert_eq!(observed, engine.dataset().sorted_values());
    }
}
