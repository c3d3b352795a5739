//! End-to-end engine scenarios driven through the public API.

use std::time::Duration;

use sortviz_lib::algorithms::AlgorithmKind;
use sortviz_lib::control::StepRate;
use sortviz_lib::counters::PerformanceCounters;
use sortviz_lib::dataset::{Dataset, DatasetKind};
use sortviz_lib::engine::{Engine, EngineConfig};
use sortviz_lib::errors::SortvizError;
use sortviz_lib::frame::HighlightTag;
use sortviz_lib::task::TaskState;

use crate::helpers::{engine_with, poll_until_terminal};

const LIMIT: Duration = Duration::from_secs(10);

#[test]
fn test_empty_dataset_completes_immediately() {
    let mut engine = engine_with(&[]);
    let handle = engine.start(AlgorithmKind::Bubble, StepRate::Unlimited).unwrap();
    let (state, frames) = poll_until_terminal(&engine, handle, LIMIT);
    assert_eq!(state, TaskState::Completed);

    let frame = frames.last().unwrap();
    assert!(frame.values.is_empty());
    assert!(frame.highlights.is_empty());
    assert_eq!(frame.counters, PerformanceCounters::default());
    assert_eq!(frame.step, 0);
}

#[test]
fn test_insertion_sort_on_small_input() {
    let mut engine = engine_with(&[3.0, 1.0, 4.0, 1.0, 5.0]);
    let handle = engine.start(AlgorithmKind::Insertion, StepRate::Unlimited).unwrap();
    assert_eq!(engine.wait(handle, Some(LIMIT)).unwrap(), TaskState::Completed);

    let frame = engine.latest_frame(handle).unwrap().unwrap();
    assert_eq!(frame.values, vec![1.0, 1.0, 3.0, 4.0, 5.0]);
    assert!(frame.is_done());
    assert_eq!(frame.counters.comparisons, 6);
    // Each of the three shifts is one swap, i.e. two reassignments.
    assert_eq!(frame.counters.writes, 6);
    assert_eq!(frame.counters.reads, 18);
    assert_eq!(frame.step, 6);
}

#[test]
fn test_bubble_sort_on_sorted_input_makes_one_pass() {
    let mut engine = engine_with(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    let handle = engine.start(AlgorithmKind::Bubble, StepRate::Unlimited).unwrap();
    assert_eq!(engine.wait(handle, Some(LIMIT)).unwrap(), TaskState::Completed);

    let summary = engine.summary(handle).unwrap();
    assert_eq!(summary.counters.comparisons, 4);
    assert_eq!(summary.counters.writes, 0);
    assert_eq!(summary.steps, 4);
}

#[test]
fn test_cancel_before_first_step() {
    let values = [5.0, 4.0, 3.0, 2.0, 1.0];
    let mut engine = engine_with(&values);
    // Paced runs wait one interval before their first step, so the cancel lands first.
    let handle = engine.start(AlgorithmKind::Selection, StepRate::per_second(10).unwrap()).unwrap();
    engine.cancel(handle).unwrap();

    assert_eq!(engine.wait(handle, Some(LIMIT)).unwrap(), TaskState::Cancelled);
    let frame = engine.latest_frame(handle).unwrap().unwrap();
    assert_eq!(frame.step, 0);
    assert_eq!(frame.values, values);
    assert_eq!(frame.counters, PerformanceCounters::default());
    assert_eq!(engine.dataset().values(), values);
}

#[test]
fn test_second_start_while_running_is_busy() {
    let mut engine = Engine::new(EngineConfig::default().with_seed(Some(9)));
    engine.generate(DatasetKind::Shuffled, 200).unwrap();
    let first = engine.start(AlgorithmKind::Bubble, StepRate::per_second(10).unwrap()).unwrap();

    let second = engine.start(AlgorithmKind::Shell, StepRate::Unlimited);
    assert!(matches!(second, Err(SortvizError::Busy { task }) if task == first));
    assert_eq!(engine.state(first).unwrap(), TaskState::Running);
    assert_eq!(engine.current(), Some(first));

    engine.cancel(first).unwrap();
    assert_eq!(engine.wait(first, Some(LIMIT)).unwrap(), TaskState::Cancelled);
}

#[test]
fn test_dataset_mutators_are_busy_while_running() {
    let mut engine = Engine::new(EngineConfig::default().with_seed(Some(1)));
    let handle = engine.start(AlgorithmKind::Gnome, StepRate::per_second(10).unwrap()).unwrap();

    assert!(matches!(engine.shuffle(), Err(SortvizError::Busy { .. })));
    assert!(matches!(engine.generate(DatasetKind::Random, 20), Err(SortvizError::Busy { .. })));
    let replacement = Dataset::from_values(vec![1.0, 2.0]).unwrap();
    assert!(matches!(engine.set_dataset(replacement), Err(SortvizError::Busy { .. })));

    engine.cancel(handle).unwrap();
    engine.wait(handle, Some(LIMIT)).unwrap();
    assert!(engine.shuffle().is_ok());
}

#[test]
fn test_run_works_on_a_copy_of_the_dataset() {
    let mut engine = Engine::new(EngineConfig::default().with_seed(Some(5)));
    engine.generate(DatasetKind::Shuffled, 30).unwrap();
    let before = engine.dataset().clone();

    let handle = engine.start(AlgorithmKind::Comb, StepRate::Unlimited).unwrap();
    assert_eq!(engine.wait(handle, Some(LIMIT)).unwrap(), TaskState::Completed);

    assert_eq!(engine.dataset(), &before);
    let frame = engine.latest_frame(handle).unwrap().unwrap();
    assert_eq!(frame.values, before.sorted_values());
}

#[test]
fn test_retired_handle_is_unknown() {
    let mut engine = engine_with(&[2.0, 1.0]);
    let handle = engine.start(AlgorithmKind::Cycle, StepRate::Unlimited).unwrap();
    engine.wait(handle, Some(LIMIT)).unwrap();

    let summary = engine.retire(handle).unwrap();
    assert_eq!(summary.state, TaskState::Completed);
    assert!(engine.current().is_none());
    assert!(matches!(engine.state(handle), Err(SortvizError::UnknownTask { .. })));
    assert!(matches!(engine.latest_frame(handle), Err(SortvizError::UnknownTask { .. })));
    assert!(matches!(engine.cancel(handle), Err(SortvizError::UnknownTask { .. })));
}

#[test]
fn test_new_run_replaces_finished_task() {
    let mut engine = engine_with(&[3.0, 2.0, 1.0]);
    let first = engine.start(AlgorithmKind::Bubble, StepRate::Unlimited).unwrap();
    engine.wait(first, Some(LIMIT)).unwrap();

    let second = engine.start(AlgorithmKind::Insertion, StepRate::Unlimited).unwrap();
    assert_ne!(first, second);
    assert!(matches!(engine.summary(first), Err(SortvizError::UnknownTask { .. })));
    assert_eq!(engine.wait(second, Some(LIMIT)).unwrap(), TaskState::Completed);
}

#[test]
fn test_rate_change_speeds_up_a_paced_run() {
    let mut engine = Engine::new(EngineConfig::default().with_seed(Some(3)));
    engine.generate(DatasetKind::Shuffled, 40).unwrap();
    let handle = engine.start(AlgorithmKind::Bubble, StepRate::per_second(10).unwrap()).unwrap();

    // At 10 steps/s this run would take minutes.
    engine.set_rate(handle, StepRate::Unlimited).unwrap();
    let (state, frames) = poll_until_terminal(&engine, handle, LIMIT);
    assert_eq!(state, TaskState::Completed);
    assert!(frames.last().unwrap().is_done());
}

#[test]
fn test_polled_frames_are_consistent() {
    let mut engine = Engine::new(EngineConfig::default().with_seed(Some(11)));
    engine.generate(DatasetKind::Random, 60).unwrap();
    let mut expected = engine.dataset().values().to_vec();
    expected.sort_by(f64::total_cmp);

    let handle = engine.start(AlgorithmKind::Cocktail, StepRate::per_second(240).unwrap()).unwrap();
    engine.set_rate(handle, StepRate::Unlimited).unwrap();
    let (state, frames) = poll_until_terminal(&engine, handle, LIMIT);
    assert_eq!(state, TaskState::Completed);

    for pair in frames.windows(2) {
        assert!(pair[0].step <= pair[1].step);
        assert!(pair[1].counters.dominates(&pair[0].counters));
    }
    for frame in &frames {
        assert_eq!(frame.values.len(), 60);
        assert_eq!(frame.highlights.len(), 60);
        let mut sorted = frame.values.clone();
        sorted.sort_by(f64::total_cmp);
        assert_eq!(sorted, expected, "every frame is a permutation of the input");
    }
    let last = frames.last().unwrap();
    assert!(last.highlights.iter().all(|&tag| tag == HighlightTag::Done));
    assert_eq!(last.values, expected);
}
