// Integration tests for the sorting and searching runners

use algotty::algorithms::searching::SearchAlgorithm;
use algotty::algorithms::sorting::{PivotPolicy, SortAlgorithm};
use algotty::errors::VizError;
use algotty::frame::{Frame, Role};

fn sort(algorithm: SortAlgorithm, values: &[i64]) -> Vec<Frame> {
    algorithm
        .run(values, PivotPolicy::Last)
        .expect("sort should accept this input")
        .collect()
}

fn final_array(frames: &[Frame]) -> Vec<i64> {
    frames
        .last()
        .and_then(|f| f.view().as_array())
        .expect("array view")
        .to_vec()
}

fn count_role(frames: &[Frame], role: Role) -> usize {
    frames
        .iter()
        .filter(|f| f.highlights().contains(role))
        .count()
}

#[test]
fn test_bubble_sort_three_descending() {
    let frames = sort(SortAlgorithm::Bubble, &[3, 2, 1]);
    assert_eq!(count_role(&frames, Role::Compare), 3);
    assert_eq!(frames.last().unwrap().metric("comparisons"), 3);
    assert_eq!(final_array(&frames), vec![1, 2, 3]);
}

#[test]
fn test_insertion_sort_example() {
    let frames = sort(SortAlgorithm::Insertion, &[5, 3, 4, 1, 2]);
    assert_eq!(final_array(&frames), vec![1, 2, 3, 4, 5]);
    assert!(frames[0].highlights().is_empty());
    assert!(frames[0].narration().starts_with("Start"));
}

#[test]
fn test_selection_sort_comparison_count() {
    let frames = sort(SortAlgorithm::Selection, &[4, 1, 3, 2, 5, 0]);
    assert_eq!(frames.last().unwrap().metric("comparisons"), 15);
    assert_eq!(final_array(&frames), vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn test_every_sort_ends_sorted() {
    let input = [9, 4, 7, 1, 8, 2, 2, 6];
    let mut expected = input.to_vec();
    expected.sort();
    for algorithm in SortAlgorithm::ALL {
        let frames = sort(algorithm, &input);
        assert_eq!(final_array(&frames), expected, "{}", algorithm);
    }
}

#[test]
fn test_steps_are_dense_and_increasing() {
    let frames = sort(SortAlgorithm::Merge, &[5, 1, 4, 2, 3]);
    for (i, frame) in frames.iter().enumerate() {
        assert_eq!(frame.step(), i);
    }
}

#[test]
fn test_runs_are_deterministic() {
    let input = [6, 3, 9, 1, 5];
    for algorithm in SortAlgorithm::ALL {
        assert_eq!(sort(algorithm, &input), sort(algorithm, &input));
    }
    let seeded = PivotPolicy::Random { seed: Some(42) };
    let a: Vec<Frame> = SortAlgorithm::Quick.run(&input, seeded).unwrap().collect();
    let b: Vec<Frame> = SortAlgorithm::Quick.run(&input, seeded).unwrap().collect();
    assert_eq!(a, b);
}

#[test]
fn test_caller_slice_untouched() {
    let input = vec![3, 1, 2];
    let _ = sort(SortAlgorithm::Heap, &input);
    assert_eq!(input, vec![3, 1, 2]);
}

#[test]
fn test_distribution_sorts_reject_negatives() {
    for algorithm in [SortAlgorithm::Counting, SortAlgorithm::Radix] {
        let result = algorithm.run(&[3, -1, 2], PivotPolicy::Last);
        assert!(matches!(result, Err(VizError::NegativeValue { .. })));
    }
}

#[test]
fn test_empty_and_single_inputs() {
    for algorithm in SortAlgorithm::ALL {
        let empty = sort(algorithm, &[]);
        assert!(empty.len() >= 2, "{} needs start and terminal frames", algorithm);
        assert_eq!(final_array(&sort(algorithm, &[7])), vec![7]);
    }
}

#[test]
fn test_binary_search_hit_and_miss() {
    let values = [1, 3, 4, 7, 9, 12, 15];

    let hit: Vec<Frame> = SearchAlgorithm::Binary.run(&values, 7).collect();
    assert_eq!(hit.last().unwrap().highlights().positions(Role::Found), &[3]);

    let miss: Vec<Frame> = SearchAlgorithm::Binary.run(&values, 6).collect();
    assert!(miss.iter().all(|f| !f.highlights().contains(Role::Found)));
    assert!(miss.last().unwrap().narration().contains("not found"));
}

#[test]
fn test_rotated_search_finds_in_right_half() {
    let frames: Vec<Frame> = SearchAlgorithm::RotatedBinary
        .run(&[9, 12, 15, 1, 3, 4, 7], 4)
        .collect();
    assert_eq!(frames.last().unwrap().highlights().positions(Role::Found), &[5]);
}

#[test]
fn test_linear_search_counts_comparisons() {
    let frames: Vec<Frame> = SearchAlgorithm::Linear.run(&[5, 8, 2, 9], 2).collect();
    let last = frames.last().unwrap();
    assert_eq!(last.highlights().positions(Role::Found), &[2]);
    assert_eq!(last.metric("comparisons"), 3);
}

#[test]
fn test_search_on_empty_array() {
    for algorithm in [
        SearchAlgorithm::Linear,
        SearchAlgorithm::Binary,
        SearchAlgorithm::RotatedBinary,
    ] {
        let frames: Vec<Frame> = algorithm.run(&[], 1).collect();
        assert_eq!(frames[0].highlights().range(), Some((0, -1)), "{}", algorithm);
        assert!(!frames.last().unwrap().highlights().contains(Role::Found));
    }
}
