// Property tests for structural invariants

use algotty::algorithms::sorting::{PivotPolicy, SortAlgorithm};
use algotty::frame::{Frame, Role, Token, View};
use algotty::structures::{ArrayHeap, HeapOrder, LinkedList, ListKind, SearchTree, TreeKind};
use proptest::prelude::*;

/// Classical insertion sort count: one `a[j-1] > key` test per shift, plus
/// the failing test unless the scan reaches the front
fn insertion_comparisons(values: &[i64]) -> u64 {
    let mut a = values.to_vec();
    let mut count = 0;
    for i in 1..a.len() {
        let key = a[i];
        let mut j = i;
        while j > 0 {
            count += 1;
            if a[j - 1] <= key {
                break;
            }
            a[j] = a[j - 1];
            j -= 1;
        }
        a[j] = key;
    }
    count
}

fn sorted(values: &[i64]) -> Vec<i64> {
    let mut v = values.to_vec();
    v.sort();
    v
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn every_sort_ends_sorted(values in prop::collection::vec(0i64..500, 0..24), seed in any::<u64>()) {
        for algorithm in SortAlgorithm::ALL {
            let frames: Vec<Frame> = algorithm
                .run(&values, PivotPolicy::Random { seed: Some(seed) })
                .unwrap()
                .collect();
            let last = frames.last().unwrap().view().as_array().unwrap().to_vec();
            prop_assert_eq!(last, sorted(&values));
        }
    }

    #[test]
    fn comparison_sorts_count_n_choose_2(values in prop::collection::vec(-100i64..100, 0..16)) {
        let n = values.len() as u64;
        for algorithm in [SortAlgorithm::Bubble, SortAlgorithm::Selection] {
            let frames: Vec<Frame> = algorithm.run(&values, PivotPolicy::Last).unwrap().collect();
            prop_assert_eq!(frames.last().unwrap().metric("comparisons"), n * n.saturating_sub(1) / 2);
        }
    }

    #[test]
    fn insertion_sort_counts_every_key_test(values in prop::collection::vec(-50i64..50, 0..20)) {
        let frames: Vec<Frame> = SortAlgorithm::Insertion
            .run(&values, PivotPolicy::Last)
            .unwrap()
            .collect();
        let expected = insertion_comparisons(&values);
        let compare_frames = frames
            .iter()
            .filter(|f| f.highlights().contains(Role::Compare))
            .count() as u64;
        prop_assert_eq!(compare_frames, expected);
        prop_assert_eq!(frames.last().unwrap().metric("comparisons"), expected);
    }

    #[test]
    fn heap_order_holds_after_inserts(values in prop::collection::vec(-1000i64..1000, 0..40), max in any::<bool>()) {
        let order = if max { HeapOrder::Max } else { HeapOrder::Min };
        let mut heap = ArrayHeap::new(order);
        for &v in &values {
            let _ = heap.insert_frames(v).count();
            prop_assert!(heap.is_valid());
        }
        let expected = if max { values.iter().max() } else { values.iter().min() };
        prop_assert_eq!(heap.peek(), expected.copied());
    }

    #[test]
    fn list_matches_vec_model(ops in prop::collection::vec((0u8..3, 0i64..6), 0..40), kind in 0usize..3) {
        let kind = ListKind::ALL[kind];
        let mut list = LinkedList::new(kind);
        let mut model: Vec<Token> = Vec::new();
        for (op, v) in ops {
            let t = Token::Int(v);
            match op {
                0 => {
                    list.insert_head(t.clone());
                    model.insert(0, t);
                }
                1 => {
                    list.insert_tail(t.clone());
                    model.push(t);
                }
                _ => {
                    let _ = list.delete_frames(t.clone()).count();
                    if let Some(i) = model.iter().position(|x| *x == t) {
                        model.remove(i);
                    }
                }
            }
            prop_assert_eq!(list.to_vec(), model.clone());
            prop_assert_eq!(list.head_value(), model.first());
            prop_assert_eq!(list.tail_value(), model.last());
            prop_assert_eq!(list.view(), View::Sequence(model.clone()));
            if kind == ListKind::Circular && !model.is_empty() {
                prop_assert_eq!(list.cycle_len(), Some(model.len()));
            }
        }
    }

    #[test]
    fn avl_stays_balanced(inserts in prop::collection::vec(-50i64..50, 0..40), deletes in prop::collection::vec(-50i64..50, 0..20)) {
        let mut tree = SearchTree::new(TreeKind::Avl);
        for &v in &inserts {
            let _ = tree.insert_frames(v).count();
            prop_assert!(tree.is_balanced());
        }
        for &v in &deletes {
            let frames: Vec<Frame> = tree.delete_frames(v).collect();
            for pair in frames.windows(2) {
                if pair[1].highlights().contains(Role::Rotated) {
                    prop_assert_ne!(pair[0].view(), pair[1].view());
                }
            }
            prop_assert!(tree.is_balanced());
        }
        let inorder = tree.inorder();
        prop_assert_eq!(inorder.clone(), sorted(&inorder));
    }

    #[test]
    fn bst_inorder_is_sorted_after_deletes(inserts in prop::collection::vec(-50i64..50, 0..40), deletes in prop::collection::vec(-50i64..50, 0..20)) {
        let mut tree = SearchTree::from_values(TreeKind::Bst, &inserts);
        let mut model = inserts.clone();
        for v in deletes {
            let removed = tree.remove(v);
            let pos = model.iter().position(|x| *x == v);
            prop_assert_eq!(removed, pos.is_some());
            if let Some(i) = pos {
                model.remove(i);
            }
        }
        prop_assert_eq!(tree.inorder(), sorted(&model));
    }
}
