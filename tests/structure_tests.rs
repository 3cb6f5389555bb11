// Integration tests for the pointer, tree and graph demos

use algotty::frame::{Frame, Role, Token, View};
use algotty::structures::{
    ArrayHeap, Edge, Graph, GraphAlgorithm, LinkedList, ListKind, Queue, SearchTree, Stack,
};

fn tokens(values: &[i64]) -> Vec<Token> {
    values.iter().copied().map(Token::Int).collect()
}

// === LINKED LISTS ===

#[test]
fn test_list_head_tail_and_view_agree() {
    for kind in ListKind::ALL {
        let mut list = LinkedList::new(kind);
        list.insert_tail(Token::Int(2));
        list.insert_head(Token::Int(1));
        list.insert_tail(Token::Int(3));

        assert_eq!(list.to_vec(), tokens(&[1, 2, 3]), "{}", kind);
        assert_eq!(list.head_value(), Some(&Token::Int(1)));
        assert_eq!(list.tail_value(), Some(&Token::Int(3)));
        assert_eq!(list.view(), View::Sequence(tokens(&[1, 2, 3])));
    }
}

#[test]
fn test_circular_ring_length_tracks_len() {
    let mut list = LinkedList::from_tokens(ListKind::Circular, tokens(&[4, 5, 6, 7]));
    assert_eq!(list.cycle_len(), Some(4));
    assert!(list.remove(&Token::Int(4)));
    assert!(list.remove(&Token::Int(7)));
    assert_eq!(list.cycle_len(), Some(list.len()));
    assert_eq!(LinkedList::singly().cycle_len(), None);
}

#[test]
fn test_deleting_last_node_empties_list() {
    let mut list = LinkedList::from_tokens(ListKind::Doubly, tokens(&[9]));
    let frames: Vec<Frame> = list.delete_frames(Token::Int(9)).collect();
    assert!(list.is_empty());
    assert_eq!(list.head_value(), None);
    assert_eq!(list.tail_value(), None);
    assert_eq!(frames.last().unwrap().view(), &View::Sequence(Vec::new()));
}

#[test]
fn test_not_found_delete_is_idempotent() {
    for kind in ListKind::ALL {
        let mut list = LinkedList::from_tokens(kind, tokens(&[1, 2, 3]));
        let first: Vec<Frame> = list.delete_frames(Token::Int(8)).collect();
        let second: Vec<Frame> = list.delete_frames(Token::Int(8)).collect();
        assert_eq!(first, second, "{}", kind);
        assert_eq!(list.to_vec(), tokens(&[1, 2, 3]));
        assert_eq!(first.last().unwrap().metric("deletions"), 0);
    }
}

#[test]
fn test_doubly_internal_delete_changes_two_links() {
    let mut doubly = LinkedList::from_tokens(ListKind::Doubly, tokens(&[1, 2, 3]));
    let frames: Vec<Frame> = doubly.delete_frames(Token::Int(2)).collect();
    assert_eq!(frames.last().unwrap().metric("links_changed"), 2);

    let mut singly = LinkedList::from_tokens(ListKind::Singly, tokens(&[1, 2, 3]));
    let frames: Vec<Frame> = singly.delete_frames(Token::Int(2)).collect();
    assert_eq!(frames.last().unwrap().metric("links_changed"), 1);
    assert_eq!(singly.to_vec(), tokens(&[1, 3]));
}

#[test]
fn test_list_search_visits_each_node() {
    let mut list = LinkedList::from_tokens(ListKind::Singly, tokens(&[5, 6, 7]));
    let frames: Vec<Frame> = list.search_frames(Token::Int(7)).collect();
    let visits = frames
        .iter()
        .filter(|f| f.highlights().contains(Role::Current))
        .count();
    assert_eq!(visits, 3);
    assert!(frames
        .last()
        .unwrap()
        .highlights()
        .contains(Role::Found));
}

#[test]
fn test_text_tokens_are_searchable() {
    let mut list = LinkedList::from_tokens(
        ListKind::Singly,
        vec![Token::parse("alpha"), Token::parse("07")],
    );
    assert_eq!(list.find(&Token::Int(7)), Some(1));
    assert!(list.remove(&Token::parse("alpha")));
    assert_eq!(list.to_vec(), vec![Token::Int(7)]);
}

// === STACK / QUEUE ===

#[test]
fn test_stack_pop_frames() {
    let mut stack = Stack::from_tokens(tokens(&[1, 2]));
    let frames: Vec<Frame> = stack.pop_frames().collect();
    assert_eq!(frames.len(), 4);
    assert_eq!(stack.peek(), Some(&Token::Int(1)));

    let mut empty = Stack::new();
    let frames: Vec<Frame> = empty.pop_frames().collect();
    assert_eq!(frames.len(), 1);
    assert!(frames[0].narration().contains("empty"));
}

#[test]
fn test_queue_is_fifo() {
    let mut queue = Queue::new();
    let pushed: Vec<Frame> = queue.enqueue_frames(Token::Int(1)).collect();
    assert_eq!(pushed.len(), 3);
    queue.enqueue(Token::Int(2));
    let _ = queue.dequeue_frames().count();
    assert_eq!(queue.front(), Some(&Token::Int(2)));
    assert_eq!(queue.len(), 1);
}

// === TREES ===

#[test]
fn test_bst_inorder_sorted_after_delete() {
    let mut tree = SearchTree::from_values(
        algotty::structures::TreeKind::Bst,
        &[50, 30, 70, 20, 40, 60, 80],
    );
    let _ = tree.delete_frames(30).count();
    let _ = tree.delete_frames(50).count();
    assert_eq!(tree.inorder(), vec![20, 40, 60, 70, 80]);
    assert!(!tree.contains(50));
}

#[test]
fn test_bst_ties_go_right() {
    let mut tree = SearchTree::bst();
    tree.insert(5);
    tree.insert(5);
    assert_eq!(tree.level_order(), vec![Some(5), None, Some(5)]);
}

#[test]
fn test_avl_stays_balanced_on_sorted_input() {
    let mut tree = SearchTree::avl();
    let mut rotations = 0;
    for v in 1..=15 {
        rotations += tree.insert(v).len();
    }
    assert!(tree.is_balanced());
    assert_eq!(tree.height(), 4);
    assert!(rotations > 0);
    assert_eq!(tree.root_value(), Some(8));
}

#[test]
fn test_avl_insert_reports_rotation_frames() {
    let mut tree = SearchTree::from_values(algotty::structures::TreeKind::Avl, &[1, 2]);
    let frames: Vec<Frame> = tree.insert_frames(3).collect();
    assert_eq!(frames.last().unwrap().metric("rotations"), 1);
    assert!(frames.iter().any(|f| f.highlights().contains(Role::Rotated)));
    assert_eq!(tree.level_order(), vec![Some(2), Some(1), Some(3)]);
}

#[test]
fn test_tree_delete_missing_value() {
    let mut tree = SearchTree::from_values(algotty::structures::TreeKind::Bst, &[2, 1, 3]);
    let frames: Vec<Frame> = tree.delete_frames(9).collect();
    assert!(frames.last().unwrap().narration().contains("not found"));
    assert_eq!(tree.len(), 3);
}

#[test]
fn test_heap_insert_sifts_to_root() {
    let mut heap = ArrayHeap::from_values(algotty::structures::HeapOrder::Min, &[3, 5, 8]);
    let frames: Vec<Frame> = heap.insert_frames(1).collect();
    assert_eq!(heap.peek(), Some(1));
    assert!(heap.is_valid());
    assert_eq!(frames.last().unwrap().highlights().positions(Role::Inserted), &[0]);
}

#[test]
fn test_max_heap_extract_and_delete() {
    let mut heap = ArrayHeap::from_values(
        algotty::structures::HeapOrder::Max,
        &[4, 9, 1, 7, 3],
    );
    assert_eq!(heap.pop_root(), Some(9));
    assert!(heap.remove(3));
    assert!(!heap.remove(42));
    assert!(heap.is_valid());
    assert_eq!(heap.peek(), Some(7));
}

// === GRAPH ===

fn sample_graph() -> Graph {
    Graph::from_edges(
        &[
            Edge::new(1, 2, 7),
            Edge::new(1, 3, 9),
            Edge::new(1, 6, 14),
            Edge::new(2, 3, 10),
            Edge::new(2, 4, 15),
            Edge::new(3, 4, 11),
            Edge::new(3, 6, 2),
            Edge::new(4, 5, 6),
            Edge::new(5, 6, 9),
        ],
        false,
    )
}

#[test]
fn test_dijkstra_distances() {
    let dist = sample_graph().shortest_distances(1);
    let expected = [(1, 0), (2, 7), (3, 9), (4, 20), (5, 20), (6, 11)];
    for (node, d) in expected {
        assert_eq!(dist.get(&node), Some(&d), "distance to {}", node);
    }
}

#[test]
fn test_bfs_and_dfs_orders() {
    let graph = sample_graph();
    assert_eq!(graph.bfs_order(1), vec![1, 2, 3, 6, 4, 5]);
    assert_eq!(graph.dfs_order(1), vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_unknown_start_visits_only_itself() {
    let graph = sample_graph();
    assert_eq!(graph.bfs_order(99), vec![99]);
    let frames: Vec<Frame> = graph.run(GraphAlgorithm::Dfs, 99).collect();
    assert!(frames.len() >= 2);
}

#[test]
fn test_directed_edges_are_one_way() {
    let graph = Graph::from_edges(&[Edge::new(1, 2, 1)], true);
    assert_eq!(graph.bfs_order(2), vec![2]);
    assert_eq!(graph.edge_count(), 1);
}
