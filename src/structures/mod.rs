//! Structural models with framed operations
//!
//! - [`linked_list`]: singly, doubly and circular lists over a node arena
//! - [`stack_queue`]: LIFO stack and FIFO queue
//! - [`tree`]: binary search tree with optional AVL balancing
//! - [`heap`]: array-backed min/max heap
//! - [`graph`]: weighted adjacency list with BFS, DFS and Dijkstra
//!
//! Every model has plain operations (used to seed it) and `record_*`
//! operations that perform the same change while appending frames to a
//! shared [`FrameRecorder`](crate::frame::FrameRecorder).

pub mod graph;
pub mod heap;
pub mod linked_list;
pub mod stack_queue;
pub mod tree;

pub use graph::{Edge, Graph, GraphAlgorithm};
pub use heap::{ArrayHeap, HeapOperation, HeapOrder};
pub use linked_list::{LinkedList, ListKind, ListOperation};
pub use stack_queue::{Queue, SequenceOperation, Stack};
pub use tree::{SearchTree, TreeKind, TreeOperation};
