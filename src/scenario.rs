//! Scenarios: one fully specified run
//!
//! A [`Scenario`] names the algorithm family, the selector inside it, the
//! initial data and any parameters. [`Scenario::run`] builds a fresh model,
//! seeds it without recording, runs the requested framed operation and
//! materializes the frames. Selector and input problems surface as
//! [`VizError`] before any frame exists.

use crate::algorithms::searching::SearchAlgorithm;
use crate::algorithms::sorting::{PivotPolicy, SortAlgorithm};
use crate::errors::VizError;
use crate::frame::{Frame, FrameRecorder, Token};
use crate::structures::{
    ArrayHeap, Edge, Graph, GraphAlgorithm, HeapOperation, HeapOrder, LinkedList, ListKind,
    ListOperation, Queue, SearchTree, SequenceOperation, Stack, TreeKind, TreeOperation,
};
use std::fmt;
use std::str::FromStr;

/// Tree-shaped structure selector: a search tree or an array heap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeStructure {
    Search(TreeKind),
    Heap(HeapOrder),
}

impl TreeStructure {
    pub fn name(self) -> &'static str {
        match self {
            TreeStructure::Search(kind) => kind.name(),
            TreeStructure::Heap(order) => order.name(),
        }
    }
}

impl FromStr for TreeStructure {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bst" => Ok(TreeStructure::Search(TreeKind::Bst)),
            "avl" => Ok(TreeStructure::Search(TreeKind::Avl)),
            "min-heap" | "minheap" => Ok(TreeStructure::Heap(HeapOrder::Min)),
            "max-heap" | "maxheap" => Ok(TreeStructure::Heap(HeapOrder::Max)),
            _ => Err(VizError::UnsupportedSelector {
                kind: "tree type",
                name: s.to_string(),
                expected: "bst, avl, min-heap, max-heap",
            }),
        }
    }
}

impl fmt::Display for TreeStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One run: family, selector, initial data and parameters
#[derive(Debug, Clone, PartialEq)]
pub enum Scenario {
    Sort {
        algorithm: SortAlgorithm,
        values: Vec<i64>,
        pivot: PivotPolicy,
    },
    Search {
        algorithm: SearchAlgorithm,
        values: Vec<i64>,
        target: i64,
    },
    List {
        kind: ListKind,
        seed: Vec<Token>,
        operation: ListOperation,
    },
    Stack {
        seed: Vec<Token>,
        operation: SequenceOperation,
    },
    Queue {
        seed: Vec<Token>,
        operation: SequenceOperation,
    },
    Tree {
        kind: TreeKind,
        seed: Vec<i64>,
        operation: TreeOperation,
    },
    Heap {
        order: HeapOrder,
        seed: Vec<i64>,
        operation: HeapOperation,
    },
    Graph {
        algorithm: GraphAlgorithm,
        edges: Vec<Edge>,
        directed: bool,
        start: i64,
    },
}

impl Scenario {
    /// Short heading for the front end, e.g. "Bubble Sort" or "AVL Tree: insert 7"
    pub fn title(&self) -> String {
        match self {
            Scenario::Sort {
                algorithm, pivot, ..
            } => match algorithm {
                SortAlgorithm::Quick => format!("{} (pivot: {})", algorithm, pivot.name()),
                _ => algorithm.to_string(),
            },
            Scenario::Search {
                algorithm, target, ..
            } => format!("{}: target {}", algorithm, target),
            Scenario::List {
                kind, operation, ..
            } => format!("{}: {}", kind, describe_list(operation)),
            Scenario::Stack { operation, .. } => match operation {
                SequenceOperation::Add(value) => format!("Stack: push {}", value),
                SequenceOperation::Remove => "Stack: pop".to_string(),
            },
            Scenario::Queue { operation, .. } => match operation {
                SequenceOperation::Add(value) => format!("Queue: enqueue {}", value),
                SequenceOperation::Remove => "Queue: dequeue".to_string(),
            },
            Scenario::Tree {
                kind, operation, ..
            } => match operation {
                TreeOperation::Build => format!("{}: build", kind),
                TreeOperation::Insert(v) => format!("{}: insert {}", kind, v),
                TreeOperation::Delete(v) => format!("{}: delete {}", kind, v),
                TreeOperation::Search(v) => format!("{}: search {}", kind, v),
            },
            Scenario::Heap {
                order, operation, ..
            } => match operation {
                HeapOperation::Build => format!("{}: build", order),
                HeapOperation::Insert(v) => format!("{}: insert {}", order, v),
                HeapOperation::Delete(v) => format!("{}: delete {}", order, v),
                HeapOperation::Extract => format!("{}: extract root", order),
            },
            Scenario::Graph {
                algorithm, start, ..
            } => format!("{} from {}", algorithm, start),
        }
    }

    /// Run the scenario and collect every frame
    pub fn run(&self) -> Result<Vec<Frame>, VizError> {
        let frames: Vec<Frame> = match self {
            Scenario::Sort {
                algorithm,
                values,
                pivot,
            } => algorithm.run(values, *pivot)?.collect(),
            Scenario::Search {
                algorithm,
                values,
                target,
            } => algorithm.run(values, *target).collect(),
            Scenario::List {
                kind,
                seed,
                operation,
            } => {
                let mut list = LinkedList::from_tokens(*kind, seed.iter().cloned());
                list.apply_frames(operation).collect()
            }
            Scenario::Stack { seed, operation } => {
                let mut stack = Stack::from_tokens(seed.iter().cloned());
                let mut rec = FrameRecorder::new();
                stack.record(operation, &mut rec);
                rec.into_frames()
            }
            Scenario::Queue { seed, operation } => {
                let mut queue = Queue::from_tokens(seed.iter().cloned());
                let mut rec = FrameRecorder::new();
                queue.record(operation, &mut rec);
                rec.into_frames()
            }
            Scenario::Tree {
                kind,
                seed,
                operation,
            } => {
                let mut tree = match operation {
                    TreeOperation::Build => SearchTree::new(*kind),
                    _ => SearchTree::from_values(*kind, seed),
                };
                let mut rec = FrameRecorder::new();
                tree.record(*operation, seed, &mut rec);
                rec.into_frames()
            }
            Scenario::Heap {
                order,
                seed,
                operation,
            } => {
                let mut heap = match operation {
                    HeapOperation::Build => ArrayHeap::new(*order),
                    _ => ArrayHeap::from_values(*order, seed),
                };
                let mut rec = FrameRecorder::new();
                heap.record(*operation, seed, &mut rec);
                rec.into_frames()
            }
            Scenario::Graph {
                algorithm,
                edges,
                directed,
                start,
            } => Graph::from_edges(edges, *directed)
                .run(*algorithm, *start)
                .collect(),
        };

        tracing::debug!(
            scenario = %self.title(),
            frames = frames.len(),
            metrics = ?frames.last().map(|f| f.metrics()),
            "run recorded"
        );
        Ok(frames)
    }
}

fn describe_list(operation: &ListOperation) -> String {
    match operation {
        ListOperation::InsertHead(v) => format!("insert {} at head", v),
        ListOperation::InsertTail(v) => format!("insert {} at tail", v),
        ListOperation::Search(v) => format!("search {}", v),
        ListOperation::Delete(v) => format!("delete {}", v),
    }
}
