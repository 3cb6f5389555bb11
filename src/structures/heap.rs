//! Binary heaps stored as arrays
//!
//! The tree shape is implicit: the parent of index `i` is `(i - 1) / 2` and
//! its children are `2i + 1` and `2i + 2`. The view is the backing array, so
//! every highlight on a heap frame is a position.

use crate::errors::VizError;
use crate::frame::{FrameRecorder, FrameStream, Highlights, Mark, Role, View};
use crate::vars;
use std::fmt;

/// Which end of the order sits at the root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapOrder {
    Min,
    Max,
}

impl HeapOrder {
    pub fn name(self) -> &'static str {
        match self {
            HeapOrder::Min => "Min-Heap",
            HeapOrder::Max => "Max-Heap",
        }
    }

    fn label(self) -> &'static str {
        match self {
            HeapOrder::Min => "min-heap",
            HeapOrder::Max => "max-heap",
        }
    }

    /// Check whether `a` belongs above `b`
    fn above(self, a: i64, b: i64) -> bool {
        match self {
            HeapOrder::Min => a < b,
            HeapOrder::Max => a > b,
        }
    }
}

impl fmt::Display for HeapOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A framed heap operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapOperation {
    /// Framed insert of every seed value, one shared run
    Build,
    Insert(i64),
    Delete(i64),
    /// Remove the root
    Extract,
}

impl HeapOperation {
    pub fn parse(name: &str, value: Option<i64>) -> Result<Self, VizError> {
        let missing = VizError::MissingParameter {
            operation: "heap",
            parameter: "a value (--value)",
        };
        match name.trim().to_ascii_lowercase().as_str() {
            "build" => Ok(HeapOperation::Build),
            "insert" => value.map(HeapOperation::Insert).ok_or(missing),
            "delete" => value.map(HeapOperation::Delete).ok_or(missing),
            "extract" => Ok(HeapOperation::Extract),
            _ => Err(VizError::UnsupportedSelector {
                kind: "heap operation",
                name: name.to_string(),
                expected: "build, insert, delete, extract",
            }),
        }
    }
}

fn parent(i: usize) -> usize {
    (i - 1) / 2
}

/// Min- or max-heap over `i64`
#[derive(Debug, Clone)]
pub struct ArrayHeap {
    order: HeapOrder,
    items: Vec<i64>,
}

impl ArrayHeap {
    pub fn new(order: HeapOrder) -> Self {
        ArrayHeap {
            order,
            items: Vec::new(),
        }
    }

    pub fn min() -> Self {
        ArrayHeap::new(HeapOrder::Min)
    }

    pub fn max() -> Self {
        ArrayHeap::new(HeapOrder::Max)
    }

    pub fn from_values(order: HeapOrder, values: &[i64]) -> Self {
        let mut heap = ArrayHeap::new(order);
        for &value in values {
            heap.push(value);
        }
        heap
    }

    pub fn order(&self) -> HeapOrder {
        self.order
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn peek(&self) -> Option<i64> {
        self.items.first().copied()
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.items
    }

    pub fn view(&self) -> View {
        View::Tree(self.items.iter().copied().map(Some).collect())
    }

    /// Check the heap property for every parent/child pair
    pub fn is_valid(&self) -> bool {
        (1..self.items.len()).all(|i| !self.order.above(self.items[i], self.items[parent(i)]))
    }

    fn sift_up(&mut self, mut i: usize) -> usize {
        while i > 0 && self.order.above(self.items[i], self.items[parent(i)]) {
            self.items.swap(i, parent(i));
            i = parent(i);
        }
        i
    }

    /// Child of `i` that belongs highest, if it belongs above `i`
    fn promoted_child(&self, i: usize) -> Option<usize> {
        let mut best = i;
        for child in [2 * i + 1, 2 * i + 2] {
            if child < self.items.len() && self.order.above(self.items[child], self.items[best]) {
                best = child;
            }
        }
        (best != i).then_some(best)
    }

    fn sift_down(&mut self, mut i: usize) -> usize {
        while let Some(child) = self.promoted_child(i) {
            self.items.swap(i, child);
            i = child;
        }
        i
    }

    pub fn push(&mut self, value: i64) {
        self.items.push(value);
        self.sift_up(self.items.len() - 1);
    }

    /// Remove the first occurrence of `value`; returns whether one was found
    pub fn remove(&mut self, value: i64) -> bool {
        let Some(i) = self.items.iter().position(|&v| v == value) else {
            return false;
        };
        self.items.swap_remove(i);
        if i < self.items.len() {
            let settled = self.sift_down(i);
            if settled == i {
                self.sift_up(i);
            }
        }
        true
    }

    pub fn pop_root(&mut self) -> Option<i64> {
        let root = self.peek()?;
        self.remove(root);
        Some(root)
    }

    fn record_sift_up(&mut self, mut i: usize, rec: &mut FrameRecorder) -> usize {
        while i > 0 {
            let p = parent(i);
            rec.bump("comparisons");
            rec.record(
                self.view(),
                format!("Compare {} with parent {}", self.items[i], self.items[p]),
                Highlights::new().with(Role::Compare, Mark::pair(i, p)),
                vars! { "i" => i, "parent" => p },
            );
            if !self.order.above(self.items[i], self.items[p]) {
                break;
            }
            self.items.swap(i, p);
            rec.bump("swaps");
            rec.record(
                self.view(),
                format!("Swap {} with {}", self.items[p], self.items[i]),
                Highlights::new().with(Role::Swap, Mark::pair(i, p)),
                vars! { "i" => i, "parent" => p },
            );
            i = p;
        }
        i
    }

    fn record_sift_down(&mut self, mut i: usize, rec: &mut FrameRecorder) -> usize {
        let n = self.items.len();
        loop {
            let children: Vec<usize> = [2 * i + 1, 2 * i + 2]
                .into_iter()
                .filter(|&c| c < n)
                .collect();
            if children.is_empty() {
                return i;
            }
            rec.add("comparisons", children.len() as u64);
            let mut compared = vec![i];
            compared.extend(&children);
            rec.record(
                self.view(),
                format!("Compare {} with its children", self.items[i]),
                Highlights::new().with(Role::Compare, Mark::Positions(compared)),
                vars! { "i" => i, "children" => children },
            );
            let Some(child) = self.promoted_child(i) else {
                return i;
            };
            self.items.swap(i, child);
            rec.bump("swaps");
            rec.record(
                self.view(),
                format!("Swap {} with child {}", self.items[child], self.items[i]),
                Highlights::new().with(Role::Swap, Mark::pair(i, child)),
                vars! { "i" => i, "child" => child },
            );
            i = child;
        }
    }

    /// Append then sift up: a compare frame and (when out of order) a swap
    /// frame per level
    pub fn record_insert(&mut self, value: i64, rec: &mut FrameRecorder) {
        rec.track(&["comparisons", "swaps"]);
        self.items.push(value);
        let i = self.items.len() - 1;
        rec.record(
            self.view(),
            format!("Append {} to {}", value, self.order.label()),
            Highlights::new().with(Role::Appended, Mark::at(i)),
            vars! { "value" => value, "i" => i },
        );

        let settled = self.record_sift_up(i, rec);
        rec.record(
            self.view(),
            format!("Inserted {} into {}", value, self.order.label()),
            Highlights::new().with(Role::Inserted, Mark::at(settled)),
            vars! { "inserted" => value, "index" => settled },
        );
    }

    /// Delete the first occurrence of `value`: the last element fills the
    /// hole, then sifts down (or up) until order holds
    pub fn record_delete(&mut self, value: i64, rec: &mut FrameRecorder) {
        rec.track(&["comparisons", "swaps", "deletions"]);
        rec.record(
            self.view(),
            format!("Start: delete {} from {}", value, self.order.label()),
            Highlights::new(),
            vars! { "value" => value },
        );

        let Some(i) = self.items.iter().position(|&v| v == value) else {
            rec.record(
                self.view(),
                format!("{} not found; heap unchanged", value),
                Highlights::new(),
                vars! { "value" => value },
            );
            return;
        };
        rec.record(
            self.view(),
            format!("Found {} at index {}", value, i),
            Highlights::new().with(Role::Current, Mark::at(i)),
            vars! { "index" => i },
        );

        self.items.swap_remove(i);
        rec.bump("deletions");
        if i == self.items.len() {
            rec.record(
                self.view(),
                format!("Removed {} (it was the last element)", value),
                Highlights::new(),
                vars! { "removed" => value, "size" => self.len() },
            );
            return;
        }

        rec.record(
            self.view(),
            format!("Move last element {} into the hole at {}", self.items[i], i),
            Highlights::new().with(Role::Moved, Mark::at(i)),
            vars! { "removed" => value, "index" => i },
        );
        let mut settled = self.record_sift_down(i, rec);
        if settled == i {
            settled = self.record_sift_up(i, rec);
        }
        rec.record(
            self.view(),
            format!("Removed {}; heap order restored", value),
            Highlights::new().with(Role::Moved, Mark::at(settled)),
            vars! { "removed" => value, "size" => self.len() },
        );
    }

    /// Remove the root, or record that the heap is empty
    pub fn record_extract(&mut self, rec: &mut FrameRecorder) {
        match self.peek() {
            Some(root) => self.record_delete(root, rec),
            None => {
                rec.track(&["comparisons", "swaps", "deletions"]);
                rec.record(
                    self.view(),
                    "Heap empty; nothing to remove",
                    Highlights::new(),
                    vars! {},
                );
            }
        }
    }

    pub fn record(&mut self, op: HeapOperation, seed: &[i64], rec: &mut FrameRecorder) {
        match op {
            HeapOperation::Build => {
                for &value in seed {
                    self.record_insert(value, rec);
                }
            }
            HeapOperation::Insert(value) => self.record_insert(value, rec),
            HeapOperation::Delete(value) => self.record_delete(value, rec),
            HeapOperation::Extract => self.record_extract(rec),
        }
    }

    pub fn insert_frames(&mut self, value: i64) -> FrameStream {
        let mut rec = FrameRecorder::new();
        self.record_insert(value, &mut rec);
        rec.finish()
    }

    pub fn delete_frames(&mut self, value: i64) -> FrameStream {
        let mut rec = FrameRecorder::new();
        self.record_delete(value, &mut rec);
        rec.finish()
    }

    pub fn extract_frames(&mut self) -> FrameStream {
        let mut rec = FrameRecorder::new();
        self.record_extract(&mut rec);
        rec.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Frame;

    #[test]
    fn test_min_heap_insert_sifts_to_root() {
        let mut heap = ArrayHeap::from_values(HeapOrder::Min, &[5, 10, 8]);
        let frames: Vec<Frame> = heap.insert_frames(1).collect();
        assert_eq!(heap.peek(), Some(1));
        assert!(heap.is_valid());

        // append, then compare+swap at two levels
        assert_eq!(frames.len(), 1 + 4 + 1);
        let last = frames.last().unwrap();
        assert_eq!(last.highlights().positions(Role::Inserted), &[0]);
        assert_eq!(last.metric("swaps"), 2);
    }

    #[test]
    fn test_insert_stops_when_order_holds() {
        let mut heap = ArrayHeap::from_values(HeapOrder::Max, &[9, 4]);
        let frames: Vec<Frame> = heap.insert_frames(2).collect();
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[1].highlights().positions(Role::Compare), &[2, 0]);
        assert_eq!(frames[2].metric("swaps"), 0);
    }

    #[test]
    fn test_extract_root() {
        let mut heap = ArrayHeap::from_values(HeapOrder::Max, &[3, 9, 1, 7, 5]);
        assert_eq!(heap.pop_root(), Some(9));
        assert_eq!(heap.peek(), Some(7));
        assert!(heap.is_valid());
    }

    #[test]
    fn test_delete_inner_value_restores_order() {
        let mut heap = ArrayHeap::from_values(HeapOrder::Min, &[1, 2, 3, 4, 5, 6, 7]);
        let frames: Vec<Frame> = heap.delete_frames(2).collect();
        assert!(heap.is_valid());
        assert_eq!(heap.len(), 6);
        assert!(!heap.as_slice().contains(&2));
        assert_eq!(frames.last().unwrap().metric("deletions"), 1);
    }

    #[test]
    fn test_delete_missing_and_empty_extract() {
        let mut heap = ArrayHeap::min();
        let frames: Vec<Frame> = heap.extract_frames().collect();
        assert_eq!(frames.len(), 1);

        let mut heap = ArrayHeap::from_values(HeapOrder::Min, &[1, 2]);
        let frames: Vec<Frame> = heap.delete_frames(5).collect();
        assert_eq!(frames.last().unwrap().narration(), "5 not found; heap unchanged");
        assert_eq!(heap.as_slice(), &[1, 2]);
    }
}
