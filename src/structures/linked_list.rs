//! Linked lists over a node arena
//!
//! Nodes live in a [`NodeArena`] and refer to each other by [`NodeId`]
//! handles, so rings (circular lists) and back-links (doubly linked lists)
//! need no shared ownership. One [`LinkedList`] type covers the three
//! flavours, selected by [`ListKind`]:
//!
//! - **Singly**: `next` links, `None`-terminated
//! - **Doubly**: `next` and `prev` links, `None`-terminated both ways
//! - **Circular**: `next` links, the tail's `next` is the head
//!
//! # Framed Operations
//!
//! Each mutating operation has a `record_*` variant that performs the same
//! change while recording frames (and a `*_frames` convenience wrapper that
//! returns the finished stream). Traversals record one frame per visited node.
//! Deletion in singly and circular lists needs a trailing `prev` handle; the
//! doubly linked flavour relinks through the node's own back-link and reports
//! two changed links for a non-head deletion instead of one.

use crate::errors::VizError;
use crate::frame::{FrameRecorder, FrameStream, Highlights, Mark, Role, Token, View};
use crate::vars;
use std::fmt;
use std::str::FromStr;

/// Stable handle to a node slot in the arena
pub type NodeId = usize;

#[derive(Debug, Clone)]
struct ListNode {
    value: Token,
    next: Option<NodeId>,
    prev: Option<NodeId>,
}

/// Slot storage for list nodes; freed slots are reused
#[derive(Debug, Clone, Default)]
struct NodeArena {
    slots: Vec<Option<ListNode>>,
    free: Vec<NodeId>,
}

impl NodeArena {
    fn alloc(&mut self, value: Token) -> NodeId {
        let node = ListNode {
            value,
            next: None,
            prev: None,
        };
        match self.free.pop() {
            Some(id) => {
                self.slots[id] = Some(node);
                id
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    fn release(&mut self, id: NodeId) -> Option<ListNode> {
        let node = self.slots.get_mut(id)?.take()?;
        self.free.push(id);
        Some(node)
    }

    fn node(&self, id: NodeId) -> Option<&ListNode> {
        self.slots.get(id)?.as_ref()
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut ListNode> {
        self.slots.get_mut(id)?.as_mut()
    }

    fn next(&self, id: NodeId) -> Option<NodeId> {
        self.node(id)?.next
    }

    fn prev(&self, id: NodeId) -> Option<NodeId> {
        self.node(id)?.prev
    }

    fn value(&self, id: NodeId) -> Option<&Token> {
        self.node(id).map(|node| &node.value)
    }

    fn set_next(&mut self, id: NodeId, next: Option<NodeId>) {
        if let Some(node) = self.node_mut(id) {
            node.next = next;
        }
    }

    fn set_prev(&mut self, id: NodeId, prev: Option<NodeId>) {
        if let Some(node) = self.node_mut(id) {
            node.prev = prev;
        }
    }

    fn capacity(&self) -> usize {
        self.slots.len()
    }
}

/// Linked list flavour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Singly,
    Doubly,
    Circular,
}

impl ListKind {
    pub const ALL: [ListKind; 3] = [ListKind::Singly, ListKind::Doubly, ListKind::Circular];

    pub fn name(self) -> &'static str {
        match self {
            ListKind::Singly => "Singly Linked List",
            ListKind::Doubly => "Doubly Linked List",
            ListKind::Circular => "Circular Linked List",
        }
    }

    fn label(self) -> &'static str {
        match self {
            ListKind::Singly => "singly linked",
            ListKind::Doubly => "doubly linked",
            ListKind::Circular => "circular linked",
        }
    }
}

impl FromStr for ListKind {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "singly" => Ok(ListKind::Singly),
            "doubly" => Ok(ListKind::Doubly),
            "circular" => Ok(ListKind::Circular),
            _ => Err(VizError::UnsupportedSelector {
                kind: "linked list type",
                name: s.to_string(),
                expected: "singly, doubly, circular",
            }),
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A framed linked-list operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListOperation {
    InsertHead(Token),
    InsertTail(Token),
    Search(Token),
    Delete(Token),
}

impl ListOperation {
    /// Build an operation from its name and the value it acts on
    pub fn parse(name: &str, value: Option<Token>) -> Result<Self, VizError> {
        let op = name.trim().to_ascii_lowercase();
        let make: fn(Token) -> ListOperation = match op.as_str() {
            "insert-head" => ListOperation::InsertHead,
            "insert-tail" => ListOperation::InsertTail,
            "search" => ListOperation::Search,
            "delete" => ListOperation::Delete,
            _ => {
                return Err(VizError::UnsupportedSelector {
                    kind: "linked list operation",
                    name: name.to_string(),
                    expected: "insert-head, insert-tail, search, delete",
                })
            }
        };
        value.map(make).ok_or(VizError::MissingParameter {
            operation: "linked list",
            parameter: "a value (--value)",
        })
    }
}

/// Singly, doubly or circular linked list
#[derive(Debug, Clone)]
pub struct LinkedList {
    kind: ListKind,
    arena: NodeArena,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl LinkedList {
    pub fn new(kind: ListKind) -> Self {
        LinkedList {
            kind,
            arena: NodeArena::default(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub fn singly() -> Self {
        LinkedList::new(ListKind::Singly)
    }

    pub fn doubly() -> Self {
        LinkedList::new(ListKind::Doubly)
    }

    pub fn circular() -> Self {
        LinkedList::new(ListKind::Circular)
    }

    /// Build a list by appending `values` in order, without recording
    pub fn from_tokens(kind: ListKind, values: impl IntoIterator<Item = Token>) -> Self {
        let mut list = LinkedList::new(kind);
        for value in values {
            list.insert_tail(value);
        }
        list
    }

    pub fn kind(&self) -> ListKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn head_value(&self) -> Option<&Token> {
        self.arena.value(self.head?)
    }

    pub fn tail_value(&self) -> Option<&Token> {
        self.arena.value(self.tail?)
    }

    /// Node handles from head to tail.
    ///
    /// Circular lists stop on returning to the head, never on a missing link.
    fn node_ids(&self) -> Vec<NodeId> {
        let mut ids = Vec::with_capacity(self.len);
        let mut current = self.head;
        while let Some(id) = current {
            ids.push(id);
            current = self.arena.next(id);
            if current == self.head || ids.len() > self.arena.capacity() {
                break;
            }
        }
        ids
    }

    /// Values from head to tail
    pub fn to_vec(&self) -> Vec<Token> {
        self.node_ids()
            .into_iter()
            .filter_map(|id| self.arena.value(id).cloned())
            .collect()
    }

    pub fn view(&self) -> View {
        View::Sequence(self.to_vec())
    }

    /// Number of `next` hops from the head back to the head.
    ///
    /// Only circular lists form a ring; other kinds (and empty lists) give `None`.
    pub fn cycle_len(&self) -> Option<usize> {
        if self.kind != ListKind::Circular {
            return None;
        }
        let head = self.head?;
        let mut steps = 0;
        let mut current = head;
        loop {
            current = self.arena.next(current)?;
            steps += 1;
            if current == head {
                return Some(steps);
            }
            if steps > self.arena.capacity() {
                return None;
            }
        }
    }

    pub fn insert_head(&mut self, value: Token) {
        let id = self.arena.alloc(value);
        match self.kind {
            ListKind::Singly => {
                self.arena.set_next(id, self.head);
            }
            ListKind::Doubly => {
                self.arena.set_next(id, self.head);
                if let Some(old_head) = self.head {
                    self.arena.set_prev(old_head, Some(id));
                }
            }
            ListKind::Circular => match self.tail {
                Some(tail) => {
                    self.arena.set_next(id, self.head);
                    self.arena.set_next(tail, Some(id));
                }
                None => self.arena.set_next(id, Some(id)),
            },
        }
        self.head = Some(id);
        if self.tail.is_none() {
            self.tail = Some(id);
        }
        self.len += 1;
    }

    pub fn insert_tail(&mut self, value: Token) {
        let id = self.arena.alloc(value);
        match self.tail {
            Some(tail) => {
                self.arena.set_next(tail, Some(id));
                match self.kind {
                    ListKind::Singly => {}
                    ListKind::Doubly => self.arena.set_prev(id, Some(tail)),
                    ListKind::Circular => self.arena.set_next(id, self.head),
                }
            }
            None => {
                self.head = Some(id);
                if self.kind == ListKind::Circular {
                    self.arena.set_next(id, Some(id));
                }
            }
        }
        self.tail = Some(id);
        self.len += 1;
    }

    /// Index of the first node holding `target`
    pub fn find(&self, target: &Token) -> Option<usize> {
        self.node_ids()
            .into_iter()
            .position(|id| self.arena.value(id) == Some(target))
    }

    /// Delete the first node holding `target`; returns whether one was found
    pub fn remove(&mut self, target: &Token) -> bool {
        let mut prev = None;
        for id in self.node_ids() {
            if self.arena.value(id) == Some(target) {
                self.unlink(prev, id);
                return true;
            }
            prev = Some(id);
        }
        false
    }

    /// Detach `id` (whose predecessor is `prev`) and free its slot.
    ///
    /// Returns how many links were rewritten.
    fn unlink(&mut self, prev: Option<NodeId>, id: NodeId) -> u64 {
        let next = self.arena.next(id);
        let is_head = self.head == Some(id);
        let links = match self.kind {
            ListKind::Singly => {
                match prev {
                    Some(p) => self.arena.set_next(p, next),
                    None => self.head = next,
                }
                if self.tail == Some(id) {
                    self.tail = prev;
                }
                1
            }
            ListKind::Doubly => {
                let back = self.arena.prev(id);
                match back {
                    Some(p) => self.arena.set_next(p, next),
                    None => self.head = next,
                }
                match next {
                    Some(n) => self.arena.set_prev(n, back),
                    None => self.tail = back,
                }
                if is_head {
                    1
                } else {
                    2
                }
            }
            ListKind::Circular => {
                if self.head == self.tail {
                    self.head = None;
                    self.tail = None;
                } else if is_head {
                    self.head = next;
                    if let Some(tail) = self.tail {
                        self.arena.set_next(tail, next);
                    }
                } else {
                    if let Some(p) = prev {
                        self.arena.set_next(p, next);
                    }
                    if self.tail == Some(id) {
                        self.tail = prev;
                    }
                }
                1
            }
        };
        self.arena.release(id);
        self.len -= 1;
        links
    }

    fn ends(&self, n: usize) -> Highlights {
        let hl = Highlights::new();
        if n == 0 {
            return hl;
        }
        hl.with(Role::Head, Mark::at(0)).with(Role::Tail, Mark::at(n - 1))
    }

    fn ring_mark(&self, n: usize) -> Option<Mark> {
        (self.kind == ListKind::Circular && n > 0).then(|| Mark::at(n - 1))
    }

    /// Insert at head, recording start, relink and done frames
    pub fn record_insert_head(&mut self, value: Token, rec: &mut FrameRecorder) {
        rec.track(&["insertions"]);
        let before = self.to_vec();
        let n = before.len();
        rec.record(
            View::Sequence(before),
            format!("Start: insert at head ({})", self.kind.label()),
            Highlights::new()
                .with_opt(Role::Head, (n > 0).then(|| Mark::at(0)))
                .with_opt(Role::Circular, self.ring_mark(n)),
            vars! { "new_value" => value, "old_head" => (n > 0).then_some(0) },
        );

        self.insert_head(value.clone());
        rec.bump("insertions");

        let after = self.to_vec();
        let n = after.len();
        let relink = match self.kind {
            ListKind::Singly => "",
            ListKind::Doubly => "; old head.prev to new",
            ListKind::Circular => "; tail points to new head",
        };
        rec.record(
            View::Sequence(after.clone()),
            format!("New head {} points to old head{}", value, relink),
            Highlights::new()
                .with(Role::Head, Mark::at(0))
                .with_opt(Role::Circular, self.ring_mark(n)),
            vars! { "new_head" => 0, "next_of_head" => (n > 1).then_some(1) },
        );
        rec.record(View::Sequence(after), "Done.", Highlights::new(), vars! {});
    }

    /// Insert at tail, recording start, relink and done frames
    pub fn record_insert_tail(&mut self, value: Token, rec: &mut FrameRecorder) {
        rec.track(&["insertions"]);
        let before = self.to_vec();
        let n = before.len();
        let tail_idx = n.checked_sub(1);
        rec.record(
            View::Sequence(before),
            format!("Start: insert at tail ({})", self.kind.label()),
            Highlights::new()
                .with_opt(Role::Tail, tail_idx.map(Mark::at))
                .with_opt(Role::Circular, self.ring_mark(n)),
            vars! { "new_value" => value, "tail" => tail_idx },
        );

        self.insert_tail(value.clone());
        rec.bump("insertions");

        let after = self.to_vec();
        let n = after.len();
        let relink = match self.kind {
            ListKind::Singly => "",
            ListKind::Doubly => "; new.prev to old tail; old.next to new",
            ListKind::Circular => "; new tail points to head",
        };
        rec.record(
            View::Sequence(after.clone()),
            format!("Append {} at tail{}", value, relink),
            Highlights::new()
                .with(Role::Tail, Mark::at(n - 1))
                .with_opt(Role::Circular, self.ring_mark(n)),
            vars! { "old_tail" => tail_idx, "new_tail" => n - 1 },
        );
        rec.record(View::Sequence(after), "Done.", Highlights::new(), vars! {});
    }

    /// Forward search for the first occurrence, one frame per visited node
    pub fn record_search(&self, target: &Token, rec: &mut FrameRecorder) {
        rec.track(&["comparisons"]);
        let values = self.to_vec();
        let n = values.len();
        rec.record(
            View::Sequence(values.clone()),
            format!("Start: search for {} ({})", target, self.kind.label()),
            Highlights::new().with_opt(Role::Head, (n > 0).then(|| Mark::at(0))),
            vars! { "target" => target, "i" => None::<usize>, "val" => None::<Token> },
        );

        if n == 0 {
            rec.record(
                View::Sequence(values),
                format!("{} not found (empty list)", target),
                Highlights::new(),
                vars! { "target" => target },
            );
            return;
        }

        for (i, value) in values.iter().enumerate() {
            rec.bump("comparisons");
            rec.record(
                View::Sequence(values.clone()),
                format!("Check node {}", i),
                Highlights::new().with(Role::Current, Mark::at(i)),
                vars! { "target" => target, "i" => i, "val" => value },
            );
            if value == target {
                rec.record(
                    View::Sequence(values.clone()),
                    format!("Found {} at index {}", target, i),
                    Highlights::new().with(Role::Found, Mark::at(i)),
                    vars! { "target" => target, "i" => i },
                );
                return;
            }
        }

        rec.record(
            View::Sequence(values),
            format!("{} not found", target),
            Highlights::new(),
            vars! { "target" => target },
        );
    }

    /// Delete the first occurrence, one frame per visited node
    pub fn record_delete(&mut self, target: &Token, rec: &mut FrameRecorder) {
        rec.track(&["comparisons", "deletions", "links_changed"]);
        let before = self.to_vec();
        let n = before.len();
        let label = self.kind.label();

        if n == 0 {
            rec.record(
                View::Sequence(before),
                format!("List empty; nothing to delete ({})", label),
                Highlights::new(),
                vars! { "target" => target },
            );
            return;
        }

        rec.record(
            View::Sequence(before.clone()),
            format!("Start: delete value {} ({})", target, label),
            self.ends(n),
            vars! { "target" => target, "prev" => None::<usize>, "curr" => 0 },
        );

        let trailing = self.kind != ListKind::Doubly;
        let mut prev = None;
        for (i, id) in self.node_ids().into_iter().enumerate() {
            rec.bump("comparisons");
            let value = before[i].clone();
            let (narration, visit) = if i == 0 {
                (
                    format!("Compare head with {}", target),
                    Highlights::new()
                        .with(Role::Current, Mark::at(0))
                        .with(Role::Head, Mark::at(0)),
                )
            } else if trailing {
                (
                    "Traverse: move prev/curr forward".to_string(),
                    Highlights::new()
                        .with(Role::Prev, Mark::at(i - 1))
                        .with(Role::Current, Mark::at(i)),
                )
            } else {
                (
                    "Traverse: check current".to_string(),
                    Highlights::new().with(Role::Current, Mark::at(i)),
                )
            };
            rec.record(
                View::Sequence(before.clone()),
                narration,
                visit.clone(),
                vars! {
                    "target" => target,
                    "prev" => if trailing { i.checked_sub(1) } else { None },
                    "curr" => i,
                    "val" => value,
                },
            );

            if &value != target {
                prev = Some(id);
                continue;
            }

            let links = self.unlink(prev, id);
            rec.add("links_changed", links);
            rec.bump("deletions");
            let after = self.to_vec();
            let m = after.len();

            if i == 0 {
                let relink = match self.kind {
                    ListKind::Singly => "",
                    ListKind::Doubly => "; update new head.prev to None",
                    ListKind::Circular => "; tail points to new head",
                };
                rec.record(
                    View::Sequence(after.clone()),
                    format!("Delete head {}{}", target, relink),
                    Highlights::new().with_opt(Role::Head, (m > 0).then(|| Mark::at(0))),
                    vars! { "new_head" => (m > 0).then_some(0) },
                );
            } else {
                let relink = match self.kind {
                    ListKind::Singly => "",
                    ListKind::Doubly => " (update prev.next and next.prev)",
                    ListKind::Circular => " (prev.next to current.next)",
                };
                rec.record(
                    View::Sequence(before.clone()),
                    format!("Found {} at {}; unlink it{}", target, i, relink),
                    visit,
                    vars! { "target" => target, "curr" => i },
                );
                let removed = if trailing {
                    "Node removed; prev.next skips current"
                } else {
                    "Node removed; links updated"
                };
                rec.record(
                    View::Sequence(after.clone()),
                    removed,
                    Highlights::new()
                        .with_opt(
                            Role::Prev,
                            (trailing && i - 1 < m).then(|| Mark::at(i - 1)),
                        )
                        .with_opt(Role::Tail, m.checked_sub(1).map(Mark::at)),
                    vars! { "new_length" => m },
                );
            }
            rec.record(View::Sequence(after), "Done.", Highlights::new(), vars! {});
            return;
        }

        rec.record(
            View::Sequence(before),
            format!("{} not found; no deletion", target),
            Highlights::new(),
            vars! { "target" => target },
        );
    }

    /// Run one framed operation on its own recorder
    pub fn apply_frames(&mut self, op: &ListOperation) -> FrameStream {
        let mut rec = FrameRecorder::new();
        self.record(op, &mut rec);
        rec.finish()
    }

    pub fn record(&mut self, op: &ListOperation, rec: &mut FrameRecorder) {
        match op {
            ListOperation::InsertHead(value) => self.record_insert_head(value.clone(), rec),
            ListOperation::InsertTail(value) => self.record_insert_tail(value.clone(), rec),
            ListOperation::Search(value) => self.record_search(value, rec),
            ListOperation::Delete(value) => self.record_delete(value, rec),
        }
    }

    pub fn insert_head_frames(&mut self, value: Token) -> FrameStream {
        self.apply_frames(&ListOperation::InsertHead(value))
    }

    pub fn insert_tail_frames(&mut self, value: Token) -> FrameStream {
        self.apply_frames(&ListOperation::InsertTail(value))
    }

    pub fn search_frames(&mut self, value: Token) -> FrameStream {
        self.apply_frames(&ListOperation::Search(value))
    }

    pub fn delete_frames(&mut self, value: Token) -> FrameStream {
        self.apply_frames(&ListOperation::Delete(value))
    }
}
