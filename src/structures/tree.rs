//! Binary search trees, plain and AVL-balanced
//!
//! Nodes are boxed and owned by their parent link, so the tree is a plain
//! recursive structure with no handles. Duplicate values go to the right
//! subtree on insert.
//!
//! # Views
//!
//! A tree is shown as its compact level-order projection: values
//! breadth-first, with `None` standing in for the missing children of real
//! nodes and trailing `None`s trimmed. An empty tree is `[]`.
//!
//! # Balancing
//!
//! [`TreeKind::Avl`] first attaches like a plain BST, then retraces the
//! insertion path bottom-up and applies single or double rotations wherever
//! the height difference of two subtrees exceeds one. Deletion first removes
//! the node unbalanced, then rebalances the same way. Rotations are applied
//! deepest first, each reported by a `rotate` frame right after it.

use crate::errors::VizError;
use crate::frame::{FrameRecorder, FrameStream, Highlights, Mark, Role, View};
use crate::vars;
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

type Link = Option<Box<TreeNode>>;

#[derive(Debug, Clone)]
struct TreeNode {
    value: i64,
    height: i32,
    left: Link,
    right: Link,
}

impl TreeNode {
    fn leaf(value: i64) -> Box<Self> {
        Box::new(TreeNode {
            value,
            height: 1,
            left: None,
            right: None,
        })
    }

    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    fn balance(&self) -> i32 {
        height(&self.left) - height(&self.right)
    }
}

fn height(link: &Link) -> i32 {
    link.as_ref().map_or(0, |node| node.height)
}

fn min_value(link: &Link) -> Option<i64> {
    let mut node = link.as_deref()?;
    while let Some(left) = node.left.as_deref() {
        node = left;
    }
    Some(node.value)
}

/// Which subtree imbalance a rotation fixed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationKind {
    LeftLeft,
    RightRight,
    LeftRight,
    RightLeft,
}

impl RotationKind {
    pub fn name(self) -> &'static str {
        match self {
            RotationKind::LeftLeft => "LL (single right rotation)",
            RotationKind::RightRight => "RR (single left rotation)",
            RotationKind::LeftRight => "LR (left then right rotation)",
            RotationKind::RightLeft => "RL (right then left rotation)",
        }
    }
}

/// A rebalance applied at the node holding `pivot`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    pub kind: RotationKind,
    pub pivot: i64,
}

fn rotate_right(link: &mut Link) {
    let Some(mut node) = link.take() else { return };
    match node.left.take() {
        Some(mut pivot) => {
            node.left = pivot.right.take();
            node.update_height();
            pivot.right = Some(node);
            pivot.update_height();
            *link = Some(pivot);
        }
        None => *link = Some(node),
    }
}

fn rotate_left(link: &mut Link) {
    let Some(mut node) = link.take() else { return };
    match node.right.take() {
        Some(mut pivot) => {
            node.right = pivot.left.take();
            node.update_height();
            pivot.left = Some(node);
            pivot.update_height();
            *link = Some(pivot);
        }
        None => *link = Some(node),
    }
}

/// Refresh the height at `link` and rotate if it is out of balance
fn rebalance(link: &mut Link) -> Option<Rotation> {
    let node = link.as_mut()?;
    node.update_height();
    let pivot = node.value;
    let balance = node.balance();

    let kind = if balance > 1 {
        if node.left.as_ref().map_or(0, |l| l.balance()) < 0 {
            rotate_left(&mut node.left);
            RotationKind::LeftRight
        } else {
            RotationKind::LeftLeft
        }
    } else if balance < -1 {
        if node.right.as_ref().map_or(0, |r| r.balance()) > 0 {
            rotate_right(&mut node.right);
            RotationKind::RightLeft
        } else {
            RotationKind::RightRight
        }
    } else {
        return None;
    };

    match kind {
        RotationKind::LeftLeft | RotationKind::LeftRight => rotate_right(link),
        RotationKind::RightRight | RotationKind::RightLeft => rotate_left(link),
    }
    Some(Rotation { kind, pivot })
}

/// Plain BST attach; heights along the path are refreshed
fn attach(link: &mut Link, value: i64) {
    match link {
        None => *link = Some(TreeNode::leaf(value)),
        Some(node) => {
            if value < node.value {
                attach(&mut node.left, value);
            } else {
                attach(&mut node.right, value);
            }
            node.update_height();
        }
    }
}

/// Retrace the insertion path of `value` bottom-up, rotating where needed
fn retrace(link: &mut Link, value: i64, rotations: &mut Vec<Rotation>) {
    let Some(node) = link.as_mut() else { return };
    if value < node.value {
        retrace(&mut node.left, value, rotations);
    } else {
        retrace(&mut node.right, value, rotations);
    }
    rotations.extend(rebalance(link));
}

/// Apply the deepest pending rotation, refreshing heights above it.
///
/// Returns `None` once every node is within balance.
fn rebalance_lowest(link: &mut Link) -> Option<Rotation> {
    let node = link.as_mut()?;
    let below = rebalance_lowest(&mut node.left).or_else(|| rebalance_lowest(&mut node.right));
    if below.is_some() {
        node.update_height();
        return below;
    }
    rebalance(link)
}

/// Remove the first node holding `value`, using the in-order successor for
/// nodes with two children
fn remove_at(link: &mut Link, value: i64, balanced: bool, rotations: &mut Vec<Rotation>) -> bool {
    let Some(node) = link.as_mut() else {
        return false;
    };

    let removed = if value < node.value {
        remove_at(&mut node.left, value, balanced, rotations)
    } else if value > node.value {
        remove_at(&mut node.right, value, balanced, rotations)
    } else {
        if node.left.is_some() && node.right.is_some() {
            let successor = min_value(&node.right).unwrap_or(value);
            node.value = successor;
            remove_at(&mut node.right, successor, balanced, rotations);
        } else {
            let child = node.left.take().or_else(|| node.right.take());
            *link = child;
        }
        true
    };

    if removed {
        if balanced {
            rotations.extend(rebalance(link));
        } else if let Some(node) = link.as_mut() {
            node.update_height();
        }
    }
    removed
}

/// Plain BST or self-balancing AVL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeKind {
    Bst,
    Avl,
}

impl TreeKind {
    pub fn name(self) -> &'static str {
        match self {
            TreeKind::Bst => "Binary Search Tree",
            TreeKind::Avl => "AVL Tree",
        }
    }

    fn short(self) -> &'static str {
        match self {
            TreeKind::Bst => "BST",
            TreeKind::Avl => "AVL",
        }
    }
}

/// A framed search-tree operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeOperation {
    /// Framed insert of every seed value, one shared run
    Build,
    Insert(i64),
    Delete(i64),
    Search(i64),
}

impl TreeOperation {
    pub fn parse(name: &str, value: Option<i64>) -> Result<Self, VizError> {
        let op = name.trim().to_ascii_lowercase();
        let make: fn(i64) -> TreeOperation = match op.as_str() {
            "build" => return Ok(TreeOperation::Build),
            "insert" => TreeOperation::Insert,
            "delete" => TreeOperation::Delete,
            "search" => TreeOperation::Search,
            _ => {
                return Err(VizError::UnsupportedSelector {
                    kind: "tree operation",
                    name: name.to_string(),
                    expected: "build, insert, delete, search",
                })
            }
        };
        value.map(make).ok_or(VizError::MissingParameter {
            operation: "tree",
            parameter: "a value (--value)",
        })
    }
}

/// Binary search tree over `i64`, optionally AVL-balanced
#[derive(Debug, Clone)]
pub struct SearchTree {
    kind: TreeKind,
    root: Link,
    len: usize,
}

impl SearchTree {
    pub fn new(kind: TreeKind) -> Self {
        SearchTree {
            kind,
            root: None,
            len: 0,
        }
    }

    pub fn bst() -> Self {
        SearchTree::new(TreeKind::Bst)
    }

    pub fn avl() -> Self {
        SearchTree::new(TreeKind::Avl)
    }

    pub fn from_values(kind: TreeKind, values: &[i64]) -> Self {
        let mut tree = SearchTree::new(kind);
        for &value in values {
            tree.insert(value);
        }
        tree
    }

    pub fn kind(&self) -> TreeKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of levels; 0 for an empty tree
    pub fn height(&self) -> usize {
        height(&self.root).max(0) as usize
    }

    pub fn root_value(&self) -> Option<i64> {
        self.root.as_ref().map(|node| node.value)
    }

    pub fn contains(&self, value: i64) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            if value == node.value {
                return true;
            }
            current = if value < node.value {
                node.left.as_deref()
            } else {
                node.right.as_deref()
            };
        }
        false
    }

    pub fn inorder(&self) -> Vec<i64> {
        fn walk(link: &Link, out: &mut Vec<i64>) {
            if let Some(node) = link {
                walk(&node.left, out);
                out.push(node.value);
                walk(&node.right, out);
            }
        }
        let mut out = Vec::with_capacity(self.len);
        walk(&self.root, &mut out);
        out
    }

    /// Check that every node's subtrees differ in height by at most one
    pub fn is_balanced(&self) -> bool {
        fn check(link: &Link) -> Option<i32> {
            let Some(node) = link else { return Some(0) };
            let left = check(&node.left)?;
            let right = check(&node.right)?;
            ((left - right).abs() <= 1).then(|| 1 + left.max(right))
        }
        check(&self.root).is_some()
    }

    /// Compact level-order projection, trailing holes trimmed
    pub fn level_order(&self) -> Vec<Option<i64>> {
        let mut view = Vec::new();
        let mut queue: VecDeque<Option<&TreeNode>> = VecDeque::new();
        if let Some(root) = self.root.as_deref() {
            queue.push_back(Some(root));
        }
        while let Some(slot) = queue.pop_front() {
            match slot {
                Some(node) => {
                    view.push(Some(node.value));
                    queue.push_back(node.left.as_deref());
                    queue.push_back(node.right.as_deref());
                }
                None => view.push(None),
            }
        }
        while view.last() == Some(&None) {
            view.pop();
        }
        view
    }

    pub fn view(&self) -> View {
        View::Tree(self.level_order())
    }

    /// Insert without recording; returns rotations applied (always empty for a BST)
    pub fn insert(&mut self, value: i64) -> Vec<Rotation> {
        attach(&mut self.root, value);
        self.len += 1;
        let mut rotations = Vec::new();
        if self.kind == TreeKind::Avl {
            retrace(&mut self.root, value, &mut rotations);
        }
        rotations
    }

    /// Delete one node holding `value`; returns whether one was found
    pub fn remove(&mut self, value: i64) -> bool {
        let mut rotations = Vec::new();
        let removed = remove_at(
            &mut self.root,
            value,
            self.kind == TreeKind::Avl,
            &mut rotations,
        );
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Rotate until balanced, one frame per rotation after it is applied
    fn record_rebalance(&mut self, rec: &mut FrameRecorder) {
        while let Some(rotation) = rebalance_lowest(&mut self.root) {
            rec.bump("rotations");
            rec.record(
                self.view(),
                format!("Rotate {} at {}", rotation.kind.name(), rotation.pivot),
                Highlights::new().with(Role::Rotated, Mark::node(rotation.pivot)),
                vars! { "pivot" => rotation.pivot, "root" => self.root_value() },
            );
        }
    }

    fn metric_keys(&self) -> &'static [&'static str] {
        match self.kind {
            TreeKind::Bst => &["comparisons"],
            TreeKind::Avl => &["comparisons", "rotations"],
        }
    }

    /// Insert with one compare frame per visited node, then the attach frame,
    /// then (AVL) one frame per rotation
    pub fn record_insert(&mut self, value: i64, rec: &mut FrameRecorder) {
        rec.track(self.metric_keys());
        rec.record(
            self.view(),
            format!("Start {} insertion of {}.", self.kind.short(), value),
            Highlights::new(),
            vars! { "value" => value },
        );

        let mut parent = None;
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            rec.bump("comparisons");
            let go_left = value < node.value;
            rec.record(
                self.view(),
                format!(
                    "Compare {} with node {}: go {}.",
                    value,
                    node.value,
                    if go_left { "left" } else { "right" }
                ),
                Highlights::new().with(Role::Current, Mark::node(node.value)),
                vars! { "current" => node.value, "value" => value },
            );
            parent = Some((node.value, go_left));
            current = if go_left {
                node.left.as_deref()
            } else {
                node.right.as_deref()
            };
        }

        attach(&mut self.root, value);
        self.len += 1;
        let narration = match parent {
            None => format!("Tree empty: {} becomes the root.", value),
            Some((p, true)) => format!("Attach {} as left child of {}.", value, p),
            Some((p, false)) => format!("Attach {} as right child of {}.", value, p),
        };
        rec.record(
            self.view(),
            narration,
            Highlights::new().with(Role::Inserted, Mark::node(value)),
            vars! { "inserted" => value, "parent" => parent.map(|(p, _)| p) },
        );

        if self.kind == TreeKind::Avl {
            self.record_rebalance(rec);
        }

        rec.record(
            self.view(),
            format!("Inserted {}.", value),
            Highlights::new().with(Role::Inserted, Mark::node(value)),
            vars! { "inserted" => value, "height" => self.height() },
        );
    }

    /// Walk toward `value`, one compare frame per node.
    ///
    /// Returns whether the value was reached.
    fn record_walk(&self, value: i64, rec: &mut FrameRecorder) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            rec.bump("comparisons");
            let narration = if value == node.value {
                format!("Compare {} with node {}: match.", value, node.value)
            } else if value < node.value {
                format!("Compare {} with node {}: go left.", value, node.value)
            } else {
                format!("Compare {} with node {}: go right.", value, node.value)
            };
            rec.record(
                self.view(),
                narration,
                Highlights::new().with(Role::Current, Mark::node(node.value)),
                vars! { "current" => node.value, "value" => value },
            );
            if value == node.value {
                return true;
            }
            current = if value < node.value {
                node.left.as_deref()
            } else {
                node.right.as_deref()
            };
        }
        false
    }

    pub fn record_search(&self, value: i64, rec: &mut FrameRecorder) {
        rec.track(&["comparisons"]);
        rec.record(
            self.view(),
            format!("Start {} search for {}.", self.kind.short(), value),
            Highlights::new(),
            vars! { "value" => value },
        );
        if self.record_walk(value, rec) {
            rec.record(
                self.view(),
                format!("Found {}.", value),
                Highlights::new().with(Role::Found, Mark::node(value)),
                vars! { "found" => value },
            );
        } else {
            rec.record(
                self.view(),
                format!("{} not found.", value),
                Highlights::new(),
                vars! { "value" => value },
            );
        }
    }

    /// Delete one occurrence; AVL trees rebalance on the way back up
    pub fn record_delete(&mut self, value: i64, rec: &mut FrameRecorder) {
        rec.track(self.metric_keys());
        rec.track(&["deletions"]);
        rec.record(
            self.view(),
            format!("Start {} deletion of {}.", self.kind.short(), value),
            Highlights::new(),
            vars! { "value" => value },
        );

        if !self.record_walk(value, rec) {
            rec.record(
                self.view(),
                format!("{} not found; tree unchanged.", value),
                Highlights::new(),
                vars! { "value" => value },
            );
            return;
        }

        if let Some(successor) = self.successor_of(value) {
            rec.record(
                self.view(),
                format!(
                    "{} has two children: replace it with in-order successor {}.",
                    value, successor
                ),
                Highlights::new()
                    .with(Role::Current, Mark::node(value))
                    .with(Role::Key, Mark::node(successor)),
                vars! { "value" => value, "successor" => successor },
            );
        }

        // plain removal; AVL rotations follow one frame each
        if remove_at(&mut self.root, value, false, &mut Vec::new()) {
            self.len -= 1;
            rec.bump("deletions");
        }
        rec.record(
            self.view(),
            format!("Removed {}.", value),
            Highlights::new(),
            vars! { "removed" => value, "size" => self.len },
        );
        if self.kind == TreeKind::Avl {
            self.record_rebalance(rec);
        }
        rec.record(
            self.view(),
            "Done.",
            Highlights::new(),
            vars! { "height" => self.height() },
        );
    }

    /// In-order successor of the first node holding `value`, when that node
    /// has two children
    fn successor_of(&self, value: i64) -> Option<i64> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            if value == node.value {
                node.left.as_ref()?;
                return min_value(&node.right);
            }
            current = if value < node.value {
                node.left.as_deref()
            } else {
                node.right.as_deref()
            };
        }
        None
    }

    pub fn record(&mut self, op: TreeOperation, seed: &[i64], rec: &mut FrameRecorder) {
        match op {
            TreeOperation::Build => {
                for &value in seed {
                    self.record_insert(value, rec);
                }
            }
            TreeOperation::Insert(value) => self.record_insert(value, rec),
            TreeOperation::Delete(value) => self.record_delete(value, rec),
            TreeOperation::Search(value) => self.record_search(value, rec),
        }
    }

    pub fn insert_frames(&mut self, value: i64) -> FrameStream {
        let mut rec = FrameRecorder::new();
        self.record_insert(value, &mut rec);
        rec.finish()
    }

    pub fn search_frames(&self, value: i64) -> FrameStream {
        let mut rec = FrameRecorder::new();
        self.record_search(value, &mut rec);
        rec.finish()
    }

    pub fn delete_frames(&mut self, value: i64) -> FrameStream {
        let mut rec = FrameRecorder::new();
        self.record_delete(value, &mut rec);
        rec.finish()
    }
}

impl FromStr for TreeKind {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bst" => Ok(TreeKind::Bst),
            "avl" => Ok(TreeKind::Avl),
            _ => Err(VizError::UnsupportedSelector {
                kind: "tree type",
                name: s.to_string(),
                expected: "bst, avl",
            }),
        }
    }
}

impl fmt::Display for TreeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
