//! Highlight vocabulary for frames
//!
//! A frame marks which positions or nodes play which visual role at that
//! step. Roles are a closed [`Role`] enum, and the thing being marked is a
//! [`Mark`]:
//!
//! - [`Mark::Positions`]: indices into an array-shaped view
//! - [`Mark::Span`]: an inclusive `[low, high]` window (may be empty, `high < low`)
//! - [`Mark::Nodes`]: node identities (tree values, graph node ids)
//!
//! Serialized, every entry becomes `role_name -> [numbers]`, so the
//! presentation side never has to know which variant produced it.

use serde::Serialize;
use std::collections::BTreeMap;

/// Visual role of a position or node.
///
/// Variant order is rendering precedence: when a slot carries several roles
/// the earliest one wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Found,
    Inserted,
    Swap,
    Compare,
    Pivot,
    Key,
    Current,
    Prev,
    Rotated,
    Visited,
    Frontier,
    Moved,
    Appended,
    Head,
    Tail,
    Top,
    Front,
    Rear,
    Circular,
    Range,
}

impl Role {
    /// Name used in serialized frames and the UI legend
    pub fn name(self) -> &'static str {
        match self {
            Role::Found => "found",
            Role::Inserted => "inserted",
            Role::Swap => "swap",
            Role::Compare => "compare",
            Role::Pivot => "pivot",
            Role::Key => "key",
            Role::Current => "current",
            Role::Prev => "prev",
            Role::Rotated => "rotated",
            Role::Visited => "visited",
            Role::Frontier => "frontier",
            Role::Moved => "moved",
            Role::Appended => "appended",
            Role::Head => "head",
            Role::Tail => "tail",
            Role::Top => "top",
            Role::Front => "front",
            Role::Rear => "rear",
            Role::Circular => "circular",
            Role::Range => "range",
        }
    }
}

/// What a role points at
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Mark {
    Positions(Vec<usize>),
    Span(isize, isize),
    Nodes(Vec<i64>),
}

impl Mark {
    pub fn at(index: usize) -> Self {
        Mark::Positions(vec![index])
    }

    pub fn pair(a: usize, b: usize) -> Self {
        Mark::Positions(vec![a, b])
    }

    pub fn node(id: i64) -> Self {
        Mark::Nodes(vec![id])
    }

    /// Check whether this mark covers a slot of the view
    pub fn covers(&self, slot: Slot) -> bool {
        match (self, slot) {
            (Mark::Positions(indices), Slot::Position(i)) => indices.contains(&i),
            (Mark::Span(low, high), Slot::Position(i)) => {
                let i = i as isize;
                *low <= i && i <= *high
            }
            (Mark::Nodes(ids), Slot::Node(id)) => ids.contains(&id),
            _ => false,
        }
    }
}

/// A slot of a rendered view: either a position or a node identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Position(usize),
    Node(i64),
}

/// Role → mark table attached to a frame
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Highlights(BTreeMap<Role, Mark>);

impl Highlights {
    pub fn new() -> Self {
        Highlights(BTreeMap::new())
    }

    /// Add (or replace) a role
    pub fn with(mut self, role: Role, mark: Mark) -> Self {
        self.0.insert(role, mark);
        self
    }

    /// Add a role only when there is something to mark
    pub fn with_opt(self, role: Role, mark: Option<Mark>) -> Self {
        match mark {
            Some(mark) => self.with(role, mark),
            None => self,
        }
    }

    pub fn get(&self, role: Role) -> Option<&Mark> {
        self.0.get(&role)
    }

    pub fn contains(&self, role: Role) -> bool {
        self.0.contains_key(&role)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Role, &Mark)> {
        self.0.iter().map(|(role, mark)| (*role, mark))
    }

    /// Positions marked with `role`, empty if the role is absent or not positional
    pub fn positions(&self, role: Role) -> &[usize] {
        match self.0.get(&role) {
            Some(Mark::Positions(indices)) => indices,
            _ => &[],
        }
    }

    /// Node ids marked with `role`
    pub fn nodes(&self, role: Role) -> &[i64] {
        match self.0.get(&role) {
            Some(Mark::Nodes(ids)) => ids,
            _ => &[],
        }
    }

    /// The `[low, high]` search window, if any
    pub fn range(&self) -> Option<(isize, isize)> {
        match self.0.get(&Role::Range) {
            Some(Mark::Span(low, high)) => Some((*low, *high)),
            _ => None,
        }
    }

    /// Highest-precedence role covering `slot`, ignoring the search window
    pub fn role_of(&self, slot: Slot) -> Option<Role> {
        self.0
            .iter()
            .filter(|(role, _)| **role != Role::Range)
            .find(|(_, mark)| mark.covers(slot))
            .map(|(role, _)| *role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence_follows_role_order() {
        let hl = Highlights::new()
            .with(Role::Compare, Mark::pair(1, 2))
            .with(Role::Found, Mark::at(2));
        assert_eq!(hl.role_of(Slot::Position(2)), Some(Role::Found));
        assert_eq!(hl.role_of(Slot::Position(1)), Some(Role::Compare));
        assert_eq!(hl.role_of(Slot::Position(0)), None);
    }

    #[test]
    fn test_range_is_not_a_slot_role() {
        let hl = Highlights::new().with(Role::Range, Mark::Span(0, 4));
        assert_eq!(hl.range(), Some((0, 4)));
        assert_eq!(hl.role_of(Slot::Position(2)), None);
        assert!(Mark::Span(0, 4).covers(Slot::Position(2)));
        assert!(!Mark::Span(0, -1).covers(Slot::Position(0)));
    }

    #[test]
    fn test_serialized_shape_is_uniform() {
        let hl = Highlights::new()
            .with(Role::Range, Mark::Span(0, -1))
            .with(Role::Current, Mark::node(15))
            .with(Role::Swap, Mark::pair(3, 4));
        let json = serde_json::to_value(&hl).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "swap": [3, 4], "current": [15], "range": [0, -1] })
        );
    }
}
