//! Frames: immutable snapshots of one algorithm step
//!
//! Every runner in this crate reports its progress as an ordered sequence of
//! [`Frame`]s instead of only a final answer. A frame freezes:
//!
//! - `step`: position in the run, unique and increasing
//! - `view`: a copy of the structure being visualized ([`View`])
//! - `narration`: what just happened, in words
//! - `data`: named algorithm variables ([`Vars`])
//! - `metrics`: cumulative counters ([`Metrics`])
//! - `highlights`: which slots play which role ([`Highlights`])
//!
//! Frames are built by a [`FrameRecorder`], which owns step numbering and the
//! running counters, and handed out as a forward-only [`FrameStream`].
//!
//! # Transport Shape
//!
//! Serialized, a frame is the plain record the presentation side consumes:
//!
//! ```text
//! { "step", "view": { "values", "highlights" }, "narration", "data", "metrics" }
//! ```

pub mod highlight;
pub mod recorder;
pub mod token;

pub use highlight::{Highlights, Mark, Role, Slot};
pub use recorder::{FrameRecorder, FrameStream};
pub use token::Token;

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Named algorithm variables exposed at a step
pub type Vars = serde_json::Map<String, serde_json::Value>;

/// Cumulative counters (comparisons, swaps, ...) at a step
pub type Metrics = BTreeMap<&'static str, u64>;

/// Build a [`Vars`] map from `"name" => value` pairs.
///
/// Values only need to implement `Serialize`.
#[macro_export]
macro_rules! vars {
    () => {
        $crate::frame::Vars::new()
    };
    ($($key:literal => $value:expr),+ $(,)?) => {{
        let mut vars = $crate::frame::Vars::new();
        $(
            vars.insert(
                $key.to_string(),
                ::serde_json::to_value(&$value).unwrap_or(::serde_json::Value::Null),
            );
        )+
        vars
    }};
}

/// Node id → outgoing `(neighbor, weight)` pairs, in first-seen node order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Adjacency(Vec<(i64, Vec<(i64, u64)>)>);

impl Adjacency {
    pub fn new(entries: Vec<(i64, Vec<(i64, u64)>)>) -> Self {
        Adjacency(entries)
    }

    pub fn entries(&self) -> &[(i64, Vec<(i64, u64)>)] {
        &self.0
    }

    pub fn neighbors(&self, node: i64) -> Option<&[(i64, u64)]> {
        self.0
            .iter()
            .find(|(id, _)| *id == node)
            .map(|(_, edges)| edges.as_slice())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Adjacency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (node, edges) in &self.0 {
            map.serialize_entry(node, edges)?;
        }
        map.end()
    }
}

/// Snapshot of the structure being visualized
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum View {
    /// Array-based algorithms (sorting, searching)
    Array(Vec<i64>),
    /// Linked lists, stacks and queues, front to back
    Sequence(Vec<Token>),
    /// Level-order tree projection, `None` for holes, no trailing holes
    Tree(Vec<Option<i64>>),
    /// Adjacency list of a graph
    Graph(Adjacency),
}

impl View {
    pub fn len(&self) -> usize {
        match self {
            View::Array(values) => values.len(),
            View::Sequence(tokens) => tokens.len(),
            View::Tree(slots) => slots.len(),
            View::Graph(adjacency) => adjacency.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_array(&self) -> Option<&[i64]> {
        match self {
            View::Array(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Token]> {
        match self {
            View::Sequence(tokens) => Some(tokens),
            _ => None,
        }
    }

    pub fn as_tree(&self) -> Option<&[Option<i64>]> {
        match self {
            View::Tree(slots) => Some(slots),
            _ => None,
        }
    }

    pub fn as_graph(&self) -> Option<&Adjacency> {
        match self {
            View::Graph(adjacency) => Some(adjacency),
            _ => None,
        }
    }
}

/// One recorded step of an algorithm run.
///
/// Fields are private: once built, a frame cannot change.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    step: usize,
    view: View,
    narration: String,
    data: Vars,
    metrics: Metrics,
    highlights: Highlights,
}

impl Frame {
    pub fn new(step: usize, view: View) -> Self {
        Frame {
            step,
            view,
            narration: String::new(),
            data: Vars::new(),
            metrics: Metrics::new(),
            highlights: Highlights::new(),
        }
    }

    pub fn with_narration(mut self, narration: impl Into<String>) -> Self {
        self.narration = narration.into();
        self
    }

    pub fn with_data(mut self, data: Vars) -> Self {
        self.data = data;
        self
    }

    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn with_highlights(mut self, highlights: Highlights) -> Self {
        self.highlights = highlights;
        self
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn narration(&self) -> &str {
        &self.narration
    }

    pub fn data(&self) -> &Vars {
        &self.data
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Read a counter, 0 when the runner does not track it
    pub fn metric(&self, name: &str) -> u64 {
        self.metrics.get(name).copied().unwrap_or(0)
    }

    pub fn highlights(&self) -> &Highlights {
        &self.highlights
    }

    /// Plain key/value record for the presentation layer
    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

impl Serialize for Frame {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct ViewRecord<'a> {
            values: &'a View,
            highlights: &'a Highlights,
        }

        let mut state = serializer.serialize_struct("Frame", 5)?;
        state.serialize_field("step", &self.step)?;
        state.serialize_field(
            "view",
            &ViewRecord {
                values: &self.view,
                highlights: &self.highlights,
            },
        )?;
        state.serialize_field("narration", &self.narration)?;
        state.serialize_field("data", &self.data)?;
        state.serialize_field("metrics", &self.metrics)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_are_empty() {
        let frame = Frame::new(0, View::Array(vec![3, 1]));
        assert_eq!(frame.narration(), "");
        assert!(frame.data().is_empty());
        assert!(frame.metrics().is_empty());
        assert!(frame.highlights().is_empty());
        assert_eq!(frame.metric("comparisons"), 0);
    }

    #[test]
    fn test_to_json_shape() {
        let mut metrics = Metrics::new();
        metrics.insert("swaps", 2);
        let frame = Frame::new(4, View::Array(vec![5, 12]))
            .with_narration("Swap 12 and 5")
            .with_data(crate::vars! { "i" => 0, "j" => 1 })
            .with_metrics(metrics)
            .with_highlights(Highlights::new().with(Role::Swap, Mark::pair(0, 1)));

        assert_eq!(
            frame.to_json().unwrap(),
            json!({
                "step": 4,
                "view": { "values": [5, 12], "highlights": { "swap": [0, 1] } },
                "narration": "Swap 12 and 5",
                "data": { "i": 0, "j": 1 },
                "metrics": { "swaps": 2 }
            })
        );
    }

    #[test]
    fn test_graph_view_serializes_as_map() {
        let view = View::Graph(Adjacency::new(vec![(0, vec![(1, 4)]), (1, vec![(0, 4)])]));
        assert_eq!(
            serde_json::to_value(&view).unwrap(),
            json!({ "0": [[1, 4]], "1": [[0, 4]] })
        );
    }

    #[test]
    fn test_tree_view_keeps_holes() {
        let view = View::Tree(vec![Some(10), None, Some(15)]);
        assert_eq!(serde_json::to_value(&view).unwrap(), json!([10, null, 15]));
    }
}
