//! Adjacency-list graph and its traversals
//!
//! Nodes are integer ids kept in first-seen order; each has an outgoing list
//! of `(neighbor, weight)` pairs in insertion order. Undirected edges are
//! stored once per direction. Weights are unsigned, so Dijkstra's
//! precondition holds by construction.
//!
//! Traversal highlights are node ids: `current` for the node being
//! processed, `frontier` for a node just discovered (or relaxed), and
//! `visited` for everything settled so far.

use crate::errors::VizError;
use crate::frame::{Adjacency, FrameRecorder, FrameStream, Highlights, Mark, Role, View};
use crate::vars;
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};
use std::fmt;
use std::str::FromStr;

/// One edge as read from input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub from: i64,
    pub to: i64,
    pub weight: u64,
}

impl Edge {
    pub fn new(from: i64, to: i64, weight: u64) -> Self {
        Edge { from, to, weight }
    }
}

/// Graph traversal selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphAlgorithm {
    Bfs,
    Dfs,
    Dijkstra,
}

impl GraphAlgorithm {
    pub const ALL: [GraphAlgorithm; 3] = [
        GraphAlgorithm::Bfs,
        GraphAlgorithm::Dfs,
        GraphAlgorithm::Dijkstra,
    ];

    pub fn name(self) -> &'static str {
        match self {
            GraphAlgorithm::Bfs => "Breadth-First Search",
            GraphAlgorithm::Dfs => "Depth-First Search",
            GraphAlgorithm::Dijkstra => "Dijkstra's Shortest Paths",
        }
    }
}

impl FromStr for GraphAlgorithm {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(GraphAlgorithm::Bfs),
            "dfs" => Ok(GraphAlgorithm::Dfs),
            "dijkstra" => Ok(GraphAlgorithm::Dijkstra),
            _ => Err(VizError::UnsupportedSelector {
                kind: "graph algorithm",
                name: s.to_string(),
                expected: "bfs, dfs, dijkstra",
            }),
        }
    }
}

impl fmt::Display for GraphAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shortest known distance per reached node
pub type Distances = FxHashMap<i64, u64>;

/// Weighted adjacency-list graph
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<i64>,
    index: FxHashMap<i64, usize>,
    adjacency: Vec<Vec<(i64, u64)>>,
}

impl Graph {
    pub fn new() -> Self {
        Graph::default()
    }

    pub fn from_edges(edges: &[Edge], directed: bool) -> Self {
        let mut graph = Graph::new();
        for edge in edges {
            graph.add_edge(edge.from, edge.to, edge.weight, directed);
        }
        graph
    }

    fn slot(&mut self, node: i64) -> usize {
        if let Some(&slot) = self.index.get(&node) {
            return slot;
        }
        self.nodes.push(node);
        self.adjacency.push(Vec::new());
        let slot = self.nodes.len() - 1;
        self.index.insert(node, slot);
        slot
    }

    pub fn add_node(&mut self, node: i64) {
        self.slot(node);
    }

    /// Add `u -> v`, and `v -> u` as well unless `directed`
    pub fn add_edge(&mut self, u: i64, v: i64, weight: u64, directed: bool) {
        let from = self.slot(u);
        let to = self.slot(v);
        self.adjacency[from].push((v, weight));
        if !directed {
            self.adjacency[to].push((u, weight));
        }
    }

    pub fn nodes(&self) -> &[i64] {
        &self.nodes
    }

    pub fn contains(&self, node: i64) -> bool {
        self.index.contains_key(&node)
    }

    /// Outgoing edges of `node`; empty for unknown nodes
    pub fn neighbors(&self, node: i64) -> &[(i64, u64)] {
        match self.index.get(&node) {
            Some(&slot) => &self.adjacency[slot],
            None => &[],
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    pub fn view(&self) -> View {
        View::Graph(Adjacency::new(
            self.nodes
                .iter()
                .copied()
                .zip(self.adjacency.iter().cloned())
                .collect(),
        ))
    }

    fn settled(&self, visited: &[i64]) -> Mark {
        Mark::Nodes(visited.to_vec())
    }

    /// Breadth-first traversal; returns the visit order
    pub fn record_bfs(&self, start: i64, rec: &mut FrameRecorder) -> Vec<i64> {
        rec.track(&["visited", "discovered"]);
        let mut seen = FxHashSet::default();
        let mut queue = VecDeque::from([start]);
        let mut order = Vec::new();
        seen.insert(start);
        rec.bump("discovered");

        rec.record(
            self.view(),
            format!("Start BFS from node {}.", start),
            Highlights::new().with(Role::Current, Mark::node(start)),
            vars! { "queue" => queue },
        );

        while let Some(current) = queue.pop_front() {
            order.push(current);
            rec.bump("visited");
            rec.record(
                self.view(),
                format!("Visit node {}.", current),
                Highlights::new()
                    .with(Role::Current, Mark::node(current))
                    .with(Role::Visited, self.settled(&order)),
                vars! { "queue" => queue, "current" => current },
            );

            for &(neighbor, _) in self.neighbors(current) {
                if !seen.insert(neighbor) {
                    continue;
                }
                queue.push_back(neighbor);
                rec.bump("discovered");
                rec.record(
                    self.view(),
                    format!("Enqueue neighbor {}.", neighbor),
                    Highlights::new()
                        .with(Role::Frontier, Mark::node(neighbor))
                        .with(Role::Visited, self.settled(&order)),
                    vars! { "queue" => queue, "current" => current },
                );
            }
        }

        rec.record(
            self.view(),
            "BFS complete.",
            Highlights::new().with(Role::Visited, self.settled(&order)),
            vars! { "order" => order },
        );
        order
    }

    /// Depth-first traversal with an explicit stack; returns the visit order.
    ///
    /// The top of the stack is visited, then its first unvisited neighbor is
    /// pushed. A node is popped silently once it has none left.
    pub fn record_dfs(&self, start: i64, rec: &mut FrameRecorder) -> Vec<i64> {
        rec.track(&["visited"]);
        let mut seen = FxHashSet::default();
        let mut stack = vec![start];
        let mut order = Vec::new();

        rec.record(
            self.view(),
            format!("Start DFS from node {}.", start),
            Highlights::new().with(Role::Current, Mark::node(start)),
            vars! { "stack" => stack },
        );

        while let Some(&current) = stack.last() {
            if seen.insert(current) {
                order.push(current);
                rec.bump("visited");
                rec.record(
                    self.view(),
                    format!("Visit node {}.", current),
                    Highlights::new()
                        .with(Role::Current, Mark::node(current))
                        .with(Role::Visited, self.settled(&order)),
                    vars! { "stack" => stack, "current" => current },
                );
            }

            let next = self
                .neighbors(current)
                .iter()
                .map(|&(neighbor, _)| neighbor)
                .find(|neighbor| !seen.contains(neighbor));
            match next {
                Some(neighbor) => {
                    stack.push(neighbor);
                    rec.record(
                        self.view(),
                        format!("Push neighbor {}.", neighbor),
                        Highlights::new()
                            .with(Role::Frontier, Mark::node(neighbor))
                            .with(Role::Visited, self.settled(&order)),
                        vars! { "stack" => stack, "current" => current },
                    );
                }
                None => {
                    stack.pop();
                }
            }
        }

        rec.record(
            self.view(),
            "DFS complete.",
            Highlights::new().with(Role::Visited, self.settled(&order)),
            vars! { "order" => order },
        );
        order
    }

    /// Distance table in node order, `null` for unreached nodes
    fn distance_table(&self, start: i64, dist: &Distances) -> serde_json::Value {
        let mut table = serde_json::Map::new();
        let known = std::iter::once(start).filter(|s| !self.contains(*s));
        for node in self.nodes.iter().copied().chain(known) {
            table.insert(node.to_string(), dist.get(&node).copied().into());
        }
        serde_json::Value::Object(table)
    }

    /// Dijkstra over a binary heap of `(distance, node)`; stale pops are skipped
    pub fn record_dijkstra(&self, start: i64, rec: &mut FrameRecorder) -> Distances {
        rec.track(&["settled", "relaxations"]);
        let mut dist = Distances::default();
        let mut settled = Vec::new();
        let mut heap = BinaryHeap::from([Reverse((0u64, start))]);
        dist.insert(start, 0);

        rec.record(
            self.view(),
            format!("Start Dijkstra from node {}.", start),
            Highlights::new().with(Role::Current, Mark::node(start)),
            vars! { "distances" => self.distance_table(start, &dist) },
        );

        while let Some(Reverse((d, current))) = heap.pop() {
            if dist.get(&current).is_some_and(|&best| d > best) || settled.contains(&current) {
                continue;
            }
            settled.push(current);
            rec.bump("settled");
            rec.record(
                self.view(),
                format!("Process node {} with dist {}.", current, d),
                Highlights::new()
                    .with(Role::Current, Mark::node(current))
                    .with(Role::Visited, self.settled(&settled)),
                vars! { "current" => current, "dist" => d },
            );

            for &(neighbor, weight) in self.neighbors(current) {
                let candidate = d.saturating_add(weight);
                if dist.get(&neighbor).is_some_and(|&best| candidate >= best) {
                    continue;
                }
                dist.insert(neighbor, candidate);
                heap.push(Reverse((candidate, neighbor)));
                rec.bump("relaxations");
                rec.record(
                    self.view(),
                    format!("Update dist to {} as {}.", neighbor, candidate),
                    Highlights::new()
                        .with(Role::Frontier, Mark::node(neighbor))
                        .with(Role::Visited, self.settled(&settled)),
                    vars! { "updated" => neighbor, "new_dist" => candidate, "via" => current },
                );
            }
        }

        rec.record(
            self.view(),
            "Dijkstra complete.",
            Highlights::new().with(Role::Visited, self.settled(&settled)),
            vars! { "final_distances" => self.distance_table(start, &dist) },
        );
        dist
    }

    pub fn run(&self, algorithm: GraphAlgorithm, start: i64) -> FrameStream {
        let mut rec = FrameRecorder::new();
        self.record(algorithm, start, &mut rec);
        rec.finish()
    }

    pub fn record(&self, algorithm: GraphAlgorithm, start: i64, rec: &mut FrameRecorder) {
        match algorithm {
            GraphAlgorithm::Bfs => {
                self.record_bfs(start, rec);
            }
            GraphAlgorithm::Dfs => {
                self.record_dfs(start, rec);
            }
            GraphAlgorithm::Dijkstra => {
                self.record_dijkstra(start, rec);
            }
        }
    }

    pub fn bfs_order(&self, start: i64) -> Vec<i64> {
        self.record_bfs(start, &mut FrameRecorder::new())
    }

    pub fn dfs_order(&self, start: i64) -> Vec<i64> {
        self.record_dfs(start, &mut FrameRecorder::new())
    }

    pub fn shortest_distances(&self, start: i64) -> Distances {
        self.record_dijkstra(start, &mut FrameRecorder::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Frame;

    fn sample() -> Graph {
        Graph::from_edges(
            &[
                Edge::new(0, 1, 4),
                Edge::new(0, 2, 1),
                Edge::new(2, 1, 2),
                Edge::new(1, 3, 5),
            ],
            false,
        )
    }

    #[test]
    fn test_nodes_keep_first_seen_order() {
        let graph = sample();
        assert_eq!(graph.nodes(), &[0, 1, 2, 3]);
        assert_eq!(graph.neighbors(1), &[(0, 4), (2, 2), (3, 5)]);
        assert_eq!(graph.edge_count(), 8);
    }

    #[test]
    fn test_directed_edges_are_one_way() {
        let graph = Graph::from_edges(&[Edge::new(1, 2, 1)], true);
        assert_eq!(graph.neighbors(1), &[(2, 1)]);
        assert!(graph.neighbors(2).is_empty());
    }

    #[test]
    fn test_bfs_visits_each_node_once() {
        let graph = sample();
        assert_eq!(graph.bfs_order(0), vec![0, 1, 2, 3]);
        let frames: Vec<Frame> = graph.run(GraphAlgorithm::Bfs, 0).collect();
        let last = frames.last().unwrap();
        assert_eq!(last.metric("visited"), 4);
        assert_eq!(last.narration(), "BFS complete.");
    }

    #[test]
    fn test_dfs_follows_first_unvisited_neighbor() {
        let graph = sample();
        assert_eq!(graph.dfs_order(0), vec![0, 1, 2, 3]);
        assert_eq!(graph.dfs_order(3), vec![3, 1, 0, 2]);
    }

    #[test]
    fn test_dijkstra_distances() {
        let dist = sample().shortest_distances(0);
        assert_eq!(dist.get(&0), Some(&0));
        assert_eq!(dist.get(&2), Some(&1));
        assert_eq!(dist.get(&1), Some(&3));
        assert_eq!(dist.get(&3), Some(&8));
    }

    #[test]
    fn test_unknown_start_is_visited_alone() {
        let graph = sample();
        assert_eq!(graph.bfs_order(42), vec![42]);
        assert_eq!(graph.dfs_order(42), vec![42]);
        let frames: Vec<Frame> = graph.run(GraphAlgorithm::Dijkstra, 42).collect();
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[2].data()["final_distances"]["42"], 0);
        assert!(frames[2].data()["final_distances"]["0"].is_null());
    }
}
