//! Residual graph used by both augmenting-path strategies.
//!
//! Nodes are interned to dense indices. Residual capacity lives in a map
//! keyed by `(from, to)` index pairs, and the zero-capacity reverse entry of
//! every edge is created up front so augmentation never meets a missing key.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A directed road with a capacity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlowEdge {
    /// Tail node.
    pub from: String,
    /// Head node.
    pub to: String,
    /// Maximum flow along the edge.
    pub capacity: u64,
}

impl FlowEdge {
    /// Create an edge.
    pub fn new(from: impl Into<String>, to: impl Into<String>, capacity: u64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            capacity,
        }
    }
}

/// Residual capacities over interned nodes.
#[derive(Debug, Clone, Default)]
pub struct FlowNetwork {
    names: Vec<String>,
    index: FxHashMap<String, usize>,
    neighbors: Vec<Vec<usize>>,
    residual: FxHashMap<(usize, usize), u64>,
}

impl FlowNetwork {
    /// Build the residual graph for `edges`.
    ///
    /// Parallel edges between the same pair add up, saturating at
    /// `u64::MAX`.
    pub fn from_edges(edges: &[FlowEdge]) -> Self {
        let mut network = Self::default();
        for edge in edges {
            let u = network.intern(&edge.from);
            let v = network.intern(&edge.to);
            network.link(u, v);
            network.link(v, u);
            let capacity = network.residual.entry((u, v)).or_insert(0);
            *capacity = capacity.saturating_add(edge.capacity);
        }
        network
    }

    fn intern(&mut self, name: &str) -> usize {
        if let Some(&i) = self.index.get(name) {
            return i;
        }
        let i = self.names.len();
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), i);
        self.neighbors.push(Vec::new());
        i
    }

    fn link(&mut self, u: usize, v: usize) {
        if !self.residual.contains_key(&(u, v)) {
            self.residual.insert((u, v), 0);
            self.neighbors[u].push(v);
        }
    }

    /// Index of the node called `name`.
    pub fn node(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Name of node `i`.
    pub fn name(&self, i: usize) -> Option<&str> {
        self.names.get(i).map(String::as_str)
    }

    /// Number of distinct nodes.
    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    /// Remaining capacity from `u` to `v`, zero for unrelated nodes.
    pub fn residual(&self, u: usize, v: usize) -> u64 {
        self.residual.get(&(u, v)).copied().unwrap_or(0)
    }

    /// Augmenting path found depth first, as node indices from `source` to
    /// `sink`.
    pub fn find_path_dfs(&self, source: usize, sink: usize) -> Option<Vec<usize>> {
        let mut visited = vec![false; self.node_count()];
        let mut path = vec![source];
        visited[source] = true;
        self.dfs(source, sink, &mut visited, &mut path).then_some(path)
    }

    fn dfs(&self, u: usize, sink: usize, visited: &mut [bool], path: &mut Vec<usize>) -> bool {
        if u == sink {
            return true;
        }
        for &v in &self.neighbors[u] {
            if visited[v] || self.residual(u, v) == 0 {
                continue;
            }
            visited[v] = true;
            path.push(v);
            if self.dfs(v, sink, visited, path) {
                return true;
            }
            path.pop();
        }
        false
    }

    /// Shortest augmenting path by edge count, found breadth first.
    pub fn find_path_bfs(&self, source: usize, sink: usize) -> Option<Vec<usize>> {
        let mut parent = vec![usize::MAX; self.node_count()];
        let mut queue = VecDeque::new();
        parent[source] = source;
        queue.push_back(source);

        while let Some(u) = queue.pop_front() {
            if u == sink {
                break;
            }
            for &v in &self.neighbors[u] {
                if parent[v] == usize::MAX && self.residual(u, v) > 0 {
                    parent[v] = u;
                    queue.push_back(v);
                }
            }
        }
        if parent[sink] == usize::MAX {
            return None;
        }

        let mut path = vec![sink];
        let mut v = sink;
        while v != source {
            v = parent[v];
            path.push(v);
        }
        path.reverse();
        Some(path)
    }

    /// Push the bottleneck of `path` through it and return that amount.
    pub fn augment(&mut self, path: &[usize]) -> u64 {
        let bottleneck = path
            .windows(2)
            .map(|leg| self.residual(leg[0], leg[1]))
            .min()
            .unwrap_or(0);
        for leg in path.windows(2) {
            if let Some(forward) = self.residual.get_mut(&(leg[0], leg[1])) {
                *forward -= bottleneck;
            }
            if let Some(reverse) = self.residual.get_mut(&(leg[1], leg[0])) {
                *reverse = reverse.saturating_add(bottleneck);
            }
        }
        bottleneck
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> FlowNetwork {
        FlowNetwork::from_edges(&[
            FlowEdge::new("S", "A", 3),
            FlowEdge::new("S", "B", 2),
            FlowEdge::new("A", "T", 2),
            FlowEdge::new("B", "T", 3),
            FlowEdge::new("A", "B", 1),
        ])
    }

    #[test]
    fn test_reverse_edges_exist_up_front() {
        let net = diamond();
        let (s, a) = (net.node("S").unwrap(), net.node("A").unwrap());

        assert_eq!(net.node_count(), 4);
        assert_eq!(net.residual(s, a), 3);
        assert_eq!(net.residual(a, s), 0);
        assert!(net.residual.contains_key(&(a, s)));
        assert_eq!(net.name(s), Some("S"));
    }

    #[test]
    fn test_parallel_edges_sum() {
        let net = FlowNetwork::from_edges(&[FlowEdge::new("A", "B", 4), FlowEdge::new("A", "B", 6)]);
        assert_eq!(net.residual(0, 1), 10);
        assert_eq!(net.neighbors[0], vec![1]);
    }

    #[test]
    fn test_parallel_edges_saturate_at_max() {
        let net = FlowNetwork::from_edges(&[
            FlowEdge::new("A", "B", u64::MAX),
            FlowEdge::new("A", "B", 7),
        ]);
        assert_eq!(net.residual(0, 1), u64::MAX);
    }

    #[test]
    fn test_augment_saturates_full_reverse_edge() {
        let mut net = FlowNetwork::from_edges(&[
            FlowEdge::new("S", "T", u64::MAX),
            FlowEdge::new("T", "S", u64::MAX),
        ]);
        let path = net.find_path_bfs(0, 1).unwrap();

        assert_eq!(net.augment(&path), u64::MAX);
        assert_eq!(net.residual(0, 1), 0);
        assert_eq!(net.residual(1, 0), u64::MAX);
    }

    #[test]
    fn test_bfs_finds_shortest_path() {
        let net = diamond();
        let (s, t) = (net.node("S").unwrap(), net.node("T").unwrap());
        let path = net.find_path_bfs(s, t).unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path.first(), Some(&s));
        assert_eq!(path.last(), Some(&t));
    }

    #[test]
    fn test_augment_moves_capacity_to_reverse_edges() {
        let mut net = diamond();
        let (s, t) = (net.node("S").unwrap(), net.node("T").unwrap());
        let path = net.find_path_dfs(s, t).unwrap();

        let pushed = net.augment(&path);
        assert!(pushed > 0);
        for leg in path.windows(2) {
            assert!(net.residual(leg[1], leg[0]) >= pushed);
        }
    }

    #[test]
    fn test_no_path_when_saturated() {
        let mut net = FlowNetwork::from_edges(&[FlowEdge::new("S", "T", 5)]);
        let path = net.find_path_dfs(0, 1).unwrap();
        assert_eq!(net.augment(&path), 5);
        assert_eq!(net.find_path_dfs(0, 1), None);
        assert_eq!(net.find_path_bfs(0, 1), None);
        assert_eq!(net.residual(1, 0), 5);
    }
}
