//! Maximum flow through a capacitated road network.
//!
//! Both strategies repeat the same loop: find a source-to-sink path with
//! spare residual capacity, push its bottleneck through it, stop when no
//! path is left. They differ only in how the path is found.
//!
//! | Strategy | Path search | Complexity |
//! |----------|-------------|------------|
//! | [`FlowStrategy::FordFulkerson`] | depth first | `O(E * max_flow)` |
//! | [`FlowStrategy::EdmondsKarp`] | breadth first, shortest path | `O(V * E^2)` |
//!
//! The number of augmentations is capped (see
//! [`SolverConfig::max_flow_iterations`]); hitting the cap logs a warning
//! and returns the flow found so far with [`FlowResult::capped`] set.
//!
//! # Example
//! ```
//! use puzzle_solvers::puzzles::max_flow::{max_flow, FlowEdge, FlowStrategy};
//!
//! let edges = vec![FlowEdge::new("A", "B", 10), FlowEdge::new("B", "T", 5)];
//! assert_eq!(max_flow(&edges, "A", "T", FlowStrategy::EdmondsKarp).unwrap(), 5);
//! ```

pub mod network;
pub mod traffic;

pub use network::{FlowEdge, FlowNetwork};
pub use traffic::{random_traffic_network, TRAFFIC_ROADS, TRAFFIC_SINK, TRAFFIC_SOURCE};

use serde::{Deserialize, Serialize};

use crate::solver::{timed, Algorithm, SolverConfig, SolverError};

/// Augmenting-path search strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlowStrategy {
    /// Depth-first path search.
    FordFulkerson,
    /// Breadth-first path search.
    EdmondsKarp,
}

impl FlowStrategy {
    /// Both strategies.
    pub const ALL: [FlowStrategy; 2] = [FlowStrategy::FordFulkerson, FlowStrategy::EdmondsKarp];
}

impl Algorithm for FlowStrategy {
    fn name(&self) -> &'static str {
        match self {
            Self::FordFulkerson => "Ford-Fulkerson",
            Self::EdmondsKarp => "Edmonds-Karp",
        }
    }

    fn complexity(&self) -> &'static str {
        match self {
            Self::FordFulkerson => "O(E * max_flow)",
            Self::EdmondsKarp => "O(V * E^2)",
        }
    }
}

/// Outcome of one max-flow run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowResult {
    /// Total flow pushed from source to sink.
    pub max_flow: u64,
    /// Augmenting paths used.
    pub augmentations: usize,
    /// Whether the iteration cap stopped the run with paths still left.
    pub capped: bool,
    /// Wall-clock time in milliseconds.
    pub time_taken_ms: f64,
    /// Strategy used.
    pub algorithm: FlowStrategy,
}

/// Both strategies run on the same network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowComparison {
    /// Depth-first result.
    pub ford_fulkerson: FlowResult,
    /// Breadth-first result.
    pub edmonds_karp: FlowResult,
    /// Whether both found the same flow.
    pub agree: bool,
}

/// Max-flow solver with an augmentation cap.
#[derive(Debug, Clone, Copy)]
pub struct MaxFlowSolver {
    iteration_cap: usize,
}

impl Default for MaxFlowSolver {
    fn default() -> Self {
        Self::from_config(&SolverConfig::default())
    }
}

impl MaxFlowSolver {
    /// Solver using the cap from `config`.
    pub fn from_config(config: &SolverConfig) -> Self {
        Self {
            iteration_cap: config.max_flow_iterations,
        }
    }

    /// Maximum flow from `source` to `sink`.
    ///
    /// A source or sink that appears in no edge yields a flow of zero.
    pub fn solve(
        &self,
        edges: &[FlowEdge],
        source: &str,
        sink: &str,
        strategy: FlowStrategy,
    ) -> Result<FlowResult, SolverError> {
        if source == sink {
            return Err(SolverError::SameSourceAndSink(source.to_string()));
        }

        let ((max_flow, augmentations, capped), time_taken_ms) =
            timed(|| self.run(edges, source, sink, strategy));

        if capped {
            log::warn!(
                "{} stopped after {} augmentations with flow {}; result may be below the maximum",
                strategy.name(),
                augmentations,
                max_flow
            );
        }
        log::debug!(
            "{} {} -> {}: flow {} in {} augmentations, {:.3}ms",
            strategy.name(),
            source,
            sink,
            max_flow,
            augmentations,
            time_taken_ms
        );

        Ok(FlowResult {
            max_flow,
            augmentations,
            capped,
            time_taken_ms,
            algorithm: strategy,
        })
    }

    fn run(&self, edges: &[FlowEdge], source: &str, sink: &str, strategy: FlowStrategy) -> (u64, usize, bool) {
        let mut network = FlowNetwork::from_edges(edges);
        let (s, t) = match (network.node(source), network.node(sink)) {
            (Some(s), Some(t)) => (s, t),
            _ => return (0, 0, false),
        };
        let find = |net: &FlowNetwork| match strategy {
            FlowStrategy::FordFulkerson => net.find_path_dfs(s, t),
            FlowStrategy::EdmondsKarp => net.find_path_bfs(s, t),
        };

        let mut flow = 0;
        let mut augmentations = 0;
        while let Some(path) = find(&network) {
            if augmentations == self.iteration_cap {
                return (flow, augmentations, true);
            }
            flow = flow.saturating_add(network.augment(&path));
            augmentations += 1;
        }
        (flow, augmentations, false)
    }

    /// Run both strategies and compare them.
    ///
    /// A disagreement means one strategy is wrong; it is logged at error
    /// level and reported through [`FlowComparison::agree`].
    pub fn cross_check(&self, edges: &[FlowEdge], source: &str, sink: &str) -> Result<FlowComparison, SolverError> {
        let ford_fulkerson = self.solve(edges, source, sink, FlowStrategy::FordFulkerson)?;
        let edmonds_karp = self.solve(edges, source, sink, FlowStrategy::EdmondsKarp)?;
        let agree = ford_fulkerson.max_flow == edmonds_karp.max_flow;
        if !agree {
            log::error!(
                "max-flow mismatch {} -> {}: Ford-Fulkerson {}, Edmonds-Karp {}",
                source,
                sink,
                ford_fulkerson.max_flow,
                edmonds_karp.max_flow
            );
        }
        Ok(FlowComparison {
            ford_fulkerson,
            edmonds_karp,
            agree,
        })
    }
}

/// Maximum flow with the default augmentation cap.
pub fn max_flow(edges: &[FlowEdge], source: &str, sink: &str, strategy: FlowStrategy) -> Result<u64, SolverError> {
    MaxFlowSolver::default()
        .solve(edges, source, sink, strategy)
        .map(|r| r.max_flow)
}

/// [`MaxFlowSolver::cross_check`] with the default augmentation cap.
pub fn cross_check(edges: &[FlowEdge], source: &str, sink: &str) -> Result<FlowComparison, SolverError> {
    MaxFlowSolver::default().cross_check(edges, source, sink)
}
