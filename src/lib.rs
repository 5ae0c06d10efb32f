//! # Puzzle Solvers
//!
//! Exact and heuristic solvers for five classic puzzles. Each takes plain
//! inputs (disk counts, distance matrices, boards, edge lists) and returns
//! plain results (move lists, tours, throw counts, boards, flow values)
//! with wall-clock timings. Nothing here does I/O or keeps state between
//! calls.
//!
//! ## Features
//!
//! - **Tower of Hanoi**: optimal 3-peg sequences (recursive and iterative),
//!   Frame–Stewart counts for 4 pegs, a naive 4-peg baseline
//! - **Traveling Salesman**: brute force, nearest neighbor and Held–Karp,
//!   plus a checker for player tours
//! - **Snakes & Ladders**: board generation and fewest-throws search by BFS
//!   or relaxation
//! - **Eight Queens**: sequential and partitioned parallel backtracking
//! - **Max-Flow**: Ford–Fulkerson and Edmonds–Karp over a residual graph
//!
//! ## Quick Start
//!
//! ```
//! use puzzle_solvers::puzzles::{hanoi, queens};
//!
//! let moves = hanoi::generate_move_sequence(3, 'A', 'C', &['B']).unwrap();
//! assert_eq!(moves.len(), 7);
//!
//! let run = queens::solve_sequential();
//! assert_eq!(run.count, 92);
//! ```
//!
//! ## Modules
//!
//! - [`solver`]: configuration, errors, timing and the [`Algorithm`] trait
//! - [`puzzles`]: one sub-module per puzzle family
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                           solver                                │
//! │  - SolverConfig           - SolverError                         │
//! │  - timed()                - Algorithm trait                     │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               │ used by
//!                               ▼
//!      ┌──────────┬─────────────┼─────────────┬──────────┐
//!      │          │             │             │          │
//!      ▼          ▼             ▼             ▼          ▼
//!   ┌───────┐ ┌───────┐   ┌────────────┐ ┌────────┐ ┌──────────┐
//!   │ hanoi │ │  tsp  │   │ board_path │ │ queens │ │ max_flow │
//!   └───────┘ └───────┘   └────────────┘ └────────┘ └──────────┘
//! ```

#![warn(missing_docs)]

/// Shared solver infrastructure.
///
/// Configuration, the error type, timing and the algorithm naming trait.
pub mod solver;

/// Puzzle families.
///
/// Hanoi, TSP, Snakes & Ladders, Eight Queens and Max-Flow.
pub mod puzzles;

// Re-export commonly used types at crate root for convenience
pub use solver::{timed, Algorithm, ConfigError, SolverConfig, SolverError, ValueRange};
