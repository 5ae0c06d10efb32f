//! The five puzzle families.
//!
//! Each family is self-contained: it owns its input types, its strategies
//! and its result types, and shares nothing with the others beyond the
//! [`crate::solver`] infrastructure.
//!
//! | Family | Strategies |
//! |--------|------------|
//! | [`hanoi`] | 3-peg recursive and iterative, Frame–Stewart, 4-peg naive |
//! | [`tsp`] | brute force, nearest neighbor, Held–Karp |
//! | [`board_path`] | BFS, fixed-point relaxation |
//! | [`queens`] | sequential and partitioned parallel backtracking |
//! | [`max_flow`] | Ford–Fulkerson, Edmonds–Karp |

pub mod board_path;
pub mod hanoi;
pub mod max_flow;
pub mod queens;
pub mod tsp;
