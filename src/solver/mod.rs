//! Shared solver infrastructure.
//!
//! The five puzzle families are independent of each other; this module holds
//! only what they have in common:
//!
//! - [`config`]: the [`SolverConfig`] budgets, limits and generator ranges
//! - [`error`]: the [`SolverError`] returned for invalid input
//! - [`timing`]: wall-clock measurement for result `time_taken_ms` fields
//! - the [`Algorithm`] trait that names each strategy for reports

pub mod config;
pub mod error;
pub mod timing;

pub use config::{ConfigError, SolverConfig, ValueRange};
pub use error::SolverError;
pub use timing::timed;

/// A named solving strategy.
///
/// Every family exposes its interchangeable strategies as an enum
/// implementing this trait, so results and reports can label what produced
/// them.
pub trait Algorithm {
    /// Human-readable algorithm name (e.g. "Edmonds-Karp").
    fn name(&self) -> &'static str;

    /// Asymptotic running time (e.g. "O(V * E^2)").
    fn complexity(&self) -> &'static str;
}
