//! Configuration options shared by the puzzle solvers.
//!
//! Every tunable of the solver core lives here: iteration and attempt
//! budgets, the Held–Karp size limit, worker counts for the parallel queens
//! search, and the value ranges used by the random input generators.

use std::fs;
use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::puzzles::queens::BOARD_SIZE;
use crate::puzzles::tsp::HELD_KARP_MAX_TARGETS;

/// Inclusive integer range used by the random generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRange {
    /// Smallest value that can be drawn.
    pub min: u32,
    /// Largest value that can be drawn.
    pub max: u32,
}

impl ValueRange {
    /// Create a new inclusive range.
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies within the range.
    pub fn contains(&self, value: u32) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Configuration for the solver core.
///
/// # Example
/// ```
/// use puzzle_solvers::SolverConfig;
///
/// let config = SolverConfig::default();
/// assert_eq!(config.max_flow_iterations, 1000);
/// assert_eq!(config.held_karp_limit, 12);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Maximum number of augmenting paths either max-flow strategy pushes.
    ///
    /// Reaching the cap logs a warning and returns the flow found so far.
    pub max_flow_iterations: usize,

    /// Largest target count solved exactly by Held–Karp.
    ///
    /// Larger instances fall back to nearest neighbor.
    pub held_karp_limit: usize,

    /// Rejection-sampling attempts per ladder or snake during board generation.
    pub board_attempts: usize,

    /// Number of worker threads for the partitioned queens search.
    ///
    /// `None` uses one worker per first-row column.
    pub queens_workers: Option<usize>,

    /// Random seed for the generators.
    ///
    /// If `None`, each generator draws its seed from entropy.
    pub seed: Option<u64>,

    /// Distances drawn by the random TSP matrix generator (km).
    pub distance_range: ValueRange,

    /// Capacities drawn by the random traffic network generator.
    pub capacity_range: ValueRange,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_flow_iterations: 1000,
            held_karp_limit: 12,
            board_attempts: 100,
            queens_workers: None,
            seed: None,
            distance_range: ValueRange::new(50, 100),
            capacity_range: ValueRange::new(5, 15),
        }
    }
}

impl SolverConfig {
    /// Create a new config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Default settings with a fixed seed, for reproducible rounds.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    /// Builder method: set the max-flow augmentation cap.
    pub fn with_max_flow_iterations(mut self, iterations: usize) -> Self {
        self.max_flow_iterations = iterations;
        self
    }

    /// Builder method: set the Held–Karp target limit.
    pub fn with_held_karp_limit(mut self, limit: usize) -> Self {
        self.held_karp_limit = limit;
        self
    }

    /// Builder method: set the board generation attempt budget.
    pub fn with_board_attempts(mut self, attempts: usize) -> Self {
        self.board_attempts = attempts;
        self
    }

    /// Builder method: set the number of queens workers.
    pub fn with_queens_workers(mut self, workers: usize) -> Self {
        self.queens_workers = Some(workers);
        self
    }

    /// Builder method: set random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of queens workers, resolving `None` to one per partition.
    pub fn queens_worker_count(&self) -> usize {
        self.queens_workers.unwrap_or(BOARD_SIZE)
    }

    /// Build a random generator from the configured seed.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Load configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_json_str(&content)
    }

    /// Parse configuration from a JSON string.
    ///
    /// Missing fields take their default values.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration and return the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_flow_iterations == 0 {
            return Err(ConfigError::ZeroBudget("max_flow_iterations"));
        }
        if self.board_attempts == 0 {
            return Err(ConfigError::ZeroBudget("board_attempts"));
        }
        if self.held_karp_limit > HELD_KARP_MAX_TARGETS {
            return Err(ConfigError::HeldKarpLimitTooLarge(self.held_karp_limit));
        }

        if let Some(workers) = self.queens_workers {
            if workers == 0 || workers > BOARD_SIZE {
                return Err(ConfigError::InvalidWorkers(workers));
            }
        }

        if self.distance_range.min > self.distance_range.max {
            return Err(ConfigError::InvertedRange("distance_range"));
        }
        if self.capacity_range.min > self.capacity_range.max {
            return Err(ConfigError::InvertedRange("capacity_range"));
        }

        Ok(())
    }
}

/// Errors that can occur when loading or validating a [`SolverConfig`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("IO error: {0}")]
    Io(String),
    /// The config file is not valid JSON for this schema.
    #[error("Parse error: {0}")]
    Parse(String),
    /// A budget that must be positive is zero.
    #[error("{0} must be greater than zero")]
    ZeroBudget(&'static str),
    /// Worker count outside `1..=8`.
    #[error("Invalid queens worker count: {0} (must be 1-8)")]
    InvalidWorkers(usize),
    /// Held–Karp limit above [`HELD_KARP_MAX_TARGETS`].
    #[error("Held-Karp limit {0} is too large (max {max})", max = HELD_KARP_MAX_TARGETS)]
    HeldKarpLimitTooLarge(usize),
    /// A range with `min > max`.
    #[error("{0} has min greater than max")]
    InvertedRange(&'static str),
}
