//! Error type shared by every solver family.

/// Invalid input rejected by a solver.
///
/// Errors are local to one solve call. Calling again with corrected input
/// is always safe because no solver keeps state between calls.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SolverError {
    /// The distance matrix has no rows.
    #[error("Invalid distance matrix: matrix is empty")]
    EmptyMatrix,

    /// A matrix row has the wrong length.
    #[error("Invalid distance matrix: row {row} has {len} entries, expected {expected}")]
    NonSquareMatrix {
        /// Offending row.
        row: usize,
        /// Its length.
        len: usize,
        /// Number of rows in the matrix.
        expected: usize,
    },

    /// A distance is negative or not a finite number.
    #[error("Invalid distance matrix: entry ({row}, {col}) is negative or not finite")]
    InvalidDistance {
        /// Row of the bad entry.
        row: usize,
        /// Column of the bad entry.
        col: usize,
    },

    /// Home index outside the matrix.
    #[error("Invalid home city index {home} for {size} cities")]
    HomeOutOfRange {
        /// Requested home index.
        home: usize,
        /// Number of cities.
        size: usize,
    },

    /// Target index outside the matrix.
    #[error("Invalid target city index {target} for {size} cities")]
    TargetOutOfRange {
        /// Requested target index.
        target: usize,
        /// Number of cities.
        size: usize,
    },

    /// The same target city was listed twice.
    #[error("Target city {0} listed more than once")]
    DuplicateTarget(usize),

    /// The home city was also listed as a target.
    #[error("Home city {0} cannot also be a target")]
    HomeInTargets(usize),

    /// No target cities were given.
    #[error("No target cities provided")]
    NoTargets,

    /// Fewer than three pegs.
    #[error("Invalid peg count {0}: at least 3 pegs are required")]
    InvalidPegCount(usize),

    /// Peg labels are repeated or do not include a requested peg.
    #[error("Invalid peg label: {0}")]
    InvalidPegLabel(char),

    /// Move generation was asked for more disks than can be listed.
    #[error("Too many disks for move generation: {0}")]
    TooManyDisks(u32),

    /// Board too small to play on or to place ladders and snakes.
    #[error("Invalid board size {0}: too small for a game")]
    InvalidBoardSize(u32),

    /// Ladder/snake layout that breaks the board invariants.
    #[error("Malformed board: {0}")]
    MalformedBoard(String),

    /// Max-flow source and sink are the same node.
    #[error("Source and sink are the same node: {0}")]
    SameSourceAndSink(String),

    /// Parallel solver asked for an unusable number of workers.
    #[error("Invalid worker count {0}: must be between 1 and 8")]
    InvalidWorkerCount(usize),

    /// A search worker panicked before reporting its solutions.
    #[error("Worker for partition {partition} failed: {reason}")]
    WorkerFailed {
        /// First-row column the worker was searching.
        partition: usize,
        /// Panic payload, if it was a string.
        reason: String,
    },

    /// The worker thread pool could not be created.
    #[error("Failed to build worker pool: {0}")]
    ThreadPool(String),
}
