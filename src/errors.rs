//! Error types for queens operations.

use thiserror::Error;

/// Result type alias for queens operations
pub type Result<T> = std::result::Result<T, QueensError>;

/// Error type for queens operations
#[derive(Error, Debug)]
pub enum QueensError {
    /// Board size outside the supported range
    #[error("Invalid board size {size} (must be between {min} and {max})")]
    InvalidBoardSize {
        /// The requested board size
        size: usize,
        /// Smallest supported board size
        min: usize,
        /// Largest supported board size
        max: usize,
    },

    /// Worker count below one
    #[error("Invalid worker count {workers} (must be at least 1)")]
    InvalidWorkerCount {
        /// The requested worker count
        workers: usize,
    },

    /// The operating system refused to create a worker thread
    #[error("Failed to spawn worker {worker_id}: {source}")]
    WorkerSpawn {
        /// Index of the worker that could not be created
        worker_id: usize,
        /// Underlying spawn error
        #[source]
        source: std::io::Error,
    },

    /// A worker thread panicked before finishing its partition
    #[error("Worker {worker_id} panicked during search")]
    WorkerPanicked {
        /// Index of the worker that panicked
        worker_id: usize,
    },

    /// The work-sharing thread pool could not be built
    #[error("Failed to build thread pool: {0}")]
    PoolBuild(#[from] rayon::ThreadPoolBuildError),
}
