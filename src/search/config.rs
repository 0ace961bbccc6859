//! Configuration types for search strategies

use crate::board::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::errors::{QueensError, Result};

/// Search strategy selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Single-threaded recursive backtracking
    Sequential,
    /// One OS thread per residue class of the first-column rows
    Partitioned,
    /// Each first-column row is a task on a managed thread pool
    #[default]
    WorkSharing,
}

impl Strategy {
    /// All strategies, in the order they are usually compared
    pub const ALL: [Strategy; 3] = [
        Strategy::Sequential,
        Strategy::Partitioned,
        Strategy::WorkSharing,
    ];
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Sequential => write!(f, "sequential"),
            Strategy::Partitioned => write!(f, "partitioned"),
            Strategy::WorkSharing => write!(f, "work-sharing"),
        }
    }
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "sequential" | "seq" | "serial" => Ok(Strategy::Sequential),
            "partitioned" | "threads" | "pthread" => Ok(Strategy::Partitioned),
            "work-sharing" | "pool" | "rayon" => Ok(Strategy::WorkSharing),
            _ => Err(format!(
                "Unknown strategy: '{}'. Valid options: sequential, partitioned, work-sharing",
                s
            )),
        }
    }
}

/// Board size and parallelism for one search invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Number of queens and side length of the board
    pub board_size: usize,
    /// Number of workers (threads or pool size); ignored by the sequential search
    pub workers: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            board_size: 8,
            workers: num_cpus::get(),
        }
    }
}

impl SearchConfig {
    pub fn new(board_size: usize, workers: usize) -> Self {
        Self {
            board_size,
            workers,
        }
    }

    /// Reject configurations no search may start with.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(QueensError::InvalidBoardSize {
                size: self.board_size,
                min: MIN_BOARD_SIZE,
                max: MAX_BOARD_SIZE,
            });
        }
        if self.workers < 1 {
            return Err(QueensError::InvalidWorkerCount {
                workers: self.workers,
            });
        }
        Ok(())
    }
}
