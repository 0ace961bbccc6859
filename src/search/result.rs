//! Search result types and statistics

use crate::search::config::Strategy;
use std::time::Duration;

/// Result of one search invocation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Strategy that produced the result
    pub strategy: Strategy,
    /// Board size searched
    pub board_size: usize,
    /// Workers requested (1 for the sequential search)
    pub workers: usize,
    /// Exact number of complete placements
    pub solutions: u64,
    /// Statistics from the search
    pub statistics: SearchStatistics,
}

/// Work attributed to a single worker thread
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkerStatistics {
    pub worker_id: usize,
    /// First-column rows this worker explored
    pub first_rows: Vec<usize>,
    pub nodes_visited: u64,
    pub solutions: u64,
}

/// Statistics from a search operation
#[derive(Debug, Clone, Default)]
pub struct SearchStatistics {
    /// Wall-clock time of the search phase
    pub elapsed_time: Duration,
    /// Candidate squares tested by the validator
    pub nodes_visited: u64,
    /// Per-worker breakdown (empty for the sequential search)
    pub worker_statistics: Vec<WorkerStatistics>,
}

impl SearchStatistics {
    /// Candidates tested per second
    pub fn throughput(&self) -> f64 {
        let secs = self.elapsed_time.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.nodes_visited as f64 / secs
        }
    }

    /// Ratio of the busiest worker's nodes to the mean, 1.0 when perfectly even
    pub fn imbalance(&self) -> f64 {
        let workers = &self.worker_statistics;
        if workers.is_empty() || self.nodes_visited == 0 {
            return 1.0;
        }
        let max = workers.iter().map(|w| w.nodes_visited).max().unwrap_or(0);
        let mean = self.nodes_visited as f64 / workers.len() as f64;
        max as f64 / mean
    }

    /// Format statistics as a human-readable string
    pub fn format_summary(&self) -> String {
        let mut s = String::new();
        s.push_str(&format!("Time: {:.2?}\n", self.elapsed_time));
        s.push_str(&format!("Nodes visited: {}\n", self.nodes_visited));
        s.push_str(&format!("Throughput: {:.0} nodes/sec\n", self.throughput()));

        if !self.worker_statistics.is_empty() {
            s.push_str(&format!("Load imbalance: {:.2}\n", self.imbalance()));
            for worker in &self.worker_statistics {
                s.push_str(&format!(
                    "  worker {}: rows {:?}, {} nodes, {} solutions\n",
                    worker.worker_id, worker.first_rows, worker.nodes_visited, worker.solutions
                ));
            }
        }

        s
    }
}

impl std::fmt::Display for SearchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.strategy {
            Strategy::Sequential => writeln!(f, "Strategy: sequential")?,
            strategy => writeln!(f, "Strategy: {} with {} workers", strategy, self.workers)?,
        }
        writeln!(
            f,
            "{} queens: {} solutions",
            self.board_size, self.solutions
        )?;
        writeln!(
            f,
            "Execution time: {:.6}s",
            self.statistics.elapsed_time.as_secs_f64()
        )
    }
}
