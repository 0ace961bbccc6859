//! Search strategies for counting N-Queens solutions
//!
//! All strategies share one backtracking core and differ only in how the work
//! is spread over execution units:
//! - Sequential: recursive search on the calling thread
//! - Partitioned: one OS thread per residue class of the first-column rows,
//!   mutex-guarded counter
//! - Work-sharing: every first-column row is a task on a rayon pool, atomic
//!   counter

pub mod backtrack;
pub mod config;
pub mod counter;
pub mod observer;
pub mod parallel;
pub mod partitioned;
pub mod result;
pub mod sequential;
pub mod work_sharing;

pub use config::{SearchConfig, Strategy};
pub use observer::{
    CollectingObserver, CompositeObserver, NoopObserver, PrintObserver, SolutionObserver,
};
pub use partitioned::PartitionedSearch;
pub use result::SearchResult;
pub use sequential::SequentialSearch;
pub use work_sharing::WorkSharingSearch;

use crate::errors::Result;

/// A way of distributing the backtracking search
pub trait SearchStrategy {
    /// Which strategy this is
    fn strategy(&self) -> Strategy;

    /// Count every solution for `config`
    ///
    /// # Arguments
    /// * `config` - Board size and worker count, validated before any work starts
    /// * `observer` - Notified of every complete placement
    ///
    /// # Returns
    /// The exact solution count and the wall-clock time of the search phase
    fn search(&self, config: &SearchConfig, observer: &dyn SolutionObserver)
        -> Result<SearchResult>;
}

/// Build the search for `strategy`
pub fn strategy_for(strategy: Strategy) -> Box<dyn SearchStrategy> {
    match strategy {
        Strategy::Sequential => Box::new(SequentialSearch::new()),
        Strategy::Partitioned => Box::new(PartitionedSearch::new()),
        Strategy::WorkSharing => Box::new(WorkSharingSearch::new()),
    }
}
