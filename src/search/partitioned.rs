//! Thread-partitioned search.
//!
//! Exactly `workers` OS threads are created. Worker `id` owns the first-column
//! rows with `row % workers == id` and runs the full backtracking below each
//! of them. Solutions are counted under a mutex, the only state the workers
//! share.

use crate::errors::Result;
use crate::search::config::{SearchConfig, Strategy};
use crate::search::counter::LockedCounter;
use crate::search::observer::SolutionObserver;
use crate::search::parallel::{run_first_choice_search, ResidueThreads};
use crate::search::result::SearchResult;
use crate::search::SearchStrategy;
use log::info;

#[derive(Debug, Default, Clone, Copy)]
pub struct PartitionedSearch;

impl PartitionedSearch {
    pub fn new() -> Self {
        Self
    }
}

impl SearchStrategy for PartitionedSearch {
    fn strategy(&self) -> Strategy {
        Strategy::Partitioned
    }

    fn search(
        &self,
        config: &SearchConfig,
        observer: &dyn SolutionObserver,
    ) -> Result<SearchResult> {
        config.validate()?;
        info!(
            "Starting partitioned search for {} queens on {} threads",
            config.board_size, config.workers
        );

        let counter = LockedCounter::new();
        let outcome = run_first_choice_search(
            &ResidueThreads::new(config.workers),
            &counter,
            config,
            observer,
        )?;

        Ok(SearchResult {
            strategy: Strategy::Partitioned,
            board_size: config.board_size,
            workers: config.workers,
            solutions: outcome.solutions,
            statistics: outcome.statistics,
        })
    }
}
