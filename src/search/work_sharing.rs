//! Work-sharing search on a rayon pool.
//!
//! Each of the N first-column rows becomes an independent task with its own
//! seeded placement; the pool schedules them over `workers` threads. The
//! counter is a plain atomic.

use crate::errors::Result;
use crate::search::config::{SearchConfig, Strategy};
use crate::search::counter::AtomicCounter;
use crate::search::observer::SolutionObserver;
use crate::search::parallel::{run_first_choice_search, WorkSharingPool};
use crate::search::result::SearchResult;
use crate::search::SearchStrategy;
use log::info;

#[derive(Debug, Default, Clone, Copy)]
pub struct WorkSharingSearch;

impl WorkSharingSearch {
    pub fn new() -> Self {
        Self
    }
}

impl SearchStrategy for WorkSharingSearch {
    fn strategy(&self) -> Strategy {
        Strategy::WorkSharing
    }

    fn search(
        &self,
        config: &SearchConfig,
        observer: &dyn SolutionObserver,
    ) -> Result<SearchResult> {
        config.validate()?;
        info!(
            "Starting work-sharing search for {} queens on a pool of {}",
            config.board_size, config.workers
        );

        let counter = AtomicCounter::new();
        let outcome = run_first_choice_search(
            &WorkSharingPool::new(config.workers),
            &counter,
            config,
            observer,
        )?;

        Ok(SearchResult {
            strategy: Strategy::WorkSharing,
            board_size: config.board_size,
            workers: config.workers,
            solutions: outcome.solutions,
            statistics: outcome.statistics,
        })
    }
}
