//! Single-threaded reference search

use crate::board::Placement;
use crate::errors::Result;
use crate::search::backtrack::Explorer;
use crate::search::config::{SearchConfig, Strategy};
use crate::search::counter::{LocalCounter, SolutionCounter};
use crate::search::observer::SolutionObserver;
use crate::search::result::{SearchResult, SearchStatistics};
use crate::search::SearchStrategy;
use log::info;
use std::time::Instant;

/// Recursive backtracking on the calling thread. `workers` is ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct SequentialSearch;

impl SequentialSearch {
    pub fn new() -> Self {
        Self
    }
}

impl SearchStrategy for SequentialSearch {
    fn strategy(&self) -> Strategy {
        Strategy::Sequential
    }

    fn search(
        &self,
        config: &SearchConfig,
        observer: &dyn SolutionObserver,
    ) -> Result<SearchResult> {
        config.validate()?;
        info!("Starting sequential search for {} queens", config.board_size);

        let counter = LocalCounter::new();
        let explorer = Explorer::new(config.board_size, &counter, observer);

        let start_time = Instant::now();
        let stats = explorer.explore(Placement::new());
        let elapsed_time = start_time.elapsed();

        Ok(SearchResult {
            strategy: Strategy::Sequential,
            board_size: config.board_size,
            workers: 1,
            solutions: counter.total(),
            statistics: SearchStatistics {
                elapsed_time,
                nodes_visited: stats.nodes_visited,
                worker_statistics: Vec::new(),
            },
        })
    }
}
