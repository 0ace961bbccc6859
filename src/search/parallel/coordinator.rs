//! Coordinator that runs the first-column tasks and aggregates their reports.

use crate::board::Placement;
use crate::errors::Result;
use crate::search::backtrack::{BranchStats, Explorer};
use crate::search::config::SearchConfig;
use crate::search::counter::SolutionCounter;
use crate::search::observer::SolutionObserver;
use crate::search::parallel::channel::{collect_worker_statistics, report_channel, TaskReport};
use crate::search::parallel::FirstChoiceExecutor;
use crate::search::result::SearchStatistics;
use log::debug;
use std::time::Instant;

/// Result from parallel search execution.
#[derive(Debug)]
pub struct ParallelOutcome {
    /// Final value of the shared counter, read after every worker finished.
    pub solutions: u64,
    /// Timing, total nodes and the per-worker breakdown.
    pub statistics: SearchStatistics,
}

/// Search every completion of each first-column row on `executor`.
///
/// Each task owns a placement seeded with its row and explores from column 2.
/// Solutions are recorded through `counter`; the per-task reports only feed
/// statistics. `counter` must be freshly created for this invocation.
pub fn run_first_choice_search<E, C>(
    executor: &E,
    counter: &C,
    config: &SearchConfig,
    observer: &dyn SolutionObserver,
) -> Result<ParallelOutcome>
where
    E: FirstChoiceExecutor,
    C: SolutionCounter + Sync,
{
    let board_size = config.board_size;
    let (to_coordinator, from_workers) = report_channel();

    let start_time = Instant::now();
    executor.execute(board_size, |worker_id, first_row| {
        let explorer = Explorer::new(board_size, counter, observer);

        // The seeding queen is itself one tested candidate
        let mut stats = BranchStats {
            nodes_visited: 1,
            solutions: 0,
        };
        stats += explorer.explore(Placement::seeded(first_row));

        let _ = to_coordinator.send(TaskReport {
            worker_id,
            first_row,
            stats,
        });
    })?;
    let elapsed_time = start_time.elapsed();

    drop(to_coordinator);
    let worker_statistics = collect_worker_statistics(&from_workers, executor.workers());
    for worker in &worker_statistics {
        debug!(
            "Worker {} explored rows {:?}: {} nodes, {} solutions",
            worker.worker_id, worker.first_rows, worker.nodes_visited, worker.solutions
        );
    }

    let solutions = counter.total();
    debug_assert_eq!(
        worker_statistics.iter().map(|w| w.solutions).sum::<u64>(),
        solutions
    );

    Ok(ParallelOutcome {
        solutions,
        statistics: SearchStatistics {
            elapsed_time,
            nodes_visited: worker_statistics.iter().map(|w| w.nodes_visited).sum(),
            worker_statistics,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::counter::{AtomicCounter, LockedCounter};
    use crate::search::observer::NoopObserver;
    use crate::search::parallel::{ResidueThreads, WorkSharingPool};

    #[test]
    fn test_residue_threads_eight_queens() {
        let counter = LockedCounter::new();
        let outcome = run_first_choice_search(
            &ResidueThreads::new(3),
            &counter,
            &SearchConfig::new(8, 3),
            &NoopObserver,
        )
        .unwrap();

        assert_eq!(outcome.solutions, 92);
        assert_eq!(outcome.statistics.worker_statistics.len(), 3);
        assert_eq!(
            outcome.statistics.worker_statistics[1].first_rows,
            vec![1, 4, 7]
        );
    }

    #[test]
    fn test_pool_eight_queens() {
        let counter = AtomicCounter::new();
        let outcome = run_first_choice_search(
            &WorkSharingPool::new(4),
            &counter,
            &SearchConfig::new(8, 4),
            &NoopObserver,
        )
        .unwrap();

        assert_eq!(outcome.solutions, 92);
        let rows: usize = outcome
            .statistics
            .worker_statistics
            .iter()
            .map(|w| w.first_rows.len())
            .sum();
        assert_eq!(rows, 8);
    }

    #[test]
    fn test_idle_workers_contribute_nothing() {
        let counter = LockedCounter::new();
        let outcome = run_first_choice_search(
            &ResidueThreads::new(7),
            &counter,
            &SearchConfig::new(5, 7),
            &NoopObserver,
        )
        .unwrap();

        assert_eq!(outcome.solutions, 10);
        let workers = &outcome.statistics.worker_statistics;
        assert_eq!(workers.len(), 7);
        assert_eq!(workers[6].nodes_visited, 0);
        assert_eq!(workers[6].solutions, 0);
    }

    #[test]
    fn test_statistics_sum_matches_workers() {
        let counter = AtomicCounter::new();
        let outcome = run_first_choice_search(
            &WorkSharingPool::new(2),
            &counter,
            &SearchConfig::new(6, 2),
            &NoopObserver,
        )
        .unwrap();

        let per_worker: u64 = outcome
            .statistics
            .worker_statistics
            .iter()
            .map(|w| w.nodes_visited)
            .sum();
        assert_eq!(outcome.statistics.nodes_visited, per_worker);
        assert_eq!(outcome.solutions, 4);
    }
}
