//! Report channel from search workers back to the coordinator.

use crate::search::backtrack::BranchStats;
use crate::search::result::WorkerStatistics;
use crossbeam_channel::{unbounded, Receiver, Sender};

/// Sent by a worker when it finishes one first-column subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskReport {
    pub worker_id: usize,
    /// Row of the queen in column 1 that seeded the subtree
    pub first_row: usize,
    pub stats: BranchStats,
}

/// Create the report channel. Unbounded so workers never block on it.
pub fn report_channel() -> (Sender<TaskReport>, Receiver<TaskReport>) {
    unbounded()
}

/// Drain every pending report into one entry per worker.
///
/// Must be called after all senders are dropped, otherwise it waits for them.
pub fn collect_worker_statistics(
    reports: &Receiver<TaskReport>,
    workers: usize,
) -> Vec<WorkerStatistics> {
    let mut statistics: Vec<WorkerStatistics> = (0..workers)
        .map(|worker_id| WorkerStatistics {
            worker_id,
            ..Default::default()
        })
        .collect();

    for report in reports.iter() {
        while statistics.len() <= report.worker_id {
            let worker_id = statistics.len();
            statistics.push(WorkerStatistics {
                worker_id,
                ..Default::default()
            });
        }
        let entry = &mut statistics[report.worker_id];
        entry.first_rows.push(report.first_row);
        entry.nodes_visited += report.stats.nodes_visited;
        entry.solutions += report.stats.solutions;
    }

    for entry in &mut statistics {
        entry.first_rows.sort_unstable();
    }
    statistics
}
