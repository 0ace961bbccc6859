//! Work-sharing over a managed rayon pool

use crate::errors::Result;
use crate::search::parallel::FirstChoiceExecutor;
use rayon::prelude::*;

/// Runs every first-column row as its own task on a dedicated pool of
/// `workers` threads. Rows are picked up by whichever thread is free.
#[derive(Debug, Clone, Copy)]
pub struct WorkSharingPool {
    workers: usize,
}

impl WorkSharingPool {
    pub fn new(workers: usize) -> Self {
        Self { workers }
    }
}

impl FirstChoiceExecutor for WorkSharingPool {
    fn workers(&self) -> usize {
        self.workers
    }

    fn execute<F>(&self, board_size: usize, task: F) -> Result<()>
    where
        F: Fn(usize, usize) + Sync,
    {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .thread_name(|index| format!("queens-pool-{}", index))
            .build()?;

        pool.install(|| {
            (1..=board_size).into_par_iter().for_each(|row| {
                // Only called from inside the pool, so the index is always set
                let worker_id = rayon::current_thread_index().unwrap_or(0);
                task(worker_id, row);
            });
        });

        Ok(())
    }
}
