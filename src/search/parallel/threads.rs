//! Explicit worker threads with static residue-class partitioning.

use crate::errors::{QueensError, Result};
use crate::search::parallel::FirstChoiceExecutor;
use log::debug;
use std::thread;

/// Spawns exactly `workers` OS threads; worker `id` runs the rows with
/// `row % workers == id`.
#[derive(Debug, Clone, Copy)]
pub struct ResidueThreads {
    workers: usize,
}

impl ResidueThreads {
    pub fn new(workers: usize) -> Self {
        Self { workers }
    }
}

/// First-column rows assigned to `worker_id`. Empty when `worker_id` has no
/// row in its residue class, which happens whenever `workers > board_size`.
pub fn residue_rows(
    board_size: usize,
    workers: usize,
    worker_id: usize,
) -> impl Iterator<Item = usize> {
    (1..=board_size).filter(move |row| row % workers == worker_id)
}

impl FirstChoiceExecutor for ResidueThreads {
    fn workers(&self) -> usize {
        self.workers
    }

    fn execute<F>(&self, board_size: usize, task: F) -> Result<()>
    where
        F: Fn(usize, usize) + Sync,
    {
        let workers = self.workers;
        let task = &task;

        thread::scope(|scope| {
            let mut handles = Vec::with_capacity(workers);
            let mut spawn_error = None;

            for worker_id in 0..workers {
                let spawned = thread::Builder::new()
                    .name(format!("queens-worker-{}", worker_id))
                    .spawn_scoped(scope, move || {
                        for row in residue_rows(board_size, workers, worker_id) {
                            task(worker_id, row);
                        }
                    });

                match spawned {
                    Ok(handle) => handles.push(handle),
                    Err(source) => {
                        spawn_error = Some(QueensError::WorkerSpawn { worker_id, source });
                        break;
                    }
                }
            }
            debug!("Spawned {} of {} worker threads", handles.len(), workers);

            // Workers that did start are always joined before returning
            let mut result = Ok(());
            for (worker_id, handle) in handles.into_iter().enumerate() {
                if handle.join().is_err() && result.is_ok() {
                    result = Err(QueensError::WorkerPanicked { worker_id });
                }
            }

            match spawn_error {
                Some(err) => Err(err),
                None => result,
            }
        })
    }
}
