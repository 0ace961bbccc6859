//! Parallel execution of the first-column choices.
//!
//! Both parallel strategies split the search at column 1: every row of the
//! first column seeds an independent subtree. A [`FirstChoiceExecutor`] decides
//! which worker runs which seed.
//!
//! # Architecture
//!
//! - **Executors** own the workers. [`ResidueThreads`] spawns one OS thread per
//!   residue class (`row % workers`); [`WorkSharingPool`] hands each row to a
//!   rayon pool as its own task.
//! - The **coordinator** builds the per-row task, runs it on an executor and
//!   gathers per-worker statistics.
//! - A **report channel** carries those statistics from the workers back to the
//!   coordinator. The solution count itself only ever flows through the
//!   shared counter.
//!
//! # Example
//!
//! ```ignore
//! let counter = LockedCounter::new();
//! let outcome = run_first_choice_search(
//!     &ResidueThreads::new(4),
//!     &counter,
//!     &SearchConfig::new(8, 4),
//!     &NoopObserver,
//! )?;
//! assert_eq!(outcome.solutions, 92);
//! ```

pub mod channel;
pub mod coordinator;
pub mod pool;
pub mod threads;

pub use coordinator::{run_first_choice_search, ParallelOutcome};
pub use pool::WorkSharingPool;
pub use threads::ResidueThreads;

use crate::errors::Result;

/// Runs one task per first-column row across a set of workers.
pub trait FirstChoiceExecutor {
    /// Number of workers the executor distributes tasks over
    fn workers(&self) -> usize;

    /// Call `task(worker_id, row)` exactly once for each row in
    /// `1..=board_size`, returning only after every call has finished.
    fn execute<F>(&self, board_size: usize, task: F) -> Result<()>
    where
        F: Fn(usize, usize) + Sync;
}
