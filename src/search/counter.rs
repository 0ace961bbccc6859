//! Solution counters shared by the search workers.
//!
//! Every full placement is recorded through exactly one `record` call. The
//! three implementations differ only in how the increment is synchronized.

use parking_lot::Mutex;
use std::cell::Cell;
use std::sync::atomic::{AtomicU64, Ordering};

/// Accumulates the number of complete placements found by a search.
pub trait SolutionCounter {
    /// Count one solution and pass its 1-based running index to `on_record`.
    fn record<F: FnOnce(u64)>(&self, on_record: F);

    /// Number of solutions recorded so far
    fn total(&self) -> u64;
}

/// Plain counter for the single-threaded search.
#[derive(Debug, Default)]
pub struct LocalCounter {
    count: Cell<u64>,
}

impl LocalCounter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SolutionCounter for LocalCounter {
    fn record<F: FnOnce(u64)>(&self, on_record: F) {
        let index = self.count.get() + 1;
        self.count.set(index);
        on_record(index);
    }

    fn total(&self) -> u64 {
        self.count.get()
    }
}

/// Mutex-guarded counter. `on_record` runs while the lock is held, so indices
/// and diagnostic output from different workers never interleave mid-record.
#[derive(Debug, Default)]
pub struct LockedCounter {
    count: Mutex<u64>,
}

impl LockedCounter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SolutionCounter for LockedCounter {
    fn record<F: FnOnce(u64)>(&self, on_record: F) {
        let mut count = self.count.lock();
        *count += 1;
        on_record(*count);
    }

    fn total(&self) -> u64 {
        *self.count.lock()
    }
}

/// Lock-free counter. `on_record` runs after the increment, outside any lock.
#[derive(Debug, Default)]
pub struct AtomicCounter {
    count: AtomicU64,
}

impl AtomicCounter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SolutionCounter for AtomicCounter {
    fn record<F: FnOnce(u64)>(&self, on_record: F) {
        let index = self.count.fetch_add(1, Ordering::Relaxed) + 1;
        on_record(index);
    }

    fn total(&self) -> u64 {
        // Callers read the total after joining every worker
        self.count.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const THREADS: usize = 8;
    const PER_THREAD: usize = 10_000;

    fn hammer<C: SolutionCounter + Sync>(counter: &C) -> Vec<u64> {
        let indices = Mutex::new(Vec::with_capacity(THREADS * PER_THREAD));
        std::thread::scope(|s| {
            for _ in 0..THREADS {
                s.spawn(|| {
                    let mut local = Vec::with_capacity(PER_THREAD);
                    for _ in 0..PER_THREAD {
                        counter.record(|index| local.push(index));
                    }
                    indices.lock().extend(local);
                });
            }
        });
        indices.into_inner()
    }

    #[test]
    fn test_local_counter_indices() {
        let counter = LocalCounter::new();
        let mut seen = Vec::new();
        for _ in 0..3 {
            counter.record(|index| seen.push(index));
        }
        assert_eq!(seen, vec![1, 2, 3]);
        assert_eq!(counter.total(), 3);
    }

    #[test]
    fn test_locked_counter_no_lost_updates() {
        let counter = LockedCounter::new();
        let indices = hammer(&counter);

        assert_eq!(counter.total(), (THREADS * PER_THREAD) as u64);
        let unique: HashSet<_> = indices.iter().collect();
        assert_eq!(unique.len(), THREADS * PER_THREAD);
    }

    #[test]
    fn test_atomic_counter_no_lost_updates() {
        let counter = AtomicCounter::new();
        let indices = hammer(&counter);

        assert_eq!(counter.total(), (THREADS * PER_THREAD) as u64);
        let unique: HashSet<_> = indices.iter().collect();
        assert_eq!(unique.len(), THREADS * PER_THREAD);
        assert_eq!(indices.iter().max(), Some(&((THREADS * PER_THREAD) as u64)));
    }

    #[test]
    fn test_fresh_counters_start_at_zero() {
        assert_eq!(LocalCounter::new().total(), 0);
        assert_eq!(LockedCounter::new().total(), 0);
        assert_eq!(AtomicCounter::new().total(), 0);
    }
}
