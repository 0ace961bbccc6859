//! Observers notified of every complete placement

use parking_lot::Mutex;
use std::io::Write;

/// Receives each solution as it is recorded.
///
/// `rows[c - 1]` is the 1-based row of the queen in column `c`. Calls may
/// arrive concurrently from several workers in no particular order.
pub trait SolutionObserver: Sync {
    fn on_solution(&self, index: u64, rows: &[u8]);
}

/// Ignores every solution
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SolutionObserver for NoopObserver {
    fn on_solution(&self, _index: u64, _rows: &[u8]) {}
}

/// Prints `Solution <index>: r1 r2 ... rN` to stdout, one line per solution
#[derive(Debug, Default, Clone, Copy)]
pub struct PrintObserver;

impl SolutionObserver for PrintObserver {
    fn on_solution(&self, index: u64, rows: &[u8]) {
        let line = rows
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        let mut out = std::io::stdout().lock();
        // A closed stdout only loses diagnostics, never the count
        let _ = writeln!(out, "Solution {}: {}", index, line);
    }
}

/// Keeps a copy of every reported placement
#[derive(Debug, Default)]
pub struct CollectingObserver {
    solutions: Mutex<Vec<(u64, Vec<u8>)>>,
}

impl CollectingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collected `(index, rows)` pairs, sorted by index
    pub fn into_solutions(self) -> Vec<(u64, Vec<u8>)> {
        let mut solutions = self.solutions.into_inner();
        solutions.sort_unstable_by_key(|(index, _)| *index);
        solutions
    }
}

impl SolutionObserver for CollectingObserver {
    fn on_solution(&self, index: u64, rows: &[u8]) {
        self.solutions.lock().push((index, rows.to_vec()));
    }
}

/// Forwards every solution to each wrapped observer in order
#[derive(Default)]
pub struct CompositeObserver<'a> {
    observers: Vec<&'a dyn SolutionObserver>,
}

impl<'a> CompositeObserver<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, observer: &'a dyn SolutionObserver) {
        self.observers.push(observer);
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl SolutionObserver for CompositeObserver<'_> {
    fn on_solution(&self, index: u64, rows: &[u8]) {
        for observer in &self.observers {
            observer.on_solution(index, rows);
        }
    }
}
