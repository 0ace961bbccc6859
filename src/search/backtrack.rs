//! Depth-first backtracking shared by every strategy

use crate::board::Placement;
use crate::search::counter::SolutionCounter;
use crate::search::observer::SolutionObserver;
use std::ops::AddAssign;

/// Work done while exploring one subtree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BranchStats {
    /// Candidate squares tested by the validator
    pub nodes_visited: u64,
    /// Complete placements found in the subtree
    pub solutions: u64,
}

impl AddAssign for BranchStats {
    fn add_assign(&mut self, other: Self) {
        self.nodes_visited += other.nodes_visited;
        self.solutions += other.solutions;
    }
}

/// Enumerates every completion of a partial placement.
pub struct Explorer<'a, C> {
    board_size: usize,
    counter: &'a C,
    observer: &'a dyn SolutionObserver,
}

impl<'a, C: SolutionCounter> Explorer<'a, C> {
    pub fn new(board_size: usize, counter: &'a C, observer: &'a dyn SolutionObserver) -> Self {
        Self {
            board_size,
            counter,
            observer,
        }
    }

    /// Try every row of `placement.column()`, recursing into each safe one.
    ///
    /// Each accepted row is committed into a fresh copy, so sibling branches
    /// never see each other's queens.
    pub fn explore(&self, placement: Placement) -> BranchStats {
        let mut stats = BranchStats::default();

        for row in 1..=self.board_size {
            stats.nodes_visited += 1;
            if !placement.is_safe(row) {
                continue;
            }

            let next = placement.with_queen(row);
            if next.is_complete(self.board_size) {
                self.counter
                    .record(|index| self.observer.on_solution(index, next.rows()));
                stats.solutions += 1;
            } else {
                stats += self.explore(next);
            }
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::is_valid_solution;
    use crate::search::counter::LocalCounter;
    use crate::search::observer::{CollectingObserver, NoopObserver};

    fn count(n: usize) -> u64 {
        let counter = LocalCounter::new();
        let stats = Explorer::new(n, &counter, &NoopObserver).explore(Placement::new());
        assert_eq!(stats.solutions, counter.total());
        counter.total()
    }

    #[test]
    fn test_known_counts() {
        let expected = [(4, 2), (5, 10), (6, 4), (7, 40), (8, 92)];
        for (n, solutions) in expected {
            assert_eq!(count(n), solutions, "n = {}", n);
        }
    }

    #[test]
    fn test_four_queens_solutions() {
        let counter = LocalCounter::new();
        let observer = CollectingObserver::new();
        Explorer::new(4, &counter, &observer).explore(Placement::new());

        let solutions = observer.into_solutions();
        assert_eq!(
            solutions,
            vec![(1, vec![2, 4, 1, 3]), (2, vec![3, 1, 4, 2])]
        );
    }

    #[test]
    fn test_seeded_subtrees_partition_the_search() {
        let n = 6;
        let total: u64 = (1..=n)
            .map(|row| {
                let counter = LocalCounter::new();
                Explorer::new(n, &counter, &NoopObserver)
                    .explore(Placement::seeded(row))
                    .solutions
            })
            .sum();
        assert_eq!(total, 4);
    }

    #[test]
    fn test_every_reported_placement_is_valid() {
        let counter = LocalCounter::new();
        let observer = CollectingObserver::new();
        Explorer::new(7, &counter, &observer).explore(Placement::new());

        let solutions = observer.into_solutions();
        assert_eq!(solutions.len(), 40);
        for (_, rows) in &solutions {
            assert_eq!(rows.len(), 7);
            assert!(is_valid_solution(rows), "invalid placement {:?}", rows);
        }
    }

    #[test]
    fn test_nodes_visited_counts_candidates() {
        let counter = LocalCounter::new();
        let stats = Explorer::new(4, &counter, &NoopObserver).explore(Placement::new());
        // Column 1 alone tests four candidates
        assert!(stats.nodes_visited > 4);
    }
}
