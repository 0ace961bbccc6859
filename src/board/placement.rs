//! Partial queen placements and the placement validator

use std::fmt;

/// Largest board size a `Placement` can hold
pub const MAX_BOARD_SIZE: usize = 32;

/// Smallest board size the search accepts
pub const MIN_BOARD_SIZE: usize = 4;

/// Queens placed in a prefix of the columns.
///
/// Columns and rows are 1-indexed. `rows[c - 1]` holds the row of the queen in
/// column `c` for every column before `column()`; later slots are zero. The
/// type is `Copy` so each search branch owns an independent copy.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Next column to fill (1-based)
    column: u8,
    rows: [u8; MAX_BOARD_SIZE],
}

impl Placement {
    /// Empty placement, ready to fill column 1
    pub fn new() -> Self {
        Self {
            column: 1,
            rows: [0; MAX_BOARD_SIZE],
        }
    }

    /// Placement with the queen of column 1 fixed at `first_row`
    pub fn seeded(first_row: usize) -> Self {
        Self::new().with_queen(first_row)
    }

    /// Column the next queen goes into
    pub fn column(&self) -> usize {
        self.column as usize
    }

    /// Number of queens placed so far
    pub fn placed(&self) -> usize {
        self.column() - 1
    }

    /// Whether every column of an `n`×`n` board holds a queen
    pub fn is_complete(&self, n: usize) -> bool {
        self.placed() == n
    }

    /// Rows of the placed queens, in column order
    pub fn rows(&self) -> &[u8] {
        &self.rows[..self.placed()]
    }

    /// Whether a queen at (`column()`, `row`) is safe from every placed queen.
    ///
    /// For each placed queen at (j, r_j) the candidate conflicts when the rows
    /// match or when it lies on the same ascending (`j + r_j`) or descending
    /// (`j - r_j`) diagonal.
    pub fn is_safe(&self, row: usize) -> bool {
        let now = self.column() as isize;
        let row = row as isize;
        self.rows().iter().enumerate().all(|(idx, &r)| {
            let j = idx as isize + 1;
            let r = r as isize;
            r != row && j + r != now + row && j - r != now - row
        })
    }

    /// Copy of this placement with a queen committed at (`column()`, `row`)
    pub fn with_queen(&self, row: usize) -> Self {
        debug_assert!(self.placed() < MAX_BOARD_SIZE);
        debug_assert!((1..=MAX_BOARD_SIZE).contains(&row));
        let mut next = *self;
        next.rows[self.placed()] = row as u8;
        next.column += 1;
        next
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Placement")
            .field("column", &self.column)
            .field("rows", &self.rows())
            .finish()
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", row)?;
        }
        Ok(())
    }
}

/// Check a reported full placement by replaying it through the validator.
///
/// `rows[c - 1]` is the row of the queen in column `c`. Every row must lie in
/// `1..=rows.len()` and no two queens may share a row or diagonal.
pub fn is_valid_solution(rows: &[u8]) -> bool {
    let n = rows.len();
    if n > MAX_BOARD_SIZE {
        return false;
    }
    let mut placement = Placement::new();
    for &row in rows {
        let row = row as usize;
        if !(1..=n).contains(&row) || !placement.is_safe(row) {
            return false;
        }
        placement = placement.with_queen(row);
    }
    true
}
