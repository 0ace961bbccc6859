//! Board representation shared by every search strategy

pub mod placement;

pub use placement::{is_valid_solution, Placement, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
