// Reusable library API — visible to both CLI and WASM builds
pub mod direction;
pub mod errors;
pub mod grid;
pub mod log;
pub mod prefix_index;
pub mod report;
pub mod scanner;
pub mod solver;
pub mod word_list;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use direction::Direction;
pub use grid::Grid;
pub use prefix_index::{PrefixIndex, PrefixKind};
pub use scanner::MatchRecord;
pub use solver::{solve_puzzle, SolveResult, SolverError};
