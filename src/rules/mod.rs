//! Move evaluation and the collaborator seams.
//!
//! `MoveEngine` runs the pipeline in `crate::moves` and applies accepted
//! moves. Word legality is left to a caller-supplied `WordOracle`; turn
//! order and persistence belong to the caller entirely.

pub mod engine;
pub mod mutator;
pub mod oracle;

pub use engine::{evaluate_move, AcceptedMove, MoveEngine, MoveResult};
pub use mutator::{apply_placements, settle, PostMove};
pub use oracle::WordOracle;
