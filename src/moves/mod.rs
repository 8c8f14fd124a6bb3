//! The move pipeline stages.
//!
//! Data flows one way: `placement` normalizes caller input, `geometry`
//! checks the shape of the move, `words` reconstructs what it spells, and
//! `scoring` prices it. [`MoveEngine`](crate::rules::MoveEngine) chains
//! them.

pub mod placement;
pub mod geometry;
pub mod words;
pub mod scoring;

pub use placement::{normalize, Placement, Placements, RawPlacement};
pub use geometry::{Anchoring, Geometry};
pub use words::{assemble, Assembly, WordSpan, WordTile};
pub use scoring::{score_move, score_word, MoveScore, ScoredWord};
