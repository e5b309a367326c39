pub mod puzzle_ctx;
pub mod puzzle_flow;

pub use puzzle_ctx::PuzzleCtx;
pub use puzzle_flow::{FlowOutcome, PuzzleFlow, Stage};
