pub mod execution;
pub mod puzzle;
pub mod solution;
pub mod verdict;

pub use execution::ExecutionResult;
pub use puzzle::{event_day_for, max_day, Part, PuzzleKey};
pub use solution::SolutionFile;
pub use verdict::{SubmissionVerdict, VerdictStatus};
