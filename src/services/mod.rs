pub mod command_resolver;
pub mod input_writer;
pub mod solution_locator;
pub mod submission_classifier;

pub use command_resolver::{Platform, ResolvedCommand, Toolchain};
pub use input_writer::{InputWrite, InputWriter};
pub use solution_locator::{Located, PartChooser, SolutionLocator};
pub use submission_classifier::classify;
