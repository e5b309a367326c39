//! 基础设施层：持有外部资源（进程、网络、文件、终端），只暴露能力

pub mod aoc_client;
pub mod process_runner;
pub mod session_store;
pub mod terminal;

pub use aoc_client::{AocClient, Session};
pub use process_runner::{CommandExecutor, ProcessRunner};
pub use session_store::SessionStore;
pub use terminal::TerminalPrompter;
