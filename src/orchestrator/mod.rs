//! 编排层（Orchestration Layer）
//!
//! ## 层次关系
//!
//! ```text
//! orchestrator::App (configure / fetch / run / submit)
//!     ↓
//! workflow::PuzzleFlow (处理单个题目：定位 → 运行 → 提交 → 判定)
//!     ↓
//! services (能力层：命令解析 / 文件定位 / 结果判定 / 输入写入)
//!     ↓
//! infrastructure (基础设施：进程、HTTP、session 存储、终端)
//! ```

pub mod app;

pub use app::{App, Confirm, ConfigureOutcome, Submission};
