//! # AoC Helper
//!
//! 获取每日谜题输入、运行本地解决方案并提交答案的命令行工具
//!
//! ## 架构设计
//!
//! 本系统采用四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有外部资源，只暴露能力
//! - `ProcessRunner` - 用 shell 执行命令并收集输出
//! - `AocClient` - 获取输入、提交答案
//! - `SessionStore` / `TerminalPrompter` - session 存储与终端交互
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单个文件或单个响应
//! - `command_resolver` - 扩展名 → 工具链命令
//! - `SolutionLocator` - 从题目目录选出唯一的解决方案
//! - `submission_classifier` - 提交响应 → 判定
//! - `InputWriter` - 写 input.txt
//!
//! ### ③ 流程层（Workflow）
//! - `PuzzleCtx` - 上下文封装（题目 + 目录）
//! - `PuzzleFlow` - 流程编排（定位 → 运行 → 提交 → 判定）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator::App` - 面向用户的四个命令

pub mod cli;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::{AocClient, ProcessRunner, Session};
pub use models::{ExecutionResult, Part, PuzzleKey, SolutionFile, SubmissionVerdict, VerdictStatus};
pub use orchestrator::App;
pub use workflow::{FlowOutcome, PuzzleCtx, PuzzleFlow};
