use std::path::PathBuf;

use thiserror::Error;

/// 应用程序错误类型
///
/// 每个变体都是某条命令的终止原因，直接呈现给用户；不做自动重试，也不回滚已产生的文件。
/// 用户取消（未做选择）不是错误，见 [`crate::workflow::FlowOutcome::Cancelled`]。
#[derive(Debug, Error)]
pub enum AppError {
    /// 未配置 session cookie（在任何网络请求之前失败）
    #[error("未配置 session cookie，请先运行 `aoc_helper configure`")]
    MissingCredential,

    /// 获取题目输入时服务器返回非 2xx 状态
    #[error("获取题目输入失败: HTTP {status}")]
    InputFetchFailed { status: u16 },

    /// 扩展名不在支持列表中
    #[error("不支持的文件类型: {extension:?}")]
    UnsupportedFileType { extension: String },

    /// 题目目录中没有符合命名规则的文件
    #[error("未找到解决方案文件: {}", .folder.display())]
    NoSolutionFound { folder: PathBuf },

    /// 子进程非零退出或无法启动
    #[error("解决方案执行失败: {detail}")]
    SolutionExecutionFailed { detail: String },

    /// 年份或日期超出活动范围
    #[error("无效的题目: {reason}")]
    InvalidPuzzle { reason: String },

    #[error("HTTP 请求失败: {0}")]
    Http(#[from] reqwest::Error),

    #[error("文件操作失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("配置文件解析失败: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("配置文件写入失败: {0}")]
    ConfigWrite(#[from] toml::ser::Error),
}

impl AppError {
    /// 创建无效题目错误
    pub fn invalid_puzzle(reason: impl Into<String>) -> Self {
        AppError::InvalidPuzzle {
            reason: reason.into(),
        }
    }

    /// 创建执行失败错误
    pub fn execution_failed(detail: impl Into<String>) -> Self {
        AppError::SolutionExecutionFailed {
            detail: detail.into(),
        }
    }
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
