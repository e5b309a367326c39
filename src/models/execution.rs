use crate::error::{AppError, AppResult};

/// 单次运行解决方案的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// 去除首尾空白后的标准输出
    pub stdout: String,
    pub exited_ok: bool,
    /// 失败时的标准错误原文，或启动失败信息
    pub error_detail: Option<String>,
}

impl ExecutionResult {
    pub fn success(stdout: &str) -> Self {
        Self {
            stdout: stdout.trim().to_string(),
            exited_ok: true,
            error_detail: None,
        }
    }

    pub fn failure(stdout: &str, detail: impl Into<String>) -> Self {
        Self {
            stdout: stdout.trim().to_string(),
            exited_ok: false,
            error_detail: Some(detail.into()),
        }
    }

    /// 失败的运行转换为 `SolutionExecutionFailed`
    pub fn into_result(self) -> AppResult<Self> {
        if self.exited_ok {
            Ok(self)
        } else {
            Err(AppError::execution_failed(self.error_detail.unwrap_or_default()))
        }
    }
}
