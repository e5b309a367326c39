//! 进程执行器 - 基础设施层
//!
//! 只暴露"在指定目录用 shell 执行一条命令并收集输出"的能力，
//! 不认识题目，也不做超时或资源限制

use std::future::Future;
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, warn};

use crate::error::AppResult;
use crate::models::ExecutionResult;
use crate::services::ResolvedCommand;

/// 执行已解析命令的能力
pub trait CommandExecutor {
    /// 执行到子进程结束，失败信息放在结果中而不是返回错误
    fn execute(&self, command: &ResolvedCommand) -> impl Future<Output = ExecutionResult> + Send;
}

/// 基于系统 shell 的进程执行器
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }

    /// 执行命令，非零退出或无法启动时返回 `SolutionExecutionFailed`
    pub async fn run(&self, command: &ResolvedCommand) -> AppResult<ExecutionResult> {
        self.execute(command).await.into_result()
    }
}

impl CommandExecutor for ProcessRunner {
    async fn execute(&self, command: &ResolvedCommand) -> ExecutionResult {
        debug!("执行命令: {}", command);

        let output = shell(&command.command_line)
            .current_dir(&command.working_dir)
            .stdin(Stdio::null())
            .output()
            .await;

        let output = match output {
            Ok(output) => output,
            Err(e) => {
                warn!("无法启动命令 `{}`: {}", command.command_line, e);
                return ExecutionResult::failure("", format!("无法启动命令 `{}`: {}", command.command_line, e));
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        if output.status.success() {
            if !stderr.is_empty() {
                debug!("stderr: {}", stderr.trim_end());
            }
            return ExecutionResult::success(&stdout);
        }

        // stderr 原样保留，为空时才退回到退出状态描述
        let detail = if stderr.is_empty() {
            format!("命令 `{}` 执行失败 ({})", command.command_line, output.status)
        } else {
            stderr.to_string()
        };
        ExecutionResult::failure(&stdout, detail)
    }
}

#[cfg(windows)]
fn shell(command_line: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(command_line);
    cmd
}

#[cfg(not(windows))]
fn shell(command_line: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command_line);
    cmd
}

#[cfg(all(test, unix))]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::error::AppError;
    use crate::services::Toolchain;

    fn command(line: &str, dir: PathBuf) -> ResolvedCommand {
        ResolvedCommand {
            toolchain: Toolchain::Node,
            command_line: line.to_string(),
            working_dir: dir,
        }
    }

    #[tokio::test]
    async fn test_stdout_is_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let result = ProcessRunner::new()
            .run(&command("printf '  1234\\n\\n'", dir.path().to_path_buf()))
            .await
            .unwrap();

        assert!(result.exited_ok);
        assert_eq!(result.stdout, "1234");
        assert_eq!(result.error_detail, None);
    }

    #[tokio::test]
    async fn test_runs_in_working_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("input.txt"), "hello from input").unwrap();

        let result = ProcessRunner::new()
            .run(&command("cat input.txt", dir.path().to_path_buf()))
            .await
            .unwrap();
        assert_eq!(result.stdout, "hello from input");
    }

    #[tokio::test]
    async fn test_stderr_carried_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let line = "echo partial; echo 'SyntaxError: Unexpected token )' >&2; exit 1";

        let result = ProcessRunner::new().run(&command(line, dir.path().to_path_buf())).await;
        match result {
            Err(AppError::SolutionExecutionFailed { detail }) => {
                assert_eq!(detail, "SyntaxError: Unexpected token )\n");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_stderr_describes_exit_status() {
        let dir = tempfile::tempdir().unwrap();
        let result = ProcessRunner::new()
            .execute(&command("exit 3", dir.path().to_path_buf()))
            .await;

        assert!(!result.exited_ok);
        let detail = result.error_detail.unwrap();
        assert!(detail.contains("exit 3"), "{}", detail);
    }

    #[test]
    fn test_missing_working_directory_is_spawn_failure() {
        let result = tokio_test::block_on(
            ProcessRunner::new().execute(&command("echo hi", PathBuf::from("/definitely/not/here"))),
        );

        assert!(!result.exited_ok);
        assert!(result.error_detail.unwrap().contains("无法启动命令"));
    }
}
