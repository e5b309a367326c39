//! 题目处理流程 - 流程层
//!
//! 核心职责：定义"一道题"的完整处理流程
//!
//! 流程顺序：
//! 1. 定位解决方案文件（可能需要用户选择，未选择则取消）
//! 2. 解析命令并运行
//! 3. 提交答案 → 判定结果（仅 `run_and_submit`）

use std::fmt::{self, Display};

use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::infrastructure::{AocClient, CommandExecutor, ProcessRunner, Session};
use crate::models::{ExecutionResult, Part, SolutionFile, SubmissionVerdict};
use crate::services::{command_resolver, submission_classifier, Located, PartChooser, SolutionLocator};
use crate::utils::logging::truncate_text;
use crate::workflow::puzzle_ctx::PuzzleCtx;

/// 流程结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowOutcome<T> {
    Done(T),
    /// 需要选择时用户未做选择
    Cancelled,
}

/// 流程阶段
///
/// `Idle → Locating → Running → (Submitting → Classifying)? → Done | Cancelled | Failed`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Locating,
    Running,
    Submitting,
    Classifying,
    Done,
    Cancelled,
    Failed,
}

impl Stage {
    /// 流程到达后不再继续的阶段
    pub fn is_terminal(self) -> bool {
        matches!(self, Stage::Done | Stage::Cancelled | Stage::Failed)
    }
}

impl Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Idle => "空闲",
            Stage::Locating => "定位",
            Stage::Running => "运行",
            Stage::Submitting => "提交",
            Stage::Classifying => "判定",
            Stage::Done => "完成",
            Stage::Cancelled => "已取消",
            Stage::Failed => "失败",
        };
        f.write_str(name)
    }
}

/// 题目处理流程
///
/// - 编排 定位 → 运行 → (提交 → 判定)
/// - 只依赖业务能力（services）和基础设施提供的能力
/// - 不和用户交互，选择交给 `PartChooser`
pub struct PuzzleFlow<E = ProcessRunner> {
    locator: SolutionLocator,
    executor: E,
    client: AocClient,
}

impl PuzzleFlow<ProcessRunner> {
    pub fn new(config: &Config) -> Self {
        Self::with_executor(config, ProcessRunner::new())
    }
}

impl<E: CommandExecutor> PuzzleFlow<E> {
    pub fn with_executor(config: &Config, executor: E) -> Self {
        Self {
            locator: SolutionLocator::new(),
            executor,
            client: AocClient::new(config),
        }
    }

    pub fn client(&self) -> &AocClient {
        &self.client
    }

    /// 定位 → 运行，返回答案文本
    pub async fn run_only(
        &self,
        ctx: &PuzzleCtx,
        chooser: &dyn PartChooser,
    ) -> AppResult<FlowOutcome<String>> {
        match self.locate_and_run(ctx, chooser).await? {
            Some((_, result)) => {
                self.enter(ctx, Stage::Done);
                Ok(FlowOutcome::Done(result.stdout))
            }
            None => Ok(FlowOutcome::Cancelled),
        }
    }

    /// 定位 → 运行 → 提交 → 判定
    ///
    /// 提交的 level 取选中文件的部分；单个不分部分的文件固定为 1
    pub async fn run_and_submit(
        &self,
        ctx: &PuzzleCtx,
        session: &Session,
        chooser: &dyn PartChooser,
    ) -> AppResult<FlowOutcome<SubmissionVerdict>> {
        let Some((file, result)) = self.locate_and_run(ctx, chooser).await? else {
            return Ok(FlowOutcome::Cancelled);
        };

        let level = file.inferred_part.unwrap_or(Part::One);
        let answer = result.stdout;
        if answer.is_empty() {
            warn!("{} ⚠️ 解决方案没有输出，仍然提交空答案", ctx);
        }

        self.enter(ctx, Stage::Submitting);
        info!("{} 📤 提交第 {} 部分答案: {}", ctx, level, truncate_text(&answer, 40));
        let body = self
            .client
            .submit_answer(ctx.key.year, ctx.key.day, level, &answer, session)
            .await
            .map_err(|e| self.failed(ctx, Stage::Submitting, e))?;

        self.enter(ctx, Stage::Classifying);
        let verdict = submission_classifier::classify(&body);
        info!("{} 判定结果: {}", ctx, verdict.status);

        self.enter(ctx, Stage::Done);
        Ok(FlowOutcome::Done(verdict))
    }

    /// `None` 表示在定位阶段取消
    async fn locate_and_run(
        &self,
        ctx: &PuzzleCtx,
        chooser: &dyn PartChooser,
    ) -> AppResult<Option<(SolutionFile, ExecutionResult)>> {
        self.enter(ctx, Stage::Idle);
        self.enter(ctx, Stage::Locating);
        info!("{} 🔍 正在定位解决方案: {}", ctx, ctx.folder.display());

        let located = self
            .locator
            .locate(&ctx.folder, ctx.key.part, chooser)
            .await
            .map_err(|e| self.failed(ctx, Stage::Locating, e))?;

        let file = match located {
            Located::Selected(file) => file,
            Located::Cancelled => {
                self.enter(ctx, Stage::Cancelled);
                return Ok(None);
            }
        };

        let command = command_resolver::resolve(&file.path).map_err(|e| self.failed(ctx, Stage::Locating, e))?;

        self.enter(ctx, Stage::Running);
        info!(
            "{} ▶ 使用 {} 运行 {}",
            ctx,
            command.toolchain.display_name(),
            file.file_name()
        );

        let result = self
            .executor
            .execute(&command)
            .await
            .into_result()
            .map_err(|e| self.failed(ctx, Stage::Running, e))?;

        info!("{} ✓ 运行完成，输出: {}", ctx, truncate_text(&result.stdout, 80));
        Ok(Some((file, result)))
    }

    fn enter(&self, ctx: &PuzzleCtx, stage: Stage) {
        if stage.is_terminal() {
            info!("{} 阶段: {}", ctx, stage);
        } else {
            debug!("{} 阶段: {}", ctx, stage);
        }
    }

    fn failed(&self, ctx: &PuzzleCtx, stage: Stage, err: AppError) -> AppError {
        error!("{} ❌ {}阶段失败: {}", ctx, stage, err);
        self.enter(ctx, Stage::Failed);
        err
    }
}
