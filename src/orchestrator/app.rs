//! 命令处理器 - 编排层
//!
//! ## 职责
//!
//! 实现四个面向用户的命令：配置、获取输入、运行、提交。
//!
//! - 持有配置、session 存储和题目流程
//! - 网络命令在发起任何请求之前检查 session
//! - 不做输出展示，结果交给调用方（CLI）

use tracing::{info, warn};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::infrastructure::{CommandExecutor, ProcessRunner, Session, SessionStore};
use crate::models::{PuzzleKey, SubmissionVerdict};
use crate::services::{InputWrite, InputWriter, PartChooser};
use crate::workflow::{FlowOutcome, PuzzleCtx, PuzzleFlow};

/// 是/否确认的协作者
pub trait Confirm {
    fn confirm(&self, question: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, question: &str) -> bool {
        self(question)
    }
}

/// 配置命令的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigureOutcome {
    Saved,
    /// 已有 session 且用户拒绝覆盖
    Cancelled,
}

/// 提交命令的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub verdict: SubmissionVerdict,
    /// 题目页面，提交后引导用户前往
    pub puzzle_url: String,
}

/// 应用主结构
pub struct App<E = ProcessRunner> {
    config: Config,
    store: SessionStore,
    writer: InputWriter,
    flow: PuzzleFlow<E>,
}

impl App<ProcessRunner> {
    pub fn new(config: Config) -> Self {
        Self::with_executor(config, ProcessRunner::new())
    }
}

impl<E: CommandExecutor> App<E> {
    pub fn with_executor(config: Config, executor: E) -> Self {
        Self {
            store: SessionStore::new(&config.session_file),
            writer: InputWriter::new(),
            flow: PuzzleFlow::with_executor(&config, executor),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// 保存 session，已存在时需要确认（`force` 跳过确认）
    pub async fn configure(&self, token: &str, force: bool, confirm: &dyn Confirm) -> AppResult<ConfigureOutcome> {
        let session = Session::new(token)?;

        if !force && self.store.load().await?.is_some() {
            let overwrite = confirm.confirm("已配置 session cookie，是否覆盖？");
            if !overwrite {
                info!("配置已取消");
                return Ok(ConfigureOutcome::Cancelled);
            }
        }

        self.store.store(session.token()).await?;
        info!("✓ session 已保存到 {}", self.store.path().display());
        Ok(ConfigureOutcome::Saved)
    }

    /// 当前 session：环境变量优先，其次为存储文件
    pub async fn session(&self) -> AppResult<Session> {
        if let Some(token) = &self.config.session_override {
            return Session::new(token.as_str());
        }

        match self.store.load().await? {
            Some(token) => Session::new(token),
            None => Err(AppError::MissingCredential),
        }
    }

    /// 获取题目输入并写入 `input.txt`
    ///
    /// 已存在输入时不发起请求；请求失败时已创建的目录保留
    pub async fn fetch_input(&self, year: u16, day: u8) -> AppResult<InputWrite> {
        let session = self.session().await?;
        let key = PuzzleKey::new(year, day, None)?;
        let ctx = PuzzleCtx::new(key, &self.config.workspace_root);

        self.writer.ensure_folder(&ctx.folder).await?;

        if self.writer.exists(&ctx.folder).await {
            let path = key.input_path(&self.config.workspace_root);
            warn!("{} 输入已存在: {}", ctx, path.display());
            return Ok(InputWrite::AlreadyExists(path));
        }

        let input = self.flow.client().fetch_input(year, day, &session).await?;
        let written = self.writer.write(&ctx.folder, &input).await?;

        if let InputWrite::Written(path) = &written {
            info!("{} ✓ 输入已保存到 {}", ctx, path.display());
        }
        Ok(written)
    }

    /// 运行解决方案，返回输出
    pub async fn run_solution(&self, key: PuzzleKey, chooser: &dyn PartChooser) -> AppResult<FlowOutcome<String>> {
        let ctx = PuzzleCtx::new(key, &self.config.workspace_root);
        self.flow.run_only(&ctx, chooser).await
    }

    /// 运行并提交答案
    pub async fn submit_answer(
        &self,
        key: PuzzleKey,
        chooser: &dyn PartChooser,
    ) -> AppResult<FlowOutcome<Submission>> {
        let session = self.session().await?;
        let ctx = PuzzleCtx::new(key, &self.config.workspace_root);

        let outcome = self.flow.run_and_submit(&ctx, &session, chooser).await?;
        Ok(match outcome {
            FlowOutcome::Done(verdict) => FlowOutcome::Done(Submission {
                verdict,
                puzzle_url: self.flow.client().puzzle_url(key.year, key.day),
            }),
            FlowOutcome::Cancelled => FlowOutcome::Cancelled,
        })
    }
}
