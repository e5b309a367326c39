//! 远程服务客户端 - 基础设施层
//!
//! 封装输入获取与答案提交两个 HTTP 调用，只返回原始响应文本

use reqwest::header::{COOKIE, USER_AGENT};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::Part;

/// 用户的 session cookie
///
/// 所有网络操作都显式传入，不从全局状态读取
#[derive(Clone)]
pub struct Session(String);

impl Session {
    /// 空白 token 视为未配置
    pub fn new(token: impl Into<String>) -> AppResult<Self> {
        let token = token.into().trim().to_string();
        if token.is_empty() {
            return Err(AppError::MissingCredential);
        }
        Ok(Self(token))
    }

    pub fn token(&self) -> &str {
        &self.0
    }

    fn cookie(&self) -> String {
        format!("session={}", self.0)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Session(***)")
    }
}

/// 远程服务客户端
#[derive(Clone)]
pub struct AocClient {
    http: reqwest::Client,
    base_url: String,
    user_agent: String,
}

impl AocClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            user_agent: config.user_agent.clone(),
        }
    }

    /// 题目页面地址
    pub fn puzzle_url(&self, year: u16, day: u8) -> String {
        format!("{}/{}/day/{}", self.base_url, year, day)
    }

    /// 获取题目输入，原样返回响应体字节
    pub async fn fetch_input(&self, year: u16, day: u8, session: &Session) -> AppResult<Vec<u8>> {
        let url = format!("{}/input", self.puzzle_url(year, day));
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .header(COOKIE, session.cookie())
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::InputFetchFailed {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?.to_vec();
        info!("✓ 已获取 {} 年第 {} 天的输入 ({} 字节)", year, day, body.len());
        Ok(body)
    }

    /// 提交答案，返回响应 HTML（不检查状态码）
    pub async fn submit_answer(
        &self,
        year: u16,
        day: u8,
        level: Part,
        answer: &str,
        session: &Session,
    ) -> AppResult<String> {
        let url = format!("{}/answer", self.puzzle_url(year, day));
        debug!("POST {} level={}", url, level);

        let level = level.level().to_string();
        let response = self
            .http
            .post(&url)
            .header(COOKIE, session.cookie())
            .header(USER_AGENT, &self.user_agent)
            .form(&[("level", level.as_str()), ("answer", answer)])
            .send()
            .await?;

        debug!("提交响应状态: {}", response.status());
        Ok(response.text().await?)
    }
}
