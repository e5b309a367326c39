//! session 存储 - 基础设施层
//!
//! 以 TOML 文件保存 session cookie，只暴露读取和写入

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::debug;

use crate::error::AppResult;

#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionFile {
    #[serde(default)]
    session: Option<String>,
}

/// session 存储
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 读取已保存的 token，文件不存在或为空时返回 `None`
    pub async fn load(&self) -> AppResult<Option<String>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let file: SessionFile = toml::from_str(&content)?;
        Ok(file.session.filter(|token| !token.trim().is_empty()))
    }

    /// 保存 token（覆盖已有内容）
    pub async fn store(&self, token: &str) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let content = toml::to_string_pretty(&SessionFile {
            session: Some(token.to_string()),
        })?;
        fs::write(&self.path, content).await?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600)).await?;
        }

        debug!("session 已保存到 {}", self.path.display());
        Ok(())
    }
}
