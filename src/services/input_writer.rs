//! 输入写入服务 - 业务能力层
//!
//! 只负责"把题目输入写入 input.txt"，已存在的文件从不覆盖

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::error::AppResult;
use crate::models::puzzle::INPUT_FILE;

/// 写入结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputWrite {
    Written(PathBuf),
    AlreadyExists(PathBuf),
}

/// 输入写入服务
pub struct InputWriter;

impl InputWriter {
    pub fn new() -> Self {
        Self
    }

    /// 创建题目目录（已存在时不做任何事）
    pub async fn ensure_folder(&self, folder: &Path) -> AppResult<()> {
        fs::create_dir_all(folder).await?;
        Ok(())
    }

    /// `input.txt` 是否已存在
    pub async fn exists(&self, folder: &Path) -> bool {
        fs::try_exists(folder.join(INPUT_FILE)).await.unwrap_or(false)
    }

    /// 原样写入输入内容
    pub async fn write(&self, folder: &Path, content: &[u8]) -> AppResult<InputWrite> {
        let path = folder.join(INPUT_FILE);
        debug!("写入输入: {} ({} 字节)", path.display(), content.len());

        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path).await {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(InputWrite::AlreadyExists(path)),
            Err(e) => return Err(e.into()),
        };

        file.write_all(content).await?;
        file.flush().await?;

        Ok(InputWrite::Written(path))
    }
}

impl Default for InputWriter {
    fn default() -> Self {
        Self::new()
    }
}
