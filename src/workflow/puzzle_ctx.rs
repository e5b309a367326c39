//! 题目处理上下文
//!
//! 封装"我正在处理哪一题、它在哪个目录"这一信息

use std::fmt::Display;
use std::path::{Path, PathBuf};

use crate::models::PuzzleKey;

/// 题目处理上下文
#[derive(Debug, Clone)]
pub struct PuzzleCtx {
    pub key: PuzzleKey,
    /// `{root}/{year}/day{day}`
    pub folder: PathBuf,
}

impl PuzzleCtx {
    pub fn new(key: PuzzleKey, root: &Path) -> Self {
        Self {
            folder: key.folder(root),
            key,
        }
    }
}

impl Display for PuzzleCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.key)
    }
}
