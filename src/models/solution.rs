use std::path::{Path, PathBuf};

use super::puzzle::Part;

/// 解决方案文件名必须以这些前缀之一开头（区分大小写）
pub const SOLUTION_PREFIXES: [&str; 2] = ["solution", "part"];

/// 题目目录中的候选解决方案文件
///
/// 每次调用都从目录列表重新推导，不做持久化
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionFile {
    pub path: PathBuf,
    /// `None` 表示不分部分的单个文件
    pub inferred_part: Option<Part>,
}

impl SolutionFile {
    /// 按命名规则识别文件，不符合规则时返回 `None`
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?;
        let inferred_part = infer_part(name)?;
        Some(Self {
            path: path.to_path_buf(),
            inferred_part,
        })
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

/// 推导文件所属部分
///
/// - 外层 `None`：文件名不以规定前缀开头
/// - 包含 `1` 为第 1 部分，否则包含 `2` 为第 2 部分，都不包含则为单个文件
pub fn infer_part(file_name: &str) -> Option<Option<Part>> {
    if !SOLUTION_PREFIXES.iter().any(|prefix| file_name.starts_with(prefix)) {
        return None;
    }

    if file_name.contains('1') {
        Some(Some(Part::One))
    } else if file_name.contains('2') {
        Some(Some(Part::Two))
    } else {
        Some(None)
    }
}
