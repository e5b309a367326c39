//! 命令解析服务 - 业务能力层
//!
//! 只根据扩展名决定"用什么工具链运行这个文件"，不读取文件内容

use std::fmt::{self, Display};
use std::path::{Path, PathBuf};

use phf::phf_map;
use tracing::debug;

use crate::error::{AppError, AppResult};

/// 支持的工具链
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Toolchain {
    Node,
    Python,
    TsNode,
    /// 编译为工作目录下固定名称的产物后运行
    Cpp,
    /// 编译后以文件名（不含扩展名）作为入口类运行
    Java,
}

impl Toolchain {
    pub const ALL: [Toolchain; 5] = [
        Toolchain::Node,
        Toolchain::Python,
        Toolchain::TsNode,
        Toolchain::Cpp,
        Toolchain::Java,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Toolchain::Node => "Node.js",
            Toolchain::Python => "Python",
            Toolchain::TsNode => "TypeScript (ts-node)",
            Toolchain::Cpp => "C++ (g++)",
            Toolchain::Java => "Java",
        }
    }
}

/// 扩展名 -> 工具链（封闭集合）
static TOOLCHAINS: phf::Map<&'static str, Toolchain> = phf_map! {
    "js" => Toolchain::Node,
    "py" => Toolchain::Python,
    "ts" => Toolchain::TsNode,
    "cpp" => Toolchain::Cpp,
    "java" => Toolchain::Java,
};

/// 运行平台，决定部分可执行文件名
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Unix,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }
}

/// 解析后的待执行命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCommand {
    pub toolchain: Toolchain,
    /// 交给 shell 执行的完整命令行
    pub command_line: String,
    pub working_dir: PathBuf,
}

impl Display for ResolvedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (in {})", self.command_line, self.working_dir.display())
    }
}

/// 按当前平台解析命令
pub fn resolve(file_path: &Path) -> AppResult<ResolvedCommand> {
    resolve_for(file_path, Platform::current())
}

/// 按指定平台解析命令
///
/// 命令中的文件以相对工作目录（文件所在目录）的文件名出现
pub fn resolve_for(file_path: &Path, platform: Platform) -> AppResult<ResolvedCommand> {
    let extension = file_path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();

    let toolchain = lookup(extension).ok_or_else(|| AppError::UnsupportedFileType {
        extension: extension.to_string(),
    })?;

    let file_name = file_path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let command_line = match toolchain {
        Toolchain::Node => format!("node \"{}\"", file_name),
        Toolchain::Python => match platform {
            Platform::Windows => format!("python \"{}\"", file_name),
            Platform::Unix => format!("python3 \"{}\"", file_name),
        },
        Toolchain::TsNode => format!("ts-node \"{}\"", file_name),
        Toolchain::Cpp => match platform {
            Platform::Windows => format!("g++ \"{}\" -o run.exe && run.exe", file_name),
            Platform::Unix => format!("g++ \"{}\" -o run && ./run", file_name),
        },
        Toolchain::Java => {
            let class_name = file_path
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default();
            format!("javac \"{}\" && java {}", file_name, class_name)
        }
    };

    let working_dir = match file_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    debug!("{} -> {}", file_path.display(), command_line);

    Ok(ResolvedCommand {
        toolchain,
        command_line,
        working_dir,
    })
}

/// 查询扩展名（不含点）对应的工具链
pub fn lookup(extension: &str) -> Option<Toolchain> {
    TOOLCHAINS.get(extension).copied()
}

/// 支持的全部扩展名
pub fn supported_extensions() -> impl Iterator<Item = &'static str> {
    TOOLCHAINS.keys().copied()
}
