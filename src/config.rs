use std::path::PathBuf;

/// 默认远程服务地址
pub const DEFAULT_BASE_URL: &str = "https://adventofcode.com";

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 远程服务地址（不带末尾斜杠）
    pub base_url: String,
    /// 工作区根目录，题目目录为 `{root}/{year}/day{day}`
    pub workspace_root: PathBuf,
    /// session cookie 的保存位置
    pub session_file: PathBuf,
    /// 直接指定的 session cookie，设置后不再读取 session_file
    pub session_override: Option<String>,
    /// 请求时携带的 User-Agent
    pub user_agent: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            workspace_root: PathBuf::from("."),
            session_file: default_session_file(),
            session_override: None,
            user_agent: format!("aoc_helper/{}", env!("CARGO_PKG_VERSION")),
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            base_url: std::env::var("AOC_BASE_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(default.base_url),
            workspace_root: std::env::var("AOC_ROOT").map(PathBuf::from).unwrap_or(default.workspace_root),
            session_file: std::env::var("AOC_SESSION_FILE").map(PathBuf::from).unwrap_or(default.session_file),
            session_override: std::env::var("AOC_SESSION").ok().filter(|v| !v.trim().is_empty()),
            user_agent: std::env::var("AOC_USER_AGENT").unwrap_or(default.user_agent),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }

    /// 指向指定服务地址的配置（测试中指向 mock server）
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_workspace_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.workspace_root = root.into();
        self
    }

    pub fn with_session_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.session_file = path.into();
        self
    }
}

fn default_session_file() -> PathBuf {
    match dirs::config_dir() {
        Some(dir) => dir.join("aoc-helper").join("session.toml"),
        None => PathBuf::from(".aoc-session.toml"),
    }
}
