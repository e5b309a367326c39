use std::fmt::{self, Display};

use regex::Regex;

/// 提交结果状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerdictStatus {
    Success,
    Wrong,
    /// 无法识别的响应内容
    Unknown,
}

impl VerdictStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            VerdictStatus::Success => "success",
            VerdictStatus::Wrong => "wrong",
            VerdictStatus::Unknown => "unknown",
        }
    }
}

impl Display for VerdictStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 提交答案后的判定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionVerdict {
    pub status: VerdictStatus,
    pub raw_body: String,
}

impl SubmissionVerdict {
    /// 响应中 `<article>` 的纯文本内容，用于展示
    pub fn message(&self) -> Option<String> {
        let article = Regex::new(r"(?s)<article[^>]*>(.*?)</article>").ok()?;
        let tags = Regex::new(r"<[^>]+>").ok()?;

        let inner = article.captures(&self.raw_body)?.get(1)?.as_str();
        let text = tags.replace_all(inner, " ");
        let text = text.split_whitespace().collect::<Vec<_>>().join(" ");

        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}
