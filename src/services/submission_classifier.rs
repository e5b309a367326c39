//! 提交结果判定服务 - 业务能力层
//!
//! 远端没有结构化接口，只能按 HTML 文本匹配；无法识别时降级为 `Unknown`

use crate::models::{SubmissionVerdict, VerdictStatus};

const RIGHT_ANSWER: &str = "That's the right answer";
const WRONG_ANSWER: &str = "That's not the right answer";

/// 按子串判定提交结果，先匹配正确，再匹配错误
pub fn classify(body: &str) -> SubmissionVerdict {
    let status = if body.contains(RIGHT_ANSWER) {
        VerdictStatus::Success
    } else if body.contains(WRONG_ANSWER) {
        VerdictStatus::Wrong
    } else {
        VerdictStatus::Unknown
    };

    SubmissionVerdict {
        status,
        raw_body: body.to_string(),
    }
}
