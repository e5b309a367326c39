//! 日志工具模块
//!
//! 提供日志格式化和输出的辅助函数

use tracing::info;

/// 记录命令启动信息
///
/// # 参数
/// - `command`: 命令名称
/// - `target`: 命令作用的对象（如题目）
pub fn log_command_start(command: &str, target: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 {} - {}", command, target);
    info!(
        "开始时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
}

/// 记录命令完成信息
pub fn log_command_complete(command: &str) {
    info!("{}", "─".repeat(60));
    info!("✓ {} 完成", command);
    info!("{}", "─".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
