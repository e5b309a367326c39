//! 终端交互 - 基础设施层
//!
//! 持有 stdin/stderr，只暴露"询问用户"的能力；非交互环境下一律视为未选择

use std::io::{self, BufRead, IsTerminal, Write};

use crate::models::Part;
use crate::orchestrator::Confirm;
use crate::services::PartChooser;

/// 终端提示器
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        Self
    }

    /// 读取一行输入（已去除首尾空白），非交互环境返回 `None`
    pub fn ask(&self, prompt: &str) -> Option<String> {
        if !io::stdin().is_terminal() {
            return None;
        }

        let mut stderr = io::stderr();
        write!(stderr, "{}", prompt).ok()?;
        stderr.flush().ok()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line).ok()?;
        Some(line.trim().to_string())
    }
}

impl PartChooser for TerminalPrompter {
    fn choose(&self, options: &[Part]) -> Option<Part> {
        let labels = options.iter().map(Part::to_string).collect::<Vec<_>>().join("/");
        let answer = self.ask(&format!("选择要运行的部分 [{}]（直接回车取消）: ", labels))?;
        parse_part_choice(&answer, options)
    }
}

impl Confirm for TerminalPrompter {
    fn confirm(&self, question: &str) -> bool {
        self.ask(&format!("{} [y/N]: ", question))
            .is_some_and(|answer| is_yes(&answer))
    }
}

fn parse_part_choice(answer: &str, options: &[Part]) -> Option<Part> {
    let part = answer.parse::<u8>().ok().and_then(Part::from_level)?;
    options.contains(&part).then_some(part)
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes")
}
