use std::fmt::{self, Display};
use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};

use crate::error::{AppError, AppResult};

/// 第一届活动的年份
pub const FIRST_YEAR: u16 = 2015;

/// 题目输入文件名
pub const INPUT_FILE: &str = "input.txt";

/// 题目的部分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    One,
    Two,
}

impl Part {
    /// 提交答案时使用的 level 值
    pub fn level(self) -> u8 {
        match self {
            Part::One => 1,
            Part::Two => 2,
        }
    }

    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Part::One),
            2 => Some(Part::Two),
            _ => None,
        }
    }
}

impl Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level())
    }
}

/// 题目标识：年份 + 日期 + 部分
///
/// `part` 为 `None` 表示不分部分的单个解决方案
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleKey {
    pub year: u16,
    pub day: u8,
    pub part: Option<Part>,
}

impl PuzzleKey {
    /// 创建并校验题目标识（以本地当前年份为上限）
    pub fn new(year: u16, day: u8, part: Option<Part>) -> AppResult<Self> {
        let current_year = chrono::Local::now().year();
        Self::new_checked(year, day, part, current_year)
    }

    /// 以给定年份为上限创建并校验题目标识
    pub fn new_checked(year: u16, day: u8, part: Option<Part>, current_year: i32) -> AppResult<Self> {
        if year < FIRST_YEAR || i32::from(year) > current_year {
            return Err(AppError::invalid_puzzle(format!(
                "年份 {} 不在 {}-{} 范围内",
                year, FIRST_YEAR, current_year
            )));
        }

        let max_day = max_day(year);
        if day == 0 || day > max_day {
            return Err(AppError::invalid_puzzle(format!(
                "{} 年的日期必须在 1-{} 之间，实际为 {}",
                year, max_day, day
            )));
        }

        Ok(Self { year, day, part })
    }

    /// 题目目录：`{root}/{year}/day{day}`
    pub fn folder(&self, root: &Path) -> PathBuf {
        root.join(self.year.to_string()).join(format!("day{}", self.day))
    }

    /// 题目输入文件路径
    pub fn input_path(&self, root: &Path) -> PathBuf {
        self.folder(root).join(INPUT_FILE)
    }
}

impl Display for PuzzleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.part {
            Some(part) => write!(f, "{} 第 {} 天 第 {} 部分", self.year, self.day, part),
            None => write!(f, "{} 第 {} 天", self.year, self.day),
        }
    }
}

/// 某一年活动的天数（2025 年起缩短为 12 天）
pub fn max_day(year: u16) -> u8 {
    if year >= 2025 {
        12
    } else {
        25
    }
}

/// 活动期间（12 月）返回当天对应的年份和日期
pub fn event_day_for(date: NaiveDate) -> Option<(u16, u8)> {
    if date.month() != 12 {
        return None;
    }
    let year = u16::try_from(date.year()).ok()?;
    let day = u8::try_from(date.day()).ok()?;
    if year < FIRST_YEAR || day > max_day(year) {
        return None;
    }
    Some((year, day))
}
