//! 解决方案定位服务 - 业务能力层
//!
//! 只负责"从题目目录中选出唯一一个要运行的文件"，不关心如何运行

use std::io::ErrorKind;
use std::path::Path;

use tokio::fs;
use tracing::{debug, info};

use crate::error::{AppError, AppResult};
use crate::models::{Part, SolutionFile};

/// 编译产物的扩展名，定位时跳过
const ARTIFACT_EXTENSIONS: [&str; 1] = ["class"];

/// 在第 1 / 第 2 部分之间做选择的协作者
///
/// 返回 `None` 表示用户放弃选择
pub trait PartChooser {
    fn choose(&self, options: &[Part]) -> Option<Part>;
}

impl<F> PartChooser for F
where
    F: Fn(&[Part]) -> Option<Part>,
{
    fn choose(&self, options: &[Part]) -> Option<Part> {
        self(options)
    }
}

/// 定位结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Located {
    Selected(SolutionFile),
    /// 需要选择时用户未做选择
    Cancelled,
}

/// 按部分分桶的候选文件，每个桶只保留第一个
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Candidates {
    pub part_one: Option<SolutionFile>,
    pub part_two: Option<SolutionFile>,
    pub single: Option<SolutionFile>,
}

impl Candidates {
    pub fn push(&mut self, file: SolutionFile) {
        let slot = match file.inferred_part {
            Some(Part::One) => &mut self.part_one,
            Some(Part::Two) => &mut self.part_two,
            None => &mut self.single,
        };
        if slot.is_none() {
            *slot = Some(file);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.part_one.is_none() && self.part_two.is_none() && self.single.is_none()
    }

    fn take_part(&mut self, part: Part) -> Option<SolutionFile> {
        match part {
            Part::One => self.part_one.take(),
            Part::Two => self.part_two.take(),
        }
    }
}

/// 解决方案定位服务
pub struct SolutionLocator;

impl SolutionLocator {
    pub fn new() -> Self {
        Self
    }

    /// 列出目录并选出解决方案文件
    pub async fn locate(
        &self,
        folder: &Path,
        requested: Option<Part>,
        chooser: &dyn PartChooser,
    ) -> AppResult<Located> {
        let candidates = self.scan(folder).await?;
        debug!("候选文件: {:?}", candidates);
        select(candidates, requested, chooser, folder)
    }

    /// 扫描目录，按文件名排序后分桶
    pub async fn scan(&self, folder: &Path) -> AppResult<Candidates> {
        let mut entries = match fs::read_dir(folder).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(AppError::NoSolutionFound {
                    folder: folder.to_path_buf(),
                });
            }
            Err(e) => return Err(e.into()),
        };

        let mut paths = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            let is_file = fs::metadata(&path).await.map(|m| m.is_file()).unwrap_or(false);
            if is_file {
                paths.push(path);
            }
        }
        paths.sort();

        let mut candidates = Candidates::default();
        for path in paths {
            let is_artifact = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| ARTIFACT_EXTENSIONS.contains(&e));
            if is_artifact {
                continue;
            }
            if let Some(file) = SolutionFile::from_path(&path) {
                candidates.push(file);
            }
        }

        Ok(candidates)
    }
}

impl Default for SolutionLocator {
    fn default() -> Self {
        Self::new()
    }
}

/// 选择策略
///
/// 1. 同时存在第 1、2 部分：必须明确选择
/// 2. 否则存在单个文件：直接选中
/// 3. 否则只有其中一个部分：仍需确认
/// 4. 都没有：`NoSolutionFound`
pub fn select(
    mut candidates: Candidates,
    requested: Option<Part>,
    chooser: &dyn PartChooser,
    folder: &Path,
) -> AppResult<Located> {
    if candidates.is_empty() {
        return Err(AppError::NoSolutionFound {
            folder: folder.to_path_buf(),
        });
    }

    if candidates.part_one.is_some() && candidates.part_two.is_some() {
        return Ok(choose_between(candidates, &[Part::One, Part::Two], requested, chooser));
    }

    if let Some(single) = candidates.single.take() {
        info!("✓ 使用单个解决方案文件: {}", single.file_name());
        return Ok(Located::Selected(single));
    }

    let only = if candidates.part_one.is_some() { Part::One } else { Part::Two };
    Ok(choose_between(candidates, &[only], requested, chooser))
}

fn choose_between(
    mut candidates: Candidates,
    options: &[Part],
    requested: Option<Part>,
    chooser: &dyn PartChooser,
) -> Located {
    let choice = match requested {
        Some(part) if options.contains(&part) => Some(part),
        _ => chooser.choose(options),
    };

    match choice.filter(|part| options.contains(part)) {
        Some(part) => match candidates.take_part(part) {
            Some(file) => {
                info!("✓ 选择第 {} 部分: {}", part, file.file_name());
                Located::Selected(file)
            }
            None => Located::Cancelled,
        },
        None => {
            info!("已取消：未选择要运行的部分");
            Located::Cancelled
        }
    }
}
