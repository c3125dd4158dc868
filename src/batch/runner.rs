//! # 批量读取执行器
//!
//! 并行读取命名引擎生成的所有数据文件，结果保持生成顺序。
//!
//! ## 功能
//! - 基于 rayon 的并行迭代（按索引收集，顺序不变）
//! - 进度条显示
//! - 每个文件的成功/失败独立归属，汇总为 `LoadReport`
//!
//! ## 依赖关系
//! - 被 `commands/plot.rs` 调用
//! - 使用 `parsers/adpi.rs` 读取文件
//! - 使用 `utils/progress.rs` 创建进度条

use crate::error::{AdpiError, Result};
use crate::models::{DataSeries, DefectEntry, ReadFailure, ReadOutcome};
use crate::parsers::adpi;
use crate::utils::progress;

use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// 列选择（None 表示使用读取器默认列）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnRequest {
    pub x_col: Option<usize>,
    pub y_col: Option<usize>,
    pub n_species: Option<usize>,
}

/// 单个文件的读取结果
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    /// 在命名引擎输出中的位置，用于样式循环
    pub index: usize,
    pub entry: DefectEntry,
    pub path: PathBuf,
    pub result: ReadOutcome,
}

impl LoadOutcome {
    pub fn series(&self) -> Option<&DataSeries> {
        self.result.as_ref().ok().filter(|s| !s.is_empty())
    }
}

/// 批次整体状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchStatus {
    /// 全部成功
    Complete,
    /// 部分成功
    Partial,
    /// 全部失败
    NoData,
}

/// 批量读取结果
#[derive(Debug, Default)]
pub struct LoadReport {
    pub outcomes: Vec<LoadOutcome>,
}

impl LoadReport {
    /// 成功读取的曲线（生成顺序）
    pub fn loaded(&self) -> impl Iterator<Item = (&LoadOutcome, &DataSeries)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.series().map(|s| (o, s)))
    }

    /// 缺失或无效的文件（生成顺序）
    pub fn failures(&self) -> impl Iterator<Item = &LoadOutcome> {
        self.outcomes.iter().filter(|o| o.series().is_none())
    }

    pub fn success_count(&self) -> usize {
        self.loaded().count()
    }

    pub fn not_found_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.result, Err(ReadFailure::NotFound)))
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.success_count()
    }

    pub fn status(&self) -> BatchStatus {
        match (self.success_count(), self.failed_count()) {
            (0, _) => BatchStatus::NoData,
            (_, 0) => BatchStatus::Complete,
            _ => BatchStatus::Partial,
        }
    }
}

/// 批量读取执行器
pub struct LoadRunner {
    /// 并行作业数
    jobs: usize,
}

impl LoadRunner {
    /// 创建新的执行器，`jobs == 0` 时使用全部 CPU
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self { jobs }
    }

    /// 读取 `data_dir` 下的全部条目
    pub fn run(
        &self,
        entries: &[DefectEntry],
        data_dir: &Path,
        columns: ColumnRequest,
    ) -> Result<LoadReport> {
        let pb = progress::create_progress_bar(entries.len() as u64, "Reading");

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map_err(|e| AdpiError::Other(format!("Failed to build thread pool: {}", e)))?;

        // 索引并行迭代器的 collect 保持输入顺序
        let outcomes: Vec<LoadOutcome> = pool.install(|| {
            entries
                .par_iter()
                .enumerate()
                .map(|(index, entry)| {
                    let path = data_dir.join(&entry.file_name);
                    let result =
                        adpi::read_data(&path, columns.x_col, columns.y_col, columns.n_species);
                    pb.inc(1);
                    LoadOutcome {
                        index,
                        entry: entry.clone(),
                        path,
                        result,
                    }
                })
                .collect()
        });

        pb.finish_and_clear();

        Ok(LoadReport { outcomes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InvalidReason, StructureConfig};
    use crate::naming;
    use std::fs;
    use tempfile::TempDir;

    fn config() -> StructureConfig {
        let mut cfg = StructureConfig::new("sys");
        cfg.network_sites = vec!["Ti".into(), "N".into()];
        cfg.network_atoms = vec!["Ti".into(), "N".into()];
        cfg.interstitial_sites = vec!["8c".into()];
        cfg.added_atoms = vec!["H".into()];
        cfg
    }

    #[test]
    fn test_outcomes_follow_generation_order() {
        let dir = TempDir::new().unwrap();
        let entries = naming::generate(&config());
        for (i, e) in entries.iter().enumerate() {
            let row = format!("0 0 0 0 0 {} {} 0\n", i, i as f64 * 0.1);
            fs::write(dir.path().join(&e.file_name), row).unwrap();
        }

        let report = LoadRunner::new(4)
            .run(&entries, dir.path(), ColumnRequest::default())
            .unwrap();

        assert_eq!(report.status(), BatchStatus::Complete);
        for (i, (outcome, series)) in report.loaded().enumerate() {
            assert_eq!(outcome.index, i);
            assert_eq!(outcome.entry, entries[i]);
            assert_eq!(series.x, vec![i as f64]);
        }
    }

    #[test]
    fn test_partial_failures_are_attributed() {
        let dir = TempDir::new().unwrap();
        let entries = naming::generate(&config());
        fs::write(dir.path().join(&entries[0].file_name), "1 2 3 4 5 6 7 8\n").unwrap();
        fs::write(dir.path().join(&entries[1].file_name), "# empty\n").unwrap();

        let report = LoadRunner::new(2)
            .run(&entries, dir.path(), ColumnRequest::default())
            .unwrap();

        assert_eq!(report.status(), BatchStatus::Partial);
        assert_eq!(report.success_count(), 1);
        assert_eq!(report.failed_count(), entries.len() - 1);
        assert_eq!(report.not_found_count(), entries.len() - 2);

        let first_failure = report.failures().next().unwrap();
        assert_eq!(first_failure.index, 1);
        assert_eq!(
            first_failure.result,
            Err(ReadFailure::Invalid(InvalidReason::NoNumericBlock))
        );
    }

    #[test]
    fn test_all_missing_is_no_data() {
        let dir = TempDir::new().unwrap();
        let entries = naming::generate(&config());
        let report = LoadRunner::new(1)
            .run(&entries, dir.path(), ColumnRequest::default())
            .unwrap();
        assert_eq!(report.status(), BatchStatus::NoData);
        assert_eq!(report.not_found_count(), entries.len());
    }
}
