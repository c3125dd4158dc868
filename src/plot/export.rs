//! # 数据导出
//!
//! - 缺陷条目列表（文件名、标签、类别）导出为 CSV
//! - 已读取的曲线数据导出为长格式 CSV：`file,label,x,y`
//!
//! ## 依赖关系
//! - 被 `commands/list.rs`, `commands/plot.rs` 调用
//! - 使用 `batch/runner.rs` 的 LoadReport
//! - 使用 `csv` + `serde` 写入

use crate::batch::LoadReport;
use crate::error::{AdpiError, Result};
use crate::models::DefectEntry;

use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct CurvePoint<'a> {
    file: &'a str,
    label: &'a str,
    x: f64,
    y: f64,
}

/// 导出缺陷条目
pub fn entries_to_csv(entries: &[DefectEntry], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    for entry in entries {
        wtr.serialize(entry)?;
    }

    wtr.flush().map_err(|e| AdpiError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 导出成功读取的曲线（生成顺序）
pub fn curves_to_csv(report: &LoadReport, output_path: &Path) -> Result<usize> {
    let mut wtr = csv::Writer::from_path(output_path)?;
    let mut rows = 0;

    for (outcome, series) in report.loaded() {
        for (x, y) in series.points() {
            wtr.serialize(CurvePoint {
                file: &outcome.entry.file_name,
                label: &outcome.entry.label,
                x,
                y,
            })?;
            rows += 1;
        }
    }

    wtr.flush().map_err(|e| AdpiError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(rows)
}
