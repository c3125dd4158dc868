//! # ADPI 数据文件解析器
//!
//! 读取 ADPI 输出的浓度数据文件。文件格式：
//!
//! ```text
//! # mu_Ti mu_N x_Ti x_N x_config Hf_config    (可选表头注释)
//! -7.1  -9.3  0.51  0.49  1.2e-5  1.73
//! ...
//! ```
//!
//! 数值块的列顺序为 `mu_1..mu_n, x_1..x_n, x_config, Hf_config`（共 2n+2 列）。
//! 文件按 Latin-1 解码，任意字节都不会导致读取失败。
//!
//! 文件缺失、无数值块、列越界互相区分，均以 `ReadFailure` 返回，不会 panic。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs`, `commands/` 使用
//! - 使用 `models/series.rs`

use crate::models::{ColumnLayout, DataSeries, DefectEntry, InvalidReason, ReadFailure, ReadOutcome};

use std::fs;
use std::path::{Path, PathBuf};

/// 解析后的数值块（至少一行，行数维度不会被压缩掉）
#[derive(Debug, Clone, PartialEq)]
pub struct NumericBlock {
    /// 数值块第一行在文件中的行号 (0-based)
    pub start_line: usize,
    pub rows: Vec<Vec<f64>>,
}

impl NumericBlock {
    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    pub fn ncol(&self) -> usize {
        self.rows.first().map(|r| r.len()).unwrap_or(0)
    }

    pub fn column(&self, idx: usize) -> Vec<f64> {
        self.rows.iter().map(|r| r[idx]).collect()
    }
}

/// 以 Latin-1 读取文本文件
fn read_latin1(path: &Path) -> std::io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(bytes.iter().map(|&b| b as char).collect())
}

/// 打开文件，区分不存在与不可读
fn open_text(path: &Path) -> Result<String, ReadFailure> {
    if !path.is_file() {
        return Err(ReadFailure::NotFound);
    }
    read_latin1(path).map_err(|e| InvalidReason::Unreadable(e.to_string()).into())
}

fn is_skippable(tokens: &[&str]) -> bool {
    tokens.first().map_or(true, |t| t.starts_with('#'))
}

fn parse_row(tokens: &[&str]) -> Option<Vec<f64>> {
    tokens.iter().map(|t| t.parse::<f64>().ok()).collect()
}

/// 去掉行内 `#` 注释后的分词结果
fn data_tokens(line: &str) -> Vec<&str> {
    let content = match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    };
    content.split_whitespace().collect()
}

/// 从文本中定位并解析数值块
///
/// 第一行所有 token 都能解析为浮点数的非注释行即为数值块起点；
/// 其后的注释行与空行被跳过，每行列数必须一致。
pub fn parse_numeric_block(content: &str) -> Result<NumericBlock, InvalidReason> {
    let lines: Vec<&str> = content.lines().collect();

    let start_line = lines
        .iter()
        .position(|line| {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            !is_skippable(&tokens) && parse_row(&tokens).is_some()
        })
        .ok_or(InvalidReason::NoNumericBlock)?;

    let mut rows: Vec<Vec<f64>> = Vec::new();
    for (offset, line) in lines[start_line..].iter().enumerate() {
        let tokens = data_tokens(line);
        if tokens.is_empty() {
            continue;
        }
        let line_no = start_line + offset + 1;

        let row = parse_row(&tokens).ok_or_else(|| InvalidReason::Malformed {
            line: line_no,
            detail: format!("non-numeric value in '{}'", line.trim()),
        })?;

        if let Some(first) = rows.first() {
            if row.len() != first.len() {
                return Err(InvalidReason::Malformed {
                    line: line_no,
                    detail: format!("expected {} columns, found {}", first.len(), row.len()),
                });
            }
        }
        rows.push(row);
    }

    Ok(NumericBlock { start_line, rows })
}

/// 读取文件的数值块
pub fn load_numeric_block(path: &Path) -> Result<NumericBlock, ReadFailure> {
    let content = open_text(path)?;
    Ok(parse_numeric_block(&content)?)
}

/// 读取数据文件中的两列
///
/// - `x_col` 缺省为最后一个 `x_*` 列 (`2n - 1`)
/// - `y_col` 缺省为配置浓度列 `x_config` (`2n`)
/// - `n_species` 缺省（或为 0）时由列数推断
pub fn read_data(
    path: &Path,
    x_col: Option<usize>,
    y_col: Option<usize>,
    n_species: Option<usize>,
) -> ReadOutcome {
    let block = load_numeric_block(path)?;
    let ncol = block.ncol();

    let n = match n_species {
        Some(n) if n > 0 => n as i64,
        _ => ColumnLayout::infer_species(ncol),
    };
    let x_col = x_col.map_or(2 * n - 1, |c| c as i64);
    let y_col = y_col.map_or(2 * n, |c| c as i64);

    let in_range = |c: i64| c >= 0 && (c as usize) < ncol;
    if !in_range(x_col) || !in_range(y_col) {
        return Err(InvalidReason::ColumnOutOfRange { x_col, y_col, ncol }.into());
    }

    Ok(DataSeries {
        x: block.column(x_col as usize),
        y: block.column(y_col as usize),
    })
}

/// 检测物种数：第一行含至少 4 个 token 的非注释行，返回 `(tokens - 2) / 2`
///
/// 文件缺失或找不到这样的行时返回 0。
pub fn detect_species_count(path: &Path) -> usize {
    match open_text(path) {
        Ok(content) => species_count_in(&content),
        Err(_) => 0,
    }
}

fn species_count_in(content: &str) -> usize {
    content
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>())
        .filter(|tokens| !is_skippable(tokens))
        .find(|tokens| tokens.len() >= 4)
        .map(|tokens| (tokens.len() - 2) / 2)
        .unwrap_or(0)
}

/// 从表头注释中读取物种名
///
/// 取第一条含 `mu_<名>` 或 `x_<名>` 的注释行，按出现顺序去重（跳过 `x_config`）；
/// 没有表头时退回 `at1..atn`。文件缺失时返回空列表。
pub fn detect_column_names(path: &Path) -> Vec<String> {
    match open_text(path) {
        Ok(content) => column_names_in(&content),
        Err(_) => Vec::new(),
    }
}

/// `x_config` / `x_DP` 是纵轴列，不是物种
fn is_ordinate_column(tok: &str) -> bool {
    tok == "x_DP" || ColumnLayout::ordinate_choices().iter().any(|c| *c == tok)
}

fn column_names_in(content: &str) -> Vec<String> {
    for line in content.lines() {
        let trimmed = line.trim();
        if !trimmed.starts_with('#') {
            continue;
        }
        let header = trimmed.trim_matches('#').replace([',', '='], " ");

        let mut names: Vec<String> = Vec::new();
        for tok in header.split_whitespace() {
            let name = tok.strip_prefix("mu_").or_else(|| tok.strip_prefix("x_"));
            if let Some(name) = name {
                if is_ordinate_column(tok) {
                    continue;
                }
                if !names.iter().any(|n| n == name) {
                    names.push(name.to_string());
                }
            }
        }
        if !names.is_empty() {
            return names;
        }
    }

    ColumnLayout::synthetic(species_count_in(content))
        .species()
        .to_vec()
}

/// 返回缺失的数据文件路径
pub fn check_files_exist(entries: &[DefectEntry], data_dir: &Path) -> Vec<PathBuf> {
    entries
        .iter()
        .map(|e| data_dir.join(&e.file_name))
        .filter(|p| !p.is_file())
        .collect()
}
