//! # 数据序列与列布局
//!
//! - `DataSeries`: 从一个数据文件中取出的两列 (x, y)
//! - `ReadFailure`: 文件缺失 / 数据无效，两者严格区分
//! - `ColumnLayout`: 数据文件的列顺序
//!   `mu_1..mu_n, x_1..x_n, x_config, Hf_config`
//!
//! ## 依赖关系
//! - 被 `parsers/adpi.rs`, `batch/`, `commands/` 使用
//! - 无外部模块依赖

use thiserror::Error;

/// 两列等长数值序列
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataSeries {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl DataSeries {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

/// 文件存在但内容不可用的原因
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidReason {
    #[error("no exploitable data")]
    NoNumericBlock,

    #[error("column index (x_col={x_col}, y_col={y_col}) out of range [0, {}]", .ncol.saturating_sub(1))]
    ColumnOutOfRange { x_col: i64, y_col: i64, ncol: usize },

    #[error("line {line}: {detail}")]
    Malformed { line: usize, detail: String },

    #[error("unreadable file: {0}")]
    Unreadable(String),
}

/// 单个文件读取失败，不向上抛出，由调用方汇总
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReadFailure {
    #[error("file not found")]
    NotFound,

    #[error("{0}")]
    Invalid(#[from] InvalidReason),
}

/// 读取结果
pub type ReadOutcome = std::result::Result<DataSeries, ReadFailure>;

/// 配置浓度列名
pub const X_CONFIG: &str = "x_config";
/// 配置形成焓列名
pub const HF_CONFIG: &str = "Hf_config";

/// 数据文件的列布局
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    species: Vec<String>,
}

impl ColumnLayout {
    pub fn from_species(species: Vec<String>) -> Self {
        ColumnLayout { species }
    }

    /// 无表头时的合成名称 `at1..atn`
    pub fn synthetic(n: usize) -> Self {
        ColumnLayout {
            species: (1..=n).map(|i| format!("at{}", i)).collect(),
        }
    }

    /// 由列数推断物种数 `floor((ncol - 2) / 2)`，列数不足时为负
    pub fn infer_species(ncol: usize) -> i64 {
        (ncol as i64 - 2).div_euclid(2)
    }

    pub fn species(&self) -> &[String] {
        &self.species
    }

    pub fn ncol(&self) -> usize {
        2 * self.species.len() + 2
    }

    pub fn column_names(&self) -> Vec<String> {
        let mut cols = self.abscissa_choices();
        cols.push(X_CONFIG.to_string());
        cols.push(HF_CONFIG.to_string());
        cols
    }

    /// 可作横轴的列：`mu_*` 与 `x_*`
    pub fn abscissa_choices(&self) -> Vec<String> {
        self.species
            .iter()
            .map(|s| format!("mu_{}", s))
            .chain(self.species.iter().map(|s| format!("x_{}", s)))
            .collect()
    }

    /// 可作纵轴的列
    pub fn ordinate_choices() -> [&'static str; 2] {
        [X_CONFIG, HF_CONFIG]
    }

    /// 列名 → 列号；兼容旧列名 `x_DP` / `Hf_DP`
    pub fn resolve(&self, label: &str) -> Option<usize> {
        let n = self.species.len();
        match label {
            X_CONFIG | "x_DP" => return Some(2 * n),
            HF_CONFIG | "Hf_DP" => return Some(2 * n + 1),
            _ => {}
        }
        if let Some(name) = label.strip_prefix("mu_") {
            return self.species.iter().position(|s| s == name);
        }
        if let Some(name) = label.strip_prefix("x_") {
            return self.species.iter().position(|s| s == name).map(|i| n + i);
        }
        None
    }

    /// 默认横轴列名：最后一个 `x_*`
    pub fn default_abscissa(&self) -> Option<String> {
        self.species.last().map(|s| format!("x_{}", s))
    }
}
