//! # 坐标轴设置
//!
//! 横纵轴变量、默认范围、线性/对数刻度以及刻度标签。
//!
//! 对数轴在 log10 空间中绘制，刻度标签再换算回原值。
//!
//! ## 依赖关系
//! - 被 `plot/chart.rs`, `commands/plot.rs` 使用
//! - 使用 `cli/plot.rs` 的 AxisScale

use crate::cli::plot::AxisScale;
use crate::error::{AdpiError, Result};
use crate::models::series::{HF_CONFIG, X_CONFIG};

use std::ops::Range;

/// 轴变量（由列名解析）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AxisVariable {
    /// `x_<名>`：原子分数
    Fraction(String),
    /// `mu_<名>`：化学势
    ChemicalPotential(String),
    /// `x_config`：配置浓度
    Concentration,
    /// `Hf_config`：配置形成焓
    FormationEnthalpy,
    Other(String),
}

impl AxisVariable {
    pub fn parse(label: &str) -> Self {
        match label {
            X_CONFIG | "x_DP" => AxisVariable::Concentration,
            HF_CONFIG | "Hf_DP" => AxisVariable::FormationEnthalpy,
            _ => {
                if let Some(name) = label.strip_prefix("mu_") {
                    AxisVariable::ChemicalPotential(name.to_string())
                } else if let Some(name) = label.strip_prefix("x_") {
                    AxisVariable::Fraction(name.to_string())
                } else {
                    AxisVariable::Other(label.to_string())
                }
            }
        }
    }

    /// 轴标题
    pub fn title(&self) -> String {
        match self {
            AxisVariable::Fraction(name) => format!("Fraction {}", name),
            AxisVariable::ChemicalPotential(name) => format!("μ_{} (eV)", name),
            AxisVariable::Concentration => "Point defect concentration".to_string(),
            AxisVariable::FormationEnthalpy => "Formation enthalpy (eV)".to_string(),
            AxisVariable::Other(label) => label.clone(),
        }
    }
}

/// 单个坐标轴
#[derive(Debug, Clone, PartialEq)]
pub struct AxisSpec {
    pub min: f64,
    pub max: f64,
    pub scale: AxisScale,
    pub title: String,
}

impl AxisSpec {
    /// 横轴：`mu_*` 默认 [-11, 0] 且强制线性；其它默认 [0, 0.05]、线性
    pub fn abscissa(
        var: &AxisVariable,
        min: Option<f64>,
        max: Option<f64>,
        scale: Option<AxisScale>,
    ) -> Result<Self> {
        let spec = match var {
            AxisVariable::ChemicalPotential(_) => AxisSpec {
                min: min.unwrap_or(-11.0),
                max: max.unwrap_or(0.0),
                scale: AxisScale::Linear,
                title: var.title(),
            },
            _ => AxisSpec {
                min: min.unwrap_or(0.0),
                max: max.unwrap_or(0.05),
                scale: scale.unwrap_or(AxisScale::Linear),
                title: var.title(),
            },
        };
        spec.checked()
    }

    /// 纵轴：默认 [1e-12, 1]、对数
    pub fn ordinate(
        var: &AxisVariable,
        min: Option<f64>,
        max: Option<f64>,
        scale: Option<AxisScale>,
    ) -> Result<Self> {
        AxisSpec {
            min: min.unwrap_or(1e-12),
            max: max.unwrap_or(1.0),
            scale: scale.unwrap_or(AxisScale::Log),
            title: var.title(),
        }
        .checked()
    }

    fn checked(self) -> Result<Self> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min >= self.max {
            return Err(AdpiError::Config(format!(
                "invalid bounds for axis '{}': [{}, {}]",
                self.title, self.min, self.max
            )));
        }
        if self.scale == AxisScale::Log && self.min <= 0.0 {
            return Err(AdpiError::Config(format!(
                "log scale on axis '{}' needs positive bounds, got min = {}",
                self.title, self.min
            )));
        }
        Ok(self)
    }

    /// 数据值 → 绘图坐标；对数轴上的非正值无法绘制
    pub fn transform(&self, v: f64) -> Option<f64> {
        if !v.is_finite() {
            return None;
        }
        match self.scale {
            AxisScale::Linear => Some(v),
            AxisScale::Log if v > 0.0 => Some(v.log10()),
            AxisScale::Log => None,
        }
    }

    /// 绘图坐标范围
    pub fn range(&self) -> Range<f64> {
        match self.scale {
            AxisScale::Linear => self.min..self.max,
            AxisScale::Log => self.min.log10()..self.max.log10(),
        }
    }

    /// 刻度标签（绘图坐标 → 原值文本）
    pub fn format_tick(&self, v: f64) -> String {
        match self.scale {
            AxisScale::Linear => {
                let a = v.abs();
                if a != 0.0 && (a < 1e-3 || a >= 1e4) {
                    format!("{:.1e}", v)
                } else {
                    let s = format!("{:.4}", v);
                    s.trim_end_matches('0').trim_end_matches('.').to_string()
                }
            }
            AxisScale::Log => {
                if (v - v.round()).abs() < 1e-9 {
                    format!("1e{}", v.round() as i64)
                } else {
                    format!("{:.1e}", 10f64.powf(v))
                }
            }
        }
    }
}

/// 图标题：`{标题}[ + 添加原子...] at {T}K`
pub fn chart_title(title: &str, temperature: &str, added_atoms: &[String]) -> String {
    let mut full = title.trim().to_string();
    for atom in added_atoms {
        full.push_str(" + ");
        full.push_str(atom);
    }
    format!("{} at {}K", full, temperature.trim())
}
