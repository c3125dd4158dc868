//! # 曲线样式循环
//!
//! 第 j 条曲线（命名引擎顺序）取调色板第 `j % 10` 种颜色、线型表第 `j % 4` 种线型。
//!
//! ## 依赖关系
//! - 被 `plot/chart.rs`, `commands/plot.rs` 使用
//! - 使用 `config.rs` 的 PALETTE / LINE_STYLES

use crate::config::{LINE_STYLES, PALETTE};

use plotters::style::RGBColor;

/// 线型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
    DashDot,
    Dotted,
}

impl LineStyle {
    fn from_name(name: &str) -> Self {
        match name {
            "dashed" => LineStyle::Dashed,
            "dash-dot" => LineStyle::DashDot,
            "dotted" => LineStyle::Dotted,
            _ => LineStyle::Solid,
        }
    }
}

impl std::fmt::Display for LineStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineStyle::Solid => write!(f, "solid"),
            LineStyle::Dashed => write!(f, "dashed"),
            LineStyle::DashDot => write!(f, "dash-dot"),
            LineStyle::Dotted => write!(f, "dotted"),
        }
    }
}

/// 单条曲线的样式
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveStyle {
    pub color_name: &'static str,
    pub color: RGBColor,
    pub line: LineStyle,
}

/// 按曲线序号循环取样式
pub fn style_for(index: usize) -> CurveStyle {
    let (color_name, (r, g, b)) = PALETTE[index % PALETTE.len()];
    CurveStyle {
        color_name,
        color: RGBColor(r, g, b),
        line: LineStyle::from_name(LINE_STYLES[index % LINE_STYLES.len()]),
    }
}
