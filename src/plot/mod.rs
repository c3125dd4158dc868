//! # 绘图模块
//!
//! 将批量读取的曲线绘制成图并导出。
//!
//! ## 子模块
//! - `axis`: 坐标轴变量、范围与刻度
//! - `style`: 颜色/线型循环
//! - `chart`: 图表渲染
//! - `export`: CSV 导出
//!
//! ## 依赖关系
//! - 被 `commands/plot.rs`, `commands/list.rs` 使用
//! - 使用 `batch/`, `models/`

pub mod axis;
pub mod chart;
pub mod export;
pub mod style;

pub use axis::{chart_title, AxisSpec, AxisVariable};
pub use chart::{ChartSpec, Curve};
pub use style::style_for;
