//! # 数据模型模块
//!
//! 定义体系结构描述、缺陷条目与数据序列。
//!
//! ## 依赖关系
//! - 被 `naming/`, `parsers/`, `batch/`, `commands/` 使用
//! - 子模块: system, defect, series

pub mod defect;
pub mod series;
pub mod system;

pub use defect::{DefectEntry, DefectKey, DefectKind};
pub use series::{ColumnLayout, DataSeries, InvalidReason, ReadFailure, ReadOutcome};
pub use system::{IndexedName, Origin, Selection, StructureConfig};
