//! # 批量处理模块
//!
//! 提供数据文件的批量读取与收集。
//!
//! ## 功能
//! - 并行读取命名引擎生成的文件，保持生成顺序
//! - 逐文件记录成功/缺失/无效
//! - 收集数据目录中符合命名规则的文件
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod runner;

pub use collector::DataFileCollector;
pub use runner::{BatchStatus, ColumnRequest, LoadOutcome, LoadReport, LoadRunner};
