//! # 解析器模块
//!
//! ADPI 输出数据文件的读取。
//!
//! ## 依赖关系
//! - 被 `commands/`, `batch/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: adpi

pub mod adpi;
