//! # inspect 子命令 CLI 定义
//!
//! 查看单个数据文件的物种数、列名与数值块。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/inspect.rs`

use clap::Args;
use std::path::PathBuf;

/// inspect 子命令参数
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// ADPI data file to inspect
    pub file: PathBuf,

    /// Number of data rows to preview
    #[arg(long, default_value_t = 5)]
    pub rows: usize,
}
