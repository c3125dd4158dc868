//! # list 子命令 CLI 定义
//!
//! 预览命名引擎生成的文件名与标签，不读取任何文件。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/list.rs`

use super::system::SystemArgs;

use clap::Args;
use std::path::PathBuf;

/// list 子命令参数
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub system: SystemArgs,

    /// Also write the generated entries to this CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Also print the atom and site index tables used in file names
    #[arg(long, default_value_t = false)]
    pub indices: bool,
}
