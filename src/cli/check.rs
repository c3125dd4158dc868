//! # check 子命令 CLI 定义
//!
//! 核对数据目录：哪些生成的文件存在、哪些缺失、哪些文件未被生成。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/check.rs`

use super::system::SystemArgs;

use clap::Args;

/// check 子命令参数
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub system: SystemArgs,

    /// Recurse into subdirectories when looking for unexpected files
    #[arg(long, default_value_t = false)]
    pub recursive: bool,
}
