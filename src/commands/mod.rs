//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `naming/`, `batch/`, `parsers/`, `plot/`, `utils/`
//! - 子模块: list, plot, inspect, check

pub mod check;
pub mod inspect;
pub mod list;
pub mod plot;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::List(args) => list::execute(args),
        Commands::Plot(args) => plot::execute(args),
        Commands::Inspect(args) => inspect::execute(args),
        Commands::Check(args) => check::execute(args),
    }
}
