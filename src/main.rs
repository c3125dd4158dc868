//! # adpiplot - ADPI 缺陷浓度曲线绘图工具
//!
//! 根据体系结构描述（网络位点/原子、间隙位点、添加原子）生成全部点缺陷
//! 数据文件名与图例标签，读取 ADPI 输出并绘制浓度曲线。
//!
//! ## 子命令
//! - `list`    - 列出将要读取的文件与标签
//! - `plot`    - 读取数据并绘图
//! - `inspect` - 检查单个数据文件
//! - `check`   - 核对数据目录
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── naming/   (缺陷命名引擎)
//!   │     ├── parsers/  (数据文件读取)
//!   │     ├── batch/    (并行批量读取)
//!   │     ├── plot/     (图表与导出)
//!   │     └── models/   (数据模型)
//!   ├── config.rs   (常量与默认值)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod config;
mod error;
mod models;
mod naming;
mod parsers;
mod plot;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
