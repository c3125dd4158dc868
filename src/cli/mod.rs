//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `list`: 列出命名引擎生成的文件名与标签
//! - `plot`: 读取全部数据文件并绘图
//! - `inspect`: 检查单个数据文件
//! - `check`: 核对数据目录
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: system, list, plot, inspect, check

pub mod check;
pub mod inspect;
pub mod list;
pub mod plot;
pub mod system;

use clap::{Parser, Subcommand};

/// adpiplot - ADPI 缺陷浓度曲线绘图工具
#[derive(Parser)]
#[command(name = "adpiplot")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Plot point-defect concentration curves from ADPI output files", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// List the data files and legend labels the naming scheme generates
    List(list::ListArgs),

    /// Read every generated data file and plot the concentration curves
    Plot(plot::PlotArgs),

    /// Inspect one data file (species, columns, numeric block)
    Inspect(inspect::InspectArgs),

    /// Report present, missing and unexpected files in the data directory
    Check(check::CheckArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plot_command() {
        let cli = Cli::parse_from([
            "adpiplot",
            "plot",
            "--network-sites",
            "Ti,N",
            "-x",
            "mu_H",
            "--ymin",
            "1e-10",
            "--xmin",
            "-9",
            "-o",
            "out.svg",
        ]);
        match cli.command {
            Commands::Plot(args) => {
                assert_eq!(args.system.network_sites, vec!["Ti", "N"]);
                assert_eq!(args.x_axis.as_deref(), Some("mu_H"));
                assert_eq!(args.xmin, Some(-9.0));
                assert_eq!(args.ymin, Some(1e-10));
                assert_eq!(args.width, 1300);
                assert!(!args.strict);
            }
            _ => panic!("expected plot command"),
        }
    }

    #[test]
    fn test_parse_inspect_command() {
        let cli = Cli::parse_from(["adpiplot", "inspect", "TiN_adpi_L_r_1", "--rows", "3"]);
        match cli.command {
            Commands::Inspect(args) => {
                assert_eq!(args.file.to_str(), Some("TiN_adpi_L_r_1"));
                assert_eq!(args.rows, 3);
            }
            _ => panic!("expected inspect command"),
        }
    }
}
