//! # check 命令实现
//!
//! 核对数据目录与命名引擎的结果：
//! - 生成的文件名哪些存在、哪些缺失
//! - 目录中符合命名规则却未被生成的文件（例如被开关或筛选排除的曲线）
//!
//! ## 依赖关系
//! - 使用 `cli/check.rs` 定义的参数
//! - 使用 `naming/`, `parsers/adpi.rs`, `batch/collector.rs`

use super::list::warn_duplicates;
use crate::batch::DataFileCollector;
use crate::cli::check::CheckArgs;
use crate::error::Result;
use crate::models::{DefectEntry, DefectKey};
use crate::naming;
use crate::parsers::adpi;
use crate::utils::output;

use colored::Colorize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tabled::{Table, Tabled};

#[derive(Debug, Clone, Tabled)]
struct CheckRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Label")]
    label: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// 执行 check 命令
pub fn execute(args: CheckArgs) -> Result<()> {
    output::print_header("Check ADPI Data Directory");

    let config = args.system.to_config()?;
    warn_duplicates(&config);

    let data_dir = &args.system.data_dir;
    let entries = naming::generate(&config);
    let missing = adpi::check_files_exist(&entries, data_dir);

    if entries.is_empty() {
        output::print_warning("No curve selected: check the defect toggles and name lists.");
    } else {
        println!("{}", Table::new(rows(&entries, data_dir, &missing)));
    }

    let files = DataFileCollector::new(data_dir, &config.system_name)
        .recursive(args.recursive)
        .collect()?;
    let unexpected = unexpected_files(&config.system_name, &entries, &files);

    if !unexpected.is_empty() {
        output::print_warning(&format!(
            "{} file(s) follow the naming scheme but were not generated:",
            unexpected.len()
        ));
        for path in &unexpected {
            output::print_file(&path.display().to_string());
        }
    }

    output::print_separator();
    let present = entries.len() - missing.len();
    if missing.is_empty() {
        output::print_done(&format!("All {} expected file(s) present", entries.len()));
    } else {
        output::print_done(&format!(
            "{}/{} expected file(s) present, {} missing",
            present,
            entries.len(),
            missing.len()
        ));
    }

    Ok(())
}

fn rows(entries: &[DefectEntry], data_dir: &Path, missing: &[PathBuf]) -> Vec<CheckRow> {
    entries
        .iter()
        .map(|e| {
            let absent = missing.contains(&data_dir.join(&e.file_name));
            CheckRow {
                file: e.file_name.clone(),
                label: e.label.clone(),
                status: if absent {
                    "missing".red().to_string()
                } else {
                    "ok".green().to_string()
                },
            }
        })
        .collect()
}

/// 目录中可解析为 `DefectKey` 但不在生成结果中的文件
fn unexpected_files(base: &str, entries: &[DefectEntry], files: &[PathBuf]) -> Vec<PathBuf> {
    let expected: HashSet<DefectKey> = entries.iter().map(|e| e.key).collect();

    files
        .iter()
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .and_then(|n| naming::parse_file_name(base, n))
                .map_or(false, |key| !expected.contains(&key))
        })
        .cloned()
        .collect()
}
