//! # list 命令实现
//!
//! 运行命名引擎并以表格列出将要读取的文件（不访问数据文件）。
//!
//! ## 依赖关系
//! - 使用 `cli/list.rs` 定义的参数
//! - 使用 `naming/` 生成条目
//! - 使用 `plot/export.rs` 导出 CSV

use crate::cli::list::ListArgs;
use crate::error::Result;
use crate::models::{DefectEntry, IndexedName, StructureConfig};
use crate::naming;
use crate::plot::export;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 表格行
#[derive(Debug, Clone, Tabled)]
struct EntryRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Label")]
    label: String,
    #[tabled(rename = "Kind")]
    kind: String,
}

/// 索引表行
#[derive(Debug, Clone, Tabled)]
struct IndexRow {
    #[tabled(rename = "Index")]
    index: usize,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Origin")]
    origin: String,
}

/// 执行 list 命令
pub fn execute(args: ListArgs) -> Result<()> {
    output::print_header("Defect Curve Files");

    let config = args.system.to_config()?;
    warn_duplicates(&config);

    if args.indices {
        output::print_info("Atoms");
        println!("{}", Table::new(index_rows(&config.indexed_atoms())));
        output::print_info("Sites");
        println!("{}", Table::new(index_rows(&config.indexed_sites())));
    }

    let entries = naming::generate(&config);
    if entries.is_empty() {
        output::print_warning("No curve selected: check the defect toggles and name lists.");
        return Ok(());
    }

    println!("{}", Table::new(rows(&entries)));
    output::print_info(&format!(
        "{} file(s) expected under '{}'",
        entries.len(),
        args.system.data_dir.display()
    ));

    if let Some(ref path) = args.csv {
        export::entries_to_csv(&entries, path)?;
        output::print_success(&format!("Entries saved to '{}'", path.display()));
    }

    Ok(())
}

fn rows(entries: &[DefectEntry]) -> Vec<EntryRow> {
    entries
        .iter()
        .enumerate()
        .map(|(i, e)| EntryRow {
            index: i + 1,
            file: e.file_name.clone(),
            label: e.label.clone(),
            kind: e.kind.to_string(),
        })
        .collect()
}

fn index_rows(names: &[IndexedName]) -> Vec<IndexRow> {
    names
        .iter()
        .map(|n| IndexRow {
            index: n.index,
            name: n.name.clone(),
            origin: n.origin.to_string(),
        })
        .collect()
}

/// 重复名称会让标签产生歧义，仅提示
pub fn warn_duplicates(config: &StructureConfig) {
    let dups = config.duplicate_names();
    if !dups.is_empty() {
        output::print_warning(&format!(
            "Names used in more than one category (labels may be ambiguous): {}",
            dups.join(", ")
        ));
    }
}
