//! # inspect 命令实现
//!
//! 对单个数据文件运行物种数检测、列名检测，并预览数值块。
//!
//! ## 依赖关系
//! - 使用 `cli/inspect.rs` 定义的参数
//! - 使用 `parsers/adpi.rs`

use crate::cli::inspect::InspectArgs;
use crate::error::{AdpiError, Result};
use crate::models::{ColumnLayout, ReadFailure};
use crate::parsers::adpi;
use crate::utils::output;

use tabled::builder::Builder;

/// 执行 inspect 命令
pub fn execute(args: InspectArgs) -> Result<()> {
    output::print_header("Inspect ADPI Data File");

    let block = match adpi::load_numeric_block(&args.file) {
        Ok(block) => block,
        Err(ReadFailure::NotFound) => {
            return Err(AdpiError::FileNotFound {
                path: args.file.display().to_string(),
            })
        }
        Err(ReadFailure::Invalid(reason)) => {
            return Err(AdpiError::InvalidData {
                path: args.file.display().to_string(),
                reason: reason.to_string(),
            })
        }
    };

    let n_species = adpi::detect_species_count(&args.file);
    let names = adpi::detect_column_names(&args.file);
    let layout = ColumnLayout::from_species(names);

    output::print_info(&format!("File: {}", args.file.display()));
    output::print_info(&format!(
        "Numeric block: {} row(s) x {} column(s), starting at line {}",
        block.nrows(),
        block.ncol(),
        block.start_line + 1
    ));
    output::print_info(&format!("Detected species: {}", n_species));
    output::print_info(&format!("Species names: {}", layout.species().join(", ")));

    if layout.ncol() != block.ncol() {
        output::print_warning(&format!(
            "Header names imply {} columns, the numeric block has {}",
            layout.ncol(),
            block.ncol()
        ));
    }

    output::print_info(&format!(
        "Abscissa choices: {}",
        layout.abscissa_choices().join(", ")
    ));
    output::print_info(&format!(
        "Ordinate choices: {}",
        ColumnLayout::ordinate_choices().join(", ")
    ));

    // 预览表格：表头使用列名（列数不符时用列号）
    let columns = layout.column_names();
    let mut builder = Builder::default();
    if columns.len() == block.ncol() {
        builder.push_record(columns);
    } else {
        builder.push_record((0..block.ncol()).map(|i| format!("col{}", i)));
    }
    for row in block.rows.iter().take(args.rows) {
        builder.push_record(row.iter().map(|v| format!("{:.6e}", v)));
    }
    println!("{}", builder.build());

    if block.nrows() > args.rows {
        output::print_info(&format!("... {} more row(s)", block.nrows() - args.rows));
    }

    // plot 在不指定列时读取的曲线
    match adpi::read_data(&args.file, None, None, None) {
        Ok(series) => output::print_success(&format!(
            "Default curve ({} vs {}): {} point(s)",
            ColumnLayout::ordinate_choices()[0],
            layout.default_abscissa().unwrap_or_else(|| "x".to_string()),
            series.len()
        )),
        Err(reason) => output::print_warning(&format!("Default curve unavailable: {}", reason)),
    }

    Ok(())
}
