//! # plot 命令实现
//!
//! 命名引擎 → 批量读取 → 绘制一张浓度曲线图。
//!
//! ## 流程
//! 1. 构造并校验体系结构，生成缺陷条目
//! 2. 解析横纵轴列名与坐标轴范围
//! 3. 并行读取全部数据文件，汇报缺失/无效文件
//! 4. 按生成顺序分配样式，渲染并导出
//!
//! ## 依赖关系
//! - 使用 `cli/plot.rs` 定义的参数
//! - 使用 `naming/`, `batch/`, `plot/`

use super::list::warn_duplicates;
use crate::batch::{BatchStatus, ColumnRequest, LoadReport, LoadRunner};
use crate::cli::plot::{ImageFormat, PlotArgs};
use crate::error::{AdpiError, Result};
use crate::models::series::X_CONFIG;
use crate::models::{ColumnLayout, ReadFailure};
use crate::naming;
use crate::plot::{chart, chart_title, export, style_for, AxisSpec, AxisVariable, ChartSpec, Curve};
use crate::utils::output;

use std::path::{Path, PathBuf};

/// 执行 plot 命令
pub fn execute(args: PlotArgs) -> Result<()> {
    output::print_header("ADPI Defect Concentration Plot");

    let config = args.system.to_config()?;
    warn_duplicates(&config);

    let entries = naming::generate(&config);
    if entries.is_empty() {
        return Err(AdpiError::NoDataPlotted);
    }

    // 列名解析基于配置中的物种（网络原子在前，添加原子在后）
    let layout = ColumnLayout::from_species(config.species_names());
    let x_label = args
        .x_axis
        .clone()
        .or_else(|| layout.default_abscissa())
        .unwrap_or_else(|| "x".to_string());
    let y_label = args.y_axis.clone().unwrap_or_else(|| X_CONFIG.to_string());

    let columns = ColumnRequest {
        x_col: resolve_column(&layout, args.x_axis.as_deref())?,
        y_col: resolve_column(&layout, args.y_axis.as_deref())?,
        n_species: args.n_species,
    };

    let x_axis = AxisSpec::abscissa(
        &AxisVariable::parse(&x_label),
        args.xmin,
        args.xmax,
        args.xscale,
    )?;
    let y_axis = AxisSpec::ordinate(
        &AxisVariable::parse(&y_label),
        args.ymin,
        args.ymax,
        args.yscale,
    )?;

    let (output_path, format) = resolve_output(&args.output, args.format)?;

    output::print_info(&format!(
        "System: {}  ({} curve(s), x = {}, y = {})",
        config.system_name,
        entries.len(),
        x_label,
        y_label
    ));
    output::print_info(&format!(
        "Data directory: {}",
        args.system.data_dir.display()
    ));
    for entry in &entries {
        output::print_file(&entry.file_name);
    }

    let runner = LoadRunner::new(args.jobs);
    let report = runner.run(&entries, &args.system.data_dir, columns)?;

    report_failures(&report);

    match report.status() {
        BatchStatus::NoData => return Err(AdpiError::NoDataPlotted),
        BatchStatus::Partial if args.strict => {
            return Err(AdpiError::MissingOrInvalid {
                count: report.failed_count(),
            })
        }
        _ => {}
    }

    let added: &[String] = if config.include_added_atoms {
        &config.added_atoms
    } else {
        &[]
    };

    let spec = ChartSpec {
        title: chart_title(&args.title, &args.temperature, added),
        x_axis,
        y_axis,
        curves: curves(&report),
    };

    for curve in &spec.curves {
        output::print_file(&format!(
            "{:<16} {} {}",
            curve.label, curve.style.color_name, curve.style.line
        ));
    }

    chart::render(&spec, &output_path, format, args.width, args.height)?;

    if let Some(ref path) = args.data_csv {
        let rows = export::curves_to_csv(&report, path)?;
        output::print_success(&format!(
            "Curve data ({} rows) saved to '{}'",
            rows,
            path.display()
        ));
    }

    output::print_separator();
    output::print_done(&format!(
        "Plotted {}/{} curve(s) to '{}'",
        report.success_count(),
        report.outcomes.len(),
        output_path.display()
    ));

    Ok(())
}

/// 用户指定的列名 → 列号；未指定时交给读取器的默认列
fn resolve_column(layout: &ColumnLayout, label: Option<&str>) -> Result<Option<usize>> {
    match label {
        None => Ok(None),
        Some(label) => layout
            .resolve(label)
            .map(Some)
            .ok_or_else(|| AdpiError::UnknownColumn {
                label: label.to_string(),
                available: layout.column_names().join(", "),
            }),
    }
}

/// 确定输出路径与格式：显式格式优先，并同步文件扩展名
fn resolve_output(output: &Path, format: Option<ImageFormat>) -> Result<(PathBuf, ImageFormat)> {
    match format {
        Some(fmt) => Ok((output.with_extension(fmt.extension()), fmt)),
        None => {
            let fmt = ImageFormat::from_path(output)?;
            if output.extension().is_none() {
                Ok((output.with_extension(fmt.extension()), fmt))
            } else {
                Ok((output.to_path_buf(), fmt))
            }
        }
    }
}

/// 打印缺失或无效文件列表
fn report_failures(report: &LoadReport) {
    let failed = report.failed_count();
    if failed == 0 {
        output::print_success(&format!("All {} file(s) loaded", report.outcomes.len()));
        return;
    }

    output::print_warning(&format!(
        "{} file(s) missing or invalid ({} not found):",
        failed,
        report.not_found_count()
    ));
    for outcome in report.failures() {
        let reason = match &outcome.result {
            Err(ReadFailure::NotFound) => "not found".to_string(),
            Err(ReadFailure::Invalid(reason)) => reason.to_string(),
            Ok(_) => "empty series".to_string(),
        };
        output::print_missing(&outcome.path.display().to_string(), &reason);
    }
}

/// 成功读取的曲线；样式按生成顺序中的位置分配
fn curves(report: &LoadReport) -> Vec<Curve> {
    report
        .loaded()
        .map(|(outcome, series)| Curve {
            label: outcome.entry.label.clone(),
            points: series.points().collect(),
            style: style_for(outcome.index),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::LoadOutcome;
    use crate::models::{DataSeries, DefectEntry, InvalidReason};

    fn layout() -> ColumnLayout {
        ColumnLayout::from_species(vec!["Ti".into(), "N".into(), "H".into()])
    }

    #[test]
    fn test_resolve_column() {
        let layout = layout();
        assert_eq!(resolve_column(&layout, None).unwrap(), None);
        assert_eq!(resolve_column(&layout, Some("x_H")).unwrap(), Some(5));
        assert_eq!(resolve_column(&layout, Some("mu_N")).unwrap(), Some(1));
        assert_eq!(resolve_column(&layout, Some("Hf_DP")).unwrap(), Some(7));
        assert!(matches!(
            resolve_column(&layout, Some("x_Zr")),
            Err(AdpiError::UnknownColumn { .. })
        ));
    }

    #[test]
    fn test_resolve_output() {
        let (path, fmt) = resolve_output(Path::new("out/TiN.png"), None).unwrap();
        assert_eq!(path, PathBuf::from("out/TiN.png"));
        assert_eq!(fmt, ImageFormat::Png);

        let (path, fmt) = resolve_output(Path::new("TiN.png"), Some(ImageFormat::Svg)).unwrap();
        assert_eq!(path, PathBuf::from("TiN.svg"));
        assert_eq!(fmt, ImageFormat::Svg);

        let (path, _) = resolve_output(Path::new("TiN"), None).unwrap();
        assert_eq!(path, PathBuf::from("TiN.png"));

        assert!(resolve_output(Path::new("TiN.pdf"), None).is_err());
    }

    #[test]
    fn test_curve_styles_follow_generation_index() {
        let series = DataSeries {
            x: vec![0.01, 0.02],
            y: vec![1e-6, 1e-5],
        };
        let outcome = |index: usize, result| LoadOutcome {
            index,
            entry: DefectEntry::vacancy("sys", index + 1, "Ti"),
            path: PathBuf::from(format!("sys_L_r_{}", index + 1)),
            result,
        };
        let report = LoadReport {
            outcomes: vec![
                outcome(0, Err(ReadFailure::NotFound)),
                outcome(
                    1,
                    Err(ReadFailure::Invalid(InvalidReason::NoNumericBlock)),
                ),
                outcome(2, Ok(series)),
            ],
        };

        let curves = curves(&report);
        assert_eq!(curves.len(), 1);
        assert_eq!(curves[0].style, style_for(2));
        assert_eq!(curves[0].points, vec![(0.01, 1e-6), (0.02, 1e-5)]);
    }
}
