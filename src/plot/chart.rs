//! # 浓度曲线图表生成
//!
//! 使用 `plotters` 库将多条缺陷浓度曲线绘制在同一张图上。
//!
//! ## 功能
//! - 每条曲线独立颜色/线型，图例使用化学记号标签
//! - 线性或对数坐标轴
//! - 支持 PNG、JPG 和 SVG 输出
//!
//! ## 依赖关系
//! - 被 `commands/plot.rs` 调用
//! - 使用 `plot/axis.rs`, `plot/style.rs`
//! - 使用 `plotters` 渲染图表

use crate::cli::plot::ImageFormat;
use crate::error::{AdpiError, Result};
use crate::plot::axis::AxisSpec;
use crate::plot::style::{CurveStyle, LineStyle};

use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use std::path::Path;

const LIGHT_GRID: RGBColor = RGBColor(230, 230, 230);
const BOLD_GRID: RGBColor = RGBColor(192, 192, 192);

/// 一条待绘制的曲线（原始数据坐标）
#[derive(Debug, Clone)]
pub struct Curve {
    pub label: String,
    pub points: Vec<(f64, f64)>,
    pub style: CurveStyle,
}

/// 完整图表描述
#[derive(Debug, Clone)]
pub struct ChartSpec {
    pub title: String,
    pub x_axis: AxisSpec,
    pub y_axis: AxisSpec,
    pub curves: Vec<Curve>,
}

/// 渲染图表到文件
pub fn render(
    spec: &ChartSpec,
    output_path: &Path,
    format: ImageFormat,
    width: u32,
    height: u32,
) -> Result<()> {
    match format {
        ImageFormat::Svg => {
            let root = SVGBackend::new(output_path, (width, height)).into_drawing_area();
            draw_chart(&root, spec)?;
            root.present()
                .map_err(|e| AdpiError::Plot(e.to_string()))?;
        }
        ImageFormat::Png | ImageFormat::Jpg => {
            let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
            draw_chart(&root, spec)?;
            root.present()
                .map_err(|e| AdpiError::Plot(e.to_string()))?;
        }
    }
    Ok(())
}

/// 将曲线映射到绘图坐标，丢弃无法绘制的点
fn plotted_points(curve: &Curve, x_axis: &AxisSpec, y_axis: &AxisSpec) -> Vec<(f64, f64)> {
    curve
        .points
        .iter()
        .filter_map(|&(x, y)| Some((x_axis.transform(x)?, y_axis.transform(y)?)))
        .collect()
}

/// 绘制图表的核心逻辑
fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    spec: &ChartSpec,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)
        .map_err(|e| AdpiError::Plot(format!("{:?}", e)))?;

    let mut chart = ChartBuilder::on(root)
        .caption(&spec.title, ("sans-serif", 26).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(spec.x_axis.range(), spec.y_axis.range())
        .map_err(|e| AdpiError::Plot(format!("{:?}", e)))?;

    let x_axis = &spec.x_axis;
    let y_axis = &spec.y_axis;
    let x_fmt = |v: &f64| x_axis.format_tick(*v);
    let y_fmt = |v: &f64| y_axis.format_tick(*v);

    chart
        .configure_mesh()
        .x_desc(x_axis.title.as_str())
        .y_desc(y_axis.title.as_str())
        .x_label_formatter(&x_fmt)
        .y_label_formatter(&y_fmt)
        .light_line_style(&LIGHT_GRID)
        .bold_line_style(&BOLD_GRID)
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(|e| AdpiError::Plot(format!("{:?}", e)))?;

    for curve in &spec.curves {
        let points = plotted_points(curve, x_axis, y_axis);
        let color = curve.style.color;
        let stroke = color.stroke_width(2);

        let series = match curve.style.line {
            LineStyle::Solid => chart.draw_series(LineSeries::new(points, stroke)),
            LineStyle::Dashed => chart.draw_series(DashedLineSeries::new(points, 10, 6, stroke)),
            // plotters 没有点划线，用长划线区分
            LineStyle::DashDot => chart.draw_series(DashedLineSeries::new(points, 18, 5, stroke)),
            LineStyle::Dotted => chart.draw_series(DashedLineSeries::new(points, 2, 4, stroke)),
        };

        series
            .map_err(|e| AdpiError::Plot(format!("{:?}", e)))?
            .label(curve.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    if !spec.curves.is_empty() {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .label_font(("sans-serif", 14))
            .draw()
            .map_err(|e| AdpiError::Plot(format!("{:?}", e)))?;
    }

    Ok(())
}
