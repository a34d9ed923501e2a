//! # 曲线图表生成
//!
//! 使用 `plotters` 库绘制采样曲线。
//!
//! ## 功能
//! - 支持 PNG 和 SVG 输出
//! - y 轴范围根据数据自动确定
//!
//! ## 依赖关系
//! - 被 `commands/linear.rs` 调用
//! - 使用 `plotters` 渲染图表

use crate::error::{NucalcError, Result};

use plotters::prelude::*;
use std::path::Path;

/// 生成曲线图
pub fn generate_curve_plot(
    data: &[(f64, f64)],
    output_path: &Path,
    title: &str,
    width: u32,
    height: u32,
    use_svg: bool,
) -> Result<()> {
    if data.len() < 2 {
        return Err(NucalcError::PlotError(
            "At least two samples are required to draw a curve".to_string(),
        ));
    }

    if use_svg {
        let root = SVGBackend::new(output_path, (width, height)).into_drawing_area();
        draw_curve_chart(&root, data, title)?;
        root.present()
            .map_err(|e| NucalcError::PlotError(e.to_string()))?;
    } else {
        let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
        draw_curve_chart(&root, data, title)?;
        root.present()
            .map_err(|e| NucalcError::PlotError(e.to_string()))?;
    }
    Ok(())
}

/// 计算 y 轴范围（上下各留 5% 余量，常数函数留 ±1）
pub fn y_range(data: &[(f64, f64)]) -> (f64, f64) {
    let y_min = data.iter().map(|(_, y)| *y).fold(f64::INFINITY, f64::min);
    let y_max = data.iter().map(|(_, y)| *y).fold(f64::NEG_INFINITY, f64::max);

    if !y_min.is_finite() || !y_max.is_finite() {
        return (-1.0, 1.0);
    }

    let span = y_max - y_min;
    if span == 0.0 {
        (y_min - 1.0, y_max + 1.0)
    } else {
        (y_min - 0.05 * span, y_max + 0.05 * span)
    }
}

/// 绘制图表的核心逻辑
fn draw_curve_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    data: &[(f64, f64)],
    title: &str,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)
        .map_err(|e| NucalcError::PlotError(format!("{:?}", e)))?;

    let x_min = data.first().map(|(x, _)| *x).unwrap_or(0.0);
    let x_max = data.last().map(|(x, _)| *x).unwrap_or(1.0);
    let (y_min, y_max) = y_range(data);

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(|e| NucalcError::PlotError(format!("{:?}", e)))?;

    chart
        .configure_mesh()
        .x_desc("x")
        .y_desc("y")
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(|e| NucalcError::PlotError(format!("{:?}", e)))?;

    let line_color = RGBColor(0, 102, 204);
    chart
        .draw_series(LineSeries::new(
            data.iter().map(|(x, y)| (*x, *y)),
            line_color.stroke_width(2),
        ))
        .map_err(|e| NucalcError::PlotError(format!("{:?}", e)))?;

    Ok(())
}
