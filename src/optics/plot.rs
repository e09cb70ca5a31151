//! # 强度曲线图表生成
//!
//! 使用 `plotters` 库绘制多条强度曲线的对比图。
//!
//! ## 功能
//! - x 轴换算为 µm
//! - 每条曲线一种颜色，并带图例
//! - 支持 PNG 和 SVG 输出
//!
//! ## 依赖关系
//! - 被 `commands/simulate.rs` 调用
//! - 使用 `models/` 的 SampleGrid, CurveSet
//! - 使用 `plotters` 渲染图表

use crate::error::{FringeError, Result};
use crate::models::{CurveSet, SampleGrid};

use plotters::prelude::*;
use std::path::Path;

/// 曲线配色
const PALETTE: [RGBColor; 8] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
];

/// 图表尺寸与标题
#[derive(Debug, Clone)]
pub struct PlotOptions {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub use_svg: bool,
}

/// 生成强度曲线图表
pub fn generate_intensity_plot(
    grid: &SampleGrid,
    curves: &CurveSet,
    output_path: &Path,
    options: &PlotOptions,
) -> Result<()> {
    if curves.is_empty() {
        return Err(FringeError::PlotError("no curves to plot".to_string()));
    }

    if options.use_svg {
        let root =
            SVGBackend::new(output_path, (options.width, options.height)).into_drawing_area();
        draw_intensity_chart(&root, grid, curves, &options.title)?;
        root.present()
            .map_err(|e| FringeError::PlotError(e.to_string()))?;
    } else {
        let root =
            BitMapBackend::new(output_path, (options.width, options.height)).into_drawing_area();
        draw_intensity_chart(&root, grid, curves, &options.title)?;
        root.present()
            .map_err(|e| FringeError::PlotError(e.to_string()))?;
    }
    Ok(())
}

/// 绘制图表的核心逻辑
fn draw_intensity_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    grid: &SampleGrid,
    curves: &CurveSet,
    title: &str,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)
        .map_err(|e| FringeError::PlotError(format!("{:?}", e)))?;

    let (x_min, x_max) = grid.bounds();
    let (x_min, x_max) = (x_min * 1e6, x_max * 1e6);

    let y_max = curves.shared_peak().unwrap_or(1.0).max(f64::MIN_POSITIVE) * 1.05;
    let y_min = curves
        .curves()
        .iter()
        .flat_map(|c| c.values.iter().copied())
        .fold(0.0_f64, f64::min);

    let y_desc = if curves.is_normalized() {
        "Intensity (normalized)"
    } else {
        "Intensity (not normalized)"
    };

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(|e| FringeError::PlotError(format!("{:?}", e)))?;

    chart
        .configure_mesh()
        .x_desc("x (µm)")
        .y_desc(y_desc)
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(|e| FringeError::PlotError(format!("{:?}", e)))?;

    let x_um: Vec<f64> = grid.as_slice().iter().map(|x| x * 1e6).collect();

    for (i, curve) in curves.curves().iter().enumerate() {
        let color = PALETTE[i % PALETTE.len()];
        chart
            .draw_series(LineSeries::new(
                x_um.iter().copied().zip(curve.values.iter().copied()),
                color.stroke_width(2),
            ))
            .map_err(|e| FringeError::PlotError(format!("{:?}", e)))?
            .label(curve.label.as_str())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .label_font(("sans-serif", 14))
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(|e| FringeError::PlotError(format!("{:?}", e)))?;

    Ok(())
}
