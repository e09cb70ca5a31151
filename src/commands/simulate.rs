//! # simulate 命令实现
//!
//! 计算双缝强度曲线并输出图表/数据文件。
//!
//! ## 功能
//! - 可见度扫描：每个 V 值一次独立运行，并行执行（rayon）
//! - 可选共享峰值归一化
//! - 输出图像 (PNG/SVG) 或曲线表 (CSV)
//! - 可选导出曲线表与参数记录
//!
//! ## 依赖关系
//! - 使用 `cli/simulate.rs` 定义的 SimulateArgs
//! - 使用 `batch/` 模块进行并行运行
//! - 使用 `optics/` 模块进行计算、绘图与导出

use crate::batch::{BatchRunner, ProcessResult};
use crate::cli::simulate::{SimulateArgs, SimulateOutputFormat};
use crate::commands::report;
use crate::error::{FringeError, Result};
use crate::models::{PhysicalParameters, SampleGrid, ShiftConvention};
use crate::optics::plot::PlotOptions;
use crate::optics::{self, FringeCalculator, Variant};
use crate::utils::output;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// 扫描共享配置
struct SweepConfig {
    params: PhysicalParameters,
    convention: ShiftConvention,
    grid: SampleGrid,
    variants: Vec<Variant>,
    normalize: bool,
    format: SimulateOutputFormat,
    export_curves: bool,
    save_params: bool,
    output_dir: PathBuf,
    prefix: String,
    title: Option<String>,
    width: u32,
    height: u32,
    overwrite: bool,
}

/// 执行 simulate 命令
pub fn execute(args: SimulateArgs) -> Result<()> {
    output::print_header("Double-Slit Intensity Simulation");

    let params = args.physics.resolve()?;
    let convention = args.physics.shift_convention;

    let visibilities = validate_visibilities(&args.visibility)?;
    if args.variants.is_empty() {
        return Err(FringeError::InvalidArgument(
            "at least one variant is required".to_string(),
        ));
    }

    let (x_min, x_max) = parse_x_range(&args.x_range)?;
    let grid = SampleGrid::linspace(x_min * 1e-6, x_max * 1e-6, args.points)?;

    output::print_info(&format!(
        "Grid: {} points over [{}, {}] µm (step {:.4} µm)",
        grid.len(),
        x_min,
        x_max,
        grid.step() * 1e6
    ));
    output::print_info(&format!(
        "Variants: {}",
        args.variants
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    ));
    output::print_info(&format!(
        "Shift convention: {} (x_shift = {:.4} µm)",
        convention,
        params.shift(convention) * 1e6
    ));

    report::print_scale_table(&params, convention);

    fs::create_dir_all(&args.output).map_err(|e| FringeError::FileWriteError {
        path: args.output.display().to_string(),
        source: e,
    })?;

    let config = Arc::new(SweepConfig {
        params,
        convention,
        grid,
        variants: args.variants.clone(),
        normalize: args.normalize,
        format: args.format,
        export_curves: args.export_curves,
        save_params: args.save_params,
        output_dir: args.output.clone(),
        prefix: args.prefix.clone(),
        title: args.title.clone(),
        width: args.width,
        height: args.height,
        overwrite: args.overwrite,
    });

    output::print_info(&format!(
        "Sweeping {} visibility value(s): {}",
        visibilities.len(),
        visibilities
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    ));

    let runner = BatchRunner::new(args.jobs);
    output::print_info(&format!("Using {} parallel job(s)", runner.jobs()));
    let result = runner.run(visibilities, |v| process_visibility(*v, &config))?;

    for msg in &result.messages {
        output::print_success(msg);
    }
    for msg in &result.skips {
        output::print_skip(msg);
    }

    output::print_separator();
    output::print_success(&format!(
        "Sweep complete: {} success, {} skipped, {} failed",
        result.success, result.skipped, result.failed
    ));

    if !result.failures.is_empty() {
        for (label, err) in &result.failures {
            output::print_error(&format!("  {}: {}", label, err));
        }
        return Err(FringeError::Other(format!(
            "{} of {} runs failed",
            result.failed,
            result.total()
        )));
    }

    Ok(())
}

/// 处理扫描中的单个 V 值
fn process_visibility(visibility: f64, config: &Arc<SweepConfig>) -> ProcessResult {
    let stem = output_stem(&config.prefix, visibility);
    let primary = config
        .output_dir
        .join(format!("{}.{}", stem, config.format.extension()));

    if primary.exists() && !config.overwrite {
        return ProcessResult::Skipped(format!("Output exists, skipping: {}", primary.display()));
    }

    match run_visibility(visibility, &stem, &primary, config) {
        Ok(()) => ProcessResult::Success(format!("V={} -> {}", visibility, primary.display())),
        Err(e) => ProcessResult::Failed(format!("V={}", visibility), e.to_string()),
    }
}

/// 计算一次运行并写出全部输出
fn run_visibility(
    visibility: f64,
    stem: &str,
    primary: &Path,
    config: &SweepConfig,
) -> Result<()> {
    let params = config.params.with_visibility(visibility);
    let calculator = FringeCalculator::new(params, config.convention);
    let mut curves = calculator.evaluate(&config.grid, &config.variants)?;

    // 归一化必须在所有曲线计算完成之后
    if config.normalize {
        optics::normalize_by_peak(&mut curves)?;
    }

    match config.format {
        SimulateOutputFormat::Png | SimulateOutputFormat::Svg => {
            let options = PlotOptions {
                title: config
                    .title
                    .clone()
                    .unwrap_or_else(|| format!("Model with V={}", visibility)),
                width: config.width,
                height: config.height,
                use_svg: config.format == SimulateOutputFormat::Svg,
            };
            optics::plot::generate_intensity_plot(&config.grid, &curves, primary, &options)?;

            if config.export_curves {
                let csv_path = config.output_dir.join(format!("{}.csv", stem));
                optics::export::curves_to_csv(&config.grid, &curves, &csv_path)?;
            }
        }
        SimulateOutputFormat::Csv => {
            optics::export::curves_to_csv(&config.grid, &curves, primary)?;
        }
    }

    if config.save_params {
        let params_path = config.output_dir.join(format!("{}_params.csv", stem));
        optics::export::params_to_csv(&params, config.convention, &params_path)?;
    }

    Ok(())
}

/// 输出文件名主干，如 `result_V1`、`result_V0.5`
fn output_stem(prefix: &str, visibility: f64) -> String {
    format!("{}_V{}", prefix, visibility)
}

/// 检查可见度列表非空且均为有限数
fn validate_visibilities(values: &[f64]) -> Result<Vec<f64>> {
    if values.is_empty() {
        return Err(FringeError::InvalidArgument(
            "at least one visibility value is required".to_string(),
        ));
    }
    if let Some(v) = values.iter().find(|v| !v.is_finite()) {
        return Err(FringeError::InvalidArgument(format!(
            "visibility must be finite, got {}",
            v
        )));
    }

    // 重复的 V 会写同一个输出文件，只保留第一次出现
    let mut unique: Vec<f64> = Vec::with_capacity(values.len());
    for &v in values {
        if unique.contains(&v) {
            output::print_warning(&format!("Duplicate visibility {} ignored", v));
            continue;
        }
        unique.push(v);
    }

    for v in unique.iter().filter(|v| !(0.0..=1.0).contains(*v)) {
        output::print_warning(&format!(
            "Visibility {} is outside [0, 1]; curves may turn negative",
            v
        ));
    }
    Ok(unique)
}

/// 解析 x 范围 (µm)，格式 "min:max"
fn parse_x_range(range: &str) -> Result<(f64, f64)> {
    let parts: Vec<&str> = range.split(':').collect();
    if parts.len() != 2 {
        return Err(FringeError::InvalidRange(range.to_string()));
    }

    let min: f64 = parts[0]
        .trim()
        .parse()
        .map_err(|_| FringeError::InvalidRange(range.to_string()))?;
    let max: f64 = parts[1]
        .trim()
        .parse()
        .map_err(|_| FringeError::InvalidRange(range.to_string()))?;

    if !min.is_finite() || !max.is_finite() || max <= min {
        return Err(FringeError::InvalidRange(format!(
            "{} (must be finite with min < max)",
            range
        )));
    }

    Ok((min, max))
}
