//! # report 命令实现
//!
//! 打印物理参数与由其导出的特征尺度，可选导出参数记录。
//!
//! ## 依赖关系
//! - 使用 `cli/report.rs` 定义的参数
//! - 使用 `models/params.rs` 计算派生尺度
//! - 使用 `optics/export.rs` 导出参数记录

use crate::cli::report::ReportArgs;
use crate::error::Result;
use crate::models::{PhysicalParameters, ShiftConvention};
use crate::optics::export;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 派生尺度表格行
#[derive(Debug, Clone, Tabled)]
struct ScaleRow {
    #[tabled(rename = "Quantity")]
    quantity: String,
    #[tabled(rename = "Formula")]
    formula: &'static str,
    #[tabled(rename = "Value (m)")]
    meters: String,
    #[tabled(rename = "Value (µm)")]
    micrometers: String,
}

/// 参数表格行
#[derive(Debug, Clone, Tabled)]
struct ParamTableRow {
    #[tabled(rename = "Parameter")]
    name: String,
    #[tabled(rename = "Value")]
    value: String,
}

/// 执行 report 命令
pub fn execute(args: ReportArgs) -> Result<()> {
    output::print_header("Derived Physical Scales");

    let mut params = args.physics.resolve()?;
    if let Some(v) = args.visibility {
        params = params.with_visibility(v);
        params.validate()?;
    }
    let convention = args.physics.shift_convention;

    print_parameter_table(&params);
    print_scale_table(&params, convention);

    if let Some(path) = &args.csv {
        export::params_to_csv(&params, convention, path)?;
        output::print_success(&format!("Parameter record saved to '{}'", path.display()));
    }

    Ok(())
}

/// 打印物理参数表格
pub fn print_parameter_table(params: &PhysicalParameters) {
    let rows: Vec<ParamTableRow> = export::param_rows(params, ShiftConvention::default())
        .into_iter()
        .take(7)
        .map(|r| ParamTableRow {
            name: r.name,
            value: format!("{:e}", r.value),
        })
        .collect();

    println!("{}", Table::new(&rows));
}

/// 打印派生尺度表格，标记当前选用的位移约定
pub fn print_scale_table(params: &PhysicalParameters, convention: ShiftConvention) {
    let rows = scale_rows(params, convention);
    println!("{}", Table::new(&rows));
}

fn scale_rows(params: &PhysicalParameters, convention: ShiftConvention) -> Vec<ScaleRow> {
    let selected = |c: ShiftConvention| if c == convention { " (selected)" } else { "" };

    let entries = [
        ("Fringe spacing".to_string(), "λL/d", params.fringe_spacing()),
        (
            "Envelope width".to_string(),
            "λL/w",
            Some(params.envelope_width()),
        ),
        (
            format!(
                "Half-baseline shift{}",
                selected(ShiftConvention::HalfBaseline)
            ),
            "L·d/(2·L1)",
            Some(params.half_baseline_shift()),
        ),
        (
            format!("Projected shift{}", selected(ShiftConvention::Projected)),
            "d·L1/L",
            Some(params.projected_shift()),
        ),
    ];

    entries
        .into_iter()
        .map(|(quantity, formula, value)| ScaleRow {
            quantity,
            formula,
            meters: value.map_or_else(|| "n/a".to_string(), |v| format!("{:.4e}", v)),
            micrometers: value.map_or_else(|| "n/a".to_string(), |v| format!("{:.4}", v * 1e6)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_rows_default() {
        let rows = scale_rows(&PhysicalParameters::default(), ShiftConvention::HalfBaseline);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].micrometers, "55.5556");
        assert_eq!(rows[1].micrometers, "250.0000");
        assert_eq!(rows[2].quantity, "Half-baseline shift (selected)");
        assert_eq!(rows[2].micrometers, "9.0000");
        assert_eq!(rows[3].quantity, "Projected shift");
    }

    #[test]
    fn test_scale_rows_without_separation() {
        let params = PhysicalParameters::default().with_separation(0.0);
        let rows = scale_rows(&params, ShiftConvention::Projected);
        assert_eq!(rows[0].meters, "n/a");
        assert_eq!(rows[3].quantity, "Projected shift (selected)");
    }
}
