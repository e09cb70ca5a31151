//! # 数据导出
//!
//! 导出参数记录与采样曲线到 CSV，并可从参数记录重新加载参数。
//!
//! ## 支持格式
//! - 参数记录: `name,value` 两列，主参数在前，派生尺度在后
//! - 曲线表: `x_um` 列加每条曲线一列
//!
//! ## 依赖关系
//! - 被 `commands/simulate.rs`、`commands/report.rs` 调用
//! - 使用 `models/` 的参数、网格与曲线
//! - 使用 `csv` + `serde` 读写

use crate::error::{FringeError, Result};
use crate::models::{CurveSet, PhysicalParameters, SampleGrid, ShiftConvention};

use serde::{Deserialize, Serialize};
use std::path::Path;

/// 参数记录中的一行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamRow {
    pub name: String,
    pub value: f64,
}

impl ParamRow {
    fn new(name: &str, value: f64) -> Self {
        Self {
            name: name.to_string(),
            value,
        }
    }
}

/// 派生量名称，加载时忽略
const DERIVED_NAMES: [&str; 3] = ["x_shift", "fringe_spacing", "envelope_width"];

/// 生成参数记录（主参数 + 派生尺度）
pub fn param_rows(params: &PhysicalParameters, convention: ShiftConvention) -> Vec<ParamRow> {
    let mut rows = vec![
        ParamRow::new("I0", params.i0),
        ParamRow::new("w", params.slit_width),
        ParamRow::new("d", params.separation),
        ParamRow::new("lambda", params.wavelength),
        ParamRow::new("L", params.screen_distance),
        ParamRow::new("L1", params.reference_distance),
        ParamRow::new("V", params.visibility),
        ParamRow::new("x_shift", params.shift(convention)),
    ];
    if let Some(spacing) = params.fringe_spacing() {
        rows.push(ParamRow::new("fringe_spacing", spacing));
    }
    rows.push(ParamRow::new("envelope_width", params.envelope_width()));
    rows
}

/// 导出参数记录为 CSV
pub fn params_to_csv(
    params: &PhysicalParameters,
    convention: ShiftConvention,
    output_path: &Path,
) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    for row in param_rows(params, convention) {
        wtr.serialize(row)?;
    }

    wtr.flush().map_err(|e| FringeError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 从参数记录加载参数
///
/// 缺失的主参数取默认值，派生量被忽略，未知名称视为解析错误。
pub fn load_params(input_path: &Path) -> Result<PhysicalParameters> {
    if !input_path.is_file() {
        return Err(FringeError::FileNotFound {
            path: input_path.display().to_string(),
        });
    }

    let parse_error = |reason: String| FringeError::ParseError {
        format: "parameter CSV".to_string(),
        path: input_path.display().to_string(),
        reason,
    };

    let mut rdr = csv::Reader::from_path(input_path)?;
    let mut params = PhysicalParameters::default();

    for (line, record) in rdr.deserialize::<ParamRow>().enumerate() {
        let row = record.map_err(|e| parse_error(format!("row {}: {}", line + 1, e)))?;

        match row.name.trim() {
            "I0" => params.i0 = row.value,
            "w" => params.slit_width = row.value,
            "d" => params.separation = row.value,
            "lambda" => params.wavelength = row.value,
            "L" => params.screen_distance = row.value,
            "L1" => params.reference_distance = row.value,
            "V" => params.visibility = row.value,
            name if DERIVED_NAMES.contains(&name) => {}
            name => return Err(parse_error(format!("unknown parameter '{}'", name))),
        }
    }

    params.validate()?;
    Ok(params)
}

/// 导出采样曲线为 CSV（x 以 µm 为单位）
pub fn curves_to_csv(grid: &SampleGrid, curves: &CurveSet, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    let mut header = vec!["x_um".to_string()];
    header.extend(curves.curves().iter().map(|c| c.label.clone()));
    wtr.write_record(&header)?;

    for (i, x) in grid.as_slice().iter().enumerate() {
        let mut record = Vec::with_capacity(curves.len() + 1);
        record.push(format!("{:.8e}", x * 1e6));
        for curve in curves.curves() {
            record.push(format!("{:.8e}", curve.values[i]));
        }
        wtr.write_record(&record)?;
    }

    wtr.flush().map_err(|e| FringeError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IntensityCurve;
    use std::fs;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("fringe_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_param_record_round_trip() {
        let path = temp_path("params.csv");
        let params = PhysicalParameters::default().with_visibility(0.5);

        params_to_csv(&params, ShiftConvention::HalfBaseline, &path).unwrap();
        let loaded = load_params(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(loaded, params);
    }

    #[test]
    fn test_param_rows_layout() {
        let rows = param_rows(&PhysicalParameters::default(), ShiftConvention::HalfBaseline);
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "I0",
                "w",
                "d",
                "lambda",
                "L",
                "L1",
                "V",
                "x_shift",
                "fringe_spacing",
                "envelope_width"
            ]
        );

        let no_separation = PhysicalParameters::default().with_separation(0.0);
        let rows = param_rows(&no_separation, ShiftConvention::Projected);
        assert!(rows.iter().all(|r| r.name != "fringe_spacing"));
    }

    #[test]
    fn test_partial_record_uses_defaults() {
        let path = temp_path("partial.csv");
        fs::write(&path, "name,value\nd,2e-7\nV,0.25\n").unwrap();
        let loaded = load_params(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(loaded.separation, 2e-7);
        assert_eq!(loaded.visibility, 0.25);
        assert_eq!(loaded.wavelength, PhysicalParameters::default().wavelength);
    }

    #[test]
    fn test_unknown_name_rejected() {
        let path = temp_path("unknown.csv");
        fs::write(&path, "name,value\nfoo,1.0\n").unwrap();
        let err = load_params(&path).unwrap_err();
        fs::remove_file(&path).ok();

        assert!(matches!(err, FringeError::ParseError { .. }));
    }

    #[test]
    fn test_invalid_value_rejected() {
        let path = temp_path("invalid.csv");
        fs::write(&path, "name,value\nw,-1.0\n").unwrap();
        let err = load_params(&path).unwrap_err();
        fs::remove_file(&path).ok();

        assert!(matches!(err, FringeError::InvalidParameter { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = load_params(&temp_path("does_not_exist.csv")).unwrap_err();
        assert!(matches!(err, FringeError::FileNotFound { .. }));
    }

    #[test]
    fn test_curve_table_shape() {
        let path = temp_path("curves.csv");
        let grid = SampleGrid::linspace(-1e-6, 1e-6, 3).unwrap();
        let mut set = CurveSet::new();
        set.push(IntensityCurve::new("a", vec![0.1, 1.0, 0.1])).unwrap();
        set.push(IntensityCurve::new("b", vec![0.2, 0.5, 0.2])).unwrap();

        curves_to_csv(&grid, &set, &path).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).ok();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "x_um,a,b");
        assert!(lines[2].starts_with("0.00000000e0,"));
    }

    #[test]
    fn test_curve_table_resolves_narrow_ranges() {
        let path = temp_path("narrow.csv");
        let grid = SampleGrid::linspace(0.0, 1e-10, 11).unwrap();
        let mut set = CurveSet::new();
        set.push(IntensityCurve::new("a", vec![1.0; 11])).unwrap();

        curves_to_csv(&grid, &set, &path).unwrap();
        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let xs: Vec<String> = rdr
            .records()
            .map(|r| r.unwrap()[0].to_string())
            .collect();
        fs::remove_file(&path).ok();

        assert_eq!(xs.len(), 11);
        assert!(xs.windows(2).all(|w| w[0] != w[1]), "repeated x: {:?}", xs);
    }
}
