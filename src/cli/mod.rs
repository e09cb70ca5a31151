//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `simulate`: 计算并绘制强度曲线（可见度扫描）
//! - `report`: 打印派生物理尺度
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: physics, simulate, report

pub mod physics;
pub mod report;
pub mod simulate;

use clap::{Parser, Subcommand};

/// fringe - 双缝衍射/干涉强度曲线工具
#[derive(Parser)]
#[command(name = "fringe")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Double-slit diffraction and interference intensity profile explorer",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate intensity formulas and render one figure per visibility value
    Simulate(simulate::SimulateArgs),

    /// Print derived physical scales (fringe spacing, envelope width, shifts)
    Report(report::ReportArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PhysicalParameters, ShiftConvention};
    use crate::optics::Variant;
    use simulate::SimulateOutputFormat;
    use std::fs;

    fn parse_simulate(args: &[&str]) -> simulate::SimulateArgs {
        let mut argv = vec!["fringe", "simulate"];
        argv.extend_from_slice(args);
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Simulate(a) => a,
            _ => panic!("expected simulate"),
        }
    }

    #[test]
    fn test_simulate_defaults() {
        let args = parse_simulate(&[]);
        assert_eq!(args.variants, Variant::DEFAULT_SET.to_vec());
        assert_eq!(args.visibility, vec![1.0, 0.5]);
        assert_eq!(args.x_range, "-500:500");
        assert_eq!(args.points, 16000);
        assert_eq!(args.format, SimulateOutputFormat::Png);
        assert_eq!(args.prefix, "result");
        assert!(!args.normalize);
        assert_eq!(args.physics.shift_convention, ShiftConvention::HalfBaseline);
        assert_eq!(
            args.physics.resolve().unwrap(),
            PhysicalParameters::default()
        );
    }

    #[test]
    fn test_simulate_lists_and_flags() {
        let args = parse_simulate(&[
            "--variants",
            "sine-modulation,zero-separation",
            "--visibility",
            "0.2,0.8,1",
            "--x-range",
            "-100:250",
            "--shift-convention",
            "projected",
            "--separation",
            "3e-7",
            "--normalize",
            "-f",
            "svg",
        ]);
        assert_eq!(
            args.variants,
            vec![Variant::SineModulation, Variant::ZeroSeparation]
        );
        assert_eq!(args.visibility, vec![0.2, 0.8, 1.0]);
        assert_eq!(args.x_range, "-100:250");
        assert!(args.normalize);
        assert_eq!(args.format, SimulateOutputFormat::Svg);
        assert_eq!(args.physics.shift_convention, ShiftConvention::Projected);
        assert_eq!(args.physics.resolve().unwrap().separation, 3e-7);
    }

    #[test]
    fn test_unknown_variant_rejected() {
        assert!(Cli::try_parse_from(["fringe", "simulate", "--variants", "bogus"]).is_err());
    }

    #[test]
    fn test_flags_override_params_file() {
        let path = std::env::temp_dir().join(format!("fringe_cli_{}.csv", std::process::id()));
        fs::write(&path, "name,value\nd,2e-7\nL,5.0\n").unwrap();
        let path_str = path.display().to_string();

        let cli = Cli::try_parse_from([
            "fringe",
            "report",
            "--params",
            path_str.as_str(),
            "--screen-distance",
            "8.0",
        ])
        .unwrap();
        let resolved = match cli.command {
            Commands::Report(a) => a.physics.resolve(),
            _ => panic!("expected report"),
        };
        fs::remove_file(&path).ok();

        let params = resolved.unwrap();
        assert_eq!(params.separation, 2e-7);
        assert_eq!(params.screen_distance, 8.0);
        assert_eq!(params.wavelength, PhysicalParameters::default().wavelength);
    }

    #[test]
    fn test_invalid_flag_value_fails_resolution() {
        let args = parse_simulate(&["--wavelength", "0"]);
        assert!(args.physics.resolve().is_err());
    }
}
