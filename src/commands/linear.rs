//! # linear 命令实现
//!
//! 对 y = m·x + b 采样，打印采样表，并输出图像或数据文件。
//!
//! ## 功能
//! - 输出高质量图像 (PNG/SVG)
//! - 导出数据文件 (CSV/XY)
//!
//! ## 依赖关系
//! - 使用 `cli/linear.rs` 定义的 LinearArgs
//! - 使用 `formula::linear_function_samples`
//! - 使用 `plot/` 模块进行绘图和导出

use crate::cli::linear::{LinearArgs, PlotOutputFormat};
use crate::error::Result;
use crate::formula;
use crate::input::{LinearFunctionForm, LinearFunctionInput};
use crate::models::CalculationResult;
use crate::plot::{self, chart, export};
use crate::utils::output;

use std::path::Path;

/// 公式的文本形式
pub const EQUATION: &str = "y = m · x + b";

/// 图像/导出参数
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub format: PlotOutputFormat,
    pub title: String,
    pub width: u32,
    pub height: u32,
}

/// 执行 linear 命令
pub fn execute(args: LinearArgs, precision: usize) -> Result<()> {
    output::print_header("Linear function");
    output::print_equation(EQUATION);

    let form = LinearFunctionForm {
        slope: args.slope,
        intercept: args.intercept,
        x_min: args.x_min,
        x_max: args.x_max,
        samples: args.samples,
    };
    let input = form.validate()?;
    let function = plot::function_label(input.slope, input.intercept);
    output::print_info(&format!("Function: {}", function));

    let samples = sample(&input)?;
    output::print_result(&CalculationResult::Samples(samples.clone()).display(precision));

    if let Some(table) = sample_table(&samples, args.table_rows, precision) {
        output::print_header(&format!("Samples of {}", function));
        println!("{}", table);
    }

    if args.no_plot {
        output::print_warning("Skipping output file (--no-plot)");
        return Ok(());
    }

    let options = RenderOptions {
        format: args
            .format
            .unwrap_or_else(|| guess_format_from_extension(&args.output)),
        title: args.title.unwrap_or_else(|| function.clone()),
        width: args.width,
        height: args.height,
    };
    output::print_info(&format!("Output format: {}", options.format));

    render(&samples, &function, &args.output, &options)?;
    output::print_separator();
    output::print_success(&format!("Saved to '{}'", args.output.display()));
    Ok(())
}

/// 采样
pub fn sample(input: &LinearFunctionInput) -> Result<Vec<(f64, f64)>> {
    formula::linear_function_samples(
        input.slope,
        input.intercept,
        input.x_min,
        input.x_max,
        input.samples,
    )
}

/// 按格式写出图像或数据文件
pub fn render(
    samples: &[(f64, f64)],
    function: &str,
    output_path: &Path,
    options: &RenderOptions,
) -> Result<()> {
    match options.format {
        PlotOutputFormat::Png | PlotOutputFormat::Svg => chart::generate_curve_plot(
            samples,
            output_path,
            &options.title,
            options.width,
            options.height,
            options.format == PlotOutputFormat::Svg,
        ),
        PlotOutputFormat::Csv => export::to_csv(samples, output_path),
        PlotOutputFormat::Xy => export::to_xy(samples, function, output_path),
    }
}

/// 从文件扩展名推断输出格式
pub fn guess_format_from_extension(path: &Path) -> PlotOutputFormat {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .as_deref()
    {
        Some("svg") => PlotOutputFormat::Svg,
        Some("csv") => PlotOutputFormat::Csv,
        Some("xy") | Some("dat") | Some("txt") => PlotOutputFormat::Xy,
        _ => PlotOutputFormat::Png,
    }
}

/// 均匀抽取若干行（含首尾）生成表格
pub fn sample_table(samples: &[(f64, f64)], rows: usize, precision: usize) -> Option<String> {
    use tabled::{Table, Tabled};

    #[derive(Tabled)]
    struct SampleRow {
        #[tabled(rename = "#")]
        index: usize,
        #[tabled(rename = "x")]
        x: String,
        #[tabled(rename = "y")]
        y: String,
    }

    if rows == 0 || samples.is_empty() {
        return None;
    }

    let last = samples.len() - 1;
    let indices: Vec<usize> = if rows >= samples.len() {
        (0..samples.len()).collect()
    } else if rows == 1 {
        vec![0]
    } else {
        (0..rows).map(|i| i * last / (rows - 1)).collect()
    };

    let table_rows: Vec<SampleRow> = indices
        .into_iter()
        .map(|i| SampleRow {
            index: i,
            x: format!("{:.*}", precision, samples[i].0),
            y: format!("{:.*}", precision, samples[i].1),
        })
        .collect();

    Some(Table::new(&table_rows).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_guess_format() {
        assert_eq!(guess_format_from_extension(&PathBuf::from("a.svg")), PlotOutputFormat::Svg);
        assert_eq!(guess_format_from_extension(&PathBuf::from("a.CSV")), PlotOutputFormat::Csv);
        assert_eq!(guess_format_from_extension(&PathBuf::from("a.dat")), PlotOutputFormat::Xy);
        assert_eq!(guess_format_from_extension(&PathBuf::from("a.png")), PlotOutputFormat::Png);
        assert_eq!(guess_format_from_extension(&PathBuf::from("plot")), PlotOutputFormat::Png);
    }

    #[test]
    fn test_sample_spec_example() {
        let input = LinearFunctionInput {
            slope: 2.0,
            intercept: 1.0,
            x_min: 0.0,
            x_max: 10.0,
            samples: 5,
        };
        let samples = sample(&input).unwrap();
        assert_eq!(samples[2], (5.0, 11.0));
    }

    #[test]
    fn test_sample_table_picks_end_points() {
        let samples: Vec<(f64, f64)> = (0..11).map(|i| (i as f64, 2.0 * i as f64)).collect();
        let table = sample_table(&samples, 3, 1).unwrap();
        assert!(table.contains("0.0"));
        assert!(table.contains("5.0"));
        assert!(table.contains("20.0"));
        assert!(!table.contains("3.0"));
    }

    #[test]
    fn test_sample_table_disabled() {
        assert!(sample_table(&[(0.0, 1.0)], 0, 3).is_none());
    }

    #[test]
    fn test_render_csv() {
        let path = std::env::temp_dir().join(format!("nucalc_render_{}.csv", std::process::id()));
        let options = RenderOptions {
            format: PlotOutputFormat::Csv,
            title: "t".to_string(),
            width: 100,
            height: 100,
        };
        render(&[(0.0, 1.0), (1.0, 3.0)], "y = 2·x + 1", &path, &options).unwrap();
        assert!(path.exists());
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_render_svg_and_xy() {
        let samples = [(0.0, 1.0), (5.0, 11.0), (10.0, 21.0)];

        for format in [PlotOutputFormat::Svg, PlotOutputFormat::Xy] {
            let path = std::env::temp_dir()
                .join(format!("nucalc_render_{}.{}", std::process::id(), format));
            let options = RenderOptions {
                format,
                title: "y = 2·x + 1".to_string(),
                width: 400,
                height: 300,
            };
            render(&samples, "y = 2·x + 1", &path, &options).unwrap();

            let text = std::fs::read_to_string(&path).unwrap();
            match format {
                PlotOutputFormat::Svg => assert!(text.contains("<svg")),
                _ => assert!(text.contains("10\t21")),
            }
            std::fs::remove_file(&path).ok();
        }
    }
}
