//! # 采样数据导出
//!
//! ## 支持格式
//! - CSV: 表头 `x,y`
//! - XY: `#` 开头的注释头 + 制表符分隔的两列
//!
//! ## 依赖关系
//! - 被 `commands/linear.rs` 调用
//! - 使用 `csv` + `serde` 写入 CSV 文件

use crate::error::{NucalcError, Result};

use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// CSV 中的一行
#[derive(Debug, Serialize)]
struct SampleRow {
    x: f64,
    y: f64,
}

/// 导出为 CSV 格式
pub fn to_csv(data: &[(f64, f64)], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    for &(x, y) in data {
        wtr.serialize(SampleRow { x, y })?;
    }

    wtr.flush().map_err(|e| NucalcError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 导出为 XY 格式
pub fn to_xy(data: &[(f64, f64)], function: &str, output_path: &Path) -> Result<()> {
    let write_err = |e: std::io::Error| NucalcError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    };

    let file = File::create(output_path).map_err(write_err)?;
    let mut out = BufWriter::new(file);

    writeln!(out, "# Function: {}", function).map_err(write_err)?;
    writeln!(out, "# Samples: {}", data.len()).map_err(write_err)?;
    writeln!(out, "# Columns: x, y").map_err(write_err)?;
    writeln!(out, "#").map_err(write_err)?;

    for (x, y) in data {
        writeln!(out, "{}\t{}", x, y).map_err(write_err)?;
    }

    out.flush().map_err(write_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("nucalc_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_to_csv() {
        let path = temp_path("samples.csv");
        to_csv(&[(0.0, 1.0), (2.5, 6.0)], &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["x,y", "0.0,1.0", "2.5,6.0"]);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_to_xy() {
        let path = temp_path("samples.xy");
        to_xy(&[(0.0, 1.0), (2.5, 6.0)], "y = 2·x + 1", &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("# Function: y = 2·x + 1\n# Samples: 2\n"));
        let rows: Vec<&str> = text.lines().filter(|l| !l.starts_with('#')).collect();
        assert_eq!(rows, vec!["0\t1", "2.5\t6"]);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_to_xy_bad_path() {
        let path = temp_path("missing_dir").join("out.xy");
        assert!(matches!(
            to_xy(&[(0.0, 1.0)], "f", &path),
            Err(NucalcError::FileWriteError { .. })
        ));
    }
}
