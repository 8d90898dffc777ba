//! Point files: CSV/Parquet with `x`,`y` columns, or JSON `[[x, y], ...]`.

use anyhow::{anyhow, bail, Context, Result};
use polars::prelude::*;
use std::fs;
use std::path::Path;

pub fn read_points(path: &Path) -> Result<Vec<(f64, f64)>> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    match ext {
        "csv" => {
            let lf = LazyCsvReader::new(path)
                .with_infer_schema_length(Some(100))
                .finish()
                .with_context(|| format!("reading {}", path.display()))?;
            frame_points(lf)
        }
        "parquet" => {
            let lf = LazyFrame::scan_parquet(path, ScanArgsParquet::default())
                .with_context(|| format!("reading {}", path.display()))?;
            frame_points(lf)
        }
        "json" => {
            let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_slice(&bytes)
                .with_context(|| format!("parsing {} as [[x, y], ...]", path.display()))
        }
        _ => bail!("unsupported input {} (expected .csv, .parquet or .json)", path.display()),
    }
}

fn frame_points(lf: LazyFrame) -> Result<Vec<(f64, f64)>> {
    let df = lf
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()?;
    tracing::info!(rows = df.height(), "input_frame");
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) => Ok((x, y)),
            _ => Err(anyhow!("row {row}: missing x or y")),
        })
        .collect()
}

pub fn write_points_csv(path: &Path, points: &[(f64, f64)]) -> Result<()> {
    let xs: Vec<f64> = points.iter().map(|p| p.0).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.1).collect();
    let mut df = df!("x" => xs, "y" => ys)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut file =
        fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file).finish(&mut df)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn csv_integer_columns_are_widened() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pts.csv");
        fs::write(&path, "x,y\n0,0\n4,0\n2,1.5\n").unwrap();
        let pts = read_points(&path).unwrap();
        assert_eq!(pts, vec![(0.0, 0.0), (4.0, 0.0), (2.0, 1.5)]);
    }

    #[test]
    fn json_pairs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pts.json");
        fs::write(&path, "[[0, 0], [1.5, -2]]").unwrap();
        assert_eq!(read_points(&path).unwrap(), vec![(0.0, 0.0), (1.5, -2.0)]);
    }

    #[test]
    fn csv_roundtrip_through_writer() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out").join("cloud.csv");
        let pts = vec![(0.25, -1.0), (3.0, 2.5)];
        write_points_csv(&path, &pts).unwrap();
        assert_eq!(read_points(&path).unwrap(), pts);
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = read_points(Path::new("points.txt")).unwrap_err();
        assert!(err.to_string().contains("unsupported input"));
    }
}
