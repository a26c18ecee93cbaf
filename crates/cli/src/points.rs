//! CSV point input.

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use quickhull::Point;
use std::path::Path;

/// Read integer points from a CSV file with `x` and `y` header columns.
pub fn load_points_csv(path: &Path) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    let xs = df.column("x").context("missing column `x`")?.cast(&DataType::Int64)?;
    let ys = df.column("y").context("missing column `y`")?.cast(&DataType::Int64)?;
    let xs = xs.i64()?;
    let ys = ys.i64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, (x, y))| -> Result<Point> {
            match (x, y) {
                (Some(x), Some(y)) => Ok(Point::new(x, y)),
                _ => bail!("row {row}: missing coordinate"),
            }
        })
        .collect()
}
