//! Triangle export: one `a,b,c` row of vertex ids per triangle, no header.

use anyhow::{Context, Result};
use earclip::Triangle;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// Three id columns `a`, `b`, `c`, one row per triangle.
pub fn triangles_frame(triangles: &[Triangle]) -> PolarsResult<DataFrame> {
    let a: Vec<i64> = triangles.iter().map(|t| t.a.id).collect();
    let b: Vec<i64> = triangles.iter().map(|t| t.b.id).collect();
    let c: Vec<i64> = triangles.iter().map(|t| t.c.id).collect();
    df!("a" => a, "b" => b, "c" => c)
}

pub fn write_triangles_csv<P: AsRef<Path>>(path: P, triangles: &[Triangle]) -> Result<()> {
    let path = path.as_ref();
    let mut df = triangles_frame(triangles)?;
    let mut file =
        File::create(path).with_context(|| format!("could not open {} for writing", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(false)
        .finish(&mut df)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(rows = df.height(), path = %path.display(), "triangles exported");
    Ok(())
}
