//! Loader for `x,y` polygon records.
//!
//! Format
//! - One record per line: two decimal numbers separated by the first comma.
//! - Blank lines and lines without a comma are skipped.
//! - `id` is the 0-based index among accepted records.
//! - A last record equal to the first (within `eps_dup` per coordinate) is
//!   dropped, so explicitly closed rings load the same as open ones.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::cfg::EarClipCfg;
use crate::polygon::{Polygon, PolygonError};
use crate::types::Vertex;

/// Errors surfaced while loading a polygon.
#[derive(Debug)]
pub enum LoadError {
    Io { path: PathBuf, source: io::Error },
    /// A record whose fields are not decimal numbers. `line` is 1-based.
    Parse { line: usize, text: String },
    Polygon(PolygonError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, source } => {
                write!(f, "could not open file {}: {source}", path.display())
            }
            LoadError::Parse { line, text } => {
                write!(f, "line {line}: expected `x,y`, got {text:?}")
            }
            LoadError::Polygon(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            LoadError::Parse { .. } => None,
            LoadError::Polygon(e) => Some(e),
        }
    }
}

impl From<PolygonError> for LoadError {
    fn from(e: PolygonError) -> Self {
        LoadError::Polygon(e)
    }
}

/// Parse records from text. See the module docs for the format.
pub fn parse_vertices(text: &str, cfg: &EarClipCfg) -> Result<Vec<Vertex>, LoadError> {
    let mut verts: Vec<Vertex> = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let Some((xs, ys)) = line.split_once(',') else {
            continue;
        };
        let parse = |s: &str| {
            s.trim().parse::<f64>().map_err(|_| LoadError::Parse {
                line: lineno + 1,
                text: line.to_string(),
            })
        };
        let x = parse(xs)?;
        let y = parse(ys)?;
        verts.push(Vertex::new(x, y, verts.len() as i64));
    }

    if verts.len() > 1 {
        let (first, last) = (verts[0], verts[verts.len() - 1]);
        let eq = |a: f64, b: f64| (a - b).abs() < cfg.eps_dup;
        if eq(first.x, last.x) && eq(first.y, last.y) {
            verts.pop();
        }
    }
    tracing::debug!(records = verts.len(), "parsed vertices");
    Ok(verts)
}

/// Read and parse a record file.
pub fn read_vertices<P: AsRef<Path>>(path: P, cfg: &EarClipCfg) -> Result<Vec<Vertex>, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_vertices(&text, cfg)
}

impl Polygon {
    /// Load a polygon from a record file with default tolerances.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        Self::from_csv_with_cfg(path, EarClipCfg::default())
    }

    /// Load with explicit tolerances; `cfg` is used by both loader and engine.
    pub fn from_csv_with_cfg<P: AsRef<Path>>(path: P, cfg: EarClipCfg) -> Result<Self, LoadError> {
        let verts = read_vertices(path, &cfg)?;
        Ok(Polygon::with_cfg(verts, cfg)?)
    }
}
