//! Parsing of coordinates from flags, prompt lines and batch files.

use anyhow::{bail, Context, Result};
use polycheck::Point2;
use serde::Deserialize;
use std::path::Path;

/// One batch case: a candidate polygon and the points to classify against it.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Case {
    pub vertices: Vec<[f64; 2]>,
    #[serde(default)]
    pub queries: Vec<[f64; 2]>,
}

#[inline]
pub fn to_point(p: [f64; 2]) -> Point2<f64> {
    Point2::new(p[0], p[1])
}

/// Parse a coordinate pair written as `x,y` or `x y`.
pub fn parse_pair(s: &str) -> Result<Point2<f64>> {
    let parts: Vec<&str> = s
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();
    if parts.len() != 2 {
        bail!("expected two numbers, got {:?}", s.trim());
    }
    let x: f64 = parts[0]
        .parse()
        .with_context(|| format!("bad x coordinate {:?}", parts[0]))?;
    let y: f64 = parts[1]
        .parse()
        .with_context(|| format!("bad y coordinate {:?}", parts[1]))?;
    Ok(Point2::new(x, y))
}

/// Parse a vertex list: `x,y` pairs separated by whitespace or `;`.
pub fn parse_vertices(s: &str) -> Result<Vec<Point2<f64>>> {
    s.split(|c: char| c == ';' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .enumerate()
        .map(|(i, t)| {
            if !t.contains(',') {
                bail!("vertex {i}: expected `x,y`, got {t:?}");
            }
            parse_pair(t).with_context(|| format!("vertex {i}"))
        })
        .collect()
}

/// Read a JSON array of cases.
pub fn read_cases(path: &Path) -> Result<Vec<Case>> {
    let raw = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let cases: Vec<Case> =
        serde_json::from_slice(&raw).with_context(|| format!("parsing {}", path.display()))?;
    Ok(cases)
}
