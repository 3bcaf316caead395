//! Interactive session: side count, vertices, validation with restart, query.
//!
//! Generic over the reader/writer so tests can drive it with in-memory buffers.

use anyhow::{bail, Result};
use polycheck::prelude::*;
use std::io::{BufRead, Write};

use crate::input::parse_pair;

/// Read one line; `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf))
}

fn ask_sides<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<usize> {
    loop {
        write!(out, "How many sides does this polygon have? S=")?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            bail!("input ended before the side count");
        };
        match line.trim().parse::<i64>() {
            Ok(n) if n < 0 => writeln!(out, "Negative number for sides is not acceptable.\n")?,
            Ok(n) if n < 3 => writeln!(out, "Sides count less than 3 is not valid.\n")?,
            Ok(n) => return Ok(n as usize),
            Err(_) => writeln!(out, "Please enter a valid integer.\n")?,
        }
    }
}

fn ask_point<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<Point2<f64>> {
    loop {
        write!(out, "{label}, (x y)= ")?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            bail!("input ended while reading {label}");
        };
        match parse_pair(&line) {
            Ok(p) if p.x.is_finite() && p.y.is_finite() => return Ok(p),
            _ => writeln!(out, "Please enter a valid number pair.\n")?,
        }
    }
}

fn rejection_message(v: &ValidationResult) -> &'static str {
    match v {
        ValidationResult::Valid => "",
        ValidationResult::DuplicateVertices { .. } => "Duplicate vertices detected.",
        ValidationResult::SelfIntersecting { .. } => "Edges of the polygon cross each other.",
        ValidationResult::NotConvex { .. } => "Only convex polygons are acceptable.",
        ValidationResult::CollinearTriple { .. } => "Some vertices are on the same line.",
    }
}

/// Run one session; restarts from the side count until the polygon validates.
pub fn run_session<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    cfg: &GeomCfg,
) -> Result<Classification> {
    let polygon = loop {
        let sides = ask_sides(input, out)?;
        let mut verts = Vec::with_capacity(sides);
        for i in 0..sides {
            verts.push(ask_point(input, out, &format!("Vertex {}", i + 1))?);
        }
        let verdict = validate_polygon(&verts, cfg)?;
        if verdict.is_valid() {
            break verts;
        }
        tracing::info!(reason = verdict.kind(), "restarting session");
        writeln!(out, "{}\n", rejection_message(&verdict))?;
    };

    let target = ask_point(input, out, "Target point")?;
    let res = classify_point(&polygon, target, cfg)?;
    writeln!(out, "\n{res}")?;
    Ok(res)
}
