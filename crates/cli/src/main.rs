use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use polycheck::geom2::{GeomCfg, Method, Variant};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod prompt;
mod provenance;
mod report;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Polygon validation and point classification")]
struct Cmd {
    /// Log debug output from the geometry core
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(flatten)]
    geom: GeomArgs,

    #[command(subcommand)]
    action: Action,
}

#[derive(Args, Debug, Clone)]
struct GeomArgs {
    /// Accept convex polygons only, or any simple polygon
    #[arg(long, global = true, value_enum, default_value_t = VariantArg::Convex)]
    variant: VariantArg,
    /// Interior test; defaults to angle-sum for convex and parity for simple
    #[arg(long, global = true, value_enum)]
    method: Option<MethodArg>,
    /// Per-axis slack for the duplicate-vertex check
    #[arg(long, global = true, default_value_t = 0.0)]
    eps_coincide: f64,
    /// Slack on the edge line equation in the boundary test
    #[arg(long, global = true, default_value_t = 0.0)]
    eps_boundary: f64,
    /// Slack in degrees on the 360° angle-sum test
    #[arg(long, global = true, default_value_t = 1e-9)]
    eps_angle: f64,
    /// Exact comparisons everywhere (overrides the eps flags)
    #[arg(long, global = true)]
    exact: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum VariantArg {
    Convex,
    Simple,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum MethodArg {
    AngleSum,
    Parity,
}

impl GeomArgs {
    fn to_cfg(&self) -> GeomCfg {
        let variant = match self.variant {
            VariantArg::Convex => Variant::Convex,
            VariantArg::Simple => Variant::Simple,
        };
        let method = match (self.method, variant) {
            (Some(MethodArg::AngleSum), _) => Method::AngleSum,
            (Some(MethodArg::Parity), _) => Method::Parity,
            (None, Variant::Convex) => Method::AngleSum,
            (None, Variant::Simple) => Method::Parity,
        };
        let base = if self.exact {
            GeomCfg::exact()
        } else {
            GeomCfg {
                eps_coincide: self.eps_coincide,
                eps_boundary: self.eps_boundary,
                eps_angle: self.eps_angle,
                ..GeomCfg::default()
            }
        };
        base.with_variant(variant).with_method(method)
    }
}

#[derive(Subcommand)]
enum Action {
    /// Validate a vertex list, e.g. --vertices "0,0 1,0 1,1 0,1"
    Validate {
        #[arg(long)]
        vertices: String,
    },
    /// Validate, then classify a query point, e.g. --query 0.5,0.5
    Classify {
        #[arg(long)]
        vertices: String,
        #[arg(long)]
        query: String,
    },
    /// Evaluate a JSON array of {vertices, queries} cases and write results
    Batch {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Interactive session on stdin/stdout
    Prompt,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    let cfg = cmd.geom.to_cfg();
    match cmd.action {
        Action::Validate { vertices } => validate(&vertices, &cfg),
        Action::Classify { vertices, query } => classify(&vertices, &query, &cfg),
        Action::Batch { input, out } => batch(&input, &out, &cfg),
        Action::Prompt => prompt(&cfg),
    }
}

fn validate(vertices: &str, cfg: &GeomCfg) -> Result<()> {
    let verts = input::parse_vertices(vertices)?;
    tracing::info!(n = verts.len(), variant = ?cfg.variant, "validate");
    let rep = report::evaluate(&verts, &[], cfg);
    println!("{}", serde_json::to_string_pretty(&rep)?);
    Ok(())
}

fn classify(vertices: &str, query: &str, cfg: &GeomCfg) -> Result<()> {
    let verts = input::parse_vertices(vertices)?;
    let q = input::parse_pair(query).context("query point")?;
    tracing::info!(n = verts.len(), method = ?cfg.method, "classify");
    let rep = report::evaluate(&verts, &[q], cfg);
    println!("{}", serde_json::to_string_pretty(&rep)?);
    Ok(())
}

fn batch(cases_path: &Path, out: &Path, cfg: &GeomCfg) -> Result<()> {
    tracing::info!(input = %cases_path.display(), out = %out.display(), "batch");
    let cases = input::read_cases(cases_path)?;
    let reports: Vec<report::CaseReport> = cases
        .iter()
        .map(|c| {
            let verts: Vec<_> = c.vertices.iter().copied().map(input::to_point).collect();
            let queries: Vec<_> = c.queries.iter().copied().map(input::to_point).collect();
            report::evaluate(&verts, &queries, cfg)
        })
        .collect();
    let valid = reports.iter().filter(|r| r.validation == "valid").count();
    tracing::info!(cases = reports.len(), valid, "batch_done");

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(&reports)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let payload = provenance::Payload::new(
        serde_json::json!({
            "input": cases_path.to_string_lossy(),
            "cases": reports.len(),
            "valid": valid
        }),
        *cfg,
    );
    provenance::write_sidecar(out, payload)?;
    Ok(())
}

fn prompt(cfg: &GeomCfg) -> Result<()> {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut out = std::io::stdout();
    let res = prompt::run_session(&mut input, &mut out, cfg)?;
    tracing::info!(result = res.kind(), "prompt");
    Ok(())
}
