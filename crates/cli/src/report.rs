//! Serializable records for validation/classification outcomes.

use polycheck::prelude::*;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct QueryReport {
    pub query: [f64; 2],
    /// `inside` / `on_boundary` / `outside`, or `error`.
    pub result: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CaseReport {
    /// `ValidationResult::kind`, or `error` for input-shape problems.
    pub validation: String,
    pub reason: String,
    pub results: Vec<QueryReport>,
}

/// Validate, and classify each query only if the polygon is valid.
pub fn evaluate(vertices: &[Point2<f64>], queries: &[Point2<f64>], cfg: &GeomCfg) -> CaseReport {
    let verdict = match validate_polygon(vertices, cfg) {
        Ok(v) => v,
        Err(e) => {
            tracing::info!(error = %e, "case rejected before validation");
            return CaseReport {
                validation: "error".into(),
                reason: e.to_string(),
                results: Vec::new(),
            };
        }
    };
    let results = if verdict.is_valid() {
        queries
            .iter()
            .map(|q| match classify_point(vertices, *q, cfg) {
                Ok(c) => QueryReport {
                    query: [q.x, q.y],
                    result: c.kind().into(),
                    error: None,
                },
                Err(e) => QueryReport {
                    query: [q.x, q.y],
                    result: "error".into(),
                    error: Some(e.to_string()),
                },
            })
            .collect()
    } else {
        Vec::new()
    };
    CaseReport {
        validation: verdict.kind().into(),
        reason: verdict.to_string(),
        results,
    }
}
