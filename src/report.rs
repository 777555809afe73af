//! Rendering of recommendation results for the console.

use std::io::Write;

use serde::Serialize;

use crate::advisor::{Criteria, EvaluationResult, Recommendation};
use crate::error::Result;

pub const HEADER: &str = "\n=== ML Algorithm Decision Support System (Prototype) ===\n";
const RESULTS_TITLE: &str = "\n--- Top Recommendations ---";
const FOOTER: &str = "\n--- End ---\n";

/// Output format selectable on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// A single JSON object on stdout
    Json,
}

/// Machine-readable report.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub criteria: &'a Criteria,
    pub recommendations: &'a [Recommendation],
    pub message: Option<&'static str>,
}

impl<'a> Report<'a> {
    pub fn new(criteria: &'a Criteria, result: &'a EvaluationResult) -> Self {
        Self {
            criteria,
            recommendations: &result.recommendations,
            message: result.message(),
        }
    }
}

/// Write the recommendation listing (or the sentinel) followed by the footer.
pub fn write_text<W: Write>(out: &mut W, result: &EvaluationResult) -> Result<()> {
    writeln!(out, "{}", RESULTS_TITLE)?;

    for rec in &result.recommendations {
        writeln!(out, "\n{} (score: {})", rec.algorithm, rec.score)?;
        for reason in &rec.reasons {
            writeln!(out, "  - {}", reason)?;
        }
    }

    if let Some(message) = result.message() {
        writeln!(out, "{}", message)?;
    }

    writeln!(out, "{}", FOOTER)?;
    Ok(())
}

pub fn write_json<W: Write>(
    out: &mut W,
    criteria: &Criteria,
    result: &EvaluationResult,
) -> Result<()> {
    let report = Report::new(criteria, result);
    serde_json::to_writer_pretty(&mut *out, &report).map_err(std::io::Error::from)?;
    writeln!(out)?;
    Ok(())
}
