//! Read-only survey of a vendor product export.
//!
//! Collects the distinct values of the fields the migration cares about, so
//! a new export can be eyeballed for surprises (new category labels, odd
//! stock values) before running the migration itself.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

/// How many distinct values to show for high-cardinality fields.
pub const SAMPLE_LIMIT: usize = 10;

/// Distinct values seen per surveyed field, kept sorted.
#[derive(Debug, Default)]
pub struct FieldSurvey {
    pub categories: BTreeSet<String>,
    pub stocks: BTreeSet<String>,
    pub availability: BTreeSet<String>,
    pub tdps: BTreeSet<String>,
}

impl FieldSurvey {
    /// First `SAMPLE_LIMIT` distinct values of a field, in sorted order.
    pub fn sample(set: &BTreeSet<String>) -> Vec<&str> {
        set.iter().take(SAMPLE_LIMIT).map(String::as_str).collect()
    }
}

/// Survey one vendor export. Columns the file lacks are simply not sampled;
/// an unreadable file is fatal.
pub fn survey_file(input: &Path) -> Result<FieldSurvey> {
    let mut rdr = csv::Reader::from_path(input)
        .with_context(|| format!("open vendor export {}", input.display()))?;

    let headers = rdr.headers()?.clone();
    let idx_category = headers.iter().position(|h| h == "category");
    let idx_stock = headers.iter().position(|h| h == "stock");
    let idx_available = headers.iter().position(|h| h == "available");
    let idx_tdp = headers.iter().position(|h| h == "tdp_watts");

    let mut survey = FieldSurvey::default();
    let mut rows = 0u64;
    for rec in rdr.records() {
        let rec = rec.with_context(|| format!("read row from {}", input.display()))?;
        rows += 1;

        if let Some(v) = idx_category.and_then(|i| rec.get(i)) {
            survey.categories.insert(v.to_string());
        }
        if let Some(v) = idx_stock.and_then(|i| rec.get(i)) {
            survey.stocks.insert(v.to_string());
        }
        if let Some(v) = idx_available.and_then(|i| rec.get(i)) {
            survey.availability.insert(v.to_string());
        }
        if let Some(v) = idx_tdp.and_then(|i| rec.get(i)) {
            if !v.is_empty() {
                survey.tdps.insert(v.to_string());
            }
        }
    }

    info!(rows, input = %input.display(), "surveyed vendor export");
    Ok(survey)
}
