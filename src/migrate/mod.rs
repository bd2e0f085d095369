//! Vendor-export to storefront-inventory migration.
//!
//! One synchronous pass: each vendor row is either transformed into a
//! normalized inventory row and written immediately, or skipped because its
//! category is unknown. Identifier uniqueness is scoped to a single run.

pub mod category;
pub mod name;
pub mod record;
pub mod slug;
pub mod stock;

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use category::resolve_category;
use name::clean_name;
use record::{collect_images, collect_specs, SourceRecord, TargetRecord};
use slug::IdGenerator;
use stock::parse_stock;

/// Output column order expected by the storefront importer.
pub const TARGET_HEADERS: &[&str] = &[
    "id",
    "name",
    "price",
    "stock",
    "category",
    "brand",
    "image",
    "images",
    "specs",
    "sold",
    "available",
];

/// Counters reported at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MigrationSummary {
    pub migrated: u64,
    pub skipped: u64,
}

/// Per-row transform plus the identifier state shared across one run.
#[derive(Debug, Default)]
pub struct RowTransformer {
    ids: IdGenerator,
}

impl RowTransformer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transform one vendor row, or return `None` when its category is not
    /// in the mapping (the caller counts that as skipped).
    pub fn transform(&mut self, row: &SourceRecord) -> Option<TargetRecord> {
        let category = resolve_category(&row.category)?;

        let name = clean_name(&row.name);
        let id = self.ids.generate(category, &row.brand, &name);
        let level = parse_stock(&row.stock);
        let images = collect_images(row);
        let specs = collect_specs(row);

        Some(TargetRecord {
            id,
            name,
            price: row.price.clone(),
            stock: level.units(),
            category: category.to_string(),
            brand: row.brand.clone(),
            image: images.first().cloned().unwrap_or_default(),
            images,
            specs,
            sold: 0,
            available: level.available(),
        })
    }
}

/// Wire shape of one output row; structured cells are JSON-encoded here and
/// nowhere earlier.
#[derive(Serialize)]
struct OutputRow<'a> {
    id: &'a str,
    name: &'a str,
    price: &'a str,
    stock: u32,
    category: &'a str,
    brand: &'a str,
    image: &'a str,
    images: String,
    specs: String,
    sold: u32,
    available: bool,
}

impl<'a> OutputRow<'a> {
    fn from_record(rec: &'a TargetRecord) -> Result<Self> {
        Ok(Self {
            id: &rec.id,
            name: &rec.name,
            price: &rec.price,
            stock: rec.stock,
            category: &rec.category,
            brand: &rec.brand,
            image: &rec.image,
            images: serde_json::to_string(&rec.images)?,
            specs: serde_json::to_string(&rec.specs)?,
            sold: rec.sold,
            available: rec.available,
        })
    }
}

/// Migrate a vendor product export into the normalized inventory file.
///
/// Rows are processed and written in input order; any I/O failure aborts the
/// whole run with whatever the writer already flushed left in place.
pub fn migrate_file(input: &Path, output: &Path) -> Result<MigrationSummary> {
    let mut rdr = csv::Reader::from_path(input)
        .with_context(|| format!("open vendor export {}", input.display()))?;
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(output)
        .with_context(|| format!("create inventory file {}", output.display()))?;

    info!(input = %input.display(), "loading vendor export");

    wtr.write_record(TARGET_HEADERS)
        .with_context(|| format!("write header to {}", output.display()))?;

    let mut transformer = RowTransformer::new();
    let mut summary = MigrationSummary::default();

    for rec in rdr.deserialize() {
        let row: SourceRecord =
            rec.with_context(|| format!("read row from {}", input.display()))?;
        match transformer.transform(&row) {
            Some(out) => {
                wtr.serialize(OutputRow::from_record(&out)?)
                    .with_context(|| format!("write row to {}", output.display()))?;
                summary.migrated += 1;
            }
            None => summary.skipped += 1,
        }
    }

    wtr.flush()
        .with_context(|| format!("flush inventory file {}", output.display()))?;

    info!(
        migrated = summary.migrated,
        skipped = summary.skipped,
        output = %output.display(),
        "migration complete"
    );
    Ok(summary)
}
