pub mod analyze;
pub mod migrate;

pub use migrate::{migrate_file, MigrationSummary, RowTransformer};
