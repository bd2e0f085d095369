use anyhow::Result;
use clap::{Parser, Subcommand};
use inventory_pipeline::analyze::{self, FieldSurvey};
use inventory_pipeline::migrate;
use std::path::PathBuf;
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "inv", version, about = "Inventory pipeline admin CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
#[command(rename_all = "kebab-case")]
enum Commands {
    /// Transform a vendor product export into the normalized inventory CSV
    Migrate {
        /// Vendor export to read
        #[arg(long, default_value = "md_products.csv")]
        input: PathBuf,
        /// Normalized inventory file to write
        #[arg(long, default_value = "jps-inventory.csv")]
        output: PathBuf,
    },
    /// Survey distinct field values in a vendor export
    Analyze {
        /// Vendor export to read
        #[arg(long, default_value = "md_products.csv")]
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Migrate { input, output } => {
            let summary = migrate::migrate_file(&input, &output)?;
            println!(
                "Migration complete. Migrated {} items. Skipped {} items (non-matching categories).",
                summary.migrated, summary.skipped
            );
            println!("Output written to {}", output.display());
        }
        Commands::Analyze { input } => {
            let survey = analyze::survey_file(&input)?;
            println!("Categories: {:?}", survey.categories.iter().collect::<Vec<_>>());
            println!("Stocks (sample): {:?}", FieldSurvey::sample(&survey.stocks));
            println!("Availables: {:?}", survey.availability.iter().collect::<Vec<_>>());
            println!("TDPs (sample): {:?}", FieldSurvey::sample(&survey.tdps));
        }
    }

    Ok(())
}

fn init_tracing() {
    let _ = SubscriberBuilder::default()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("info".parse().unwrap_or_else(|_| "info".parse().unwrap())),
        )
        .with_target(false)
        .try_init();
}
