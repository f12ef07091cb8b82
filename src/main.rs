use chrono::Utc;
use clap::Parser;
use copview::cli::{Cli, Commands, LayerKind};
use copview::error::Result;
use copview::export::{layer, table};
use copview::extract;
use std::path::PathBuf;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Table { input, output } => {
            let records = load_records(&input, cli.verbose)?;
            let output = output.unwrap_or_else(|| PathBuf::from(table::XLSX_FILE_NAME));

            let table = table::to_table(&records);
            table::write_workbook(&table, &output)?;
            println!("✔ wrote {} rows: {}", table.rows.len(), output.display());
        }

        Commands::Layer { input, kind, output } => {
            let records = load_records(&input, cli.verbose)?;
            let now = Utc::now();

            let (document, default_name) = match kind {
                LayerKind::Situation => (layer::build_situation_layer(&records, now), layer::SLF_FILE_NAME),
                LayerKind::Plan => (layer::build_plan_layer(&records, now), layer::SPL_FILE_NAME),
            };
            let output = output.unwrap_or_else(|| PathBuf::from(default_name));

            layer::write_document(&document, &output)?;
            println!("✔ wrote {} layer ({} symbols): {}", kind, records.len(), output.display());
        }
    }

    Ok(())
}

fn load_records(input: &PathBuf, verbose: bool) -> Result<Vec<copview::UnitRecord>> {
    let content = std::fs::read_to_string(input)?;
    let raw: serde_json::Value = serde_json::from_str(&content)?;
    let records = extract(&raw)?;
    if verbose {
        println!("extracted {} units from {}", records.len(), input.display());
    }
    Ok(records)
}
