//! Result rendering for the CLI and REPL.

use clap::ValueEnum;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use movierec_core::TitledRecommendation;

/// How recommendations are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Boxed table.
    #[default]
    Table,
    /// JSON array on stdout.
    Json,
}

/// Renders recommendations to a string in the chosen format.
pub fn render_recommendations(
    recs: &[TitledRecommendation],
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(recs)?),
        OutputFormat::Table => {
            if recs.is_empty() {
                return Ok("No recommendations.".to_string());
            }
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec![
                    Cell::new("#"),
                    Cell::new("Movie_ID"),
                    Cell::new("Movie_Title"),
                ]);
            for (rank, rec) in recs.iter().enumerate() {
                table.add_row(vec![
                    Cell::new(rank + 1),
                    Cell::new(rec.item_id),
                    Cell::new(&rec.title),
                ]);
            }
            Ok(table.to_string())
        }
    }
}

/// Prints recommendations to stdout.
pub fn print_recommendations(
    recs: &[TitledRecommendation],
    format: OutputFormat,
) -> anyhow::Result<()> {
    println!("{}", render_recommendations(recs, format)?);
    Ok(())
}

/// Prints user names, one per line.
pub fn print_users(names: &[&str], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(names)?),
        OutputFormat::Table => {
            println!("{}", "Users:".bold());
            for name in names {
                println!("  - {}", name.green());
            }
        }
    }
    Ok(())
}
