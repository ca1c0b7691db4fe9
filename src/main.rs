use clap::Parser;
use color_eyre::Result;
use std::path::PathBuf;

use pset_inspector::export::{export_csv, export_json, export_text};
use pset_inspector::parser::parse_mapping_file;
use pset_inspector::ui::App;

#[derive(Parser, Debug)]
#[command(name = "pset-inspector")]
#[command(about = "Pset Inspector - browse and validate Revit-to-IFC property mapping files")]
#[command(version)]
struct Args {
    /// Path to property mapping file
    #[arg(required = true)]
    file: PathBuf,

    /// Export to CSV (optional output path)
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Export to JSON (optional output path)
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Re-serialize to the native mapping format
    #[arg(long, value_name = "FILE")]
    text: Option<PathBuf>,

    /// Validate only, print a summary and exit
    #[arg(long)]
    check: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let mapping = parse_mapping_file(&args.file)?;

    if args.check {
        println!(
            "OK: {} ({} sets, {} properties)",
            args.file.display(),
            mapping.total_sets(),
            mapping.total_properties()
        );
        return Ok(());
    }

    if let Some(csv_path) = &args.csv {
        export_csv(&mapping, csv_path)?;
        println!("Exported to CSV: {}", csv_path.display());
    }

    if let Some(json_path) = &args.json {
        export_json(&mapping, json_path)?;
        println!("Exported to JSON: {}", json_path.display());
    }

    if let Some(text_path) = &args.text {
        export_text(&mapping, text_path)?;
        println!("Exported to text: {}", text_path.display());
    }

    if args.csv.is_some() || args.json.is_some() || args.text.is_some() {
        return Ok(());
    }

    let terminal = ratatui::init();
    let result = App::new(mapping).run(terminal);
    ratatui::restore();
    result
}
