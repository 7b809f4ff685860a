//! pmv-convert - CLI tool to generate blast project export documents.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use pmv_convert_rs::{
    generate_csv_documents, generate_geomix_document, generate_mes_document,
    generate_micromine_documents, InputParameters,
};

/// Generate blast project documents for MES, Geomix, Micromine or CSV.
#[derive(Parser, Debug)]
#[command(name = "pmv-convert")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Output format
    #[arg(short, long, value_enum)]
    format: Format,

    /// JSON file with input parameters; defaults are used when omitted
    #[arg(short, long)]
    params: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Output debug information as JSON
    #[arg(long)]
    debug: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Mes,
    Geomix,
    Micromine,
    Csv,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let inputs = match &args.params {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str::<InputParameters>(&raw)
                .with_context(|| format!("Failed to parse {}", path.display()))?
        }
        None => InputParameters::default(),
    };

    if args.debug {
        let json = serde_json::to_string_pretty(&inputs)?;
        println!("{}", json);
        return Ok(());
    }

    info!(
        "Generating {:?} export for block {}",
        args.format,
        inputs.blast_block_name()
    );

    match args.format {
        Format::Mes => {
            let envelope = generate_mes_document(&inputs)?;
            write_document(&args.output, "mes_request.xml", &envelope)?;
        }
        Format::Geomix => {
            let project = generate_geomix_document(&inputs)?;
            write_document(&args.output, "geomix_project.xml", &project)?;
        }
        Format::Micromine => {
            let (collars, intervals) = generate_micromine_documents(&inputs)?;
            write_document(&args.output, "collars.csv", &collars)?;
            write_document(&args.output, "intervals.csv", &intervals)?;
        }
        Format::Csv => {
            let (holes, points) = generate_csv_documents(&inputs)?;
            write_document(&args.output, "holes.csv", &holes)?;
            write_document(&args.output, "block_points.csv", &points)?;
        }
    }

    Ok(())
}

fn write_document(dir: &Path, name: &str, content: &str) -> Result<()> {
    let path = dir.join(name);
    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Generated: {}", path.display());
    Ok(())
}
