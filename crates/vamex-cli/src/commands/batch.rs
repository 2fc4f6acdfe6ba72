//! Batch command - process a folder of declaration files.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use vamex_core::DocumentRecord;

use super::{extract_file, load_config, resolve_variant};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input folder or glob pattern
    #[arg(required = true)]
    input: String,

    /// Layout variant to apply
    #[arg(long)]
    variant: Option<String>,

    /// Output file for the JSON array (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also write a summary CSV next to the output
    #[arg(long)]
    summary: Option<PathBuf>,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let variant = args.variant.as_deref().unwrap_or(&config.default_variant);
    let rule_set = resolve_variant(variant)?;

    let files = collect_files(&args.input)?;
    if files.is_empty() {
        anyhow::bail!("No PDF files found for: {}", args.input);
    }

    eprintln!(
        "{} Found {} files to process (variant {})",
        style("ℹ").blue(),
        files.len(),
        rule_set.name()
    );

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    // A document that fails upstream becomes an error record; the rest
    // of the batch still runs.
    let mut records = Vec::with_capacity(files.len());
    for path in &files {
        let file_name = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("<unknown>")
            .to_owned();

        let record = match extract_file(path, rule_set) {
            Ok(fields) => DocumentRecord::new(file_name, fields),
            Err(e) => {
                warn!("Failed to process {}: {}", path.display(), e);
                DocumentRecord::failed(file_name, e.to_string())
            }
        };

        if record.error.is_none() && !record.has_expected_fields() {
            debug!("{}: no expected field matched", record.file);
        }

        records.push(record);
        pb.inc(1);
    }
    pb.finish_and_clear();

    let json = serde_json::to_string(&records)?;
    match &args.output {
        Some(path) => {
            fs::write(path, &json)?;
            eprintln!(
                "{} Results written to {}",
                style("✓").green(),
                path.display()
            );
        }
        None => println!("{}", json),
    }

    if let Some(summary_path) = &args.summary {
        write_summary(summary_path, rule_set.field_names(), &records)?;
        eprintln!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let parsed = records.iter().filter(|r| r.error.is_none()).count();
    let failed = records.len() - parsed;
    eprintln!(
        "{} Processed {} files in {:?} ({} parsed, {} failed)",
        style("✓").green(),
        records.len(),
        start.elapsed(),
        style(parsed).green(),
        style(failed).red()
    );

    Ok(())
}

/// Enumerate input PDFs in stable sorted order, so batch output is
/// deterministic regardless of directory iteration order.
pub(super) fn collect_files(input: &str) -> anyhow::Result<Vec<PathBuf>> {
    let path = PathBuf::from(input);
    let pattern = if path.is_dir() {
        format!("{}/*.pdf", input.trim_end_matches('/'))
    } else {
        input.to_owned()
    };

    let mut files: Vec<PathBuf> = glob(&pattern)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
        })
        .collect();
    files.sort();
    Ok(files)
}

fn write_summary(
    path: &PathBuf,
    field_names: Vec<&'static str>,
    records: &[DocumentRecord],
) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    let mut header = vec!["file", "status"];
    header.extend(field_names.iter().copied());
    header.push("error");
    wtr.write_record(&header)?;

    for record in records {
        let mut row = vec![
            record.file.clone(),
            if record.error.is_none() {
                "ok".to_owned()
            } else {
                "error".to_owned()
            },
        ];
        for field in &field_names {
            row.push(record.field(field).unwrap_or("").to_owned());
        }
        row.push(record.error.clone().unwrap_or_default());
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}
