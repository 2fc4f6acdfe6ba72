//! Extract command - pull fields from a single declaration file.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use vamex_core::DocumentRecord;

use super::{extract_file, load_config, resolve_variant};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input PDF file
    #[arg(required = true)]
    input: PathBuf,

    /// Layout variant to apply
    #[arg(long)]
    variant: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text field list
    Text,
}

pub fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let variant = args.variant.as_deref().unwrap_or(&config.default_variant);
    let rule_set = resolve_variant(variant)?;

    info!("Processing file: {}", args.input.display());

    let fields = extract_file(&args.input, rule_set)?;
    let file_name = args
        .input
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("<unknown>")
        .to_owned();

    let record = DocumentRecord::new(file_name, fields);

    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&record)?,
        OutputFormat::Text => format_record_text(&record, rule_set.field_names()),
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if !record.has_expected_fields() {
        eprintln!(
            "{} No expected field matched; the document may use a different layout",
            style("!").yellow()
        );
    }

    Ok(())
}

fn format_record_text(record: &DocumentRecord, field_order: Vec<&'static str>) -> String {
    let mut out = String::new();
    out.push_str(&format!("File: {}\n", record.file));

    for field in field_order {
        match record.field(field) {
            Some(value) => out.push_str(&format!("  {:<24} {}\n", field, value)),
            None => out.push_str(&format!("  {:<24} -\n", field)),
        }
    }

    out
}
