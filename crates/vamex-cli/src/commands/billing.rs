//! Billing command - turn a folder of declarations into invoicing rows.
//!
//! Each parsed declaration becomes a block of service rows in the
//! brokerage billing sheet: the declaration itself, the transit, one
//! row for additional HS codes when the declaration has more than one
//! article, and (with physical control) the control service.

use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::warn;

use vamex_core::models::BillingConfig;
use vamex_core::DocumentRecord;

use super::{extract_file, load_config, resolve_variant};

/// Arguments for the billing command.
#[derive(Args)]
pub struct BillingArgs {
    /// Input folder of declaration PDFs
    #[arg(required = true)]
    input: PathBuf,

    /// Layout variant to apply
    #[arg(long)]
    variant: Option<String>,

    /// Billing sheet layout
    #[arg(long, value_enum, default_value = "cu-fizic")]
    layout: BillingLayout,

    /// Output CSV file
    #[arg(short, long, default_value = "output.csv")]
    output: PathBuf,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum BillingLayout {
    /// With physical control rows
    CuFizic,
    /// Without physical control rows
    FaraFizic,
}

const HEADER: [&str; 12] = [
    "nr.crt",
    "CIF/CNP",
    "deviz",
    "Produs",
    "Serie produs",
    "Cant",
    "UM",
    "Pret FTVA",
    "cota TVA",
    "nota produs",
    "scutit TVA (0/1)",
    "motiv scutire TVA",
];

pub fn run(args: BillingArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    let variant = args.variant.as_deref().unwrap_or(&config.default_variant);
    let rule_set = resolve_variant(variant)?;

    let folder = args.input.to_string_lossy().into_owned();
    let files = super::batch::collect_files(&folder)?;
    if files.is_empty() {
        anyhow::bail!("No PDF files found in: {}", args.input.display());
    }

    // Keep only records with at least one structurally expected field;
    // anything else is the wrong kind of document.
    let mut good = Vec::new();
    for path in &files {
        let file_name = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("<unknown>")
            .to_owned();

        match extract_file(path, rule_set) {
            Ok(fields) => {
                let record = DocumentRecord::new(file_name, fields);
                if record.has_expected_fields() {
                    eprintln!("{} Parsed: {}", style("✓").green(), record.file);
                    good.push(record);
                } else {
                    eprintln!("{} Wrong structure: {}", style("✗").red(), record.file);
                }
            }
            Err(e) => {
                warn!("Failed to parse {}: {}", path.display(), e);
                eprintln!("{} Failed to parse: {}", style("✗").red(), file_name);
            }
        }
    }

    let mut wtr = csv::Writer::from_path(&args.output)?;
    wtr.write_record(HEADER)?;
    for (idx, record) in good.iter().enumerate() {
        for row in billing_rows(idx + 1, record, args.layout, &config.billing) {
            wtr.write_record(&row)?;
        }
    }
    wtr.flush()?;

    eprintln!("Total PDFs parsed: {}", good.len());
    println!(
        "{} CSV written to {}",
        style("✓").green(),
        args.output.display()
    );

    Ok(())
}

/// Build the billing rows for one declaration.
fn billing_rows(
    counter: usize,
    record: &DocumentRecord,
    layout: BillingLayout,
    prices: &BillingConfig,
) -> Vec<[String; 12]> {
    let nr = counter.to_string();
    let cif = record.field("nrDestinatar").unwrap_or("").to_owned();
    let mrn_note = format!(
        "MRN {} - CONTAINER{}",
        record.field("mrn").unwrap_or(""),
        record.field("nrContainer").unwrap_or("")
    );
    let transit_note = record.field("referintaDocument").unwrap_or("").to_owned();

    let row = |cif: &str, produs: &str, cant: &str, pret: &str, nota: &str| {
        [
            nr.clone(),
            cif.to_owned(),
            "eur".to_owned(),
            produs.to_owned(),
            "nu e cazul".to_owned(),
            cant.to_owned(),
            "BUC".to_owned(),
            pret.to_owned(),
            "0".to_owned(),
            nota.to_owned(),
            String::new(),
            String::new(),
        ]
    };

    let mut rows = vec![
        row(
            &cif,
            "PRIMARY CUSTOMS DECLARATION",
            "1",
            &prices.declaration_price,
            &mrn_note,
        ),
        row("", "TRANSIT", "1", &prices.transit_price, &transit_note),
    ];

    let articles: u32 = record
        .field("nrArticole")
        .and_then(|v| v.parse().ok())
        .unwrap_or(1);
    if articles > 1 {
        rows.push(row(
            "",
            "ADDITIONAL HS CODE",
            &(articles - 1).to_string(),
            &prices.extra_article_price,
            &mrn_note,
        ));
    }

    if layout == BillingLayout::CuFizic {
        rows.push(row(
            "",
            "PHYSICAL CONTROL",
            "0",
            &prices.physical_control_price,
            &format!("CT - {}", transit_note),
        ));
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use vamex_core::ExtractionResult;

    fn record(articles: &str) -> DocumentRecord {
        let mut fields = ExtractionResult::new();
        fields.insert("nrDestinatar".to_owned(), "RO1234567890".to_owned());
        fields.insert("mrn".to_owned(), "21ROCT123456789012".to_owned());
        fields.insert("nrContainer".to_owned(), "MSKU1234567".to_owned());
        fields.insert(
            "referintaDocument".to_owned(),
            "24ROBU9876543210 / 01.02.2024".to_owned(),
        );
        fields.insert("nrArticole".to_owned(), articles.to_owned());
        DocumentRecord::new("d.pdf", fields)
    }

    #[test]
    fn test_cu_fizic_single_article() {
        let rows = billing_rows(1, &record("1"), BillingLayout::CuFizic, &BillingConfig::default());
        let products: Vec<_> = rows.iter().map(|r| r[3].as_str()).collect();
        assert_eq!(
            products,
            ["PRIMARY CUSTOMS DECLARATION", "TRANSIT", "PHYSICAL CONTROL"]
        );
        assert_eq!(rows[0][1], "RO1234567890");
        assert_eq!(rows[0][9], "MRN 21ROCT123456789012 - CONTAINERMSKU1234567");
        assert_eq!(rows[2][9], "CT - 24ROBU9876543210 / 01.02.2024");
    }

    #[test]
    fn test_extra_articles_row() {
        let rows = billing_rows(2, &record("3"), BillingLayout::FaraFizic, &BillingConfig::default());
        let products: Vec<_> = rows.iter().map(|r| r[3].as_str()).collect();
        assert_eq!(
            products,
            ["PRIMARY CUSTOMS DECLARATION", "TRANSIT", "ADDITIONAL HS CODE"]
        );
        // Quantity is articles minus the one already billed.
        assert_eq!(rows[2][5], "2");
        assert!(rows.iter().all(|r| r[0] == "2"));
    }

    #[test]
    fn test_unparseable_article_count_defaults_to_one() {
        let rows = billing_rows(1, &record("trei"), BillingLayout::FaraFizic, &BillingConfig::default());
        assert_eq!(rows.len(), 2);
    }
}
