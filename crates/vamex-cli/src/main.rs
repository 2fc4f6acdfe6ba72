//! CLI application for Romanian customs declaration extraction.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{batch, billing, extract, variants};

/// vamex - Extract structured fields from Romanian customs declarations
#[derive(Parser)]
#[command(name = "vamex")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract fields from a single declaration file
    Extract(extract::ExtractArgs),

    /// Process a folder of declaration files
    Batch(batch::BatchArgs),

    /// Generate a billing CSV from a folder of declarations
    Billing(billing::BillingArgs),

    /// List the known layout variants
    Variants(variants::VariantsArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    // Execute command
    match cli.command {
        Commands::Extract(args) => extract::run(args, cli.config.as_deref()),
        Commands::Batch(args) => batch::run(args, cli.config.as_deref()),
        Commands::Billing(args) => billing::run(args, cli.config.as_deref()),
        Commands::Variants(args) => variants::run(args),
    }
}
