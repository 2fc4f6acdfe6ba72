//! Variants command - list the known layout rule sets.

use clap::Args;
use console::style;

/// Arguments for the variants command.
#[derive(Args)]
pub struct VariantsArgs {
    /// Also list the fields of each variant
    #[arg(long)]
    fields: bool,
}

pub fn run(args: VariantsArgs) -> anyhow::Result<()> {
    for rule_set in vamex_core::variants::all() {
        println!(
            "{:<6} {}",
            style(rule_set.name()).cyan().bold(),
            rule_set.description()
        );
        if args.fields {
            for field in rule_set.field_names() {
                println!("       - {}", field);
            }
        }
    }
    Ok(())
}
