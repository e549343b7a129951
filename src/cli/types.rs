use clap::Args;

use crate::cli::OutputFormat;
use crate::registry::LinkoutRegistry;

#[derive(Args)]
pub struct TypesArgs {
    /// Include the help text for each type
    #[arg(long)]
    pub help_text: bool,
}

pub fn run(args: &TypesArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let registry = LinkoutRegistry::builtin()?;

    if verbose {
        eprintln!("{} link-out types registered", registry.len());
    }

    match format {
        OutputFormat::Text => print_text(&registry, args.help_text),
        OutputFormat::Json => println!("{}", registry.to_json()?),
        OutputFormat::Tsv => print_tsv(&registry),
    }

    Ok(())
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

fn print_text(registry: &LinkoutRegistry, help_text: bool) {
    println!("Link-out Types");
    println!("{}", "=".repeat(60));
    println!(
        "{:<12} {:<16} {:<14} {:<10}",
        "Key", "Name", "Needs ID", "Needs URL"
    );
    println!("{}", "-".repeat(60));

    for descriptor in registry.list_types() {
        println!(
            "{:<12} {:<16} {:<14} {:<10}",
            descriptor.key,
            descriptor.name,
            yes_no(descriptor.requires_regex_identifier),
            yes_no(descriptor.requires_url_prefix)
        );
        if help_text && !descriptor.help.is_empty() {
            println!("    {}", descriptor.help);
        }
    }
}

fn print_tsv(registry: &LinkoutRegistry) {
    println!("key\tname\trequires_regex_identifier\trequires_url_prefix");
    for descriptor in registry.list_types() {
        println!(
            "{}\t{}\t{}\t{}",
            descriptor.key,
            descriptor.name,
            descriptor.requires_regex_identifier,
            descriptor.requires_url_prefix
        );
    }
}
