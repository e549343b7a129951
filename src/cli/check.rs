use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::config::DatabaseConfig;
use crate::registry::LinkoutRegistry;

#[derive(Args)]
pub struct CheckArgs {
    /// Database link-out configuration file
    #[arg(required = true)]
    pub config: PathBuf,
}

pub fn run(args: &CheckArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let registry = LinkoutRegistry::builtin()?;
    let config = DatabaseConfig::load_from_file(&args.config)?;

    // Collect every problem rather than stopping at the first
    let problems: Vec<(String, String)> = config
        .databases
        .iter()
        .filter_map(|db| {
            db.validate(&registry)
                .err()
                .map(|e| (db.name.clone(), e.to_string()))
        })
        .collect();

    match format {
        OutputFormat::Text => {
            for db in &config.databases {
                let status = problems
                    .iter()
                    .find(|(name, _)| name == &db.name)
                    .map_or("ok", |(_, msg)| msg.as_str());
                if verbose || status != "ok" {
                    println!(
                        "{:<24} {:<10} {:<12} {}",
                        db.name,
                        db.linkout_type,
                        db.id_pattern.to_string(),
                        status
                    );
                }
            }
            println!(
                "{} databases checked, {} with problems",
                config.len(),
                problems.len()
            );
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "databases": config.len(),
                "problems": problems
                    .iter()
                    .map(|(name, msg)| serde_json::json!({"database": name, "error": msg}))
                    .collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("database\terror");
            for (name, msg) in &problems {
                println!("{name}\t{msg}");
            }
        }
    }

    if problems.is_empty() {
        Ok(())
    } else {
        anyhow::bail!("{} of {} databases are misconfigured", problems.len(), config.len())
    }
}
