use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::config::DatabaseConfig;
use crate::linker::{HitLinker, RenderedHit};
use crate::parsing::hits::{parse_hits_file, SearchResult};
use crate::registry::LinkoutRegistry;

#[derive(Args)]
pub struct RenderArgs {
    /// Hits file (JSON, optionally .gz)
    #[arg(required = true)]
    pub input: PathBuf,

    /// Database link-out configuration file
    #[arg(short, long, required = true)]
    pub config: PathBuf,

    /// Database to use; defaults to the database named in the hits file
    #[arg(short, long)]
    pub database: Option<String>,

    /// Print HTML anchors instead of bare URLs (text format only)
    #[arg(long)]
    pub html: bool,
}

pub fn run(args: RenderArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let registry = LinkoutRegistry::builtin()?;
    let config = DatabaseConfig::load_from_file(&args.config)?;
    let result = parse_hits_file(&args.input)?;

    let name = args
        .database
        .as_deref()
        .or(result.database.as_deref())
        .ok_or_else(|| {
            anyhow::anyhow!("No database given and the hits file does not name one")
        })?;
    let database = config
        .get(name)
        .ok_or_else(|| anyhow::anyhow!("Database '{name}' not found in configuration"))?;

    let linker = HitLinker::new(&registry, database)?;

    if verbose {
        eprintln!(
            "Query {}: {} hits against {} ({} link-outs)",
            result.query_name,
            result.hits.len(),
            database.name,
            linker.descriptor().name
        );
    }

    let rendered = linker.link_hits(&result.query_name, &result.hits);

    match format {
        OutputFormat::Text => print_text(&result, &rendered, args.html),
        OutputFormat::Json => print_json(&result, &rendered, &database.name)?,
        OutputFormat::Tsv => print_tsv(&result, &rendered),
    }

    Ok(())
}

fn print_text(result: &SearchResult, rendered: &[RenderedHit], html: bool) {
    for (hit, out) in result.hits.iter().zip(rendered) {
        let shown = if html {
            out.to_html()
        } else {
            out.href().unwrap_or_else(|| out.text()).to_string()
        };
        println!("{}\t{}", hit.ordinal, shown);
    }
}

fn print_json(
    result: &SearchResult,
    rendered: &[RenderedHit],
    database: &str,
) -> anyhow::Result<()> {
    let hits: Vec<serde_json::Value> = result
        .hits
        .iter()
        .zip(rendered)
        .map(|(hit, out)| {
            serde_json::json!({
                "ordinal": hit.ordinal,
                "hit_id": hit.hit_id,
                "linkout": out,
            })
        })
        .collect();

    let output = serde_json::json!({
        "query_name": result.query_name,
        "database": database,
        "hits": hits,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv(result: &SearchResult, rendered: &[RenderedHit]) {
    println!("ordinal\thit_id\ttext\thref");
    for (hit, out) in result.hits.iter().zip(rendered) {
        println!(
            "{}\t{}\t{}\t{}",
            hit.ordinal,
            hit.hit_id,
            out.text(),
            out.href().unwrap_or("")
        );
    }
}
