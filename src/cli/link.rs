use clap::Args;

use crate::cli::OutputFormat;
use crate::core::hit::{AuxiliaryInfo, HitRecord, Hsp};
use crate::core::types::BuilderOptions;
use crate::registry::LinkoutRegistry;

#[derive(Args)]
pub struct LinkArgs {
    /// Link-out type key (see `blast-linkout types`)
    #[arg(short = 't', long = "type", required = true)]
    pub linkout_type: String,

    /// URL prefix of the target site
    #[arg(short, long, default_value = "")]
    pub url_prefix: String,

    /// Link-out identifier of the hit (e.g. the chromosome name)
    #[arg(long)]
    pub id: Option<String>,

    /// Hit identifier from the search report
    #[arg(long, default_value = "hit")]
    pub hit_id: String,

    /// HSP coordinates on the hit as FROM..TO; repeat for more HSPs
    #[arg(long = "hsp", value_parser = parse_hsp)]
    pub hsps: Vec<Hsp>,

    /// Query sequence name
    #[arg(long, default_value = "query")]
    pub query_name: String,
}

/// Parse `FROM..TO` into an HSP
fn parse_hsp(s: &str) -> Result<Hsp, String> {
    let (from, to) = s
        .split_once("..")
        .ok_or_else(|| format!("expected FROM..TO, got '{s}'"))?;
    let from: i64 = from
        .trim()
        .parse()
        .map_err(|e| format!("invalid HSP start '{from}': {e}"))?;
    let to: i64 = to
        .trim()
        .parse()
        .map_err(|e| format!("invalid HSP end '{to}': {e}"))?;
    Ok(Hsp::new(from, to))
}

pub fn run(args: LinkArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let registry = LinkoutRegistry::builtin()?;
    let descriptor = registry.get(&args.linkout_type).ok_or_else(|| {
        anyhow::anyhow!(
            "Unknown link-out type '{}' (available: {})",
            args.linkout_type,
            registry
                .keys()
                .map(|k| k.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )
    })?;

    let mut hit = HitRecord::new(1, &args.hit_id).with_hsps(args.hsps);
    hit.linkout_id = args.id;
    let info = AuxiliaryInfo::from_hit(&args.query_name, &hit);

    if verbose {
        eprintln!(
            "Building {} link-out for {} with {} HSPs",
            descriptor.name,
            hit.display_name(),
            info.hsps.len()
        );
    }

    let link = descriptor
        .builder
        .build(&args.url_prefix, &hit, &info, &BuilderOptions::new())
        .map_err(|e| anyhow::anyhow!("Cannot build {} link-out: {e}", descriptor.key))?;

    match format {
        OutputFormat::Text => println!("{}", link.href),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&link)?),
        OutputFormat::Tsv => {
            println!("text\thref\thtml");
            println!("{}\t{}\t{}", link.text, link.href, link.to_html());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hsp() {
        assert_eq!(parse_hsp("100..200").unwrap(), Hsp::new(100, 200));
        assert_eq!(parse_hsp("200..100").unwrap(), Hsp::new(200, 100));
        assert!(parse_hsp("100-200").is_err());
        assert!(parse_hsp("a..200").is_err());
    }
}
