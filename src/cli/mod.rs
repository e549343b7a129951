//! Command-line interface for blast-linkout.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **types**: List the registered link-out types
//! - **link**: Build one link-out from command-line arguments
//! - **render**: Build link-outs for every hit in a hits file
//! - **check-config**: Validate a database link-out configuration
//!
//! ## Usage
//!
//! ```text
//! # Show the available link-out types
//! blast-linkout types
//!
//! # Build a JBrowse link for a hit on Chr01 with two HSPs
//! blast-linkout link --type jbrowse --url-prefix 'http://example.org/jbrowse/?data=rice&' \
//!     --id Chr01 --hsp 100..200 --hsp 80..50 --query-name LOC_Os01g01010
//!
//! # Link every hit in a results file using the database configuration
//! blast-linkout render --config databases.json --database rice_genome hits.json.gz
//! ```

use clap::{Parser, Subcommand};

pub mod check;
pub mod link;
pub mod render;
pub mod types;

#[derive(Parser)]
#[command(name = "blast-linkout")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Build link-out URLs for BLAST hits")]
#[command(
    long_about = "blast-linkout turns BLAST hits into links to genome browsers and external databases.\n\nEach database is configured with a link-out type (generic link, GBrowse or JBrowse), a URL prefix and a pattern that extracts the identifier from hit definition lines."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the registered link-out types
    Types(types::TypesArgs),

    /// Build a link-out for a single hit
    Link(link::LinkArgs),

    /// Build link-outs for every hit in a hits file
    Render(render::RenderArgs),

    /// Validate a database link-out configuration
    CheckConfig(check::CheckArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
