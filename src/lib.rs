//! # blast-linkout
//!
//! A library for building outbound links ("link-outs") from BLAST hits.
//!
//! Search results are far more useful when each hit links somewhere: to the
//! feature page of a sequence database, or to the hit's region in a genome
//! browser with the alignment drawn on top. Every target site wants its URL
//! built differently, so each link-out type has its own builder.
//!
//! ## Features
//!
//! - **Generic links**: the hit identifier appended to a URL prefix
//! - **GBrowse**: hit region with the HSPs overlaid as a `BlastHit` feature
//! - **JBrowse**: padded hit region with the HSPs on an added `BLAST Result` track
//! - **Pluggable types**: applications contribute their own builders to the registry
//! - **Identifier patterns**: pull the link target out of definition lines
//!
//! ## Example
//!
//! ```rust
//! use blast_linkout::core::hit::{AuxiliaryInfo, HitRecord, Hsp};
//! use blast_linkout::core::types::BuilderOptions;
//! use blast_linkout::LinkoutRegistry;
//!
//! let registry = LinkoutRegistry::builtin().unwrap();
//!
//! let hit = HitRecord::new(1, "gnl|BL_ORD_ID|0")
//!     .with_linkout_id("Chr01")
//!     .with_hsps(vec![Hsp::new(100, 200), Hsp::new(50, 80)]);
//! let info = AuxiliaryInfo::from_hit("LOC_Os01g01010", &hit);
//!
//! let builder = registry.builder("gbrowse").unwrap();
//! let link = builder
//!     .build("http://example.org/gb/gbrowse/rice/", &hit, &info, &BuilderOptions::new())
//!     .unwrap();
//! println!("{}", link.to_html());
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Hit, HSP and link types
//! - [`linkout`]: The link builders
//! - [`registry`]: Registry of link-out types
//! - [`config`]: Per-database link-out configuration
//! - [`linker`]: Applies a database configuration to hits
//! - [`parsing`]: Readers for pre-parsed hits
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod config;
pub mod core;
pub mod linker;
pub mod linkout;
pub mod parsing;
pub mod registry;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::config::{DatabaseConfig, DatabaseLinkout};
pub use crate::core::hit::{AuxiliaryInfo, HitRecord, Hsp};
pub use crate::core::link::Link;
pub use crate::core::types::*;
pub use crate::linker::{HitLinker, RenderedHit};
pub use crate::linkout::{LinkoutBuilder, LinkoutError};
pub use crate::registry::{LinkoutRegistry, LinkoutTypeDescriptor, RegistryBuilder};
