//! Readers for pre-parsed search results.
//!
//! Hits arrive as JSON produced by whatever parsed the BLAST report. Files
//! ending in `.gz` are decompressed on the fly.
//!
//! ## Example
//!
//! ```rust,no_run
//! use blast_linkout::parsing::hits::parse_hits_file;
//! use std::path::Path;
//!
//! let result = parse_hits_file(Path::new("hits.json.gz")).unwrap();
//! println!("{}: {} hits", result.query_name, result.hits.len());
//! ```

pub mod hits;
