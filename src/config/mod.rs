//! Per-database link-out configuration.
//!
//! Each BLAST database names a link-out type from the registry, the URL prefix
//! for its links, and the pattern used to pull the link-out identifier out of
//! hit definition lines.
//!
//! ## Format
//!
//! ```json
//! {
//!   "version": "1.0.0",
//!   "databases": [
//!     {
//!       "name": "rice_genome",
//!       "linkout_type": "jbrowse",
//!       "url_prefix": "http://jbrowse.example.org/?data=rice&",
//!       "id_pattern": "default"
//!     },
//!     {
//!       "name": "rice_proteins",
//!       "linkout_type": "link",
//!       "url_prefix": "https://www.uniprot.org/uniprot/",
//!       "id_pattern": { "custom": "^sp\\|([^|]+)" }
//!     }
//!   ]
//! }
//! ```
//!
//! `linkout_type` defaults to `none` and `id_pattern` to `default` (first word
//! of the definition line).

pub mod store;

pub use store::{ConfigError, DatabaseConfig, DatabaseLinkout};
