//! Applies a database's link-out settings to search hits.
//!
//! [`HitLinker`] ties a database configuration to the registry: it extracts
//! each hit's link-out identifier, resolves the builder for the configured
//! type and falls back to plain text whenever no link can be built.
//!
//! ## Example
//!
//! ```rust
//! use blast_linkout::config::DatabaseLinkout;
//! use blast_linkout::core::hit::{HitRecord, Hsp};
//! use blast_linkout::linker::HitLinker;
//! use blast_linkout::registry::LinkoutRegistry;
//!
//! let registry = LinkoutRegistry::builtin().unwrap();
//! let database = DatabaseLinkout::new("rice", "link")
//!     .with_url_prefix("http://example.org/feature/");
//! let linker = HitLinker::new(&registry, &database).unwrap();
//!
//! let hit = HitRecord::new(1, "gnl|BL_ORD_ID|0")
//!     .with_definition("Chr01 rice chromosome 1")
//!     .with_hsps(vec![Hsp::new(100, 200)]);
//! let rendered = linker.link_hit("query1", &hit);
//! assert_eq!(rendered.href(), Some("http://example.org/feature/Chr01"));
//! ```

use serde::Serialize;
use tracing::debug;

use crate::config::{ConfigError, DatabaseLinkout};
use crate::core::hit::{AuxiliaryInfo, HitRecord};
use crate::core::identifier::IdExtractor;
use crate::core::link::{escape_html, Link};
use crate::core::types::BuilderOptions;
use crate::linkout::LinkoutError;
use crate::registry::{LinkoutRegistry, LinkoutTypeDescriptor};

/// What to display for a hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderedHit {
    Link(Link),
    PlainText { text: String },
}

impl RenderedHit {
    pub fn href(&self) -> Option<&str> {
        match self {
            Self::Link(link) => Some(&link.href),
            Self::PlainText { .. } => None,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Link(link) => &link.text,
            Self::PlainText { text } => text,
        }
    }

    #[must_use]
    pub fn to_html(&self) -> String {
        match self {
            Self::Link(link) => link.to_html(),
            Self::PlainText { text } => escape_html(text),
        }
    }
}

/// Builds links for hits from one database
#[derive(Debug)]
pub struct HitLinker<'a> {
    descriptor: &'a LinkoutTypeDescriptor,
    database: &'a DatabaseLinkout,
    extractor: IdExtractor,
    options: BuilderOptions,
}

impl<'a> HitLinker<'a> {
    /// Create a linker for `database`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database fails validation against the registry.
    pub fn new(
        registry: &'a LinkoutRegistry,
        database: &'a DatabaseLinkout,
    ) -> Result<Self, ConfigError> {
        database.validate(registry)?;
        let descriptor = registry
            .get(database.linkout_type.as_str())
            .ok_or_else(|| ConfigError::UnknownLinkoutType {
                database: database.name.clone(),
                linkout_type: database.linkout_type.to_string(),
            })?;

        Ok(Self {
            descriptor,
            database,
            extractor: database.extractor()?,
            options: BuilderOptions::new(),
        })
    }

    #[must_use]
    pub fn with_options(mut self, options: BuilderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn descriptor(&self) -> &LinkoutTypeDescriptor {
        self.descriptor
    }

    /// Try to build a link for one hit.
    ///
    /// The hit's `linkout_id` is filled in from the identifier pattern when the
    /// link-out type needs one and the hit does not already carry it.
    ///
    /// # Errors
    ///
    /// Returns `LinkoutError::Disabled` for the `none` type, or whatever error
    /// the builder reports.
    pub fn try_link(&self, query_name: &str, hit: &HitRecord) -> Result<Link, LinkoutError> {
        if self.descriptor.is_plain_text() {
            return Err(LinkoutError::Disabled);
        }

        let mut hit = hit.clone();
        if self.descriptor.requires_regex_identifier {
            self.extractor.annotate(&mut hit);
        }
        let info = AuxiliaryInfo::from_hit(query_name, &hit);

        self.descriptor.builder.build(
            self.database.url_prefix(),
            &hit,
            &info,
            &self.options,
        )
    }

    /// Link for one hit, or its name as plain text when no link can be built
    pub fn link_hit(&self, query_name: &str, hit: &HitRecord) -> RenderedHit {
        match self.try_link(query_name, hit) {
            Ok(link) => RenderedHit::Link(link),
            Err(e) => {
                if e != LinkoutError::Disabled {
                    debug!("No link-out for hit {}: {}", hit.hit_id, e);
                }
                let text = self
                    .descriptor
                    .requires_regex_identifier
                    .then(|| self.extractor.extract_from_hit(hit))
                    .flatten()
                    .unwrap_or_else(|| hit.display_name().to_string());
                RenderedHit::PlainText { text }
            }
        }
    }

    /// Link every hit, in order
    pub fn link_hits(&self, query_name: &str, hits: &[HitRecord]) -> Vec<RenderedHit> {
        hits.iter()
            .map(|hit| self.link_hit(query_name, hit))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::hit::Hsp;
    use crate::core::identifier::IdPattern;

    fn hit() -> HitRecord {
        HitRecord::new(1, "gnl|BL_ORD_ID|0")
            .with_definition("Chr01 rice chromosome 1")
            .with_hsps(vec![Hsp::new(100, 200), Hsp::new(50, 80)])
    }

    #[test]
    fn test_none_type_is_plain_text() {
        let registry = LinkoutRegistry::builtin().unwrap();
        let database = DatabaseLinkout::new("db", "none");
        let linker = HitLinker::new(&registry, &database).unwrap();
        assert_eq!(
            linker.link_hit("q", &hit()),
            RenderedHit::PlainText {
                text: "gnl|BL_ORD_ID|0".to_string()
            }
        );
    }

    #[test]
    fn test_gbrowse_link() {
        let registry = LinkoutRegistry::builtin().unwrap();
        let database = DatabaseLinkout::new("db", "gbrowse").with_url_prefix("http://x.org/gb/");
        let linker = HitLinker::new(&registry, &database).unwrap();
        let rendered = linker.link_hit("q", &hit());
        assert_eq!(rendered.text(), "Chr01");
        assert!(rendered.href().unwrap().starts_with("http://x.org/gb/?ref=Chr01;start=50;"));
    }

    #[test]
    fn test_unmatched_pattern_falls_back() {
        let registry = LinkoutRegistry::builtin().unwrap();
        let database = DatabaseLinkout::new("db", "link")
            .with_url_prefix("http://x.org/")
            .with_id_pattern(IdPattern::Genbank);
        let linker = HitLinker::new(&registry, &database).unwrap();
        let rendered = linker.link_hit("q", &hit());
        assert_eq!(rendered.href(), None);
        assert_eq!(rendered.text(), "gnl|BL_ORD_ID|0");
    }

    #[test]
    fn test_missing_hsps_falls_back_to_identifier() {
        let registry = LinkoutRegistry::builtin().unwrap();
        let database = DatabaseLinkout::new("db", "jbrowse").with_url_prefix("http://x.org/?");
        let linker = HitLinker::new(&registry, &database).unwrap();
        let no_hsps = hit().with_hsps(Vec::new());
        assert_eq!(
            linker.try_link("q", &no_hsps),
            Err(LinkoutError::EmptyAlignmentSet {
                hit_id: "gnl|BL_ORD_ID|0".to_string()
            })
        );
        assert_eq!(
            linker.link_hit("q", &no_hsps),
            RenderedHit::PlainText {
                text: "Chr01".to_string()
            }
        );
    }

    #[test]
    fn test_invalid_database_rejected() {
        let registry = LinkoutRegistry::builtin().unwrap();
        let database = DatabaseLinkout::new("db", "jbrowse");
        assert!(matches!(
            HitLinker::new(&registry, &database),
            Err(ConfigError::MissingUrlPrefix { .. })
        ));
    }

    #[test]
    fn test_plain_text_html_is_escaped() {
        let rendered = RenderedHit::PlainText {
            text: "a<b".to_string(),
        };
        assert_eq!(rendered.to_html(), "a&lt;b");
    }
}
