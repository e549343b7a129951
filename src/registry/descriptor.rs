use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::types::{LinkoutKey, GBROWSE_KEY, JBROWSE_KEY, LINK_KEY, NONE_KEY};
use crate::linkout::{GbrowseLinkout, GenericLinkout, JbrowseLinkout, LinkoutBuilder, NoLinkout};

/// A registered link-out type
#[derive(Debug, Clone)]
pub struct LinkoutTypeDescriptor {
    pub key: LinkoutKey,

    /// Name shown in type selection lists
    pub name: String,

    /// Help text for administrators; may contain simple markup
    pub help: String,

    /// Hits need a `linkout_id` extracted by an identifier pattern
    pub requires_regex_identifier: bool,

    /// The database must supply a URL prefix
    pub requires_url_prefix: bool,

    pub builder: Arc<dyn LinkoutBuilder>,
}

impl LinkoutTypeDescriptor {
    pub fn new(
        key: impl Into<LinkoutKey>,
        name: impl Into<String>,
        builder: Arc<dyn LinkoutBuilder>,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            help: String::new(),
            requires_regex_identifier: false,
            requires_url_prefix: false,
            builder,
        }
    }

    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    #[must_use]
    pub fn requiring_regex_identifier(mut self) -> Self {
        self.requires_regex_identifier = true;
        self
    }

    #[must_use]
    pub fn requiring_url_prefix(mut self) -> Self {
        self.requires_url_prefix = true;
        self
    }

    /// Hits of this type are always shown as plain text
    pub fn is_plain_text(&self) -> bool {
        self.key.as_str() == NONE_KEY
    }

    pub fn summary(&self) -> DescriptorSummary {
        DescriptorSummary {
            key: self.key.clone(),
            name: self.name.clone(),
            help: self.help.clone(),
            requires_regex_identifier: self.requires_regex_identifier,
            requires_url_prefix: self.requires_url_prefix,
        }
    }
}

/// Serializable view of a descriptor, without the builder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptorSummary {
    pub key: LinkoutKey,
    pub name: String,
    #[serde(default)]
    pub help: String,
    #[serde(default)]
    pub requires_regex_identifier: bool,
    #[serde(default)]
    pub requires_url_prefix: bool,
}

/// The four link-out types every registry starts with
pub fn builtin_descriptors() -> Vec<LinkoutTypeDescriptor> {
    vec![
        LinkoutTypeDescriptor::new(NONE_KEY, "No Link-out", Arc::new(NoLinkout))
            .with_help("Hits from this database are shown as plain text."),
        LinkoutTypeDescriptor::new(LINK_KEY, "Generic Link", Arc::new(GenericLinkout))
            .with_help(
                "The hit identifier is appended to the end of the URL prefix to form the link. \
                 For example, with the prefix <code>http://example.org/feature/</code> a hit on \
                 <em>Chr01</em> links to <code>http://example.org/feature/Chr01</code>.",
            )
            .requiring_regex_identifier()
            .requiring_url_prefix(),
        LinkoutTypeDescriptor::new(GBROWSE_KEY, "GBrowse", Arc::new(GbrowseLinkout))
            .with_help(
                "Links to the region of the genome where the hit lies and overlays the HSPs \
                 as a <em>BlastHit</em> feature. The URL prefix should point at the GBrowse \
                 instance for this genome, e.g. <code>http://example.org/gb/gbrowse/rice/</code>.",
            )
            .requiring_regex_identifier()
            .requiring_url_prefix(),
        LinkoutTypeDescriptor::new(JBROWSE_KEY, "JBrowse", Arc::new(JbrowseLinkout))
            .with_help(
                "Links to the region of the genome where the hit lies and adds the HSPs on a \
                 <em>BLAST Result</em> track. The URL prefix must end in <code>?</code> or \
                 <code>&amp;</code>, e.g. <code>http://example.org/jbrowse/?data=rice&amp;</code>. \
                 The track is not shown until it is switched on.",
            )
            .requiring_regex_identifier()
            .requiring_url_prefix(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_keys_and_flags() {
        let builtins = builtin_descriptors();
        let keys: Vec<&str> = builtins.iter().map(|d| d.key.as_str()).collect();
        assert_eq!(keys, vec!["none", "link", "gbrowse", "jbrowse"]);

        assert!(builtins[0].is_plain_text());
        assert!(!builtins[0].requires_regex_identifier);
        assert!(!builtins[0].requires_url_prefix);

        for d in &builtins[1..] {
            assert!(!d.is_plain_text());
            assert!(d.requires_regex_identifier);
            assert!(d.requires_url_prefix);
        }
    }

    #[test]
    fn test_new_descriptor_defaults() {
        let d = LinkoutTypeDescriptor::new("custom", "Custom", Arc::new(GenericLinkout));
        assert!(d.help.is_empty());
        assert!(!d.requires_regex_identifier);
        assert!(!d.requires_url_prefix);
    }
}
