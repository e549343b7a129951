//! Extraction of the link-out identifier from a hit's definition line.
//!
//! Each database chooses an [`IdPattern`]. The first capture group of the
//! pattern (or the whole match when the pattern has no groups) becomes the
//! hit's `linkout_id`.

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::hit::HitRecord;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Invalid identifier pattern '{pattern}': {source}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Which pattern to use when extracting the link-out identifier
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdPattern {
    /// First whitespace-delimited word of the definition line
    #[default]
    Default,
    /// `gb|ACCESSION|...`
    Genbank,
    /// `emb|ACCESSION|...`
    Embl,
    /// `sp|ACCESSION|...`
    Swissprot,
    /// User-supplied regular expression
    Custom(String),
}

impl IdPattern {
    /// Regular expression source for this pattern
    #[must_use]
    pub fn regex_source(&self) -> &str {
        match self {
            Self::Default => r"^\s*(\S+)",
            Self::Genbank => r"^\s*gb\|([^|\s]+)",
            Self::Embl => r"^\s*emb\|([^|\s]+)",
            Self::Swissprot => r"^\s*sp\|([^|\s]+)",
            Self::Custom(pattern) => pattern,
        }
    }

    /// Compile into an extractor
    ///
    /// # Errors
    ///
    /// Returns `PatternError::InvalidRegex` if a custom pattern does not compile.
    pub fn compile(&self) -> Result<IdExtractor, PatternError> {
        let source = self.regex_source();
        let regex = Regex::new(source).map_err(|e| PatternError::InvalidRegex {
            pattern: source.to_string(),
            source: e,
        })?;
        Ok(IdExtractor { regex })
    }
}

impl std::fmt::Display for IdPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::Genbank => write!(f, "genbank"),
            Self::Embl => write!(f, "embl"),
            Self::Swissprot => write!(f, "swissprot"),
            Self::Custom(pattern) => write!(f, "custom ({pattern})"),
        }
    }
}

/// A compiled identifier pattern
#[derive(Debug, Clone)]
pub struct IdExtractor {
    regex: Regex,
}

impl IdExtractor {
    /// Extract the identifier from a single line of text
    pub fn extract(&self, text: &str) -> Option<String> {
        let caps = self.regex.captures(text)?;
        let m = caps.get(1).or_else(|| caps.get(0))?;
        let id = m.as_str().trim();
        if id.is_empty() {
            None
        } else {
            Some(id.to_string())
        }
    }

    /// Extract the identifier for a hit.
    ///
    /// The definition line is tried first, then the hit identifier.
    pub fn extract_from_hit(&self, hit: &HitRecord) -> Option<String> {
        self.extract(&hit.definition)
            .or_else(|| self.extract(&hit.hit_id))
    }

    /// Set `linkout_id` on a hit when it does not already carry one
    pub fn annotate(&self, hit: &mut HitRecord) {
        if hit.linkout_id().is_none() {
            hit.linkout_id = self.extract_from_hit(hit);
        }
    }
}
