use serde::{Deserialize, Serialize};

use crate::core::types::Strand;

/// A single high-scoring segment pair (sub-alignment) between the query and a hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hsp {
    /// Start on the hit sequence (1-based)
    pub hit_from: i64,

    /// End on the hit sequence (1-based). Less than `hit_from` on the reverse strand.
    pub hit_to: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_from: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_to: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bit_score: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub e_value: Option<f64>,

    /// Number of identical positions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align_len: Option<u64>,
}

impl Hsp {
    pub fn new(hit_from: i64, hit_to: i64) -> Self {
        Self {
            hit_from,
            hit_to,
            query_from: None,
            query_to: None,
            bit_score: None,
            e_value: None,
            identity: None,
            align_len: None,
        }
    }

    #[must_use]
    pub fn with_scores(mut self, bit_score: f64, e_value: f64) -> Self {
        self.bit_score = Some(bit_score);
        self.e_value = Some(e_value);
        self
    }

    /// Ordered (start, stop) span on the hit, regardless of strand
    #[must_use]
    pub fn span(&self) -> (i64, i64) {
        (
            self.hit_from.min(self.hit_to),
            self.hit_from.max(self.hit_to),
        )
    }

    #[must_use]
    pub fn strand(&self) -> Strand {
        if self.hit_to < self.hit_from {
            Strand::Reverse
        } else {
            Strand::Forward
        }
    }
}

/// Minimum and maximum over a flat list of coordinates.
///
/// Returns `None` for an empty list.
pub fn coordinate_bounds(coords: &[i64]) -> Option<(i64, i64)> {
    let min = coords.iter().copied().min()?;
    let max = coords.iter().copied().max()?;
    Some((min, max))
}

/// One hit from a similarity search, already parsed from the search report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitRecord {
    /// Position of the hit in the report (1-based)
    pub ordinal: u32,

    /// Hit identifier (e.g. `gnl|BL_ORD_ID|12`)
    pub hit_id: String,

    /// Raw definition line of the hit
    #[serde(default)]
    pub definition: String,

    #[serde(default)]
    pub accession: String,

    /// Length of the hit sequence
    #[serde(default)]
    pub length: u64,

    #[serde(default)]
    pub hsps: Vec<Hsp>,

    /// Identifier extracted from the definition line, used as the link target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkout_id: Option<String>,
}

impl HitRecord {
    pub fn new(ordinal: u32, hit_id: impl Into<String>) -> Self {
        Self {
            ordinal,
            hit_id: hit_id.into(),
            definition: String::new(),
            accession: String::new(),
            length: 0,
            hsps: Vec::new(),
            linkout_id: None,
        }
    }

    #[must_use]
    pub fn with_definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = definition.into();
        self
    }

    #[must_use]
    pub fn with_hsps(mut self, hsps: Vec<Hsp>) -> Self {
        self.hsps = hsps;
        self
    }

    #[must_use]
    pub fn with_linkout_id(mut self, linkout_id: impl Into<String>) -> Self {
        self.linkout_id = Some(linkout_id.into());
        self
    }

    /// The link-out identifier, treating an empty string as absent
    pub fn linkout_id(&self) -> Option<&str> {
        self.linkout_id.as_deref().filter(|id| !id.is_empty())
    }

    /// Name shown when no link can be built
    pub fn display_name(&self) -> &str {
        self.linkout_id().unwrap_or(&self.hit_id)
    }
}

/// Context passed to link builders alongside the hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuxiliaryInfo {
    pub query_name: String,
    pub score: f64,
    pub e_value: f64,
    pub hsps: Vec<Hsp>,
}

impl AuxiliaryInfo {
    pub fn new(query_name: impl Into<String>, hsps: Vec<Hsp>) -> Self {
        Self {
            query_name: query_name.into(),
            score: 0.0,
            e_value: 0.0,
            hsps,
        }
    }

    /// Build the context for a hit, taking score and e-value from its best HSP
    pub fn from_hit(query_name: impl Into<String>, hit: &HitRecord) -> Self {
        let best = hit
            .hsps
            .iter()
            .filter_map(|hsp| hsp.bit_score.map(|score| (score, hsp.e_value)))
            .max_by(|a, b| a.0.total_cmp(&b.0));

        let (score, e_value) = match best {
            Some((score, e_value)) => (score, e_value.unwrap_or(0.0)),
            None => (0.0, 0.0),
        };

        Self {
            query_name: query_name.into(),
            score,
            e_value,
            hsps: hit.hsps.clone(),
        }
    }
}
