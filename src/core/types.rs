use serde::{Deserialize, Serialize};

/// Key of the built-in link-out type that disables links
pub const NONE_KEY: &str = "none";

/// Key of the built-in generic link type
pub const LINK_KEY: &str = "link";

/// Key of the built-in GBrowse link-out type
pub const GBROWSE_KEY: &str = "gbrowse";

/// Key of the built-in JBrowse link-out type
pub const JBROWSE_KEY: &str = "jbrowse";

/// Unique identifier for a link-out type in the registry
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkoutKey(pub String);

impl LinkoutKey {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LinkoutKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for LinkoutKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for LinkoutKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Builder-specific configuration.
///
/// None of the built-in builders read any options, but contributed builders
/// may; keys and values are free-form JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuilderOptions(pub serde_json::Map<String, serde_json::Value>);

impl BuilderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Strand of an HSP on the hit sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strand {
    Forward,
    Reverse,
}

impl Strand {
    /// Strand as written in JBrowse feature JSON
    #[must_use]
    pub fn as_jbrowse(self) -> &'static str {
        match self {
            Self::Forward => "1",
            Self::Reverse => "-1",
        }
    }
}
