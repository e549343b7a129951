use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::core::identifier::{IdExtractor, IdPattern, PatternError};
use crate::core::types::{LinkoutKey, NONE_KEY};
use crate::registry::LinkoutRegistry;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read database configuration: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse database configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Database '{database}' uses unknown link-out type '{linkout_type}'")]
    UnknownLinkoutType {
        database: String,
        linkout_type: String,
    },

    #[error("Database '{database}' uses link-out type '{linkout_type}' which requires a URL prefix")]
    MissingUrlPrefix {
        database: String,
        linkout_type: String,
    },

    #[error("Database '{database}': {source}")]
    InvalidPattern {
        database: String,
        #[source]
        source: PatternError,
    },

    #[error("Database '{0}' is configured more than once")]
    DuplicateDatabase(String),
}

/// Configuration format version for compatibility checking
pub const CONFIG_VERSION: &str = "1.0.0";

/// Link-out settings for one BLAST database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseLinkout {
    /// Database name as shown to users
    pub name: String,

    /// Registry key of the link-out type
    #[serde(default = "default_linkout_type")]
    pub linkout_type: LinkoutKey,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_prefix: Option<String>,

    /// How the link-out identifier is extracted from hit definition lines
    #[serde(default)]
    pub id_pattern: IdPattern,
}

fn default_linkout_type() -> LinkoutKey {
    LinkoutKey::new(NONE_KEY)
}

impl DatabaseLinkout {
    pub fn new(name: impl Into<String>, linkout_type: impl Into<LinkoutKey>) -> Self {
        Self {
            name: name.into(),
            linkout_type: linkout_type.into(),
            url_prefix: None,
            id_pattern: IdPattern::Default,
        }
    }

    #[must_use]
    pub fn with_url_prefix(mut self, url_prefix: impl Into<String>) -> Self {
        self.url_prefix = Some(url_prefix.into());
        self
    }

    #[must_use]
    pub fn with_id_pattern(mut self, id_pattern: IdPattern) -> Self {
        self.id_pattern = id_pattern;
        self
    }

    /// URL prefix, or the empty string when none is configured
    pub fn url_prefix(&self) -> &str {
        self.url_prefix.as_deref().unwrap_or("")
    }

    /// Compile the identifier pattern
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPattern` if a custom pattern does not compile.
    pub fn extractor(&self) -> Result<IdExtractor, ConfigError> {
        self.id_pattern
            .compile()
            .map_err(|source| ConfigError::InvalidPattern {
                database: self.name.clone(),
                source,
            })
    }

    /// Check this database against the registry.
    ///
    /// # Errors
    ///
    /// Returns an error if the link-out type is unknown, a required URL prefix
    /// is missing, or the identifier pattern does not compile.
    pub fn validate(&self, registry: &LinkoutRegistry) -> Result<(), ConfigError> {
        let descriptor = registry.get(self.linkout_type.as_str()).ok_or_else(|| {
            ConfigError::UnknownLinkoutType {
                database: self.name.clone(),
                linkout_type: self.linkout_type.to_string(),
            }
        })?;

        if descriptor.requires_url_prefix
            && self.url_prefix.as_deref().map_or(true, str::is_empty)
        {
            return Err(ConfigError::MissingUrlPrefix {
                database: self.name.clone(),
                linkout_type: self.linkout_type.to_string(),
            });
        }

        if descriptor.requires_regex_identifier {
            self.extractor()?;
        }

        Ok(())
    }
}

/// Serializable configuration format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigData {
    pub version: String,
    pub databases: Vec<DatabaseLinkout>,
}

/// Link-out settings for every configured database
#[derive(Debug, Default)]
pub struct DatabaseConfig {
    pub databases: Vec<DatabaseLinkout>,

    /// Index: database name -> index in databases vec
    name_to_index: HashMap<String, usize>,
}

impl DatabaseConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if a database
    /// name is repeated.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse configuration from a JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a database name is repeated.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let data: ConfigData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != CONFIG_VERSION {
            warn!(
                "Database configuration version mismatch (expected {}, found {})",
                CONFIG_VERSION, data.version
            );
        }

        let mut config = Self::new();
        for database in data.databases {
            config.add_database(database)?;
        }
        Ok(config)
    }

    /// Add a database
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DuplicateDatabase` if the name is already configured.
    pub fn add_database(&mut self, database: DatabaseLinkout) -> Result<(), ConfigError> {
        if self.name_to_index.contains_key(&database.name) {
            return Err(ConfigError::DuplicateDatabase(database.name));
        }
        self.name_to_index
            .insert(database.name.clone(), self.databases.len());
        self.databases.push(database);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&DatabaseLinkout> {
        self.name_to_index.get(name).map(|&idx| &self.databases[idx])
    }

    /// Validate every database against the registry, stopping at the first error
    ///
    /// # Errors
    ///
    /// Returns the first validation error found.
    pub fn validate(&self, registry: &LinkoutRegistry) -> Result<(), ConfigError> {
        self.databases
            .iter()
            .try_for_each(|database| database.validate(registry))
    }

    /// Export configuration to JSON
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParseError` if serialization fails.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        let data = ConfigData {
            version: CONFIG_VERSION.to_string(),
            databases: self.databases.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    pub fn len(&self) -> usize {
        self.databases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.databases.is_empty()
    }
}
