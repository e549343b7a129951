use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::types::LinkoutKey;
use crate::linkout::LinkoutBuilder;
use crate::registry::descriptor::{builtin_descriptors, DescriptorSummary, LinkoutTypeDescriptor};

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Invalid link-out type descriptor: {0}")]
    InvalidDescriptor(String),

    #[error("Failed to export registry: {0}")]
    ExportError(#[from] serde_json::Error),
}

/// Registry export format version
pub const REGISTRY_VERSION: &str = "1.0.0";

/// Serializable registry listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryData {
    pub version: String,
    pub created_at: String,
    pub types: Vec<DescriptorSummary>,
}

/// Supplies extra link-out types when the registry is assembled
pub trait LinkoutContributor {
    fn descriptors(&self) -> Vec<LinkoutTypeDescriptor>;
}

impl<F> LinkoutContributor for F
where
    F: Fn() -> Vec<LinkoutTypeDescriptor>,
{
    fn descriptors(&self) -> Vec<LinkoutTypeDescriptor> {
        self()
    }
}

/// Collects descriptors and assembles a [`LinkoutRegistry`].
///
/// Descriptors are registered in the order they are contributed. A descriptor
/// whose key is already registered replaces the earlier one in place.
#[derive(Default)]
pub struct RegistryBuilder {
    descriptors: Vec<LinkoutTypeDescriptor>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the built-in `none`, `link`, `gbrowse` and `jbrowse` types
    #[must_use]
    pub fn with_builtin(mut self) -> Self {
        self.descriptors.extend(builtin_descriptors());
        self
    }

    #[must_use]
    pub fn contribute(mut self, contributor: impl LinkoutContributor) -> Self {
        self.descriptors.extend(contributor.descriptors());
        self
    }

    #[must_use]
    pub fn with_descriptor(mut self, descriptor: LinkoutTypeDescriptor) -> Self {
        self.descriptors.push(descriptor);
        self
    }

    /// Assemble the registry
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::InvalidDescriptor` if a descriptor has an empty
    /// key or name.
    pub fn build(self) -> Result<LinkoutRegistry, RegistryError> {
        let mut registry = LinkoutRegistry::new();
        for descriptor in self.descriptors {
            if descriptor.key.as_str().trim().is_empty() {
                return Err(RegistryError::InvalidDescriptor(format!(
                    "descriptor '{}' has an empty key",
                    descriptor.name
                )));
            }
            if descriptor.name.trim().is_empty() {
                return Err(RegistryError::InvalidDescriptor(format!(
                    "descriptor '{}' has an empty name",
                    descriptor.key
                )));
            }
            registry.insert(descriptor);
        }
        debug!("Assembled link-out registry with {} types", registry.len());
        Ok(registry)
    }
}

/// All known link-out types, in registration order
#[derive(Debug)]
pub struct LinkoutRegistry {
    descriptors: Vec<LinkoutTypeDescriptor>,

    /// Index: key -> index in descriptors vec
    key_to_index: HashMap<LinkoutKey, usize>,
}

impl LinkoutRegistry {
    fn new() -> Self {
        Self {
            descriptors: Vec::new(),
            key_to_index: HashMap::new(),
        }
    }

    /// Registry holding only the built-in types
    ///
    /// # Errors
    ///
    /// Never fails in practice; built-in descriptors are always valid.
    pub fn builtin() -> Result<Self, RegistryError> {
        RegistryBuilder::new().with_builtin().build()
    }

    fn insert(&mut self, descriptor: LinkoutTypeDescriptor) {
        if let Some(&index) = self.key_to_index.get(&descriptor.key) {
            warn!(
                "Link-out type '{}' registered twice; '{}' replaces '{}'",
                descriptor.key, descriptor.name, self.descriptors[index].name
            );
            self.descriptors[index] = descriptor;
        } else {
            self.key_to_index
                .insert(descriptor.key.clone(), self.descriptors.len());
            self.descriptors.push(descriptor);
        }
    }

    /// All descriptors in registration order
    pub fn list_types(&self) -> &[LinkoutTypeDescriptor] {
        &self.descriptors
    }

    pub fn keys(&self) -> impl Iterator<Item = &LinkoutKey> {
        self.descriptors.iter().map(|d| &d.key)
    }

    pub fn get(&self, key: &str) -> Option<&LinkoutTypeDescriptor> {
        self.key_to_index
            .get(&LinkoutKey::new(key))
            .map(|&idx| &self.descriptors[idx])
    }

    /// Builder registered for `key`
    pub fn builder(&self, key: &str) -> Option<&dyn LinkoutBuilder> {
        self.get(key).map(|d| d.builder.as_ref())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Export the type listing (without builders) to JSON
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::ExportError` if serialization fails.
    pub fn to_json(&self) -> Result<String, RegistryError> {
        let data = RegistryData {
            version: REGISTRY_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            types: self
                .descriptors
                .iter()
                .map(LinkoutTypeDescriptor::summary)
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::linkout::GenericLinkout;

    #[test]
    fn test_builtin_registry() {
        let registry = LinkoutRegistry::builtin().unwrap();
        assert_eq!(registry.len(), 4);
        let keys: Vec<&str> = registry.keys().map(LinkoutKey::as_str).collect();
        assert_eq!(keys, vec!["none", "link", "gbrowse", "jbrowse"]);
        assert!(registry.builder("jbrowse").is_some());
        assert!(registry.get("nonexistent").is_none());
    }

    #[test]
    fn test_contributed_types_follow_builtins() {
        let registry = RegistryBuilder::new()
            .with_builtin()
            .contribute(|| {
                vec![LinkoutTypeDescriptor::new(
                    "ensembl",
                    "Ensembl",
                    Arc::new(GenericLinkout),
                )]
            })
            .build()
            .unwrap();

        assert_eq!(registry.len(), 5);
        assert_eq!(registry.list_types()[4].key.as_str(), "ensembl");
        assert!(registry.contains("ensembl"));
    }

    #[test]
    fn test_duplicate_key_replaces_in_place() {
        let registry = RegistryBuilder::new()
            .with_builtin()
            .with_descriptor(LinkoutTypeDescriptor::new(
                "link",
                "Better Link",
                Arc::new(GenericLinkout),
            ))
            .build()
            .unwrap();

        assert_eq!(registry.len(), 4);
        assert_eq!(registry.list_types()[1].key.as_str(), "link");
        assert_eq!(registry.list_types()[1].name, "Better Link");
        assert_eq!(registry.get("link").unwrap().name, "Better Link");
    }

    #[test]
    fn test_empty_key_rejected() {
        let result = RegistryBuilder::new()
            .with_descriptor(LinkoutTypeDescriptor::new(
                "",
                "Nameless",
                Arc::new(GenericLinkout),
            ))
            .build();
        assert!(matches!(result, Err(RegistryError::InvalidDescriptor(_))));
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = RegistryBuilder::new()
            .with_descriptor(LinkoutTypeDescriptor::new(" ", "", Arc::new(GenericLinkout)))
            .build();
        assert!(matches!(result, Err(RegistryError::InvalidDescriptor(_))));
    }

    #[test]
    fn test_to_json() {
        let registry = LinkoutRegistry::builtin().unwrap();
        let json = registry.to_json().unwrap();
        let data: RegistryData = serde_json::from_str(&json).unwrap();
        assert_eq!(data.version, REGISTRY_VERSION);
        assert_eq!(data.types.len(), 4);
        assert_eq!(data.types[2].key.as_str(), "gbrowse");
        assert!(data.types[2].requires_url_prefix);
    }
}
