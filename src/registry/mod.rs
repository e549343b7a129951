//! Registry of link-out types.
//!
//! The registry is assembled once, at startup, from the built-in types and
//! whatever the embedding application contributes. After that it is read-only
//! and is passed by reference to whatever needs to resolve a type key.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use blast_linkout::linkout::GenericLinkout;
//! use blast_linkout::registry::{LinkoutTypeDescriptor, RegistryBuilder};
//!
//! let registry = RegistryBuilder::new()
//!     .with_builtin()
//!     .contribute(|| {
//!         vec![LinkoutTypeDescriptor::new("ensembl", "Ensembl", Arc::new(GenericLinkout))
//!             .requiring_regex_identifier()
//!             .requiring_url_prefix()]
//!     })
//!     .build()
//!     .unwrap();
//!
//! for descriptor in registry.list_types() {
//!     println!("{}: {}", descriptor.key, descriptor.name);
//! }
//! ```
//!
//! ## Duplicate keys
//!
//! Registering a key twice is not an error. The later descriptor replaces the
//! earlier one and keeps the earlier one's position in the listing.

pub mod descriptor;
pub mod store;

pub use descriptor::{builtin_descriptors, DescriptorSummary, LinkoutTypeDescriptor};
pub use store::{LinkoutContributor, LinkoutRegistry, RegistryBuilder, RegistryError};
