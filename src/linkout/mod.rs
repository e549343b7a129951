//! Link builders, one per link-out type.
//!
//! Every builder implements [`LinkoutBuilder`]. Builders are stateless: the
//! same inputs always give the same link.
//!
//! | Key       | Builder            | Link target                                   |
//! |-----------|--------------------|-----------------------------------------------|
//! | `none`    | [`NoLinkout`]      | never links, hit shown as plain text          |
//! | `link`    | [`GenericLinkout`] | `url_prefix + linkout_id`                     |
//! | `gbrowse` | [`GbrowseLinkout`] | hit region with HSPs overlaid as a feature    |
//! | `jbrowse` | [`JbrowseLinkout`] | buffered hit region with a JSON feature track |
//!
//! A builder that cannot produce a link returns a [`LinkoutError`]; callers
//! display the hit as plain text instead.

use thiserror::Error;

use crate::core::hit::{AuxiliaryInfo, HitRecord};
use crate::core::link::Link;
use crate::core::types::BuilderOptions;

pub mod gbrowse;
pub mod generic;
pub mod jbrowse;
pub mod none;

pub use gbrowse::GbrowseLinkout;
pub use generic::GenericLinkout;
pub use jbrowse::JbrowseLinkout;
pub use none::NoLinkout;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinkoutError {
    #[error("Hit '{hit_id}' has no link-out identifier")]
    MissingIdentifier { hit_id: String },

    #[error("Hit '{hit_id}' has no HSPs to locate")]
    EmptyAlignmentSet { hit_id: String },

    #[error("Link-outs are disabled for this database")]
    Disabled,

    #[error("Failed to encode link-out feature: {0}")]
    Encode(String),
}

/// Builds a link for one hit
pub trait LinkoutBuilder: Send + Sync + std::fmt::Debug {
    /// Build the link for `hit`.
    ///
    /// # Errors
    ///
    /// Returns a `LinkoutError` when no link can be built for this hit.
    fn build(
        &self,
        url_prefix: &str,
        hit: &HitRecord,
        info: &AuxiliaryInfo,
        options: &BuilderOptions,
    ) -> Result<Link, LinkoutError>;
}

/// The hit's link-out identifier, or `MissingIdentifier`
pub(crate) fn require_linkout_id(hit: &HitRecord) -> Result<&str, LinkoutError> {
    hit.linkout_id()
        .ok_or_else(|| LinkoutError::MissingIdentifier {
            hit_id: hit.hit_id.clone(),
        })
}

/// Fail with `EmptyAlignmentSet` when there are no HSPs to locate
pub(crate) fn require_hsps(hit: &HitRecord, info: &AuxiliaryInfo) -> Result<(), LinkoutError> {
    if info.hsps.is_empty() {
        Err(LinkoutError::EmptyAlignmentSet {
            hit_id: hit.hit_id.clone(),
        })
    } else {
        Ok(())
    }
}
