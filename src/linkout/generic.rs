use crate::core::hit::{AuxiliaryInfo, HitRecord};
use crate::core::link::Link;
use crate::core::types::BuilderOptions;
use crate::linkout::{require_linkout_id, LinkoutBuilder, LinkoutError};

/// Links to `url_prefix` with the identifier appended verbatim.
///
/// No separator is inserted, so the prefix must already end the way the
/// target site expects (e.g. `http://example.org/feature/`).
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericLinkout;

impl LinkoutBuilder for GenericLinkout {
    fn build(
        &self,
        url_prefix: &str,
        hit: &HitRecord,
        _info: &AuxiliaryInfo,
        _options: &BuilderOptions,
    ) -> Result<Link, LinkoutError> {
        let id = require_linkout_id(hit)?;
        Ok(Link::new(id, format!("{url_prefix}{id}")).in_new_window())
    }
}
